//! Event layout services for calendar grids.
//!
//! Pipeline: raw events + window -> [`filter::filter_window`] -> sorted,
//! greedily row-assigned [`engine::LayoutResult`] -> [`geometry::to_rect`]
//! for rendering. Every stage is a pure function of its inputs; nothing here
//! caches, blocks, or touches I/O.

pub mod engine;
pub mod filter;
pub mod geometry;
mod occupancy;

pub use engine::{LayoutEngine, LayoutResult, DEFAULT_MAX_ROWS};
pub use filter::{filter_window, FilterOutcome};

pub use crate::models::layout::LayoutError;
