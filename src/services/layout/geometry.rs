// Grid geometry mapping
// Converts abstract row/column assignments into pixel rectangles. Pure
// arithmetic; whether a bar extending past the cell's available height is
// drawn at all is the renderer's call, not enforced here.

use crate::models::layout::LayoutAssignment;

/// Pixel metrics of one week strip of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Width of one day column.
    pub cell_width: f32,
    /// Vertical pitch between stacked event rows.
    pub row_height: f32,
    /// Space reserved above row 0 for the day-number header.
    pub header_height: f32,
    /// Gap trimmed off the bottom of each bar.
    pub vertical_margin: f32,
}

/// Pixel rectangle of one rendered event bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

pub fn to_rect(assignment: &LayoutAssignment<'_>, metrics: &GridMetrics) -> CellRect {
    CellRect {
        left: assignment.start_column as f32 * metrics.cell_width,
        width: assignment.span as f32 * metrics.cell_width,
        top: metrics.header_height + assignment.row as f32 * metrics.row_height,
        height: metrics.row_height - metrics.vertical_margin,
    }
}
