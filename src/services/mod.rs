// Service module exports

pub mod layout;
