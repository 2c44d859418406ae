//! HTTP handlers, one module per resource.

pub mod interactions;
pub mod placements;
pub mod slots;
