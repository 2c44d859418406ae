//! Row models and DTOs, one module per entity.

pub mod ad_type;
pub mod cost;
pub mod placement;
