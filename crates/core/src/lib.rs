//! Domain logic for the ad placement engine.
//!
//! Pure types and functions only: the slot/tier registry, the placement
//! display-state machine, validation helpers, and the domain error taxonomy.
//! Persistence and HTTP live in `adslot-db` and `adslot-api`.

pub mod error;
pub mod placement;
pub mod registry;
pub mod types;
pub mod validate;
