//! Placement engine.
//!
//! The parts of the system with real invariants: per-request cost
//! resolution, the placement lifecycle (create/edit/delete/toggle/list),
//! the interaction billing state machine with auto-pause, and the
//! single-winner slot selector.

pub mod billing;
pub mod cost;
pub mod ledger;
pub mod lifecycle;
pub mod selector;
