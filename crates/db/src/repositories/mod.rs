//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ad_type_repo;
pub mod cost_repo;
pub mod interaction_repo;
pub mod placement_repo;
pub mod seller_repo;
pub mod wallet_repo;

pub use ad_type_repo::AdTypeRepo;
pub use cost_repo::CostRepo;
pub use interaction_repo::InteractionRepo;
pub use placement_repo::PlacementRepo;
pub use seller_repo::SellerRepo;
pub use wallet_repo::WalletRepo;
