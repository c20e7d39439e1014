//! Data models for LensLocker

pub mod gear;
pub mod rental;
pub mod user;

// Re-export commonly used types
pub use gear::{Gear, GearCategory, GearFilter, GearQuery};
pub use rental::{CheckoutRequest, CreateRental, Rental, RentalQuery, RentalStatus};
pub use user::{User, UserClaims};
