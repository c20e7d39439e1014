//! Repository layer for database operations

pub mod gear;
pub mod rentals;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub gear: gear::GearRepository,
    pub rentals: rentals::RentalsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            gear: gear::GearRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
