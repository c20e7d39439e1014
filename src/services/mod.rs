//! Business logic services

pub mod catalog;
pub mod pricing;
pub mod rentals;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub rentals: rentals::RentalsService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            users: users::UsersService::new(repository, auth_config),
        }
    }
}
