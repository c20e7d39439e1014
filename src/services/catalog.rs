//! Catalog management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::gear::{CreateGear, Gear, GearFilter, GearQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search gear with filters.
    ///
    /// Returns the page of items, the total match count, and whether more
    /// pages exist.
    pub async fn search_gear(&self, query: &GearQuery) -> AppResult<(Vec<Gear>, i64, bool)> {
        let filter = GearFilter::from_query(query);
        let (items, total) = self.repository.gear.search(&filter).await?;
        let has_more = filter.has_more(total);
        Ok((items, total, has_more))
    }

    /// Get gear by ID with full details
    pub async fn get_gear(&self, id: Uuid) -> AppResult<Gear> {
        self.repository.gear.get_by_id(id).await
    }

    /// Create a new gear listing owned by the given user
    pub async fn create_gear(&self, gear: CreateGear, owner_id: Uuid) -> AppResult<Gear> {
        gear.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if gear.daily_rate <= 0.0 {
            return Err(AppError::Validation(
                "dailyRate must be a positive number".to_string(),
            ));
        }

        self.repository.gear.create(&gear, owner_id).await
    }
}
