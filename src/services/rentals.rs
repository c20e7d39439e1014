//! Rental order service

use crate::{
    error::{AppError, AppResult},
    models::rental::{CreateRental, NewRental, Rental, RentalQuery},
    repository::Repository,
    services::pricing,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create rental orders from a checkout, one per cart line.
    ///
    /// Duration and total price are recomputed from the submitted dates and
    /// daily rate, so stored orders always satisfy
    /// `total_price == duration * daily_rate`.
    pub async fn checkout(&self, lines: Vec<CreateRental>) -> AppResult<Vec<Rental>> {
        if lines.is_empty() {
            return Err(AppError::BadRequest("No rental items provided".to_string()));
        }

        let mut validated = Vec::with_capacity(lines.len());
        for line in lines {
            validated.push(self.validate_line(line)?);
        }

        let created = self.repository.rentals.create_many(&validated).await?;
        tracing::info!("Created {} rental order(s)", created.len());
        Ok(created)
    }

    /// List rental orders, optionally filtered by renter email and status
    pub async fn list(&self, query: &RentalQuery) -> AppResult<Vec<Rental>> {
        self.repository.rentals.search(query).await
    }

    fn validate_line(&self, line: CreateRental) -> AppResult<NewRental> {
        if let Some(field) = line.first_missing_field() {
            return Err(AppError::Validation(format!(
                "Missing required field: {}",
                field
            )));
        }

        // first_missing_field() established presence of everything unwrapped below
        let (Some(start_date), Some(end_date)) = (line.start_date, line.end_date) else {
            return Err(AppError::Validation("Missing required field: startDate".to_string()));
        };
        let daily_rate = line.daily_rate.unwrap_or_default();

        let (duration, total_price) = pricing::quote(Some(start_date), Some(end_date), daily_rate)
            .ok_or_else(|| {
                AppError::Validation("endDate must be after startDate".to_string())
            })?;

        Ok(NewRental {
            gear_id: line.gear_id.unwrap_or_default(),
            gear_name: line.gear_name.unwrap_or_default(),
            gear_image: line.gear_image,
            user_id: line.user_id,
            email: line.email.unwrap_or_default(),
            name: line.name.unwrap_or_default(),
            phone: line.phone.unwrap_or_default(),
            start_date,
            end_date,
            duration: duration as i32,
            daily_rate,
            total_price,
            status: line.status.unwrap_or_default(),
            location: line.location,
            notes: line.notes,
        })
    }
}
