//! Gear repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::gear::{CreateGear, Gear, GearFilter, GearRow},
};

const GEAR_COLUMNS: &str = "id, name, brand, model, description, daily_rate, image, images, \
     category, spec_resolution, spec_sensor, spec_iso, spec_weight, spec_video, \
     loc_city, loc_state, loc_zip_code, owner_id, is_available, created_at, updated_at";

#[derive(Clone)]
pub struct GearRepository {
    pool: Pool<Postgres>,
}

impl GearRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get gear by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Gear> {
        let row = sqlx::query_as::<_, GearRow>(&format!(
            "SELECT {} FROM gear WHERE id = $1",
            GEAR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Gear not found".to_string()))?;

        Ok(row.into())
    }

    /// Search gear with pagination.
    ///
    /// Returns the requested page (newest first) and the total match count.
    pub async fn search(&self, filter: &GearFilter) -> AppResult<(Vec<Gear>, i64)> {
        let mut conditions = vec!["1=1".to_string()];
        let mut binds: Vec<String> = Vec::new();

        if let Some(ref category) = filter.category {
            binds.push(category.clone());
            conditions.push(format!("category = ${}", binds.len()));
        }

        if let Some(ref search) = filter.search {
            binds.push(format!("%{}%", search));
            let n = binds.len();
            conditions.push(format!(
                "(name ILIKE ${n} OR brand ILIKE ${n} OR model ILIKE ${n} OR description ILIKE ${n})",
            ));
        }

        let where_clause = conditions.join(" AND ");

        let count_query = format!("SELECT COUNT(*) FROM gear WHERE {}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        for bind in &binds {
            count = count.bind(bind);
        }
        let total = count.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT {} FROM gear WHERE {} ORDER BY created_at DESC LIMIT {} OFFSET {}",
            GEAR_COLUMNS,
            where_clause,
            filter.limit,
            filter.offset()
        );
        let mut select = sqlx::query_as::<_, GearRow>(&select_query);
        for bind in &binds {
            select = select.bind(bind);
        }
        let rows = select.fetch_all(&self.pool).await?;

        Ok((rows.into_iter().map(Gear::from).collect(), total))
    }

    /// Create a new gear listing
    pub async fn create(&self, gear: &CreateGear, owner_id: Uuid) -> AppResult<Gear> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO gear (
                name, brand, model, description, daily_rate, image, images, category,
                spec_resolution, spec_sensor, spec_iso, spec_weight, spec_video,
                loc_city, loc_state, loc_zip_code,
                owner_id, is_available, created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, TRUE, $18, $18
            ) RETURNING id
            "#,
        )
        .bind(&gear.name)
        .bind(&gear.brand)
        .bind(&gear.model)
        .bind(&gear.description)
        .bind(gear.daily_rate)
        .bind(&gear.image)
        .bind(&gear.images)
        .bind(gear.category)
        .bind(&gear.specifications.resolution)
        .bind(&gear.specifications.sensor)
        .bind(&gear.specifications.iso)
        .bind(&gear.specifications.weight)
        .bind(&gear.specifications.video)
        .bind(&gear.location.city)
        .bind(&gear.location.state)
        .bind(&gear.location.zip_code)
        .bind(owner_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }
}
