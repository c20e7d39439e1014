//! Gear (catalog entry) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GearCategory {
    #[serde(rename = "DSLR")]
    Dslr,
    Mirrorless,
    Drones,
    Lighting,
    Lenses,
    Accessories,
}

impl GearCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GearCategory::Dslr => "DSLR",
            GearCategory::Mirrorless => "Mirrorless",
            GearCategory::Drones => "Drones",
            GearCategory::Lighting => "Lighting",
            GearCategory::Lenses => "Lenses",
            GearCategory::Accessories => "Accessories",
        }
    }
}

impl std::fmt::Display for GearCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GearCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DSLR" => Ok(GearCategory::Dslr),
            "Mirrorless" => Ok(GearCategory::Mirrorless),
            "Drones" => Ok(GearCategory::Drones),
            "Lighting" => Ok(GearCategory::Lighting),
            "Lenses" => Ok(GearCategory::Lenses),
            "Accessories" => Ok(GearCategory::Accessories),
            _ => Err(format!("Invalid gear category: {}", s)),
        }
    }
}

// SQLx conversion for GearCategory (stored as text)
impl sqlx::Type<Postgres> for GearCategory {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for GearCategory {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for GearCategory {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Technical specifications (all optional, free-form strings)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GearSpecifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// Pickup location
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GearLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Internal row structure for database queries (flat columns)
#[derive(Debug, Clone, FromRow)]
pub struct GearRow {
    id: Uuid,
    name: String,
    brand: String,
    model: String,
    description: String,
    daily_rate: f64,
    image: String,
    images: Option<Vec<String>>,
    category: GearCategory,
    spec_resolution: Option<String>,
    spec_sensor: Option<String>,
    spec_iso: Option<String>,
    spec_weight: Option<String>,
    spec_video: Option<String>,
    loc_city: Option<String>,
    loc_state: Option<String>,
    loc_zip_code: Option<String>,
    owner_id: Option<Uuid>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<GearRow> for Gear {
    fn from(row: GearRow) -> Self {
        Gear {
            id: row.id,
            name: row.name,
            brand: row.brand,
            model: row.model,
            description: row.description,
            daily_rate: row.daily_rate,
            image: row.image,
            images: row.images.unwrap_or_default(),
            category: row.category,
            specifications: GearSpecifications {
                resolution: row.spec_resolution,
                sensor: row.spec_sensor,
                iso: row.spec_iso,
                weight: row.spec_weight,
                video: row.spec_video,
            },
            location: GearLocation {
                city: row.loc_city,
                state: row.loc_state,
                zip_code: row.loc_zip_code,
            },
            owner_id: row.owner_id,
            is_available: row.is_available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Full gear document (API shape)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Gear {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub daily_rate: f64,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: GearCategory,
    #[serde(default)]
    pub specifications: GearSpecifications,
    #[serde(default)]
    pub location: GearLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create gear request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGear {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub daily_rate: f64,
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: GearCategory,
    #[serde(default)]
    pub specifications: GearSpecifications,
    #[serde(default)]
    pub location: GearLocation,
}

/// Gear list query parameters.
///
/// `page` and `limit` are taken as raw strings so malformed numeric input
/// falls back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct GearQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 12;

/// Normalized catalog filter derived from raw query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GearFilter {
    pub page: i64,
    pub limit: i64,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl GearFilter {
    /// Normalize raw query parameters.
    ///
    /// Malformed or sub-1 page/limit values fall back to page=1 / limit=12.
    /// The category sentinel "all" and empty strings mean no filter.
    pub fn from_query(query: &GearQuery) -> Self {
        let page = parse_positive(query.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(query.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);

        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(String::from);

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Self {
            page,
            limit,
            category,
            search,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// More pages exist beyond the current one
    pub fn has_more(&self, total: i64) -> bool {
        self.page * self.limit < total
    }
}

fn parse_positive(s: Option<&str>) -> Option<i64> {
    s.and_then(|v| v.trim().parse::<i64>().ok()).filter(|n| *n >= 1)
}
