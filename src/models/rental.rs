//! Rental order model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Rental order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Pending,
    Confirmed,
    Ongoing,
    Completed,
    Cancelled,
}

impl Default for RentalStatus {
    fn default() -> Self {
        RentalStatus::Pending
    }
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "pending",
            RentalStatus::Confirmed => "confirmed",
            RentalStatus::Ongoing => "ongoing",
            RentalStatus::Completed => "completed",
            RentalStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RentalStatus::Pending),
            "confirmed" => Ok(RentalStatus::Confirmed),
            "ongoing" => Ok(RentalStatus::Ongoing),
            "completed" => Ok(RentalStatus::Completed),
            "cancelled" => Ok(RentalStatus::Cancelled),
            _ => Err(format!("Invalid rental status: {}", s)),
        }
    }
}

// SQLx conversion for RentalStatus (stored as text)
impl sqlx::Type<Postgres> for RentalStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for RentalStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for RentalStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Rental order from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: Uuid,
    pub gear_id: Uuid,
    pub gear_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration: i32,
    pub daily_rate: f64,
    pub total_price: f64,
    pub status: RentalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One rental line submitted at checkout.
///
/// Every field is optional at the wire level so that absent fields surface as
/// a per-field validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRental {
    pub gear_id: Option<Uuid>,
    pub gear_name: Option<String>,
    pub gear_image: Option<String>,
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_date_opt")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_date_opt")]
    pub end_date: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub daily_rate: Option<f64>,
    pub total_price: Option<f64>,
    pub status: Option<RentalStatus>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl CreateRental {
    /// First required field that is absent, in submission order.
    /// Empty strings and zero values count as absent.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.gear_id.is_none() {
            return Some("gearId");
        }
        if is_blank(&self.email) {
            return Some("email");
        }
        if is_blank(&self.name) {
            return Some("name");
        }
        if is_blank(&self.phone) {
            return Some("phone");
        }
        if self.start_date.is_none() {
            return Some("startDate");
        }
        if self.end_date.is_none() {
            return Some("endDate");
        }
        if self.duration.filter(|d| *d != 0).is_none() {
            return Some("duration");
        }
        if self.daily_rate.filter(|r| *r != 0.0).is_none() {
            return Some("dailyRate");
        }
        if self.total_price.filter(|p| *p != 0.0).is_none() {
            return Some("totalPrice");
        }
        None
    }
}

fn is_blank(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Checkout payload: one order per cart line
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub rentals: Option<Vec<CreateRental>>,
}

/// Validated rental ready for insertion (server-computed duration and total)
#[derive(Debug, Clone)]
pub struct NewRental {
    pub gear_id: Uuid,
    pub gear_name: String,
    pub gear_image: Option<String>,
    pub user_id: Option<Uuid>,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration: i32,
    pub daily_rate: f64,
    pub total_price: f64,
    pub status: RentalStatus,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Rental list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RentalQuery {
    pub email: Option<String>,
    pub status: Option<String>,
}

/// Parse a date that may arrive as RFC 3339 or as a bare `YYYY-MM-DD`
/// (date-picker output, taken as midnight UTC).
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| DateTime::from_naive_utc_and_offset(d.and_time(NaiveTime::MIN), Utc))
        .map_err(|_| format!("Invalid date: {}", s))
}

pub(crate) fn deserialize_date_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(&s).map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreateRental {
        CreateRental {
            gear_id: Some(Uuid::new_v4()),
            gear_name: Some("Canon EOS R5".to_string()),
            email: Some("renter@example.com".to_string()),
            name: Some("Renter".to_string()),
            phone: Some("01912345678".to_string()),
            start_date: parse_date("2024-01-01").ok(),
            end_date: parse_date("2024-01-04").ok(),
            duration: Some(3),
            daily_rate: Some(50.0),
            total_price: Some(150.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_line_has_no_missing_field() {
        assert_eq!(filled().first_missing_field(), None);
    }

    #[test]
    fn test_missing_phone() {
        let mut line = filled();
        line.phone = None;
        assert_eq!(line.first_missing_field(), Some("phone"));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut line = filled();
        line.email = Some("  ".to_string());
        assert_eq!(line.first_missing_field(), Some("email"));
    }

    #[test]
    fn test_fields_reported_in_submission_order() {
        let mut line = filled();
        line.phone = None;
        line.email = None;
        assert_eq!(line.first_missing_field(), Some("email"));
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-01-01").is_ok());
        assert!(parse_date("2024-01-01T12:30:00Z").is_ok());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("pending".parse::<RentalStatus>(), Ok(RentalStatus::Pending));
        assert_eq!("Cancelled".parse::<RentalStatus>(), Ok(RentalStatus::Cancelled));
        assert!("returned".parse::<RentalStatus>().is_err());
        assert_eq!(RentalStatus::default(), RentalStatus::Pending);
    }
}
