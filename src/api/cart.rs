//! Cart pricing endpoint

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, services::pricing};

/// One cart line to price
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub gear_id: Option<Uuid>,
    #[serde(default, deserialize_with = "crate::models::rental::deserialize_date_opt")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::rental::deserialize_date_opt")]
    pub end_date: Option<DateTime<Utc>>,
    pub daily_rate: f64,
}

/// Priced cart line.
///
/// `duration` and `totalPrice` are absent when the line's date range is
/// incomplete or not positive; such lines do not count towards the total.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotedLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct QuoteRequest {
    pub items: Vec<QuoteLine>,
}

#[derive(Serialize, ToSchema)]
pub struct QuoteResponse {
    pub success: bool,
    pub items: Vec<QuotedLine>,
    /// Sum of the priced lines
    pub total: f64,
}

/// Price a cart: per-line duration/total plus a grand total
#[utoipa::path(
    post,
    path = "/cart/quote",
    tag = "cart",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Priced cart", body = QuoteResponse)
    )
)]
pub async fn quote_cart(Json(request): Json<QuoteRequest>) -> AppResult<Json<QuoteResponse>> {
    let mut total = 0.0;
    let items = request
        .items
        .into_iter()
        .map(|line| {
            let priced = pricing::quote(line.start_date, line.end_date, line.daily_rate);
            if let Some((_, line_total)) = priced {
                total += line_total;
            }
            QuotedLine {
                gear_id: line.gear_id,
                duration: priced.map(|(d, _)| d),
                total_price: priced.map(|(_, t)| t),
            }
        })
        .collect();

    Ok(Json(QuoteResponse {
        success: true,
        items,
        total,
    }))
}
