//! G2Mint response to domain model mapping

use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::models::*;
use super::SHIPPING_METHODS;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiError, ApiResult, CarrierResult};
use crate::domain::carrier::find_by_service_code;
use crate::domain::{DataBag, Money, Rate, ShippingMethod};

/// `errors[].message`, joined
pub fn error_message(response: &Response) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(&response.body).ok()?;
    let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
    (!messages.is_empty()).then(|| messages.join(", "))
}

fn cost_breakdown(charges: &[Charge]) -> Value {
    Value::Array(
        charges
            .iter()
            .map(|charge| {
                json!({
                    "code": charge.code,
                    "description": charge.description,
                    "amount": charge.amount.to_string(),
                })
            })
            .collect(),
    )
}

fn rate(quote: Quote) -> Result<Rate, ApiError> {
    let total = Money::parse(&quote.total_charge.to_string(), &quote.currency)?;

    let shipping_method = find_by_service_code(&SHIPPING_METHODS, &quote.service_level)
        .cloned()
        .unwrap_or_else(|| ShippingMethod::new(&format!("G2Mint LTL {}", quote.service_level), &quote.service_level));

    let delivery_date = quote
        .estimated_delivery_date
        .as_deref()
        .map(|d| NaiveDate::parse_from_str(d.split('T').next().unwrap_or(d), "%Y-%m-%d"))
        .transpose()?
        .map(|d| d.and_time(chrono::NaiveTime::default()));

    let mut data = DataBag::new();
    data.insert("cost_breakdown".to_string(), cost_breakdown(&quote.charges));
    data.insert("carrier_name".to_string(), json!(quote.carrier_name));
    data.insert("carrier_scac".to_string(), json!(quote.carrier_scac));
    if let Some(days) = quote.transit_days {
        data.insert("days_in_transit".to_string(), json!(days));
    }

    let mut amounts = BTreeMap::new();
    amounts.insert("total".to_string(), total);

    Ok(Rate {
        remote_service_id: Some(quote.quote_id),
        delivery_date,
        data,
        ..Rate::new(shipping_method, amounts)
    })
}

/// One rate per quote
pub fn parse_rate_quote(request: &Request, response: &Response) -> CarrierResult<Vec<Rate>> {
    let parsed: QuoteResponse =
        serde_json::from_str(&response.body).map_err(|e| parse_failure(e, request, response))?;

    let rates = parsed
        .quotes
        .into_iter()
        .map(rate)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_failure(e, request, response))?;

    tracing::info!(carrier = "g2mint", rates = rates.len(), "Parsed rates");
    Ok(ApiResult::new(rates, request, response))
}
