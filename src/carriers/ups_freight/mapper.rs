//! UPS Freight response to domain model mapping

use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::models::*;
use super::SHIPPING_METHODS;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiResult, CarrierResult};
use crate::domain::carrier::find_by_service_code;
use crate::domain::{DataBag, Money, Rate, ShippingMethod};

/// `response.errors[].message`, joined
pub fn error_message(response: &Response) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(&response.body).ok()?;
    let messages: Vec<String> = parsed.response.errors.into_iter().map(|e| e.message).collect();
    (!messages.is_empty()).then(|| messages.join(", "))
}

fn cost_breakdown(lines: Vec<RateLine>) -> Value {
    Value::Array(
        lines
            .into_iter()
            .map(|line| {
                json!({
                    "code": line.rate_type.code,
                    "description": line.rate_type.description,
                    "amount": line.factor.value,
                    "unit": line.factor.unit_of_measurement.map(|u| u.code),
                })
            })
            .collect(),
    )
}

/// The single rate for the requested service
pub fn parse_rates(request: &Request, response: &Response, service_code: &str) -> CarrierResult<Vec<Rate>> {
    let envelope: RateEnvelope =
        serde_json::from_str(&response.body).map_err(|e| parse_failure(e, request, response))?;
    let rated = envelope.freight_rate_response;

    let total = Money::parse(&rated.total_shipment_charge.monetary_value, &rated.total_shipment_charge.currency_code)
        .map_err(|e| parse_failure(e, request, response))?;

    let code = rated.service.as_ref().map(|s| s.code.as_str()).unwrap_or(service_code);
    let shipping_method = find_by_service_code(&SHIPPING_METHODS, code)
        .cloned()
        .unwrap_or_else(|| ShippingMethod::new(&format!("UPS Freight {}", code), code));

    let mut data = DataBag::new();
    data.insert("cost_breakdown".to_string(), cost_breakdown(rated.rate.into_vec()));
    if let Some(weight) = rated.billable_shipment_weight {
        data.insert("billable_weight".to_string(), json!(weight.value));
    }
    if let Some(days) = rated
        .time_in_transit
        .and_then(|t| t.days_in_transit)
        .and_then(|d| d.trim().parse::<i64>().ok())
    {
        data.insert("days_in_transit".to_string(), json!(days));
    }

    let mut amounts = BTreeMap::new();
    amounts.insert("total".to_string(), total);

    let rate = Rate {
        warnings: rated.alert.into_vec().into_iter().map(|a| a.description).collect(),
        data,
        ..Rate::new(shipping_method, amounts)
    };

    tracing::info!(carrier = "ups_freight", rates = 1, "Parsed rates");
    Ok(ApiResult::new(vec![rate], request, response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    const SUCCESS: &str = r#"{
        "FreightRateResponse": {
            "Response": {"ResponseStatus": {"Code": "1", "Description": "Success"}},
            "Rate": [
                {"Type": {"Code": "DSCNT", "Description": "DSCNT"}, "Factor": {"Value": "512.40", "UnitOfMeasurement": {"Code": "USD"}}},
                {"Type": {"Code": "2", "Description": "2"}, "Factor": {"Value": "38.15", "UnitOfMeasurement": {"Code": "USD"}}}
            ],
            "TotalShipmentCharge": {"CurrencyCode": "USD", "MonetaryValue": "354.27"},
            "BillableShipmentWeight": {"Value": "450", "UnitOfMeasurement": {"Code": "LBS"}},
            "Service": {"Code": "308"},
            "TimeInTransit": {"DaysInTransit": "2"},
            "Alert": {"Code": "9369", "Description": "User is not eligible for contract rates."}
        }
    }"#;

    #[test]
    fn test_parse_rates() {
        let request = Request::post("https://example.com", "{}");
        let rates = parse_rates(&request, &Response::new(200, SUCCESS), "308").unwrap().data;

        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].shipping_method.name, "UPS Freight LTL");
        assert_eq!(rates[0].total_amount().unwrap().amount, Decimal::new(35427, 2));
        assert_eq!(rates[0].data["cost_breakdown"].as_array().unwrap().len(), 2);
        assert_eq!(rates[0].data["days_in_transit"], 2);
        assert_eq!(rates[0].warnings, vec!["User is not eligible for contract rates."]);
    }

    #[test]
    fn test_error_message_joined() {
        let body = r#"{"response":{"errors":[{"code":"9360703","message":"Missing or invalid ship from postal code"},{"code":"9360704","message":"Missing or invalid ship to postal code"}]}}"#;
        assert_eq!(
            error_message(&Response::new(400, body)).as_deref(),
            Some("Missing or invalid ship from postal code, Missing or invalid ship to postal code")
        );
        assert_eq!(error_message(&Response::new(400, r#"{"response":{"errors":[]}}"#)), None);
    }
}
