//! Reconex response to domain model mapping

use serde::de::DeserializeOwned;
use serde_json::json;

use super::models::*;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiError, ApiFailure, ApiResult, CarrierResult};
use crate::domain::{DataBag, Money, ShipmentInformation};

/// `errors[]`, joined
pub fn error_message(response: &Response) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(&response.body).ok()?;
    joined(&parsed.errors)
}

fn joined(errors: &[String]) -> Option<String> {
    (!errors.is_empty()).then(|| errors.join(", "))
}

fn decode<T: DeserializeOwned>(request: &Request, response: &Response) -> Result<T, ApiFailure> {
    serde_json::from_str(&response.body).map_err(|e| parse_failure(e, request, response))
}

fn carrier_failure(message: String, request: &Request, response: &Response) -> ApiFailure {
    tracing::warn!(carrier = "reconex", error = %message, "Carrier reported failure");
    ApiFailure::new(ApiError::Carrier(message), request, Some(response))
}

/// Load id and any numbers assigned at tender
pub fn parse_create_load(request: &Request, response: &Response) -> CarrierResult<ShipmentInformation> {
    let parsed: CreateLoadResponse = decode(request, response)?;

    if let Some(message) = joined(&parsed.errors) {
        return Err(carrier_failure(message, request, response));
    }
    let load_id = parsed
        .load_id
        .ok_or_else(|| carrier_failure("no load id returned".to_string(), request, response))?;

    let mut data = DataBag::new();
    data.insert("status".to_string(), json!(parsed.status));

    let information = ShipmentInformation {
        load_id: Some(load_id),
        pro_number: parsed.pro_number,
        bol_number: parsed.bol_number,
        data,
        ..Default::default()
    };

    tracing::info!(carrier = "reconex", load_id = ?information.load_id, "Created load");
    Ok(ApiResult::new(information, request, response))
}

fn load_information(load: LoadInfo) -> Result<ShipmentInformation, ApiError> {
    let cost = load
        .total_cost
        .as_deref()
        .map(|cost| Money::parse(cost, "USD"))
        .transpose()?;

    let mut data = DataBag::new();
    data.insert("status".to_string(), json!(load.status));
    data.insert("carrier".to_string(), json!(load.carrier));
    data.insert("pickup_date".to_string(), json!(load.pickup_date));
    data.insert("delivery_date".to_string(), json!(load.delivery_date));

    Ok(ShipmentInformation {
        load_id: Some(load.load_id),
        pro_number: load.pro_number,
        bol_number: load.bol_number,
        pickup_number: load.pickup_number,
        cost,
        data,
        ..Default::default()
    })
}

/// One `ShipmentInformation` per returned load
pub fn parse_load_info(request: &Request, response: &Response) -> CarrierResult<Vec<ShipmentInformation>> {
    let parsed: LoadInfoResponse = decode(request, response)?;

    if parsed.loads.is_empty() {
        if let Some(message) = joined(&parsed.errors) {
            return Err(carrier_failure(message, request, response));
        }
    }

    let loads = parsed
        .loads
        .into_iter()
        .map(load_information)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_failure(e, request, response))?;

    tracing::info!(carrier = "reconex", loads = loads.len(), "Parsed load info");
    Ok(ApiResult::new(loads, request, response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request {
        Request::post("https://api.reconex.com/api/CreateLoad", "{}")
    }

    #[test]
    fn test_create_load_errors_in_success_body() {
        let body = r#"{"loadId":null,"errors":["Pickup date is in the past","Consignee zip is required"]}"#;
        let failure = parse_create_load(&request(), &Response::new(200, body)).unwrap_err();

        assert_eq!(failure.error.message(), "Pickup date is in the past, Consignee zip is required");
        assert!(failure.original_response.is_some());
    }

    #[test]
    fn test_load_info_cost() {
        let body = r#"{"loads":[{"loadId":"RX-1001","status":"Delivered","proNumber":"PRO77","totalCost":"$1,250.00"}]}"#;
        let loads = parse_load_info(&request(), &Response::new(200, body)).unwrap().data;

        assert_eq!(loads[0].load_id.as_deref(), Some("RX-1001"));
        assert_eq!(loads[0].cost.as_ref().map(|c| c.cents()), Some(125000));
        assert_eq!(loads[0].data["status"], "Delivered");
    }
}
