//! TForce Freight response to domain model mapping

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::models::*;
use super::SHIPPING_METHODS;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiError, ApiFailure, ApiResult, CarrierResult};
use crate::domain::carrier::find_by_service_code;
use crate::domain::{
    DataBag, DocumentFormat, DocumentType, Money, Rate, ShipmentInformation, ShippingDocument, ShippingMethod,
};

/// `summary.responseStatus.message`, else the gateway's `error.message`
pub fn error_message(response: &Response) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(&response.body).ok()?;
    parsed
        .summary
        .and_then(|s| s.response_status)
        .and_then(|s| s.message)
        .or_else(|| parsed.error.and_then(|e| e.message))
}

fn decode<T: DeserializeOwned>(request: &Request, response: &Response) -> Result<T, ApiFailure> {
    serde_json::from_str(&response.body).map_err(|e| parse_failure(e, request, response))
}

fn cost_breakdown(lines: &[RateLine]) -> Value {
    Value::Array(
        lines
            .iter()
            .map(|line| {
                json!({
                    "code": line.code,
                    "description": line.description,
                    "amount": line.value,
                    "unit": line.unit,
                })
            })
            .collect(),
    )
}

fn rate(detail: &RateDetail) -> Result<Rate, ApiError> {
    let total = Money::parse(&detail.shipment_charges.total.value, &detail.shipment_charges.total.currency)?;

    let shipping_method = find_by_service_code(&SHIPPING_METHODS, &detail.service.code)
        .cloned()
        .unwrap_or_else(|| {
            ShippingMethod::new(
                detail.service.description.as_deref().unwrap_or(&detail.service.code),
                &detail.service.code,
            )
        });

    let mut data = DataBag::new();
    data.insert("cost_breakdown".to_string(), cost_breakdown(&detail.rate));
    data.insert("quote_number".to_string(), json!(detail.quote_number));
    if let Some(days) = detail
        .time_in_transit
        .as_ref()
        .and_then(|t| t.time_in_transit.as_deref())
        .and_then(|d| d.trim().parse::<i64>().ok())
    {
        data.insert("days_in_transit".to_string(), json!(days));
    }

    let mut amounts = BTreeMap::new();
    amounts.insert("total".to_string(), total);

    Ok(Rate {
        warnings: detail.alerts.iter().map(|a| a.message.clone()).collect(),
        data,
        ..Rate::new(shipping_method, amounts)
    })
}

/// One rate per `detail` entry
pub fn parse_rates(request: &Request, response: &Response) -> CarrierResult<Vec<Rate>> {
    let parsed: RateResponse = decode(request, response)?;

    let rates = parsed
        .detail
        .iter()
        .map(rate)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_failure(e, request, response))?;

    tracing::info!(carrier = "tforce", rates = rates.len(), "Parsed rates");
    Ok(ApiResult::new(rates, request, response))
}

fn document_type(code: &CodeDescription) -> DocumentType {
    match code.code.as_str() {
        "20" => DocumentType::BillOfLading,
        "30" => DocumentType::Label,
        other => DocumentType::Other(code.description.clone().unwrap_or_else(|| other.to_string())),
    }
}

fn document_format(format: &CodeDescription) -> DocumentFormat {
    match format.description.as_deref() {
        Some(description) => DocumentFormat::from_code(description),
        None if format.code == "01" => DocumentFormat::Pdf,
        None => DocumentFormat::Other(format.code.clone()),
    }
}

/// PRO, BOL id, pickup confirmation and the returned documents
pub fn parse_bol(request: &Request, response: &Response) -> CarrierResult<ShipmentInformation> {
    let parsed: BolResponse = decode(request, response)?;
    let pro_number = parsed.detail.pro.clone();

    let mut documents = Vec::new();
    for image in parsed.documents.iter().flat_map(|d| d.image.iter()) {
        let binary = BASE64.decode(image.data.trim()).map_err(|e| parse_failure(e, request, response))?;
        let document =
            ShippingDocument::inline(document_type(&image.document_type), document_format(&image.format), binary);
        documents.push(match &pro_number {
            Some(pro) => document.with_reference(pro),
            None => document,
        });
    }

    let bol_number = match &parsed.detail.bol_id {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };

    let information = ShipmentInformation {
        pro_number,
        bol_number,
        pickup_number: parsed.detail.pickup.and_then(|p| p.confirmation_number),
        documents,
        ..Default::default()
    };

    tracing::info!(carrier = "tforce", pro_number = ?information.pro_number, "Created bill of lading");
    Ok(ApiResult::new(information, request, response))
}
