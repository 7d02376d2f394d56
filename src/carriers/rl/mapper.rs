//! R+L response to domain model mapping

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::models::*;
use super::SHIPPING_METHODS;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiError, ApiFailure, ApiResult, CarrierResult};
use crate::domain::carrier::find_by_service_code;
use crate::domain::{
    DataBag, DocumentFormat, DocumentType, Money, Rate, ShipmentInformation, ShippingDocument, ShippingMethod, Timing,
};

const DATE_FORMAT: &str = "%m/%d/%Y";
const CURRENCY: &str = "USD";

/// Error message from an R+L error body
pub fn error_message(response: &Response) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<RlEnvelope>(&response.body) {
        if let Some(message) = envelope_errors(&envelope) {
            return Some(message);
        }
    }

    serde_json::from_str::<GatewayError>(&response.body)
        .ok()
        .and_then(|e| e.message)
}

fn envelope_errors(envelope: &RlEnvelope) -> Option<String> {
    if envelope.errors.is_empty() {
        return None;
    }
    Some(
        envelope
            .errors
            .iter()
            .map(|e| e.error_message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn decode<T: serde::de::DeserializeOwned>(request: &Request, response: &Response) -> Result<T, ApiFailure> {
    serde_json::from_str(&response.body).map_err(|e| parse_failure(e, request, response))
}

fn check_envelope(envelope: &RlEnvelope, request: &Request, response: &Response) -> Result<(), ApiFailure> {
    match envelope_errors(envelope) {
        Some(message) => Err(parse_failure(ApiError::Carrier(message), request, response)),
        None => Ok(()),
    }
}

fn cost_breakdown(charges: &[Charge]) -> Value {
    Value::Array(
        charges
            .iter()
            .map(|charge| {
                json!({
                    "code": charge.charge_type,
                    "description": charge.title,
                    "amount": charge.amount,
                    "rate": charge.rate,
                    "weight": charge.weight,
                })
            })
            .collect(),
    )
}

/// One rate per service level; the quote's charges become the cost breakdown
pub fn parse_rate_quote(request: &Request, response: &Response) -> CarrierResult<Vec<Rate>> {
    let parsed: RateQuoteResponse = decode(request, response)?;
    check_envelope(&parsed.envelope, request, response)?;

    let quote = parsed
        .rate_quote
        .ok_or_else(|| parse_failure(ApiError::Parse("missing RateQuote".to_string()), request, response))?;
    let breakdown = cost_breakdown(&quote.charges);

    let mut rates = Vec::with_capacity(quote.service_levels.len());
    for level in &quote.service_levels {
        let net_charge = level.net_charge.as_deref().unwrap_or("0");
        let total = Money::parse(net_charge, CURRENCY).map_err(|e| parse_failure(e, request, response))?;

        let shipping_method = find_by_service_code(&SHIPPING_METHODS, &level.code)
            .cloned()
            .unwrap_or_else(|| ShippingMethod::new(level.title.as_deref().unwrap_or(&level.code), &level.code));

        let mut data = DataBag::new();
        data.insert("quote_number".to_string(), json!(quote.quote_number));
        data.insert("days_in_transit".to_string(), json!(level.service_days));
        data.insert("gross_charge".to_string(), json!(level.charge));
        data.insert("cost_breakdown".to_string(), breakdown.clone());

        let mut amounts = BTreeMap::new();
        amounts.insert("total".to_string(), total);

        rates.push(Rate {
            data,
            ..Rate::new(shipping_method, amounts)
        });
    }

    tracing::info!(carrier = "rl", rates = rates.len(), "Parsed rate quote");
    Ok(ApiResult::new(rates, request, response))
}

/// The single standard-service timing from a transit times response
pub fn parse_transit_times(request: &Request, response: &Response) -> CarrierResult<Vec<Timing>> {
    let parsed: TransitTimesResponse = decode(request, response)?;
    check_envelope(&parsed.envelope, request, response)?;

    let Some(transit) = parsed.transit_time else {
        return Ok(ApiResult::new(Vec::new(), request, response));
    };

    let pickup =
        NaiveDate::parse_from_str(&transit.pickup_date, DATE_FORMAT).map_err(|e| parse_failure(e, request, response))?;
    let delivery = NaiveDate::parse_from_str(&transit.estimated_delivery_date, DATE_FORMAT)
        .map_err(|e| parse_failure(e, request, response))?;

    let shipping_method = find_by_service_code(&SHIPPING_METHODS, "STD").cloned().unwrap_or_default();
    let mut timing = Timing::new(shipping_method, pickup, delivery.and_time(chrono::NaiveTime::default()));
    timing.data.insert("service_days".to_string(), json!(transit.service_days));

    Ok(ApiResult::new(vec![timing], request, response))
}

/// PRO and pickup request numbers of a created BOL
pub fn parse_bol(request: &Request, response: &Response) -> CarrierResult<ShipmentInformation> {
    let parsed: BolResponse = decode(request, response)?;
    check_envelope(&parsed.envelope, request, response)?;

    let information = ShipmentInformation {
        pro_number: parsed.pro_number,
        pickup_number: parsed.pickup_request_number,
        ..Default::default()
    };

    tracing::info!(carrier = "rl", pro_number = ?information.pro_number, "Created bill of lading");
    Ok(ApiResult::new(information, request, response))
}

fn pdf_document(
    encoded: Option<String>,
    document_type: DocumentType,
    request: &Request,
    response: &Response,
) -> Result<ShippingDocument, ApiFailure> {
    let encoded =
        encoded.ok_or_else(|| parse_failure(ApiError::Parse("missing document".to_string()), request, response))?;
    let binary = BASE64.decode(encoded.trim()).map_err(|e| parse_failure(e, request, response))?;
    Ok(ShippingDocument::inline(document_type, DocumentFormat::Pdf, binary))
}

pub fn parse_print_bol(request: &Request, response: &Response, pro_number: &str) -> CarrierResult<ShippingDocument> {
    let parsed: PrintBolResponse = decode(request, response)?;
    check_envelope(&parsed.envelope, request, response)?;

    let document = pdf_document(parsed.bol_document, DocumentType::BillOfLading, request, response)?;
    Ok(ApiResult::new(document.with_reference(pro_number), request, response))
}

pub fn parse_shipping_labels(
    request: &Request,
    response: &Response,
    pro_number: &str,
) -> CarrierResult<ShippingDocument> {
    let parsed: ShippingLabelResponse = decode(request, response)?;
    check_envelope(&parsed.envelope, request, response)?;

    let document = pdf_document(parsed.shipping_labels_file, DocumentType::Label, request, response)?;
    Ok(ApiResult::new(document.with_reference(pro_number), request, response))
}
