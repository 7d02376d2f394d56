//! UPS response to domain model mapping

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::BTreeMap;

use super::models::*;
use super::{SHIPPING_METHODS, TRANSIT_SERVICE_CODES};
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiError, ApiFailure, ApiResult, CarrierResult};
use crate::domain::carrier::find_by_service_code;
use crate::domain::{
    DataBag, DocumentFormat, DocumentType, Money, Rate, ShipmentInformation, ShippingDocument, ShippingMethod, Timing,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

fn status_message(status: &ResponseStatus) -> Option<String> {
    let descriptions: Vec<&str> = status
        .error
        .iter()
        .filter_map(|e| e.error_description.as_deref())
        .collect();

    if descriptions.is_empty() {
        status.response_status_description.clone()
    } else {
        Some(descriptions.join(", "))
    }
}

/// Error description from a UPS error document
pub fn error_message(response: &Response) -> Option<String> {
    quick_xml::de::from_str::<StatusOnly>(&response.body)
        .ok()
        .and_then(|doc| status_message(&doc.response))
}

fn decode<T: DeserializeOwned>(request: &Request, response: &Response) -> Result<T, ApiFailure> {
    quick_xml::de::from_str(&response.body).map_err(|e| parse_failure(e, request, response))
}

fn check_status(status: &ResponseStatus, request: &Request, response: &Response) -> Result<(), ApiFailure> {
    if !status.is_failure() {
        return Ok(());
    }
    let message = status_message(status).unwrap_or_else(|| "UPS request failed".to_string());
    Err(parse_failure(ApiError::Carrier(message), request, response))
}

fn money(charges: &Charges, request: &Request, response: &Response) -> Result<Money, ApiFailure> {
    Money::parse(&charges.monetary_value, &charges.currency_code).map_err(|e| parse_failure(e, request, response))
}

fn shipping_method(code: &str, description: Option<&str>) -> ShippingMethod {
    find_by_service_code(&SHIPPING_METHODS, code)
        .cloned()
        .unwrap_or_else(|| ShippingMethod::new(description.unwrap_or(code), code))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// One rate per rated shipment; negotiated totals win over published ones
pub fn parse_rate_response(request: &Request, response: &Response) -> CarrierResult<Vec<Rate>> {
    let parsed: RatingServiceSelectionResponse = decode(request, response)?;
    check_status(&parsed.response, request, response)?;

    let mut rates = Vec::with_capacity(parsed.rated_shipment.len());
    for rated in &parsed.rated_shipment {
        let published = money(&rated.total_charges, request, response)?;
        let total = match &rated.negotiated_rates {
            Some(negotiated) => money(&negotiated.net_summary_charges.grand_total, request, response)?,
            None => published.clone(),
        };

        let mut data = DataBag::new();
        if let Some(weight) = &rated.billing_weight {
            data.insert("billing_weight".to_string(), json!(weight.weight));
        }
        if let Some(days) = non_blank(&rated.guaranteed_days_to_delivery).and_then(|d| d.parse::<i64>().ok()) {
            data.insert("days_in_transit".to_string(), json!(days));
        }
        if let Some(time) = non_blank(&rated.scheduled_delivery_time) {
            data.insert("scheduled_delivery_time".to_string(), json!(time));
        }
        if rated.negotiated_rates.is_some() {
            data.insert("published_total".to_string(), json!(published.amount.to_string()));
        }

        let mut amounts = BTreeMap::new();
        amounts.insert("total".to_string(), total);

        rates.push(Rate {
            warnings: rated.rated_shipment_warning.clone(),
            data,
            ..Rate::new(
                shipping_method(&rated.service.code, rated.service.description.as_deref()),
                amounts,
            )
        });
    }

    tracing::info!(carrier = "ups", rates = rates.len(), "Parsed rate response");
    Ok(ApiResult::new(rates, request, response))
}

fn rating_code(transit_code: &str) -> Option<&'static str> {
    TRANSIT_SERVICE_CODES
        .iter()
        .find(|(code, _)| *code == transit_code)
        .map(|(_, rating)| *rating)
}

/// One timing per service summary, mapped onto rating service codes
pub fn parse_time_in_transit(request: &Request, response: &Response) -> CarrierResult<Vec<Timing>> {
    let parsed: TimeInTransitResponse = decode(request, response)?;
    check_status(&parsed.response, request, response)?;

    let Some(transit) = parsed.transit_response else {
        return Ok(ApiResult::new(Vec::new(), request, response));
    };

    let mut timings = Vec::with_capacity(transit.service_summary.len());
    for summary in &transit.service_summary {
        let arrival = &summary.estimated_arrival;

        let pickup_text = non_blank(&arrival.pickup_date)
            .or(non_blank(&transit.pickup_date))
            .ok_or_else(|| parse_failure(ApiError::Parse("missing pickup date".to_string()), request, response))?;
        let pickup =
            NaiveDate::parse_from_str(pickup_text, DATE_FORMAT).map_err(|e| parse_failure(e, request, response))?;

        let date = NaiveDate::parse_from_str(arrival.date.trim(), DATE_FORMAT)
            .map_err(|e| parse_failure(e, request, response))?;
        let time = match non_blank(&arrival.time) {
            Some(text) => {
                NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|e| parse_failure(e, request, response))?
            }
            None => NaiveTime::default(),
        };

        let method = match rating_code(&summary.service.code) {
            Some(code) => shipping_method(code, summary.service.description.as_deref()),
            None => shipping_method(&summary.service.code, summary.service.description.as_deref()),
        };

        let mut timing = Timing::new(method, pickup, date.and_time(time));
        timing.guaranteed = summary.guaranteed.as_ref().is_some_and(|g| g.code == "Y");
        if let Some(days) = non_blank(&arrival.business_transit_days) {
            timing.data.insert("business_transit_days".to_string(), json!(days));
        }
        timings.push(timing);
    }

    Ok(ApiResult::new(timings, request, response))
}

/// Shipment digest to pass on to ShipAccept
pub fn parse_ship_confirm(request: &Request, response: &Response) -> CarrierResult<String> {
    let parsed: ShipmentConfirmResponse = decode(request, response)?;
    check_status(&parsed.response, request, response)?;

    let digest = non_blank(&parsed.shipment_digest)
        .map(str::to_string)
        .ok_or_else(|| parse_failure(ApiError::Parse("missing ShipmentDigest".to_string()), request, response))?;

    Ok(ApiResult::new(digest, request, response))
}

/// Tracking numbers, charges and one label per package
pub fn parse_ship_accept(request: &Request, response: &Response) -> CarrierResult<ShipmentInformation> {
    let parsed: ShipmentAcceptResponse = decode(request, response)?;
    check_status(&parsed.response, request, response)?;

    let results = parsed
        .shipment_results
        .ok_or_else(|| parse_failure(ApiError::Parse("missing ShipmentResults".to_string()), request, response))?;

    let cost = match &results.shipment_charges {
        Some(charges) => Some(money(&charges.total_charges, request, response)?),
        None => None,
    };

    let mut documents = Vec::new();
    for package in &results.package_results {
        if let Some(image) = &package.label_image {
            let binary = BASE64
                .decode(image.graphic_image.trim())
                .map_err(|e| parse_failure(e, request, response))?;
            let format = DocumentFormat::from_code(&image.label_image_format.code);
            let document = ShippingDocument::inline(DocumentType::Label, format, binary);
            documents.push(document.with_reference(&package.tracking_number));
        }
    }

    let mut data = DataBag::new();
    data.insert(
        "package_tracking_numbers".to_string(),
        json!(results.package_results.iter().map(|p| &p.tracking_number).collect::<Vec<_>>()),
    );

    let information = ShipmentInformation {
        tracking_number: results.shipment_identification_number,
        cost,
        documents,
        data,
        ..Default::default()
    };

    tracing::info!(carrier = "ups", tracking_number = ?information.tracking_number, "Accepted shipment");
    Ok(ApiResult::new(information, request, response))
}
