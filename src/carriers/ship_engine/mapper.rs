//! ShipEngine response to domain model mapping

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::BTreeMap;

use super::models::*;
use super::options::LabelDownloadType;
use super::SHIPPING_METHODS;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::traits::{parse_failure, ApiError, ApiFailure, ApiResult, CarrierResult};
use crate::domain::carrier::find_by_service_code;
use crate::domain::{
    Carrier, DataBag, DocumentFormat, DocumentType, Money, MoneyError, Rate, ShipmentInformation, ShippingDocument,
    ShippingMethod,
};

/// `errors[].message` joined
pub fn error_message(response: &Response) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(&response.body).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }
    Some(
        parsed
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn decode<T: DeserializeOwned>(request: &Request, response: &Response) -> Result<T, ApiFailure> {
    serde_json::from_str(&response.body).map_err(|e| parse_failure(e, request, response))
}

fn money(value: &MonetaryValue) -> Result<Money, MoneyError> {
    Money::parse(&value.amount.to_string(), &value.currency.to_uppercase())
}

fn delivery_date(text: &str) -> Result<NaiveDateTime, ApiError> {
    Ok(DateTime::parse_from_rfc3339(text)?.naive_utc())
}

/// Connected carriers with their services
pub fn parse_carriers(request: &Request, response: &Response) -> CarrierResult<Vec<Carrier>> {
    let parsed: CarriersResponse = decode(request, response)?;

    let mut carriers = Vec::with_capacity(parsed.carriers.len());
    for account in parsed.carriers {
        let methods = account
            .services
            .iter()
            .map(|service| {
                let method = ShippingMethod::new(&service.name, &service.service_code)
                    .serving(service.domestic, service.international);
                if service.is_multi_package_supported {
                    method.multi_package()
                } else {
                    method
                }
            })
            .collect();

        let mut carrier = Carrier::new(&account.carrier_id, &account.friendly_name, &account.carrier_code, methods);
        carrier.balance = match &account.balance {
            Some(balance) => {
                Some(Money::parse(&balance.to_string(), "USD").map_err(|e| parse_failure(e, request, response))?)
            }
            None => None,
        };
        carrier.data.insert("account_number".to_string(), json!(account.account_number));
        carrier.data.insert("nickname".to_string(), json!(account.nickname));
        carrier.data.insert("primary".to_string(), json!(account.primary));
        carriers.push(carrier);
    }

    Ok(ApiResult::new(carriers, request, response))
}

fn rate(estimate: &RateEstimate) -> Result<Rate, ApiError> {
    let mut amounts = BTreeMap::new();
    for (name, value) in [
        ("shipping", &estimate.shipping_amount),
        ("insurance", &estimate.insurance_amount),
        ("confirmation", &estimate.confirmation_amount),
        ("other", &estimate.other_amount),
    ] {
        if let Some(value) = value {
            amounts.insert(name.to_string(), money(value)?);
        }
    }

    let shipping_method = find_by_service_code(&SHIPPING_METHODS, &estimate.service_code)
        .cloned()
        .unwrap_or_else(|| {
            ShippingMethod::new(
                estimate.service_type.as_deref().unwrap_or(&estimate.service_code),
                &estimate.service_code,
            )
        });

    let mut data = DataBag::new();
    data.insert("carrier_id".to_string(), json!(estimate.carrier_id));
    data.insert("carrier_code".to_string(), json!(estimate.carrier_code));
    data.insert("delivery_days".to_string(), json!(estimate.delivery_days));
    data.insert("guaranteed_service".to_string(), json!(estimate.guaranteed_service));
    data.insert("zone".to_string(), json!(estimate.zone));
    data.insert("package_type".to_string(), json!(estimate.package_type));

    Ok(Rate {
        remote_service_id: estimate.rate_id.clone(),
        delivery_date: estimate.estimated_delivery_date.as_deref().map(delivery_date).transpose()?,
        warnings: estimate.warning_messages.clone(),
        errors: estimate.error_messages.clone(),
        data,
        ..Rate::new(shipping_method, amounts)
    })
}

/// One rate per estimate; unknown service codes get an ad-hoc shipping method
pub fn parse_rate_estimates(request: &Request, response: &Response) -> CarrierResult<Vec<Rate>> {
    let estimates: Vec<RateEstimate> = decode(request, response)?;

    let rates = estimates
        .iter()
        .map(rate)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_failure(e, request, response))?;

    tracing::info!(carrier = "ship_engine", rates = rates.len(), "Parsed rate estimates");
    Ok(ApiResult::new(rates, request, response))
}

fn label_document(
    label: &LabelResponse,
    download_type: LabelDownloadType,
) -> Result<Option<ShippingDocument>, ApiError> {
    let Some(href) = label.label_download.href.as_deref() else {
        return Ok(None);
    };
    let format = DocumentFormat::from_code(label.label_format.as_deref().unwrap_or("pdf"));

    let document = match download_type {
        LabelDownloadType::Inline => ShippingDocument::inline(DocumentType::Label, format, BASE64.decode(href.trim())?),
        LabelDownloadType::Url => ShippingDocument::remote(DocumentType::Label, format, href.to_string()),
    };

    Ok(Some(match &label.tracking_number {
        Some(tracking) => document.with_reference(tracking),
        None => document,
    }))
}

/// Purchased label; inline downloads arrive base64-encoded in `href`
pub fn parse_label(
    request: &Request,
    response: &Response,
    download_type: LabelDownloadType,
) -> CarrierResult<ShipmentInformation> {
    let label: LabelResponse = decode(request, response)?;

    let costs = [&label.shipment_cost, &label.insurance_cost]
        .into_iter()
        .flatten()
        .map(money)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_failure(e, request, response))?;

    let documents = label_document(&label, download_type)
        .map_err(|e| parse_failure(e, request, response))?
        .into_iter()
        .collect();

    let mut data = DataBag::new();
    data.insert("label_id".to_string(), json!(label.label_id));
    data.insert("shipment_id".to_string(), json!(label.shipment_id));
    data.insert("status".to_string(), json!(label.status));

    let information = ShipmentInformation {
        tracking_number: label.tracking_number,
        cost: Money::sum(&costs),
        documents,
        data,
        ..Default::default()
    };

    tracing::info!(carrier = "ship_engine", tracking_number = ?information.tracking_number, "Created label");
    Ok(ApiResult::new(information, request, response))
}

/// Carrier's void message; an unapproved void is a carrier error
pub fn parse_void_label(request: &Request, response: &Response) -> CarrierResult<String> {
    let parsed: VoidLabelResponse = decode(request, response)?;
    if !parsed.approved {
        return Err(parse_failure(ApiError::Carrier(parsed.message), request, response));
    }
    Ok(ApiResult::new(parsed.message, request, response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_error_message_joins_errors() {
        let body = r#"{"request_id":"a1","errors":[
            {"error_source":"shipengine","error_type":"validation","error_code":"invalid_field_value","message":"Invalid carrier_id"},
            {"error_source":"shipengine","error_type":"validation","error_code":"field_value_required","message":"to_postal_code is required"}
        ]}"#;
        assert_eq!(
            error_message(&Response::new(400, body)).as_deref(),
            Some("Invalid carrier_id, to_postal_code is required")
        );
        assert_eq!(error_message(&Response::new(500, r#"{"errors":[]}"#)), None);
    }

    #[test]
    fn test_void_not_approved() {
        let request = Request::put("https://api.shipengine.com/v1/labels/se-1/void", "");
        let response = Response::new(200, r#"{"approved":false,"message":"Label already voided"}"#);

        let failure = parse_void_label(&request, &response).unwrap_err();
        assert_eq!(failure.error.message(), "Label already voided");
    }

    #[test]
    fn test_money_uppercases_currency() {
        let value = MonetaryValue {
            currency: "usd".to_string(),
            amount: serde_json::Number::from_f64(9.37).unwrap(),
        };
        assert_eq!(money(&value).unwrap(), Money::from_cents(937, "USD"));
    }

    #[test]
    fn test_money_from_exponent_amount() {
        let value: MonetaryValue = serde_json::from_str(r#"{"currency":"usd","amount":1e-7}"#).unwrap();
        assert_eq!(money(&value).unwrap(), Money::new(Decimal::new(1, 7), "USD"));
    }
}
