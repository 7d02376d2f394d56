//! USPS response to domain model mapping
//!
//! Two postage parsers live side by side. [`parse_rate`] is the original
//! reading of a postage entry and leaves the box unset when the text names
//! none; [`parse_package_rate`] is the one rate responses go through today
//! and treats an unnamed box as a variable-size container.

use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::BTreeMap;

use super::mail_service::{self, BoxName};
use super::models::*;
use crate::carriers::http_client::{Request, Response};
use crate::carriers::payload::root_element;
use crate::carriers::traits::{parse_failure, ApiError, ApiFailure, ApiResult, CarrierResult};
use crate::domain::{Money, Rate, ShippingMethod};

const CURRENCY: &str = "USD";

/// One postage offer read from its `MailService` text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPostage {
    /// Markup-free service description
    pub service: String,
    pub shipping_method: Option<ShippingMethod>,
    pub box_name: Option<BoxName>,
    pub hold_for_pickup: bool,
    pub days_to_delivery: Option<u32>,
    pub military: bool,
    pub class_id: Option<String>,
    pub amount: Money,
}

/// Description of a USPS `<Error>` document
pub fn error_message(response: &Response) -> Option<String> {
    quick_xml::de::from_str::<UspsError>(&response.body)
        .ok()
        .map(|e| e.description.trim().to_string())
}

fn decode<T: DeserializeOwned>(request: &Request, response: &Response) -> Result<T, ApiFailure> {
    quick_xml::de::from_str(&response.body).map_err(|e| parse_failure(e, request, response))
}

/// Legacy postage parser; the box stays `None` unless the text names one
pub fn parse_rate(postage: &Postage) -> Result<ParsedPostage, ApiError> {
    let service = mail_service::clean(&postage.mail_service);

    Ok(ParsedPostage {
        shipping_method: mail_service::shipping_method(&service).cloned(),
        box_name: mail_service::box_name(&service),
        hold_for_pickup: mail_service::hold_for_pickup(&service),
        days_to_delivery: mail_service::days_to_delivery(&service),
        military: mail_service::military(&service),
        class_id: postage.class_id.clone(),
        amount: Money::parse(&postage.rate, CURRENCY)?,
        service,
    })
}

/// Current postage parser; commercial pricing wins and an unnamed box is variable
pub fn parse_package_rate(postage: &Postage) -> Result<ParsedPostage, ApiError> {
    let service = mail_service::clean(&postage.mail_service);
    let price = postage
        .commercial_rate
        .as_deref()
        .map(str::trim)
        .filter(|rate| !rate.is_empty())
        .unwrap_or(&postage.rate);

    Ok(ParsedPostage {
        shipping_method: mail_service::shipping_method(&service).cloned(),
        box_name: Some(mail_service::box_name(&service).unwrap_or(BoxName::Variable)),
        hold_for_pickup: mail_service::hold_for_pickup(&service),
        days_to_delivery: mail_service::days_to_delivery(&service),
        military: mail_service::military(&service),
        class_id: postage.class_id.clone(),
        amount: Money::parse(price, CURRENCY)?,
        service,
    })
}

fn method_code(postage: &ParsedPostage) -> Option<&str> {
    postage.shipping_method.as_ref().map(|m| m.service_code.as_str())
}

/// Offers matching the requested box and pickup flag, one per shipping method
fn select_postage(
    package: &PackageResponse,
    requested: BoxName,
    hold_for_pickup: bool,
) -> Result<Vec<ParsedPostage>, ApiError> {
    let mut selected: Vec<ParsedPostage> = Vec::new();

    for postage in &package.postage {
        let parsed = parse_package_rate(postage)?;
        let Some(code) = method_code(&parsed) else {
            continue;
        };
        if parsed.hold_for_pickup != hold_for_pickup || !requested.accepts(parsed.box_name.unwrap_or_default()) {
            continue;
        }
        if selected.iter().any(|s| method_code(s) == Some(code)) {
            continue;
        }
        selected.push(parsed);
    }

    Ok(selected)
}

/// Rates offered for every package, with amounts keyed by package id
///
/// `requested` maps package ids to the box each package ships in; packages
/// missing from it are treated as variable-size.
pub fn parse_rate_response(
    request: &Request,
    response: &Response,
    requested: &[(String, BoxName)],
    hold_for_pickup: bool,
) -> CarrierResult<Vec<Rate>> {
    if root_element(&response.body).as_deref() == Some("Error") {
        let error: UspsError = decode(request, response)?;
        return Err(parse_failure(
            ApiError::Carrier(error.description.trim().to_string()),
            request,
            response,
        ));
    }

    let parsed: RateV4Response = decode(request, response)?;
    if let Some(error) = parsed.package.iter().find_map(|p| p.error.as_ref()) {
        return Err(parse_failure(
            ApiError::Carrier(error.description.trim().to_string()),
            request,
            response,
        ));
    }

    let mut per_package = Vec::with_capacity(parsed.package.len());
    for package in &parsed.package {
        let wanted = requested
            .iter()
            .find(|(id, _)| *id == package.id)
            .map(|(_, box_name)| *box_name)
            .unwrap_or_default();
        let selected =
            select_postage(package, wanted, hold_for_pickup).map_err(|e| parse_failure(e, request, response))?;
        per_package.push((package.id.as_str(), selected));
    }

    let Some((_, first)) = per_package.first() else {
        return Ok(ApiResult::new(Vec::new(), request, response));
    };

    let mut rates = Vec::new();
    for candidate in first {
        let (Some(method), Some(code)) = (&candidate.shipping_method, method_code(candidate)) else {
            continue;
        };

        let amounts: Option<BTreeMap<String, Money>> = per_package
            .iter()
            .map(|(id, selected)| {
                selected
                    .iter()
                    .find(|p| method_code(p) == Some(code))
                    .map(|p| (id.to_string(), p.amount.clone()))
            })
            .collect();

        let Some(amounts) = amounts else {
            continue;
        };

        let mut rate = Rate::new(method.clone(), amounts);
        rate.data.insert("mail_service".to_string(), json!(candidate.service));
        rate.data.insert("military".to_string(), json!(candidate.military));
        if let Some(days) = candidate.days_to_delivery {
            rate.data.insert("days_to_delivery".to_string(), json!(days));
        }
        if let Some(class_id) = &candidate.class_id {
            rate.data.insert("class_id".to_string(), json!(class_id));
        }
        rates.push(rate);
    }

    tracing::info!(carrier = "usps", rates = rates.len(), packages = per_package.len(), "Parsed rate response");
    Ok(ApiResult::new(rates, request, response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postage(mail_service: &str, rate: &str) -> Postage {
        Postage {
            class_id: Some("1".to_string()),
            mail_service: mail_service.to_string(),
            rate: rate.to_string(),
            commercial_rate: None,
        }
    }

    #[test]
    fn test_parsers_differ_on_unnamed_box() {
        let plain = postage("Priority Mail 2-Day&lt;sup&gt;&#8482;&lt;/sup&gt;", "7.50");

        let legacy = parse_rate(&plain).unwrap();
        let current = parse_package_rate(&plain).unwrap();

        assert_eq!(legacy.box_name, None);
        assert_eq!(current.box_name, Some(BoxName::Variable));
        assert_eq!(legacy.service, "Priority Mail 2-Day");
        assert_eq!(current.days_to_delivery, Some(2));
        assert_eq!(current.amount, Money::from_cents(750, "USD"));
    }

    #[test]
    fn test_commercial_rate_preferred() {
        let mut offer = postage("Priority Mail 2-Day Medium Flat Rate Box", "15.05");
        offer.commercial_rate = Some("13.75".to_string());

        assert_eq!(parse_package_rate(&offer).unwrap().amount, Money::from_cents(1375, "USD"));
        assert_eq!(parse_rate(&offer).unwrap().amount, Money::from_cents(1505, "USD"));
        assert_eq!(parse_rate(&offer).unwrap().box_name, Some(BoxName::MediumFlatRateBox));
    }

    #[test]
    fn test_unparseable_rate() {
        assert!(matches!(
            parse_package_rate(&postage("Media Mail Parcel", "n/a")),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn test_root_error_document() {
        let body = "<?xml version=\"1.0\"?><Error><Number>80040B1A</Number>\
                    <Description>Authorization failure.  Perhaps username and/or password is incorrect.</Description>\
                    <Source>USPSCOM::DoAuth</Source></Error>";
        let request = Request::get("https://secure.shippingapis.com/ShippingAPI.dll");

        let failure = parse_rate_response(&request, &Response::new(200, body), &[], false).unwrap_err();
        assert_eq!(
            failure.error.message(),
            "Authorization failure.  Perhaps username and/or password is incorrect."
        );
        assert_eq!(
            error_message(&Response::new(200, body)).as_deref(),
            Some("Authorization failure.  Perhaps username and/or password is incorrect.")
        );
    }
}
