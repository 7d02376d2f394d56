//! Parsing of USPS `MailService` descriptions
//!
//! A postage entry reads like
//! `Priority Mail 2-Day&lt;sup&gt;&#8482;&lt;/sup&gt; Medium Flat Rate Box Hold For Pickup`.
//! Markup is stripped first; box names are then matched most specific first
//! so "Small Flat Rate Envelope" never reads as "Flat Rate Envelope".

use once_cell::sync::Lazy;
use regex::Regex;

use super::SHIPPING_METHODS;
use crate::domain::ShippingMethod;

static ESCAPED_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;\S*?&gt;|<[^>]*>|&#\d+;|&\w+;").expect("Failed to compile markup regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

static HOLD_FOR_PICKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bhold\s+for\s+pick\s*up\b").expect("Failed to compile hold-for-pickup regex"));

static DAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})-Day\b").expect("Failed to compile days regex"));

static MILITARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bmilitary\b").expect("Failed to compile military regex"));

/// Box patterns, most specific first
static BOX_PATTERNS: Lazy<Vec<(Regex, BoxName)>> = Lazy::new(|| {
    [
        (r"(?i)\blegal\s+flat\s+rate\s+envelope\b", BoxName::LegalFlatRateEnvelope),
        (r"(?i)\bpadded\s+flat\s+rate\s+envelope\b", BoxName::PaddedFlatRateEnvelope),
        (r"(?i)\bgift\s+card\s+flat\s+rate\s+envelope\b", BoxName::GiftCardFlatRateEnvelope),
        (r"(?i)\bwindow\s+flat\s+rate\s+envelope\b", BoxName::WindowFlatRateEnvelope),
        (r"(?i)\bsmall\s+flat\s+rate\s+envelope\b", BoxName::SmallFlatRateEnvelope),
        (r"(?i)\bflat\s+rate\s+envelope\b", BoxName::FlatRateEnvelope),
        (r"(?i)\blarge\s+flat\s+rate\s+box\b", BoxName::LargeFlatRateBox),
        (r"(?i)\bmedium\s+flat\s+rate\s+box\b", BoxName::MediumFlatRateBox),
        (r"(?i)\bsmall\s+flat\s+rate\s+box\b", BoxName::SmallFlatRateBox),
        (r"(?i)\bregional\s+rate\s+box\s+a\b", BoxName::RegionalRateBoxA),
        (r"(?i)\bregional\s+rate\s+box\s+b\b", BoxName::RegionalRateBoxB),
    ]
    .into_iter()
    .map(|(pattern, name)| (Regex::new(pattern).expect("Failed to compile box regex"), name))
    .collect()
});

/// USPS container names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxName {
    #[default]
    Variable,
    Rectangular,
    Nonrectangular,
    FlatRateEnvelope,
    LegalFlatRateEnvelope,
    PaddedFlatRateEnvelope,
    GiftCardFlatRateEnvelope,
    SmallFlatRateEnvelope,
    WindowFlatRateEnvelope,
    SmallFlatRateBox,
    MediumFlatRateBox,
    LargeFlatRateBox,
    RegionalRateBoxA,
    RegionalRateBoxB,
}

impl BoxName {
    /// `Container` value in a RateV4 request
    pub fn container(&self) -> &'static str {
        match self {
            BoxName::Variable => "VARIABLE",
            BoxName::Rectangular => "RECTANGULAR",
            BoxName::Nonrectangular => "NONRECTANGULAR",
            BoxName::FlatRateEnvelope => "FLAT RATE ENVELOPE",
            BoxName::LegalFlatRateEnvelope => "LEGAL FLAT RATE ENVELOPE",
            BoxName::PaddedFlatRateEnvelope => "PADDED FLAT RATE ENVELOPE",
            BoxName::GiftCardFlatRateEnvelope => "GIFT CARD FLAT RATE ENVELOPE",
            BoxName::SmallFlatRateEnvelope => "SM FLAT RATE ENVELOPE",
            BoxName::WindowFlatRateEnvelope => "WINDOW FLAT RATE ENVELOPE",
            BoxName::SmallFlatRateBox => "SM FLAT RATE BOX",
            BoxName::MediumFlatRateBox => "MD FLAT RATE BOX",
            BoxName::LargeFlatRateBox => "LG FLAT RATE BOX",
            BoxName::RegionalRateBoxA => "REGIONALRATEBOXA",
            BoxName::RegionalRateBoxB => "REGIONALRATEBOXB",
        }
    }

    /// Postage for a variable-size container is not tied to a named box
    pub fn is_variable(&self) -> bool {
        matches!(self, BoxName::Variable | BoxName::Rectangular | BoxName::Nonrectangular)
    }

    /// Whether postage quoted for `other` applies to a package sent in `self`
    pub fn accepts(&self, other: BoxName) -> bool {
        if self.is_variable() {
            other.is_variable()
        } else {
            *self == other
        }
    }
}

/// Markup-free, whitespace-normalized service description
pub fn clean(text: &str) -> String {
    let stripped = ESCAPED_MARKUP.replace_all(text, " ");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

pub fn box_name(text: &str) -> Option<BoxName> {
    BOX_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, name)| *name)
}

pub fn hold_for_pickup(text: &str) -> bool {
    HOLD_FOR_PICKUP.is_match(text)
}

pub fn days_to_delivery(text: &str) -> Option<u32> {
    DAYS.captures(text).and_then(|c| c[1].parse().ok())
}

pub fn military(text: &str) -> bool {
    MILITARY.is_match(text)
}

/// Mail class whose name starts the description, longest name first
pub fn shipping_method(text: &str) -> Option<&'static ShippingMethod> {
    let lowered = text.to_lowercase();
    SHIPPING_METHODS
        .iter()
        .filter(|m| lowered.starts_with(&m.name.to_lowercase()))
        .max_by_key(|m| m.name.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPRESS: &str = "Priority Mail Express 1-Day&lt;sup&gt;&#8482;&lt;/sup&gt; Legal Flat Rate Envelope Hold For Pickup";

    #[test]
    fn test_clean_strips_escaped_markup() {
        assert_eq!(
            clean(EXPRESS),
            "Priority Mail Express 1-Day Legal Flat Rate Envelope Hold For Pickup"
        );
        assert_eq!(clean("Priority Mail 2-Day<sup>&#174;</sup>"), "Priority Mail 2-Day");
    }

    #[test]
    fn test_most_specific_box_wins() {
        assert_eq!(box_name(&clean(EXPRESS)), Some(BoxName::LegalFlatRateEnvelope));
        assert_eq!(box_name("Priority Mail 2-Day Flat Rate Envelope"), Some(BoxName::FlatRateEnvelope));
        assert_eq!(box_name("priority mail 2-day small flat rate box"), Some(BoxName::SmallFlatRateBox));
        assert_eq!(box_name("Priority Mail 2-Day"), None);
    }

    #[test]
    fn test_flags_and_days() {
        let text = clean(EXPRESS);
        assert!(hold_for_pickup(&text));
        assert_eq!(days_to_delivery(&text), Some(1));
        assert!(!military(&text));
        assert!(military("Priority Mail 2-Day Military"));
        assert_eq!(days_to_delivery("Media Mail Parcel"), None);
    }

    #[test]
    fn test_longest_method_name_matches() {
        assert_eq!(shipping_method(&clean(EXPRESS)).map(|m| m.service_code.as_str()), Some("priority_express"));
        assert_eq!(shipping_method("Priority Mail 3-Day").map(|m| m.service_code.as_str()), Some("priority"));
        assert_eq!(shipping_method("Bulk Parcel"), None);
    }

    #[test]
    fn test_variable_boxes_match_each_other() {
        assert!(BoxName::Variable.accepts(BoxName::Rectangular));
        assert!(!BoxName::Variable.accepts(BoxName::FlatRateEnvelope));
        assert!(BoxName::MediumFlatRateBox.accepts(BoxName::MediumFlatRateBox));
    }
}
