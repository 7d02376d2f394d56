//! Results of label, BOL and load creation calls

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::rate::DataBag;

/// Kind of printable document returned by a carrier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Label,
    BillOfLading,
    Other(String),
}

/// File format of a shipping document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Png,
    Gif,
    Zpl,
    Other(String),
}

impl DocumentFormat {
    /// Parse a carrier's format code, case-insensitive
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "png" => DocumentFormat::Png,
            "gif" => DocumentFormat::Gif,
            "zpl" => DocumentFormat::Zpl,
            _ => DocumentFormat::Other(code.to_string()),
        }
    }
}

/// A label or freight document, either inline bytes or a download URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingDocument {
    pub document_type: DocumentType,
    pub format: DocumentFormat,
    #[serde(skip)]
    pub binary: Option<Bytes>,
    pub url: Option<String>,
    /// Tracking or PRO number this document belongs to
    pub reference: Option<String>,
}

impl ShippingDocument {
    pub fn inline(document_type: DocumentType, format: DocumentFormat, binary: Vec<u8>) -> Self {
        ShippingDocument {
            document_type,
            format,
            binary: Some(Bytes::from(binary)),
            url: None,
            reference: None,
        }
    }

    pub fn remote(document_type: DocumentType, format: DocumentFormat, url: String) -> Self {
        ShippingDocument {
            document_type,
            format,
            binary: None,
            url: Some(url),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Identifiers and documents for a booked shipment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipmentInformation {
    pub tracking_number: Option<String>,
    pub pro_number: Option<String>,
    pub bol_number: Option<String>,
    pub pickup_number: Option<String>,
    pub load_id: Option<String>,
    pub cost: Option<Money>,
    pub documents: Vec<ShippingDocument>,
    pub data: DataBag,
}
