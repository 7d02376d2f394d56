//! Domain types and models

pub mod carrier;
pub mod money;
pub mod rate;
pub mod shipment;
pub mod shipment_information;
pub mod units;

pub use carrier::{Carrier, ShippingMethod};
pub use money::{Money, MoneyError};
pub use rate::{DataBag, Rate, Timing};
pub use shipment::{AddressType, Item, Location, Package, Shipment, Structure};
pub use shipment_information::{DocumentFormat, DocumentType, ShipmentInformation, ShippingDocument};
pub use units::{Dimensions, Length, LengthUnit, Weight, WeightUnit};
