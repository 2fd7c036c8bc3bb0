/*
[INPUT]:  SWSIM schema value sets
[OUTPUT]: Typed Rust enums with fixed wire literals
[POS]:    Data layer - enumerated values for API communication
[UPDATE]: When the remote schema adds values
*/

use serde::{Deserialize, Serialize};

/// Carrier selector passed alongside a rate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Carrier {
    Usps,
    Ups,
    Fedex,
    Dhl,
}

impl Carrier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Carrier::Usps => "USPS",
            Carrier::Ups => "UPS",
            Carrier::Fedex => "FedEx",
            Carrier::Dhl => "DHL",
        }
    }
}

/// Label image format for indicium, reprint and manifest output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Auto,
    Epl,
    Gif,
    Jpg,
    Pdf,
    Png,
    Zpl,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Auto => "Auto",
            ImageType::Epl => "Epl",
            ImageType::Gif => "Gif",
            ImageType::Jpg => "Jpg",
            ImageType::Pdf => "Pdf",
            ImageType::Png => "Png",
            ImageType::Zpl => "Zpl",
        }
    }
}

/// End-of-day manifest variant. The service defaults to a SCAN form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifestType {
    ScanForm,
    All,
}

impl ManifestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestType::ScanForm => "ScanForm",
            ManifestType::All => "All",
        }
    }
}

/// Package classification used when rating a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageType {
    Postcard,
    Letter,
    LargeEnvelopeOrFlat,
    ThickEnvelope,
    Package,
    FlatRateBox,
    SmallFlatRateBox,
    LargeFlatRateBox,
    FlatRateEnvelope,
    FlatRatePaddedEnvelope,
    LargePackage,
    OversizedPackage,
    RegionalRateBoxA,
    RegionalRateBoxB,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Postcard => "Postcard",
            PackageType::Letter => "Letter",
            PackageType::LargeEnvelopeOrFlat => "Large Envelope or Flat",
            PackageType::ThickEnvelope => "Thick Envelope",
            PackageType::Package => "Package",
            PackageType::FlatRateBox => "Flat Rate Box",
            PackageType::SmallFlatRateBox => "Small Flat Rate Box",
            PackageType::LargeFlatRateBox => "Large Flat Rate Box",
            PackageType::FlatRateEnvelope => "Flat Rate Envelope",
            PackageType::FlatRatePaddedEnvelope => "Flat Rate Padded Envelope",
            PackageType::LargePackage => "Large Package",
            PackageType::OversizedPackage => "Oversized Package",
            PackageType::RegionalRateBoxA => "Regional Rate Box A",
            PackageType::RegionalRateBoxB => "Regional Rate Box B",
        }
    }
}

/// Customs declaration content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    CommercialSample,
    Gift,
    Merchandise,
    Document,
    ReturnedGoods,
    HumanitarianDonation,
    Other,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::CommercialSample => "Commercial Sample",
            ContentType::Gift => "Gift",
            ContentType::Merchandise => "Merchandise",
            ContentType::Document => "Document",
            ContentType::ReturnedGoods => "Returned Goods",
            ContentType::HumanitarianDonation => "Humanitarian Donation",
            ContentType::Other => "Other",
        }
    }
}

/// Disposition for international mail that cannot be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonDeliveryOption {
    Undefined,
    Return,
    Abandon,
}

impl NonDeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonDeliveryOption::Undefined => "Undefined",
            NonDeliveryOption::Return => "Return",
            NonDeliveryOption::Abandon => "Abandon",
        }
    }
}

/// Paper size for multi-label sheet printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    Default,
    Letter,
    LabelSize,
}

impl PaperSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperSize::Default => "Default",
            PaperSize::Letter => "Letter",
            PaperSize::LabelSize => "LabelSize",
        }
    }
}
