//! # Country Master Data
//!
//! The country record that anchors a statutory pack: currency presentation,
//! locale, timezone, and the data-residency flag that downstream deployment
//! tooling consults. The engine itself only keys on [`CountryCode`]; the
//! rest is carried for the host application.

use serde::{Deserialize, Serialize};

use crate::identity::CountryCode;

/// Country master data for one statutory jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: CountryCode,
    /// English name.
    pub name_en: String,
    /// Local-language name, if distinct.
    #[serde(default)]
    pub name_local: Option<String>,
    /// ISO 4217 currency code (e.g., `MYR`, `SGD`).
    pub currency_code: String,
    /// Currency symbol for display (e.g., `RM`, `S$`).
    #[serde(default)]
    pub currency_symbol: String,
    /// Decimal places of the currency (0 for IDR/VND-style display).
    #[serde(default = "default_currency_decimals")]
    pub currency_decimal_places: u32,
    /// Default locale tag for localized scheme names.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// IANA timezone of the jurisdiction (informational; the engine works
    /// in civil dates and never converts).
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Whether payroll data for this country must stay in-country.
    #[serde(default)]
    pub data_residency_required: bool,
}

fn default_currency_decimals() -> u32 {
    2
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}
