//! # Country Packs
//!
//! A country pack is the unit of reference-data delivery: one document per
//! jurisdiction holding the country record, its scheme catalog, and every
//! rate tier, ceiling, and table bracket — including rows whose effective
//! windows start years in the future. Packs are authored and versioned by
//! the compliance team as YAML (JSON is accepted for generated artifacts).
//!
//! ## Validation
//!
//! `CountryPack::validate` runs on every ingest path. A pack that fails
//! any structural rule is rejected whole; partial loads would leave the
//! store in a state where per-scheme omission (a runtime policy) is
//! indistinguishable from a broken deployment (a build problem).

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontrib_core::Country;

use crate::bracket::TableLookupBracket;
use crate::ceiling::StatutoryCeiling;
use crate::error::RefDataError;
use crate::rate::{RateBasis, StatutoryRate};
use crate::scheme::StatutoryScheme;

/// One jurisdiction's complete statutory reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryPack {
    /// Country master data.
    pub country: Country,
    /// Scheme catalog.
    pub schemes: Vec<StatutoryScheme>,
    /// Rate tiers across all schemes in the pack.
    #[serde(default)]
    pub rates: Vec<StatutoryRate>,
    /// Wage ceilings across all schemes in the pack.
    #[serde(default)]
    pub ceilings: Vec<StatutoryCeiling>,
    /// Table-lookup brackets across all schemes in the pack.
    #[serde(default)]
    pub brackets: Vec<TableLookupBracket>,
}

impl CountryPack {
    /// Parse and validate a pack from YAML.
    ///
    /// `label` names the document in diagnostics (a path or logical name).
    pub fn from_yaml_str(label: &str, s: &str) -> Result<Self, RefDataError> {
        let pack: Self = serde_yaml::from_str(s).map_err(|e| RefDataError::Parse {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        pack.validate()?;
        Ok(pack)
    }

    /// Parse and validate a pack from JSON.
    pub fn from_json_str(label: &str, s: &str) -> Result<Self, RefDataError> {
        let pack: Self = serde_json::from_str(s).map_err(|e| RefDataError::Parse {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        pack.validate()?;
        Ok(pack)
    }

    /// Load and validate a pack file, dispatching on extension.
    pub fn load_path(path: &Path) -> Result<Self, RefDataError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| RefDataError::Io {
            path: display.clone(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&display, &contents),
            Some("json") => Self::from_json_str(&display, &contents),
            _ => Err(RefDataError::UnsupportedExtension { path: display }),
        }
    }

    /// Check every structural invariant the engine relies on.
    pub fn validate(&self) -> Result<(), RefDataError> {
        let mut seen_ids = std::collections::HashSet::new();
        let mut seen_codes = std::collections::HashSet::new();

        for scheme in &self.schemes {
            if scheme.country != self.country.code {
                return Err(RefDataError::InvalidScheme {
                    code: scheme.code.clone(),
                    message: format!(
                        "scheme country {} does not match pack country {}",
                        scheme.country, self.country.code
                    ),
                });
            }
            if !scheme.window.is_valid() {
                return Err(RefDataError::InvalidScheme {
                    code: scheme.code.clone(),
                    message: "effective window runs backwards".to_string(),
                });
            }
            if !seen_ids.insert(scheme.id) {
                return Err(RefDataError::DuplicateSchemeId {
                    id: scheme.id,
                    country: self.country.code.clone(),
                });
            }
            if !seen_codes.insert(scheme.code.clone()) {
                return Err(RefDataError::InvalidScheme {
                    code: scheme.code.clone(),
                    message: "duplicate scheme code".to_string(),
                });
            }
        }

        for rate in &self.rates {
            if !seen_ids.contains(&rate.scheme_id) {
                return Err(RefDataError::UnknownScheme {
                    row: format!("rate {}", rate.id),
                    scheme_id: rate.scheme_id,
                });
            }
            validate_rate(rate)?;
        }

        for ceiling in &self.ceilings {
            if !seen_ids.contains(&ceiling.scheme_id) {
                return Err(RefDataError::UnknownScheme {
                    row: "ceiling".to_string(),
                    scheme_id: ceiling.scheme_id,
                });
            }
            validate_ceiling(ceiling)?;
        }

        for bracket in &self.brackets {
            if !seen_ids.contains(&bracket.scheme_id) {
                return Err(RefDataError::UnknownScheme {
                    row: "bracket".to_string(),
                    scheme_id: bracket.scheme_id,
                });
            }
            validate_bracket(bracket)?;
        }

        Ok(())
    }
}

fn validate_basis(rate: &StatutoryRate, side: &str, basis: &RateBasis) -> Result<(), RefDataError> {
    match basis {
        RateBasis::Percentage(p) => {
            if *p < Decimal::ZERO || *p > Decimal::ONE {
                return Err(RefDataError::InvalidRate {
                    id: rate.id,
                    message: format!(
                        "{side} percentage {p} outside [0, 1]; rates are fractions, not percent points"
                    ),
                });
            }
        }
        RateBasis::Fixed(f) => {
            if *f < Decimal::ZERO {
                return Err(RefDataError::InvalidRate {
                    id: rate.id,
                    message: format!("{side} fixed amount {f} is negative"),
                });
            }
        }
    }
    Ok(())
}

fn validate_rate(rate: &StatutoryRate) -> Result<(), RefDataError> {
    if !rate.window.is_valid() {
        return Err(RefDataError::InvalidRate {
            id: rate.id,
            message: "effective window runs backwards".to_string(),
        });
    }
    if let (Some(min), Some(max)) = (rate.min_age, rate.max_age) {
        if min > max {
            return Err(RefDataError::InvalidRate {
                id: rate.id,
                message: format!("age range [{min}, {max}] runs backwards"),
            });
        }
    }
    if let Some(min) = rate.min_salary {
        if min < Decimal::ZERO {
            return Err(RefDataError::InvalidRate {
                id: rate.id,
                message: format!("min_salary {min} is negative"),
            });
        }
    }
    if let (Some(min), Some(max)) = (rate.min_salary, rate.max_salary) {
        if min > max {
            return Err(RefDataError::InvalidRate {
                id: rate.id,
                message: format!("salary range [{min}, {max}] runs backwards"),
            });
        }
    }
    if let (Some(min), Some(max)) = (rate.employee_count_min, rate.employee_count_max) {
        if min > max {
            return Err(RefDataError::InvalidRate {
                id: rate.id,
                message: format!("employee count range [{min}, {max}] runs backwards"),
            });
        }
    }
    if let Some(basis) = &rate.employee {
        validate_basis(rate, "employee", basis)?;
    }
    if let Some(basis) = &rate.employer {
        validate_basis(rate, "employer", basis)?;
    }
    Ok(())
}

fn validate_ceiling(ceiling: &StatutoryCeiling) -> Result<(), RefDataError> {
    if !ceiling.window.is_valid() {
        return Err(RefDataError::InvalidCeiling {
            scheme_id: ceiling.scheme_id,
            message: "effective window runs backwards".to_string(),
        });
    }
    if ceiling.ceiling_amount < Decimal::ZERO {
        return Err(RefDataError::InvalidCeiling {
            scheme_id: ceiling.scheme_id,
            message: format!("ceiling amount {} is negative", ceiling.ceiling_amount),
        });
    }
    if let Some(min) = ceiling.min_amount {
        if min < Decimal::ZERO {
            return Err(RefDataError::InvalidCeiling {
                scheme_id: ceiling.scheme_id,
                message: format!("min amount {min} is negative"),
            });
        }
    }
    Ok(())
}

fn validate_bracket(bracket: &TableLookupBracket) -> Result<(), RefDataError> {
    if !bracket.window.is_valid() {
        return Err(RefDataError::InvalidBracket {
            scheme_id: bracket.scheme_id,
            message: "effective window runs backwards".to_string(),
        });
    }
    if bracket.wage_from < Decimal::ZERO {
        return Err(RefDataError::InvalidBracket {
            scheme_id: bracket.scheme_id,
            message: format!("wage_from {} is negative", bracket.wage_from),
        });
    }
    if bracket.wage_from > bracket.wage_to {
        return Err(RefDataError::InvalidBracket {
            scheme_id: bracket.scheme_id,
            message: format!(
                "wage band [{}, {}] runs backwards",
                bracket.wage_from, bracket.wage_to
            ),
        });
    }
    if bracket.employee_amount < Decimal::ZERO || bracket.employer_amount < Decimal::ZERO {
        return Err(RefDataError::InvalidBracket {
            scheme_id: bracket.scheme_id,
            message: "contribution amounts must be non-negative".to_string(),
        });
    }
    Ok(())
}
