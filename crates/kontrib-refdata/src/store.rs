//! # Reference Store
//!
//! The read-only access boundary between reference data and the engine.
//! [`ReferenceStore`] is the seam a host application implements over its
//! own storage; [`InMemoryStore`] is the canonical implementation, indexed
//! from validated country packs.
//!
//! ## Consistency Contract
//!
//! An implementation must answer every query issued during one employee
//! calculation from a single consistent snapshot of the reference data.
//! Otherwise a compliance update committed mid-calculation could split one
//! contribution across two rate versions. `InMemoryStore` is immutable
//! after construction, so it satisfies the contract trivially; a
//! database-backed implementation should hold one repeatable-read
//! transaction per calculation.

use std::collections::HashMap;

use kontrib_core::{Country, CountryCode, SchemeId};

use crate::bracket::TableLookupBracket;
use crate::ceiling::StatutoryCeiling;
use crate::error::RefDataError;
use crate::pack::CountryPack;
use crate::rate::StatutoryRate;
use crate::scheme::StatutoryScheme;

/// Read-only access to statutory reference data.
///
/// All queries return unfiltered rows; date-window and predicate filtering
/// belong to the engine's resolvers, which take an explicit calculation
/// date. The store never interprets "now".
pub trait ReferenceStore {
    /// Country master data, if the country is configured.
    fn country(&self, code: &CountryCode) -> Option<&Country>;

    /// All catalog rows for a country, in pack order. Empty for an
    /// unconfigured country — not an error.
    fn schemes_for_country(&self, code: &CountryCode) -> &[StatutoryScheme];

    /// All rate tiers for a scheme, including scheduled future rows.
    fn rates_for_scheme(&self, scheme_id: SchemeId) -> &[StatutoryRate];

    /// All ceiling rows for a scheme.
    fn ceilings_for_scheme(&self, scheme_id: SchemeId) -> &[StatutoryCeiling];

    /// All table brackets for a scheme.
    fn brackets_for_scheme(&self, scheme_id: SchemeId) -> &[TableLookupBracket];
}

/// Immutable in-memory reference store indexed from country packs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    countries: HashMap<CountryCode, Country>,
    schemes: HashMap<CountryCode, Vec<StatutoryScheme>>,
    rates: HashMap<SchemeId, Vec<StatutoryRate>>,
    ceilings: HashMap<SchemeId, Vec<StatutoryCeiling>>,
    brackets: HashMap<SchemeId, Vec<TableLookupBracket>>,
}

impl InMemoryStore {
    /// Build a store from validated packs.
    ///
    /// Each pack is re-validated on ingest, so a store can only ever hold
    /// structurally sound rows. Scheme ids index rates, ceilings, and
    /// brackets store-wide, so they must be unique across packs, not just
    /// within one.
    ///
    /// # Errors
    ///
    /// Returns the first [`RefDataError`] found in any pack, or
    /// [`RefDataError::DuplicateSchemeId`] when two packs share a scheme id.
    pub fn from_packs(packs: Vec<CountryPack>) -> Result<Self, RefDataError> {
        let mut store = Self::default();
        let mut seen_ids = std::collections::HashSet::new();
        for pack in packs {
            pack.validate()?;
            let code = pack.country.code.clone();
            for scheme in &pack.schemes {
                if !seen_ids.insert(scheme.id) {
                    return Err(RefDataError::DuplicateSchemeId {
                        id: scheme.id,
                        country: code.clone(),
                    });
                }
            }
            store.countries.insert(code.clone(), pack.country);
            store
                .schemes
                .entry(code)
                .or_default()
                .extend(pack.schemes);
            for rate in pack.rates {
                store.rates.entry(rate.scheme_id).or_default().push(rate);
            }
            for ceiling in pack.ceilings {
                store
                    .ceilings
                    .entry(ceiling.scheme_id)
                    .or_default()
                    .push(ceiling);
            }
            for bracket in pack.brackets {
                store
                    .brackets
                    .entry(bracket.scheme_id)
                    .or_default()
                    .push(bracket);
            }
        }
        Ok(store)
    }

    /// Build a store from one pack.
    pub fn from_pack(pack: CountryPack) -> Result<Self, RefDataError> {
        Self::from_packs(vec![pack])
    }

    /// Countries configured in this store.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }
}

impl ReferenceStore for InMemoryStore {
    fn country(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.get(code)
    }

    fn schemes_for_country(&self, code: &CountryCode) -> &[StatutoryScheme] {
        self.schemes.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    fn rates_for_scheme(&self, scheme_id: SchemeId) -> &[StatutoryRate] {
        self.rates.get(&scheme_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn ceilings_for_scheme(&self, scheme_id: SchemeId) -> &[StatutoryCeiling] {
        self.ceilings
            .get(&scheme_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn brackets_for_scheme(&self, scheme_id: SchemeId) -> &[TableLookupBracket] {
        self.brackets
            .get(&scheme_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_yaml() -> &'static str {
        r#"
country:
  code: TH
  name_en: Thailand
  currency_code: THB
schemes:
  - id: 1
    country: TH
    code: SSO
    name_en: Social Security Office
    scheme_type: SOCIAL_SECURITY
    calculation_method: PERCENTAGE
    effective_from: 2020-01-01
rates:
  - id: 10
    scheme_id: 1
    tier_code: DEFAULT
    employee:
      percentage: "0.05"
    employer:
      percentage: "0.05"
    effective_from: 2020-01-01
ceilings:
  - scheme_id: 1
    ceiling_amount: "15000.00"
    effective_from: 2020-01-01
"#
    }

    #[test]
    fn test_store_indexes_pack_rows() {
        let pack = CountryPack::from_yaml_str("th.yaml", pack_yaml()).unwrap();
        let store = InMemoryStore::from_pack(pack).unwrap();

        let th = CountryCode::new("TH").unwrap();
        assert!(store.country(&th).is_some());
        assert_eq!(store.schemes_for_country(&th).len(), 1);
        assert_eq!(store.rates_for_scheme(SchemeId(1)).len(), 1);
        assert_eq!(store.ceilings_for_scheme(SchemeId(1)).len(), 1);
        assert!(store.brackets_for_scheme(SchemeId(1)).is_empty());
    }

    #[test]
    fn test_scheme_id_shared_across_packs_rejected() {
        let th = CountryPack::from_yaml_str("th.yaml", pack_yaml()).unwrap();
        let la_yaml = pack_yaml()
            .replace("THB", "LAK")
            .replace("code: TH", "code: LA")
            .replace("country: TH", "country: LA")
            .replace("Thailand", "Laos");
        let la = CountryPack::from_yaml_str("la.yaml", &la_yaml).unwrap();
        let err = InMemoryStore::from_packs(vec![th, la]).unwrap_err();
        assert!(matches!(err, RefDataError::DuplicateSchemeId { .. }));
    }

    #[test]
    fn test_unconfigured_country_yields_empty_not_error() {
        let store = InMemoryStore::default();
        let vn = CountryCode::new("VN").unwrap();
        assert!(store.country(&vn).is_none());
        assert!(store.schemes_for_country(&vn).is_empty());
        assert!(store.rates_for_scheme(SchemeId(42)).is_empty());
    }
}
