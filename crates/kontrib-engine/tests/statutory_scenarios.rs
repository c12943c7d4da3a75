//! End-to-end calculations against realistic country packs.
//!
//! Each fixture pack is a trimmed version of a production jurisdiction
//! document: Malaysian EPF tiers with SOCSO's lookup table and the EIS
//! wage ceiling, Singapore CPF with the ordinary-wage ceiling staircase
//! and graduated PR tiers, Indonesian BPJS work-injury risk classes,
//! Thai SSO capping, and the Cambodian NSSF pension phase-in.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use kontrib_core::{CountryCode, Nationality, RiskCategory};
use kontrib_engine::{ContributionEngine, EmployeeContext};
use kontrib_refdata::{upcoming_rate_changes, CountryPack, InMemoryStore};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn country(code: &str) -> CountryCode {
    CountryCode::new(code).unwrap()
}

const MALAYSIA_PACK: &str = r#"
country:
  code: MY
  name_en: Malaysia
  currency_code: MYR
schemes:
  - id: 1
    country: MY
    code: EPF
    name_en: Employees Provident Fund
    authority: KWSP
    scheme_type: RETIREMENT
    calculation_method: TIERED_PERCENTAGE
    rounding:
      method: NEAREST_WHOLE_UNIT
    sort_order: 10
    effective_from: 2012-01-01
  - id: 2
    country: MY
    code: SOCSO
    name_en: Social Security Organisation
    authority: PERKESO
    scheme_type: SOCIAL_SECURITY
    calculation_method: TABLE_LOOKUP
    sort_order: 20
    effective_from: 2012-01-01
  - id: 3
    country: MY
    code: EIS
    name_en: Employment Insurance System
    scheme_type: UNEMPLOYMENT
    calculation_method: PERCENTAGE
    sort_order: 30
    effective_from: 2018-01-01
  - id: 4
    country: MY
    code: HRDF
    name_en: Human Resources Development Fund
    scheme_type: LEVY
    calculation_method: TIERED_PERCENTAGE
    sort_order: 40
    effective_from: 2012-01-01
rates:
  - id: 100
    scheme_id: 1
    tier_code: UPTO_5000
    max_salary: "5000.00"
    employee:
      percentage: "0.11"
    employer:
      percentage: "0.13"
    effective_from: 2012-01-01
  - id: 101
    scheme_id: 1
    tier_code: ABOVE_5000
    min_salary: "5000.01"
    employee:
      percentage: "0.11"
    employer:
      percentage: "0.12"
    effective_from: 2012-01-01
  - id: 102
    scheme_id: 1
    tier_code: AGE_60_AND_ABOVE
    min_age: 60
    employee:
      percentage: "0.055"
    employer:
      percentage: "0.04"
    effective_from: 2012-01-01
  - id: 110
    scheme_id: 3
    tier_code: DEFAULT
    employee:
      percentage: "0.002"
    employer:
      percentage: "0.002"
    effective_from: 2018-01-01
  - id: 120
    scheme_id: 4
    tier_code: TEN_OR_MORE_EMPLOYEES
    employee_count_min: 10
    employer:
      percentage: "0.01"
    effective_from: 2012-01-01
ceilings:
  - scheme_id: 3
    ceiling_amount: "5000.00"
    effective_from: 2018-01-01
brackets:
  - scheme_id: 2
    wage_from: "4400.01"
    wage_to: "4500.00"
    employee_amount: "22.25"
    employer_amount: "77.85"
    effective_from: 2012-01-01
  - scheme_id: 2
    wage_from: "5900.01"
    wage_to: "6000.00"
    employee_amount: "29.75"
    employer_amount: "104.15"
    effective_from: 2012-01-01
"#;

const SINGAPORE_PACK: &str = r#"
country:
  code: SG
  name_en: Singapore
  currency_code: SGD
schemes:
  - id: 11
    country: SG
    code: CPF
    name_en: Central Provident Fund
    authority: CPFB
    scheme_type: RETIREMENT
    calculation_method: TIERED_PERCENTAGE
    calculation_base: ORDINARY_WAGES
    ceiling_type: ORDINARY_WAGE_MONTHLY
    sort_order: 10
    effective_from: 2016-01-01
rates:
  - id: 1100
    scheme_id: 11
    tier_code: CITIZEN_55_AND_BELOW
    nationality_condition: CITIZEN
    max_age: 55
    employee:
      percentage: "0.20"
    employer:
      percentage: "0.17"
    effective_from: 2016-01-01
  - id: 1101
    scheme_id: 11
    tier_code: PR_YEAR_1
    nationality_condition: PR
    pr_year_condition: 1
    employee:
      percentage: "0.05"
    employer:
      percentage: "0.04"
    effective_from: 2016-01-01
  - id: 1102
    scheme_id: 11
    tier_code: PR_YEAR_2
    nationality_condition: PR
    pr_year_condition: 2
    employee:
      percentage: "0.15"
    employer:
      percentage: "0.09"
    effective_from: 2016-01-01
ceilings:
  - scheme_id: 11
    ceiling_type: ORDINARY_WAGE_MONTHLY
    ceiling_amount: "6800.00"
    effective_from: 2024-01-01
    effective_until: 2024-12-31
  - scheme_id: 11
    ceiling_type: ORDINARY_WAGE_MONTHLY
    ceiling_amount: "7400.00"
    effective_from: 2025-01-01
"#;

const INDONESIA_PACK: &str = r#"
country:
  code: ID
  name_en: Indonesia
  currency_code: IDR
schemes:
  - id: 21
    country: ID
    code: BPJS_TK_JKK
    name_en: BPJS Ketenagakerjaan Work Accident Insurance
    scheme_type: SOCIAL_SECURITY
    calculation_method: TIERED_PERCENTAGE
    sort_order: 10
    effective_from: 2015-07-01
rates:
  - id: 2100
    scheme_id: 21
    tier_code: RISK_VERY_LOW
    risk_category: VERY_LOW
    employer:
      percentage: "0.0024"
    effective_from: 2015-07-01
  - id: 2101
    scheme_id: 21
    tier_code: RISK_HIGH
    risk_category: HIGH
    employer:
      percentage: "0.0127"
    effective_from: 2015-07-01
"#;

const THAILAND_PACK: &str = r#"
country:
  code: TH
  name_en: Thailand
  currency_code: THB
schemes:
  - id: 31
    country: TH
    code: SSO
    name_en: Social Security Office Fund
    scheme_type: SOCIAL_SECURITY
    calculation_method: PERCENTAGE
    sort_order: 10
    effective_from: 2004-01-01
rates:
  - id: 3100
    scheme_id: 31
    tier_code: DEFAULT
    employee:
      percentage: "0.05"
    employer:
      percentage: "0.05"
    effective_from: 2004-01-01
ceilings:
  - scheme_id: 31
    ceiling_amount: "15000.00"
    effective_from: 2004-01-01
"#;

const CAMBODIA_PACK: &str = r#"
country:
  code: KH
  name_en: Cambodia
  currency_code: KHR
schemes:
  - id: 41
    country: KH
    code: NSSF_PENSION
    name_en: National Social Security Fund Pension
    scheme_type: RETIREMENT
    calculation_method: TIERED_PERCENTAGE
    sort_order: 10
    effective_from: 2022-10-01
rates:
  - id: 4100
    scheme_id: 41
    tier_code: PENSION
    employee:
      percentage: "0.02"
    employer:
      percentage: "0.02"
    effective_from: 2022-10-01
    effective_until: 2027-09-30
    superseded_by: 4101
  - id: 4101
    scheme_id: 41
    tier_code: PENSION
    employee:
      percentage: "0.04"
    employer:
      percentage: "0.04"
    effective_from: 2027-10-01
    is_scheduled: true
"#;

fn store() -> InMemoryStore {
    let packs = vec![
        CountryPack::from_yaml_str("my.yaml", MALAYSIA_PACK).unwrap(),
        CountryPack::from_yaml_str("sg.yaml", SINGAPORE_PACK).unwrap(),
        CountryPack::from_yaml_str("id.yaml", INDONESIA_PACK).unwrap(),
        CountryPack::from_yaml_str("th.yaml", THAILAND_PACK).unwrap(),
        CountryPack::from_yaml_str("kh.yaml", CAMBODIA_PACK).unwrap(),
    ];
    InMemoryStore::from_packs(packs).unwrap()
}

// ── Malaysia ─────────────────────────────────────────────────────────

#[test]
fn test_malaysian_citizen_full_run() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("MY"),
        Nationality::Citizen,
        30,
        dec("4500.00"),
    );

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();

    // HRDF needs a known headcount of 10+, so it drops out; the rest
    // come back in catalog order.
    let codes: Vec<_> = summary
        .contributions
        .iter()
        .map(|c| c.scheme_code.as_str())
        .collect();
    assert_eq!(codes, vec!["EPF", "SOCSO", "EIS"]);

    let epf = &summary.contributions[0];
    assert_eq!(epf.tier_code.as_deref(), Some("UPTO_5000"));
    assert_eq!(epf.employee_amount, dec("495"));
    assert_eq!(epf.employer_amount, dec("585"));
    assert_eq!(epf.employee_rate, Some(dec("0.11")));
    assert!(!epf.capped);

    let socso = &summary.contributions[1];
    assert_eq!(socso.employee_amount, dec("22.25"));
    assert_eq!(socso.employer_amount, dec("77.85"));
    assert_eq!(socso.tier_code, None);

    let eis = &summary.contributions[2];
    assert_eq!(eis.employee_amount, dec("9.00"));
    assert_eq!(eis.employer_amount, dec("9.00"));
    assert!(!eis.capped);

    assert_eq!(summary.total_employee, dec("526.25"));
    assert_eq!(summary.total_employer, dec("671.85"));
    assert_eq!(summary.total_combined, dec("1198.10"));
}

#[test]
fn test_senior_tier_wins_over_salary_band() {
    // Age 62 at gross 5000 matches both the age-60+ tier and the
    // up-to-5000 band; the age condition is the more specific predicate.
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("MY"),
        Nationality::Citizen,
        62,
        dec("5000.00"),
    );

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let epf = summary
        .contributions
        .iter()
        .find(|c| c.scheme_code.as_str() == "EPF")
        .unwrap();
    assert_eq!(epf.tier_code.as_deref(), Some("AGE_60_AND_ABOVE"));
    assert_eq!(epf.employee_amount, dec("275"));
    assert_eq!(epf.employer_amount, dec("200"));
}

#[test]
fn test_eis_ceiling_caps_high_earner() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("MY"),
        Nationality::Citizen,
        40,
        dec("8000.00"),
    );

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let eis = summary
        .contributions
        .iter()
        .find(|c| c.scheme_code.as_str() == "EIS")
        .unwrap();
    assert_eq!(eis.calculation_base_amount, dec("8000.00"));
    assert_eq!(eis.applied_salary, dec("5000.00"));
    assert!(eis.capped);
    assert_eq!(eis.employee_amount, dec("10.00"));
    assert_eq!(eis.employer_amount, dec("10.00"));
}

#[test]
fn test_wage_above_every_socso_band_contributes_zero() {
    // Table lookup misses entirely at gross 8000; the scheme still
    // appears, with zero amounts, so payroll output stays auditable.
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("MY"),
        Nationality::Citizen,
        40,
        dec("8000.00"),
    );

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let socso = summary
        .contributions
        .iter()
        .find(|c| c.scheme_code.as_str() == "SOCSO")
        .unwrap();
    assert_eq!(socso.employee_amount, Decimal::ZERO);
    assert_eq!(socso.employer_amount, Decimal::ZERO);
}

#[test]
fn test_known_headcount_activates_levy() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("MY"),
        Nationality::Citizen,
        30,
        dec("4500.00"),
    )
    .with_company_employee_count(120);

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let hrdf = summary
        .contributions
        .iter()
        .find(|c| c.scheme_code.as_str() == "HRDF")
        .unwrap();
    // Employer-only levy: the absent employee side is an intentional zero.
    assert_eq!(hrdf.employee_amount, Decimal::ZERO);
    assert_eq!(hrdf.employer_amount, dec("45.00"));
}

// ── Singapore ────────────────────────────────────────────────────────

#[test]
fn test_cpf_ordinary_wage_ceiling_staircase() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("SG"),
        Nationality::Citizen,
        35,
        dec("10000.00"),
    )
    .with_ordinary_wages(dec("10000.00"));

    // 2025 ceiling: 7400.
    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let cpf = &summary.contributions[0];
    assert_eq!(cpf.applied_salary, dec("7400.00"));
    assert!(cpf.capped);
    assert_eq!(cpf.employee_amount, dec("1480.00"));
    assert_eq!(cpf.employer_amount, dec("1258.00"));

    // Same employee a year earlier resolves the 6800 ceiling row.
    let summary = engine.calculate_all(&employee, d(2024, 6, 1)).unwrap();
    let cpf = &summary.contributions[0];
    assert_eq!(cpf.applied_salary, dec("6800.00"));
    assert_eq!(cpf.employee_amount, dec("1360.00"));
    assert_eq!(cpf.employer_amount, dec("1156.00"));
}

#[test]
fn test_graduated_pr_rates_select_by_pr_year() {
    let store = store();
    let engine = ContributionEngine::new(&store);

    let first_year = EmployeeContext::new(
        country("SG"),
        Nationality::PermanentResident,
        40,
        dec("5000.00"),
    )
    .with_pr_years(1);
    let summary = engine.calculate_all(&first_year, d(2025, 6, 1)).unwrap();
    let cpf = &summary.contributions[0];
    assert_eq!(cpf.tier_code.as_deref(), Some("PR_YEAR_1"));
    assert_eq!(cpf.employee_amount, dec("250.00"));
    assert_eq!(cpf.employer_amount, dec("200.00"));

    let second_year = first_year.clone().with_pr_years(2);
    let summary = engine.calculate_all(&second_year, d(2025, 6, 1)).unwrap();
    let cpf = &summary.contributions[0];
    assert_eq!(cpf.tier_code.as_deref(), Some("PR_YEAR_2"));
    assert_eq!(cpf.employee_amount, dec("750.00"));
    assert_eq!(cpf.employer_amount, dec("450.00"));
}

// ── Indonesia ────────────────────────────────────────────────────────

#[test]
fn test_work_injury_premium_follows_risk_class() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("ID"),
        Nationality::Citizen,
        28,
        dec("10000000"),
    )
    .with_risk_category(RiskCategory::VeryLow);

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let jkk = &summary.contributions[0];
    assert_eq!(jkk.tier_code.as_deref(), Some("RISK_VERY_LOW"));
    assert_eq!(jkk.employee_amount, Decimal::ZERO);
    assert_eq!(jkk.employer_amount, dec("24000.00"));

    let high_risk = employee.with_risk_category(RiskCategory::High);
    let summary = engine.calculate_all(&high_risk, d(2025, 6, 1)).unwrap();
    assert_eq!(summary.contributions[0].employer_amount, dec("127000.00"));
}

#[test]
fn test_unknown_risk_class_omits_risk_conditional_scheme() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("ID"),
        Nationality::Citizen,
        28,
        dec("10000000"),
    );

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    assert!(summary.contributions.is_empty());
    assert_eq!(summary.total_combined, Decimal::ZERO);
}

// ── Thailand ─────────────────────────────────────────────────────────

#[test]
fn test_sso_cap_at_statutory_wage_ceiling() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("TH"),
        Nationality::Citizen,
        33,
        dec("20000.00"),
    );

    let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
    let sso = &summary.contributions[0];
    assert_eq!(sso.applied_salary, dec("15000.00"));
    assert!(sso.capped);
    assert_eq!(sso.employee_amount, dec("750.00"));
    assert_eq!(sso.employer_amount, dec("750.00"));
}

// ── Cambodia ─────────────────────────────────────────────────────────

#[test]
fn test_pension_phase_in_switches_on_effective_date() {
    let store = store();
    let engine = ContributionEngine::new(&store);
    let employee = EmployeeContext::new(
        country("KH"),
        Nationality::Citizen,
        30,
        dec("1000000"),
    );

    let before = engine.calculate_all(&employee, d(2027, 9, 15)).unwrap();
    assert_eq!(before.contributions[0].employee_amount, dec("20000.00"));

    let after = engine.calculate_all(&employee, d(2027, 10, 15)).unwrap();
    assert_eq!(after.contributions[0].employee_amount, dec("40000.00"));
}

#[test]
fn test_scheduled_phase_is_visible_to_compliance_monitoring() {
    let store = store();
    let changes = upcoming_rate_changes(&store, &country("KH"), d(2027, 8, 15), 90);
    assert_eq!(changes.len(), 1);
    let change = &changes[0];
    assert_eq!(change.scheme.code.as_str(), "NSSF_PENSION");
    assert_eq!(change.days_until_effective, 47);
    assert_eq!(
        change.current.and_then(|r| r.employee_percentage()),
        Some(dec("0.02"))
    );
}
