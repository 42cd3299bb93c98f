//! Feature Pipeline - raw profile to model input
//!
//! Mirrors the feature engineering used when `EMI_Regression_Model` was
//! trained. The derived ratios and their edge-case handling must not be
//! "fixed": the `+1` in emi_burden and the `<= 0` credit threshold are part
//! of the trained input contract.

use crate::models::{ApplicantProfile, ExistingLoans};
use super::vector::FeatureVector;

/// Ratio with the training-time zero-fallback: a non-finite result
/// (division by zero, 0/0) becomes 0.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Build the complete feature vector for one profile.
pub fn encode(profile: &ApplicantProfile) -> FeatureVector {
    let mut vector = FeatureVector::new();

    // Raw inputs
    vector.set_by_name("monthly_salary", profile.monthly_salary);
    vector.set_by_name("years_of_employment", f64::from(profile.years_of_employment));
    vector.set_by_name("monthly_rent", profile.monthly_rent);
    vector.set_by_name("family_size", f64::from(profile.family_size));
    vector.set_by_name("dependents", f64::from(profile.dependents));
    vector.set_by_name("school_fees", profile.school_fees);
    vector.set_by_name("college_fees", profile.college_fees);
    vector.set_by_name("travel_expenses", profile.travel_expenses);
    vector.set_by_name("groceries_utilities", profile.groceries_utilities);
    vector.set_by_name("other_monthly_expenses", profile.other_monthly_expenses);
    vector.set_by_name("current_emi_amount", profile.current_emi_amount);
    vector.set_by_name("credit_score", f64::from(profile.credit_score));
    vector.set_by_name("bank_balance", profile.bank_balance);
    vector.set_by_name("emergency_fund", profile.emergency_fund);
    vector.set_by_name("requested_amount", profile.requested_amount);
    vector.set_by_name("requested_tenure", f64::from(profile.requested_tenure));

    // Derived ratios
    vector.set_by_name(
        "debt_to_income",
        safe_ratio(profile.current_emi_amount, profile.monthly_salary),
    );
    vector.set_by_name(
        "expense_to_income",
        safe_ratio(profile.groceries_utilities, profile.monthly_salary),
    );
    vector.set_by_name(
        "affordability_ratio",
        safe_ratio(
            profile.requested_amount,
            profile.monthly_salary * f64::from(profile.requested_tenure),
        ),
    );
    // The +1 keeps the denominator non-zero; the value differs from a raw
    // division and matches training exactly.
    vector.set_by_name(
        "emi_burden",
        safe_ratio(profile.current_emi_amount, profile.monthly_salary + 1.0),
    );
    // Unreachable through the form (credit_score >= 300); kept because the
    // model was trained with it.
    let no_credit_history = if f64::from(profile.credit_score) <= 0.0 { 1.0 } else { 0.0 };
    vector.set_by_name("no_credit_history", no_credit_history);

    // One-hot indicators: layout starts zeroed, set exactly one per group
    vector.set_by_name(profile.employment_type.column(), 1.0);
    vector.set_by_name(profile.company_type.column(), 1.0);
    vector.set_by_name(profile.house_type.column(), 1.0);
    if profile.existing_loans.is_yes() {
        vector.set_by_name(ExistingLoans::COLUMN, 1.0);
    }
    vector.set_by_name(profile.emi_scenario.column(), 1.0);

    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ApplicantProfile, CompanyType, EmiScenario, EmploymentType, ExistingLoans, HouseType,
    };

    fn profile() -> ApplicantProfile {
        ApplicantProfile::default()
    }

    #[test]
    fn test_safe_ratio_fallback() {
        assert_eq!(safe_ratio(5000.0, 0.0), 0.0);
        assert_eq!(safe_ratio(0.0, 0.0), 0.0);
        assert_eq!(safe_ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_zero_salary_fallbacks() {
        let mut p = profile();
        p.monthly_salary = 0.0;
        p.current_emi_amount = 5000.0;

        let v = encode(&p);
        assert_eq!(v.get_by_name("debt_to_income"), Some(0.0));
        assert_eq!(v.get_by_name("expense_to_income"), Some(0.0));
        assert_eq!(v.get_by_name("affordability_ratio"), Some(0.0));
        // emi_burden skips the fallback: 5000 / (0 + 1)
        assert_eq!(v.get_by_name("emi_burden"), Some(5000.0));
    }

    #[test]
    fn test_worked_example() {
        let mut p = profile();
        p.monthly_salary = 50000.0;
        p.current_emi_amount = 0.0;
        p.groceries_utilities = 8000.0;
        p.requested_amount = 200000.0;
        p.requested_tenure = 24;

        let v = encode(&p);
        assert_eq!(v.get_by_name("debt_to_income"), Some(0.0));
        assert_eq!(v.get_by_name("expense_to_income"), Some(0.16));
        let affordability = v.get_by_name("affordability_ratio").unwrap();
        assert!((affordability - 200000.0 / (50000.0 * 24.0)).abs() < 1e-12);
        assert!((affordability - 1.0 / 6.0).abs() < 1e-4);
        assert_eq!(v.get_by_name("emi_burden"), Some(0.0));
    }

    #[test]
    fn test_emi_burden_plus_one_offset() {
        let mut p = profile();
        p.monthly_salary = 49999.0;
        p.current_emi_amount = 10000.0;

        let v = encode(&p);
        // 10000 / (49999 + 1), not 10000 / 49999
        assert_eq!(v.get_by_name("emi_burden"), Some(0.2));
    }

    #[test]
    fn test_no_credit_history_requires_bypassing_collection_bounds() {
        // The form never produces credit_score < 300; construct directly.
        let mut p = profile();
        p.credit_score = 0;
        let v = encode(&p);
        assert_eq!(v.get_by_name("no_credit_history"), Some(1.0));

        let mut p = profile();
        p.credit_score = 300;
        let v = encode(&p);
        assert_eq!(v.get_by_name("no_credit_history"), Some(0.0));
    }

    #[test]
    fn test_raw_inputs_are_copied_through() {
        let p = profile();
        let v = encode(&p);
        assert_eq!(v.get_by_name("monthly_salary"), Some(50000.0));
        assert_eq!(v.get_by_name("credit_score"), Some(700.0));
        assert_eq!(v.get_by_name("requested_tenure"), Some(24.0));
        assert_eq!(v.get_by_name("bank_balance"), Some(50000.0));
    }

    fn group_sum(v: &FeatureVector, columns: &[&str]) -> f64 {
        columns
            .iter()
            .map(|c| v.get_by_name(c).unwrap_or_default())
            .sum()
    }

    #[test]
    fn test_exactly_one_indicator_per_group() {
        let mut p = profile();
        p.employment_type = EmploymentType::SelfEmployed;
        p.company_type = CompanyType::Startup;
        p.house_type = HouseType::Rented;
        p.existing_loans = ExistingLoans::Yes;
        p.emi_scenario = EmiScenario::Vehicle;

        let v = encode(&p);

        let employment: Vec<&str> = EmploymentType::ALL.iter().map(|x| x.column()).collect();
        let company: Vec<&str> = CompanyType::ALL.iter().map(|x| x.column()).collect();
        let house: Vec<&str> = HouseType::ALL.iter().map(|x| x.column()).collect();
        let scenario: Vec<&str> = EmiScenario::ALL.iter().map(|x| x.column()).collect();

        assert_eq!(group_sum(&v, &employment), 1.0);
        assert_eq!(group_sum(&v, &company), 1.0);
        assert_eq!(group_sum(&v, &house), 1.0);
        assert_eq!(group_sum(&v, &scenario), 1.0);

        assert_eq!(v.get_by_name("employment_type_Self-employed"), Some(1.0));
        assert_eq!(v.get_by_name("company_type_Startup"), Some(1.0));
        assert_eq!(v.get_by_name("house_type_Rented"), Some(1.0));
        assert_eq!(v.get_by_name("emi_scenario_Vehicle EMI"), Some(1.0));
    }

    #[test]
    fn test_existing_loans_indicator() {
        let mut p = profile();
        p.existing_loans = ExistingLoans::No;
        assert_eq!(encode(&p).get_by_name(ExistingLoans::COLUMN), Some(0.0));

        p.existing_loans = ExistingLoans::Yes;
        assert_eq!(encode(&p).get_by_name(ExistingLoans::COLUMN), Some(1.0));
    }

    #[test]
    fn test_one_hot_round_trip() {
        let mut p = profile();
        p.employment_type = EmploymentType::SelfEmployed;
        let v = encode(&p);

        // Decode the employment block: exactly one active column, and it
        // maps back to the original selection.
        let active: Vec<EmploymentType> = EmploymentType::ALL
            .iter()
            .filter(|x| v.get_by_name(x.column()) == Some(1.0))
            .copied()
            .collect();
        assert_eq!(active, vec![EmploymentType::SelfEmployed]);
        assert_eq!(
            EmploymentType::from_column(active[0].column()),
            Some(EmploymentType::SelfEmployed)
        );
    }

    #[test]
    fn test_all_derived_features_finite() {
        let mut p = profile();
        p.monthly_salary = 0.0;
        p.requested_amount = 0.0;
        p.current_emi_amount = 0.0;
        p.groceries_utilities = 0.0;

        let v = encode(&p);
        assert!(v.as_slice().iter().all(|x| x.is_finite()));
    }
}
