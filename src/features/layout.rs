//! Feature Layout - Centralized Column Definition
//!
//! **This file controls the feature schema the model consumes.**
//!
//! The column set and natural construction order must stay in lockstep with
//! the training pipeline of `EMI_Regression_Model`. Adding, removing, or
//! reordering a column here silently changes what the model receives, so
//! every change must be mirrored on the training side.

/// Column names in natural construction order.
/// This is the SINGLE SOURCE OF TRUTH for the feature layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Raw inputs (0-15) ===
    "monthly_salary",
    "years_of_employment",
    "monthly_rent",
    "family_size",
    "dependents",
    "school_fees",
    "college_fees",
    "travel_expenses",
    "groceries_utilities",
    "other_monthly_expenses",
    "current_emi_amount",
    "credit_score",
    "bank_balance",
    "emergency_fund",
    "requested_amount",
    "requested_tenure",
    // === Derived ratios (16-20) ===
    "debt_to_income",
    "expense_to_income",
    "affordability_ratio",
    "emi_burden",
    "no_credit_history",
    // === One-hot indicators (21-33) ===
    "employment_type_Private",
    "employment_type_Self-employed",
    "company_type_MNC",
    "company_type_Mid-size",
    "company_type_Small",
    "company_type_Startup",
    "house_type_Own",
    "house_type_Rented",
    "existing_loans_Yes",
    "emi_scenario_Education EMI",
    "emi_scenario_Home Appliances EMI",
    "emi_scenario_Personal Loan EMI",
    "emi_scenario_Vehicle EMI",
];

/// Total number of columns.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 34;

/// Index of the first one-hot indicator column.
pub const INDICATOR_START: usize = 21;

/// Get column index by name (O(n) but columns are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get column name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 34);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_no_duplicate_columns() {
        for (i, a) in FEATURE_LAYOUT.iter().enumerate() {
            for b in &FEATURE_LAYOUT[i + 1..] {
                assert_ne!(a, b, "duplicate column in layout: {}", a);
            }
        }
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("monthly_salary"), Some(0));
        assert_eq!(feature_index("debt_to_income"), Some(16));
        assert_eq!(feature_index("employment_type_Private"), Some(INDICATOR_START));
        assert_eq!(feature_index("emi_scenario_Vehicle EMI"), Some(33));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("monthly_salary"));
        assert_eq!(feature_name(20), Some("no_credit_history"));
        assert_eq!(feature_name(33), Some("emi_scenario_Vehicle EMI"));
        assert_eq!(feature_name(100), None);
    }

    #[test]
    fn test_derived_block_precedes_indicators() {
        // Derived ratios occupy 16..21, indicators fill the tail
        assert_eq!(feature_name(19), Some("emi_burden"));
        assert!(FEATURE_LAYOUT[INDICATOR_START..]
            .iter()
            .all(|c| c.contains('_')));
        assert_eq!(FEATURE_LAYOUT[INDICATOR_START..].len(), 13);
    }
}
