//! Applicant profile - validated raw inputs for one prediction

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employment type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    Private,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
}

impl EmploymentType {
    pub const ALL: &'static [Self] = &[Self::Private, Self::SelfEmployed];

    /// Indicator column for this value
    pub fn column(self) -> &'static str {
        match self {
            Self::Private => "employment_type_Private",
            Self::SelfEmployed => "employment_type_Self-employed",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.column() == column)
    }
}

/// Company type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "MNC")]
    Mnc,
    #[serde(rename = "Mid-size")]
    MidSize,
    Small,
    Startup,
}

impl CompanyType {
    pub const ALL: &'static [Self] = &[Self::Mnc, Self::MidSize, Self::Small, Self::Startup];

    pub fn column(self) -> &'static str {
        match self {
            Self::Mnc => "company_type_MNC",
            Self::MidSize => "company_type_Mid-size",
            Self::Small => "company_type_Small",
            Self::Startup => "company_type_Startup",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.column() == column)
    }
}

/// House type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseType {
    Own,
    Rented,
}

impl HouseType {
    pub const ALL: &'static [Self] = &[Self::Own, Self::Rented];

    pub fn column(self) -> &'static str {
        match self {
            Self::Own => "house_type_Own",
            Self::Rented => "house_type_Rented",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.column() == column)
    }
}

/// Existing-loans selector. Encodes as a single 0/1 indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExistingLoans {
    No,
    Yes,
}

impl ExistingLoans {
    pub const COLUMN: &'static str = "existing_loans_Yes";

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// EMI scenario selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmiScenario {
    #[serde(rename = "Education EMI")]
    Education,
    #[serde(rename = "Home Appliances EMI")]
    HomeAppliances,
    #[serde(rename = "Personal Loan EMI")]
    PersonalLoan,
    #[serde(rename = "Vehicle EMI")]
    Vehicle,
}

impl EmiScenario {
    pub const ALL: &'static [Self] = &[
        Self::Education,
        Self::HomeAppliances,
        Self::PersonalLoan,
        Self::Vehicle,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Self::Education => "emi_scenario_Education EMI",
            Self::HomeAppliances => "emi_scenario_Home Appliances EMI",
            Self::PersonalLoan => "emi_scenario_Personal Loan EMI",
            Self::Vehicle => "emi_scenario_Vehicle EMI",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.column() == column)
    }
}

/// One applicant's financial profile, as collected by the form.
///
/// Amount fields are monthly rupee figures. Bounds mirror the form widgets;
/// validation is the server-side backstop for clients that bypass the page.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicantProfile {
    pub employment_type: EmploymentType,
    pub company_type: CompanyType,
    pub house_type: HouseType,
    pub existing_loans: ExistingLoans,
    pub emi_scenario: EmiScenario,

    #[validate(range(min = 0.0))]
    pub monthly_salary: f64,
    pub years_of_employment: u32,
    #[validate(range(min = 0.0))]
    pub monthly_rent: f64,
    pub family_size: u32,
    pub dependents: u32,
    #[validate(range(min = 0.0))]
    pub school_fees: f64,
    #[validate(range(min = 0.0))]
    pub college_fees: f64,
    #[validate(range(min = 0.0))]
    pub travel_expenses: f64,
    #[validate(range(min = 0.0))]
    pub groceries_utilities: f64,
    #[validate(range(min = 0.0))]
    pub other_monthly_expenses: f64,
    #[validate(range(min = 0.0))]
    pub current_emi_amount: f64,
    #[validate(range(min = 300, max = 900))]
    pub credit_score: u32,
    #[validate(range(min = 0.0))]
    pub bank_balance: f64,
    #[validate(range(min = 0.0))]
    pub emergency_fund: f64,
    #[validate(range(min = 0.0))]
    pub requested_amount: f64,
    #[validate(range(min = 6, max = 120))]
    pub requested_tenure: u32,
}

impl Default for ApplicantProfile {
    /// Defaults shown by the form before the user edits anything
    fn default() -> Self {
        Self {
            employment_type: EmploymentType::Private,
            company_type: CompanyType::Mnc,
            house_type: HouseType::Own,
            existing_loans: ExistingLoans::No,
            emi_scenario: EmiScenario::Education,
            monthly_salary: 50000.0,
            years_of_employment: 3,
            monthly_rent: 5000.0,
            family_size: 2,
            dependents: 1,
            school_fees: 0.0,
            college_fees: 0.0,
            travel_expenses: 3000.0,
            groceries_utilities: 8000.0,
            other_monthly_expenses: 2000.0,
            current_emi_amount: 0.0,
            credit_score: 700,
            bank_balance: 50000.0,
            emergency_fund: 10000.0,
            requested_amount: 200000.0,
            requested_tenure: 24,
        }
    }
}
