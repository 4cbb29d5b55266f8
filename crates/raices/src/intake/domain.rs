use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country applied when the wizard leaves the field blank.
pub const DEFAULT_COUNTRY_OF_ORIGIN: &str = "Colombia";

/// Raw payload posted by the multi-step sign-up wizard.
///
/// Every field defaults so that a sparse submission reaches validation
/// instead of failing JSON extraction; the guard decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country_of_origin: String,
    pub password: String,
    pub confirm_password: Option<String>,
    pub residency: Option<ResidencyStatus>,
    pub investment_type: Option<InvestmentType>,
    pub budget_range: String,
    pub deposit_ready: String,
    pub share_range: f64,
    pub risk_profile: Option<RiskProfile>,
}

/// The normalized, hash-carrying record handed to the persistence collaborator.
///
/// Immutable from the client's perspective once submitted; the plaintext
/// credential never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country_of_origin: String,
    pub credential_hash: String,
    pub residency_status: ResidencyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<InvestmentType>,
    pub budget_range: String,
    pub deposit_readiness: String,
    pub share_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<RiskProfile>,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidencyStatus {
    #[serde(rename = "legal")]
    LegalResident,
    #[serde(rename = "in_process")]
    InProcess,
}

impl ResidencyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ResidencyStatus::LegalResident => "legal",
            ResidencyStatus::InProcess => "in_process",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Full,
    Fractional,
}

impl InvestmentType {
    pub const fn label(self) -> &'static str {
        match self {
            InvestmentType::Full => "full",
            InvestmentType::Fractional => "fractional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Growth,
}

/// Lifecycle of a stored application. This service only ever writes
/// `Pending`; the back-office review moves records to the other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}
