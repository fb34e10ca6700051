//! User profile domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Investor risk appetite, driving the recommended target allocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

/// Recommended portfolio split for a risk profile, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetAllocation {
    pub stocks: Decimal,
    pub bonds: Decimal,
    pub etfs: Decimal,
    pub cash: Decimal,
}

impl RiskProfile {
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => {
                "Low risk, stable returns. Focus on bonds and fixed income."
            }
            RiskProfile::Moderate => "Balanced risk-reward. Mix of stocks and bonds.",
            RiskProfile::Aggressive => {
                "High risk, high potential returns. Heavy equity exposure."
            }
        }
    }

    /// Recommended allocation table; percentages sum to 100.
    pub fn target_allocation(&self) -> TargetAllocation {
        match self {
            RiskProfile::Conservative => TargetAllocation {
                stocks: dec!(20),
                bonds: dec!(50),
                etfs: dec!(15),
                cash: dec!(15),
            },
            RiskProfile::Moderate => TargetAllocation {
                stocks: dec!(45),
                bonds: dec!(30),
                etfs: dec!(15),
                cash: dec!(10),
            },
            RiskProfile::Aggressive => TargetAllocation {
                stocks: dec!(70),
                bonds: dec!(10),
                etfs: dec!(15),
                cash: dec!(5),
            },
        }
    }
}

/// Know-your-customer verification state, owned by the external
/// auth service and mirrored on the profile record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

/// Domain model representing a user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub display_name: Option<String>,
    pub risk_profile: RiskProfile,
    pub kyc_status: KycStatus,
}

/// Input model for the two user-mutable profile fields
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub risk_profile: Option<RiskProfile>,
}
