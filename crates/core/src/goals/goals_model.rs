//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a savings goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GoalType {
    Retirement,
    HomePurchase,
    Education,
    Custom,
}

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub goal_type: GoalType,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new goal.
///
/// New goals always start with a current amount of zero; contributions
/// accumulate through record store mutations afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub goal_type: GoalType,
    pub target_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub target_date: NaiveDate,
}

/// Input model for updating an existing goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub name: String,
    pub goal_type: GoalType,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub target_date: NaiveDate,
}
