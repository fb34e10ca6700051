//! Goal management service.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Service for managing savings goals
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goal_repository }
    }

    fn validate_goal_input(
        name: &str,
        target_amount: Decimal,
        monthly_contribution: Decimal,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "target amount must be positive, got {}",
                target_amount
            ))
            .into());
        }
        if monthly_contribution < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "monthly contribution cannot be negative, got {}",
                monthly_contribution
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        Self::validate_goal_input(
            &new_goal.name,
            new_goal.target_amount,
            new_goal.monthly_contribution,
        )?;

        let created_at = Utc::now();
        if new_goal.target_date < created_at.date_naive() {
            return Err(ValidationError::InvalidInput(format!(
                "target date {} is in the past",
                new_goal.target_date
            ))
            .into());
        }

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name,
            goal_type: new_goal.goal_type,
            target_amount: new_goal.target_amount,
            current_amount: Decimal::ZERO,
            monthly_contribution: new_goal.monthly_contribution,
            target_date: new_goal.target_date,
            created_at,
        };

        debug!("Creating goal '{}' (id {})", goal.name, goal.id);
        self.goal_repository.insert_new_goal(goal).await
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        Self::validate_goal_input(
            &goal_update.name,
            goal_update.target_amount,
            goal_update.monthly_contribution,
        )?;
        if goal_update.current_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "current amount cannot be negative, got {}",
                goal_update.current_amount
            ))
            .into());
        }

        let existing = self
            .goal_repository
            .load_goals()?
            .into_iter()
            .find(|g| g.id == goal_update.id)
            .ok_or_else(|| {
                crate::errors::Error::Repository(format!("Goal {} not found", goal_update.id))
            })?;

        if goal_update.target_date < existing.created_at.date_naive() {
            return Err(ValidationError::InvalidInput(format!(
                "target date {} predates the goal itself",
                goal_update.target_date
            ))
            .into());
        }

        let goal = Goal {
            id: goal_update.id,
            name: goal_update.name,
            goal_type: goal_update.goal_type,
            target_amount: goal_update.target_amount,
            current_amount: goal_update.current_amount,
            monthly_contribution: goal_update.monthly_contribution,
            target_date: goal_update.target_date,
            created_at: existing.created_at,
        };

        debug!("Updating goal {}", goal.id);
        self.goal_repository.update_goal(goal).await
    }

    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        debug!("Deleting goal {}", goal_id);
        self.goal_repository.delete_goal(goal_id).await
    }
}
