use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads all goals for the authenticated owner, newest first.
    fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
}
