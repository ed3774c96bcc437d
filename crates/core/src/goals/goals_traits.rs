use crate::errors::Result;
use crate::goals::goals_draft::GoalDraft;
use crate::goals::goals_model::{ApiResponse, GoalCreationRequest, Outcome};
use async_trait::async_trait;

/// Trait for the remote goals API
#[async_trait]
pub trait GoalApiClientTrait: Send + Sync {
    /// Send the creation request with the caller's bearer token.
    ///
    /// Any HTTP status is returned as `Ok`; `Err` is reserved for failures
    /// that produced no response at all.
    async fn create_goal(&self, request: &GoalCreationRequest, token: &str)
        -> Result<ApiResponse>;
}

/// Trait for goal creation service operations
#[async_trait]
pub trait GoalCreationServiceTrait: Send + Sync {
    async fn submit(&self, draft: &GoalDraft) -> Outcome;
    fn is_busy(&self) -> bool;
}
