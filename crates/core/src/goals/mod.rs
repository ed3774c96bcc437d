//! Goals module - goal form state, catalog, models and the creation workflow.

mod goal_types;
mod goals_draft;
mod goals_model;
mod goals_service;
mod goals_traits;


pub use goal_types::{find_goal_type, goal_type_options, image_for_type, GoalTypeOption};
pub use goals_draft::{DraftAction, DraftField, GoalDraft};
pub use goals_model::{
    Alert, ApiResponse, GoalCreationRequest, GoalReward, Outcome, SubmissionFailure,
};
pub use goals_service::GoalCreationService;
pub use goals_traits::{GoalApiClientTrait, GoalCreationServiceTrait};
