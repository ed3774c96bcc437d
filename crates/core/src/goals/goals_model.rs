//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::constants::{REWARD_DESCRIPTION, REWARD_IMAGE_URL, REWARD_NAME};
use crate::goals::goal_types::image_for_type;
use crate::goals::goals_draft::GoalDraft;
use crate::utils::number_utils::parse_float_prefix;

/// Incentive granted when a goal is reached
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalReward {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Default for GoalReward {
    /// The reward every goal created from the form receives.
    fn default() -> Self {
        Self {
            name: REWARD_NAME.to_string(),
            description: REWARD_DESCRIPTION.to_string(),
            image_url: REWARD_IMAGE_URL.to_string(),
        }
    }
}

/// Payload for `POST /create/goal`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalCreationRequest {
    pub user_id: String,
    pub goal_image: String,
    pub goal_name: String,
    /// May be NaN when the amount text had no numeric prefix; serialized as `null`
    pub goal_amount: f64,
    pub duration_date: String,
    pub reward: GoalReward,
}

impl GoalCreationRequest {
    /// Build the payload for a validated draft.
    ///
    /// Does not re-check the draft: callers validate completeness first. An
    /// unknown goal type gets the default image.
    pub fn from_draft(draft: &GoalDraft, user: &AuthenticatedUser) -> Self {
        Self {
            user_id: user.id.clone(),
            goal_image: image_for_type(&draft.selected_type).to_string(),
            goal_name: draft.name.clone(),
            goal_amount: parse_float_prefix(&draft.amount),
            duration_date: draft.target_date.clone(),
            reward: GoalReward::default(),
        }
    }
}

/// Raw response from the goals API, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// The goals API answers 200 or 201 on creation.
    pub fn is_created(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// Why a submission failed for reasons the user cannot fix by editing the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The server answered with a status other than 200/201
    BadStatus { status: u16 },
    /// The request never produced a response
    Transport,
    /// The signed-in user could not be read from the credential store
    CredentialStore,
}

/// Terminal result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Unauthenticated,
    IncompleteForm,
    SubmissionFailed(SubmissionFailure),
}

/// A titled message for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Whether the front end should leave the form once the alert is acknowledged.
    pub fn should_navigate_back(&self) -> bool {
        self.is_success()
    }

    pub fn alert(&self) -> Alert {
        let (title, message) = match self {
            Outcome::Success => ("Success", "Goal created successfully!"),
            Outcome::Unauthenticated => ("Error", "User not authenticated"),
            Outcome::IncompleteForm => ("Error", "Please fill in all fields"),
            Outcome::SubmissionFailed(SubmissionFailure::BadStatus { .. }) => {
                ("Error", "Failed to create goal")
            }
            Outcome::SubmissionFailed(
                SubmissionFailure::Transport | SubmissionFailure::CredentialStore,
            ) => ("Error", "Something went wrong"),
        };
        Alert { title, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::goals_draft::DraftAction;
    use serde_json::json;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            id: "u1".to_string(),
            token: "t1".to_string(),
        }
    }

    fn draft(amount: &str, goal_type: &str) -> GoalDraft {
        GoalDraft::new()
            .apply(DraftAction::SetName("Trip to Paris".into()))
            .apply(DraftAction::SetAmount(amount.into()))
            .apply(DraftAction::SetTargetDate("2025-12-01".into()))
            .apply(DraftAction::SelectType(goal_type.into()))
    }

    #[test]
    fn test_request_wire_format() {
        let request = GoalCreationRequest::from_draft(&draft("2000", "trip"), &user());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "userId": "u1",
                "goalImage": "trip.jpg",
                "goalName": "Trip to Paris",
                "goalAmount": 2000.0,
                "durationDate": "2025-12-01",
                "reward": {
                    "name": "Laptop Bag",
                    "description": "Get a stylish laptop bag on goal completion.",
                    "imageUrl": "laptop-bag.jpg"
                }
            })
        );
    }

    #[test]
    fn test_nan_amount_is_sent_as_null() {
        let request = GoalCreationRequest::from_draft(&draft("abc", "trip"), &user());
        assert!(request.goal_amount.is_nan());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["goalAmount"], serde_json::Value::Null);
    }

    #[test]
    fn test_amounts_are_not_range_checked() {
        let negative = GoalCreationRequest::from_draft(&draft("-5", "game"), &user());
        assert_eq!(negative.goal_amount, -5.0);
        let tiny = GoalCreationRequest::from_draft(&draft("0.001", "game"), &user());
        assert_eq!(tiny.goal_amount, 0.001);
    }

    #[test]
    fn test_is_created() {
        assert!(ApiResponse::new(200, json!({})).is_created());
        assert!(ApiResponse::new(201, json!(null)).is_created());
        assert!(!ApiResponse::new(204, json!(null)).is_created());
        assert!(!ApiResponse::new(400, json!(null)).is_created());
    }

    #[test]
    fn test_alerts() {
        assert_eq!(
            Outcome::Success.alert(),
            Alert {
                title: "Success",
                message: "Goal created successfully!"
            }
        );
        assert_eq!(
            Outcome::SubmissionFailed(SubmissionFailure::BadStatus { status: 500 })
                .alert()
                .message,
            "Failed to create goal"
        );
        assert_eq!(
            Outcome::SubmissionFailed(SubmissionFailure::Transport)
                .alert()
                .message,
            "Something went wrong"
        );
        assert_eq!(
            Outcome::SubmissionFailed(SubmissionFailure::CredentialStore)
                .alert()
                .message,
            "Something went wrong"
        );
        assert!(Outcome::Success.should_navigate_back());
        assert!(!Outcome::IncompleteForm.should_navigate_back());
    }
}
