//! Command implementations, kept separate from argument parsing so they can
//! be driven from tests.

use std::fmt::Write as _;

use goalsaver_core::{
    auth::StoredUser,
    goals::{goal_type_options, DraftAction, GoalCreationServiceTrait, GoalDraft, Outcome},
    Result,
};

use crate::main_lib::AppState;

pub fn login(state: &AppState, user_id: &str, token: &str) -> Result<()> {
    state
        .credentials
        .save_user(&StoredUser::new(user_id, token))?;
    tracing::info!("Signed in as {}", user_id);
    Ok(())
}

pub fn logout(state: &AppState) -> Result<()> {
    state.credentials.clear_user()?;
    tracing::info!("Signed out");
    Ok(())
}

/// One picker option per line: emoji, label and the key to pass to `--type`.
pub fn render_goal_types() -> String {
    let mut out = String::new();
    for option in goal_type_options() {
        let _ = writeln!(
            out,
            "{} {:<16} --type \"{}\"",
            option.emoji, option.label, option.goal_type
        );
    }
    out
}

/// Fold command-line fields into a draft the same way form edits would be.
pub fn build_draft(name: &str, amount: &str, target_date: &str, goal_type: &str) -> GoalDraft {
    [
        DraftAction::SetName(name.to_string()),
        DraftAction::SetAmount(amount.to_string()),
        DraftAction::SetTargetDate(target_date.to_string()),
        DraftAction::SelectType(goal_type.to_string()),
    ]
    .into_iter()
    .fold(GoalDraft::new(), GoalDraft::apply)
}

pub async fn create_goal(state: &AppState, draft: &GoalDraft) -> Outcome {
    state.goal_service.submit(draft).await
}

pub fn render_outcome(outcome: &Outcome) -> String {
    let alert = outcome.alert();
    format!("{}: {}", alert.title, alert.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalsaver_core::goals::SubmissionFailure;

    #[test]
    fn build_draft_sets_every_field() {
        let draft = build_draft("Trip to Paris", "2000", "2025-12-01", "trip");
        assert_eq!(draft.name, "Trip to Paris");
        assert_eq!(draft.amount, "2000");
        assert_eq!(draft.target_date, "2025-12-01");
        assert_eq!(draft.selected_type, "trip");
    }

    #[test]
    fn goal_types_listing() {
        let listing = render_goal_types();
        assert_eq!(listing.lines().count(), 8);
        assert!(listing.contains("--type \"college fee\""));
        assert!(listing.starts_with("🧳 Trip"));
    }

    #[test]
    fn outcome_rendering() {
        assert_eq!(
            render_outcome(&Outcome::Success),
            "Success: Goal created successfully!"
        );
        assert_eq!(
            render_outcome(&Outcome::IncompleteForm),
            "Error: Please fill in all fields"
        );
        assert_eq!(
            render_outcome(&Outcome::SubmissionFailed(SubmissionFailure::Transport)),
            "Error: Something went wrong"
        );
    }
}
