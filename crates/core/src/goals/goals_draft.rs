//! Goal form state.
//!
//! The draft is a plain value. Front ends never mutate it in place; they feed
//! [`DraftAction`]s through [`GoalDraft::apply`] and re-render from the result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unsubmitted goal form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub name: String,
    /// Raw amount text; parsed only when the request is built
    pub amount: String,
    /// Free-text target date, sent to the server unparsed
    pub target_date: String,
    /// Key of the selected goal type, empty until one is picked
    pub selected_type: String,
}

/// A single user edit to the goal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    SetName(String),
    SetAmount(String),
    SetTargetDate(String),
    SelectType(String),
    Reset,
}

/// Form fields, in the order they appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Amount,
    TargetDate,
    SelectedType,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Name => "name",
            DraftField::Amount => "amount",
            DraftField::TargetDate => "target date",
            DraftField::SelectedType => "goal type",
        };
        f.write_str(label)
    }
}

impl GoalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the draft with `action` applied.
    #[must_use]
    pub fn apply(self, action: DraftAction) -> Self {
        match action {
            DraftAction::SetName(name) => Self { name, ..self },
            DraftAction::SetAmount(amount) => Self { amount, ..self },
            DraftAction::SetTargetDate(target_date) => Self {
                target_date,
                ..self
            },
            DraftAction::SelectType(selected_type) => Self {
                selected_type,
                ..self
            },
            DraftAction::Reset => Self::default(),
        }
    }

    /// Empty fields, in form order. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [
            (DraftField::Name, &self.name),
            (DraftField::Amount, &self.amount),
            (DraftField::TargetDate, &self.target_date),
            (DraftField::SelectedType, &self.selected_type),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
