//! Fixed catalog of goal categories offered by the goal picker.

use serde::Serialize;

use crate::constants::DEFAULT_GOAL_IMAGE;

/// A selectable goal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTypeOption {
    /// Unique key sent back by the picker
    #[serde(rename = "type")]
    pub goal_type: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    /// Asset filename used as the goal's image
    pub image: &'static str,
}

const GOAL_TYPE_OPTIONS: [GoalTypeOption; 8] = [
    GoalTypeOption {
        goal_type: "trip",
        emoji: "🧳",
        label: "Trip",
        image: "trip.jpg",
    },
    GoalTypeOption {
        goal_type: "laptop",
        emoji: "💻",
        label: "Laptop",
        image: "laptop.jpg",
    },
    GoalTypeOption {
        goal_type: "college fee",
        emoji: "🎓",
        label: "College Fee",
        image: "college-fee.jpg",
    },
    GoalTypeOption {
        goal_type: "game",
        emoji: "🎮",
        label: "Game",
        image: "game.jpg",
    },
    GoalTypeOption {
        goal_type: "future savings",
        emoji: "💰",
        label: "Future Savings",
        image: "future.jpg",
    },
    GoalTypeOption {
        goal_type: "emergency funds",
        emoji: "🛡",
        label: "Emergency Funds",
        image: "emergency.jpg",
    },
    GoalTypeOption {
        goal_type: "electronics",
        emoji: "📱",
        label: "Electronics",
        image: "electronics.jpg",
    },
    GoalTypeOption {
        goal_type: "accessories",
        emoji: "👜",
        label: "Accessories",
        image: "accessories.jpg",
    },
];

/// All goal categories, in picker order.
pub fn goal_type_options() -> &'static [GoalTypeOption] {
    &GOAL_TYPE_OPTIONS
}

/// Exact, case-sensitive lookup by key.
pub fn find_goal_type(goal_type: &str) -> Option<&'static GoalTypeOption> {
    GOAL_TYPE_OPTIONS.iter().find(|o| o.goal_type == goal_type)
}

/// Image for the given key, or the default image when the key is unknown.
pub fn image_for_type(goal_type: &str) -> &'static str {
    find_goal_type(goal_type)
        .map(|o| o.image)
        .unwrap_or(DEFAULT_GOAL_IMAGE)
}
