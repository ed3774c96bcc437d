/// Relative endpoint for the remote "create goal" call
pub const CREATE_GOAL_PATH: &str = "/create/goal";

/// Secret store key holding the signed-in user record
pub const USER_SECRET_KEY: &str = "user";

/// Image used when the selected goal type matches no catalog entry
pub const DEFAULT_GOAL_IMAGE: &str = "default.jpg";

/// Reward attached to every goal created through the form
pub const REWARD_NAME: &str = "Laptop Bag";
pub const REWARD_DESCRIPTION: &str = "Get a stylish laptop bag on goal completion.";
pub const REWARD_IMAGE_URL: &str = "laptop-bag.jpg";
