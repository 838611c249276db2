/// Default path of the usage JSON exported from Railway.
pub const DEFAULT_USAGE_FILE: &str = "usage.json";

/// Default path of the state file carried between runs.
pub const DEFAULT_STATE_FILE: &str = "usage_state.json";
