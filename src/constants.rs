// Central constants for the command surface and the sweep loop.
pub const COMMAND_PREFIX: &str = "!";
pub const SWEEP_INTERVAL_SECS: u64 = 60;

pub const SERVICES_FILE: &str = "services.json";
pub const SUBSCRIPTIONS_FILE: &str = "subscriptions.json";
