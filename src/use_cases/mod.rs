// Use cases: one dashboard operation per module, generic over the domain
// ports so tests can inject fakes.

pub mod custom_commands;
pub mod guild_details;
pub mod identity;
pub mod list_guilds;
pub mod lookup_user;
pub mod ping;
pub mod stats;


use serde_json::Value;

// Stable two-space indented rendering for opaque JSON bodies.
pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
