use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::entities::{BotStats, CustomCommand, GuildDetails, GuildSummary};
use crate::domain::errors::ApiError;

// Port over the remote bot API. Operations depend on this trait, not the
// concrete HTTP client. `identity` is the session user id sent as the
// authentication header on privileged calls.
#[async_trait]
pub trait BotApi: Send + Sync {
    // Liveness check; the body is arbitrary JSON.
    async fn ping(&self) -> Result<Value, ApiError>;

    // Per-user record lookup; the body is arbitrary JSON.
    async fn user(&self, user_id: &str) -> Result<Value, ApiError>;

    // Guilds visible to the authenticated operator, in server order.
    async fn guilds(&self, identity: &str) -> Result<Vec<GuildSummary>, ApiError>;

    // Expanded record for a single guild.
    async fn guild_details(&self, identity: &str, guild_id: &str)
    -> Result<GuildDetails, ApiError>;

    // Fleet-wide counters.
    async fn stats(&self, identity: &str) -> Result<BotStats, ApiError>;

    // Custom commands of a guild, keyed by name.
    async fn custom_commands(
        &self,
        identity: &str,
        guild_id: &str,
    ) -> Result<BTreeMap<String, CustomCommand>, ApiError>;

    // Create or replace a custom command; returns the server-normalized name.
    async fn upsert_custom_command(
        &self,
        identity: &str,
        guild_id: &str,
        name: &str,
        response: &str,
    ) -> Result<String, ApiError>;

    // Delete a custom command; returns the name the server removed.
    async fn delete_custom_command(
        &self,
        identity: &str,
        guild_id: &str,
        name: &str,
    ) -> Result<String, ApiError>;
}

// Port for the blocking operator dialogs.
pub trait OperatorPrompt: Send + Sync {
    // Ask the operator for a user id. None means the dialog was cancelled.
    fn request_user_id(&self) -> Option<String>;

    // Blocking notification the operator has to acknowledge or at least see.
    fn alert(&self, message: &str);
}

// Text blocks the page can display, addressed by stable identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    PingResult,
    UserResult,
    GuildDetails,
    BotStats,
    CommandResult,
}

impl TextTarget {
    pub fn id(self) -> &'static str {
        match self {
            TextTarget::PingResult => "ping-result",
            TextTarget::UserResult => "user-result",
            TextTarget::GuildDetails => "guild-details",
            TextTarget::BotStats => "bot-stats",
            TextTarget::CommandResult => "command-result",
        }
    }
}

// Item lists the page can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    GuildList,
    CommandList,
}

impl ListTarget {
    pub fn id(self) -> &'static str {
        match self {
            ListTarget::GuildList => "guild-list",
            ListTarget::CommandList => "command-list",
        }
    }
}

// Port over the rendering surface. Every operation writes into exactly one
// target and never mutates what it fetched.
pub trait Page: Send + Sync {
    fn set_text(&self, target: TextTarget, content: &str);
    fn clear_list(&self, target: ListTarget);
    fn append_list_item(&self, target: ListTarget, item: &str);
}
