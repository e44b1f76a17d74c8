use serde::Deserialize;

// Serde on these records is a boundary leak into the domain, but it keeps
// the decode path thin.

// Operator identity attached to privileged requests. Owned by the page
// controller; set once, read thereafter, cleared only by process exit.
#[derive(Debug, Default)]
pub struct SessionIdentity {
    pub user_id: Option<String>,
}

// One guild row from the listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct GuildSummary {
    pub id: String,
    pub name: String,
    pub member_count: u64,
}

// Expanded per-guild record, including the message counter the bot tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct GuildDetails {
    pub id: String,
    pub name: String,
    pub member_count: u64,
    pub message_count: u64,
}

// Fleet-wide counters reported by the bot.
#[derive(Debug, Clone, Deserialize)]
pub struct BotStats {
    pub total_guilds: u64,
    pub total_users: u64,
    pub cogs_loaded: Vec<String>,
}

// Canned response managed per guild, keyed by its lowercase command name.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomCommand {
    pub response: String,
}
