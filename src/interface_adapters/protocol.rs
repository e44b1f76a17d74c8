use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::{CustomCommand, GuildSummary};

// Header carrying the session user id on privileged requests.
pub const USER_ID_HEADER: &str = "X-User-ID";

// Envelope around the guild listing body.
#[derive(Debug, Deserialize)]
pub struct GuildListResponse {
    pub guilds: Vec<GuildSummary>,
}

// Wire shape of the custom-command listing: command name to definition.
pub type CommandMap = BTreeMap<String, CustomCommand>;

// Failure payload shared by every endpoint. The field is optional because
// some failures arrive with no usable body at all.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

// Payload for creating or replacing a custom command.
#[derive(Debug, Serialize)]
pub struct EditCommandRequest<'a> {
    pub name: &'a str,
    pub response: &'a str,
}

// Acknowledgement for a command upsert; `updated` echoes the stored name.
#[derive(Debug, Deserialize)]
pub struct EditCommandResponse {
    pub status: String,
    pub updated: String,
}

// Acknowledgement for a command deletion.
#[derive(Debug, Deserialize)]
pub struct DeleteCommandResponse {
    pub status: String,
    pub command: String,
}
