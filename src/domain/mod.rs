// Domain layer: dashboard entities, errors, and the ports the operations
// depend on.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{BotStats, CustomCommand, GuildDetails, GuildSummary, SessionIdentity};
pub use errors::{ApiError, DashboardError};
pub use ports::{BotApi, ListTarget, OperatorPrompt, Page, TextTarget};
