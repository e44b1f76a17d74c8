use crate::domain::entities::SessionIdentity;
use crate::domain::errors::{ApiError, DashboardError};
use crate::domain::ports::{BotApi, OperatorPrompt, Page, TextTarget};
use crate::use_cases::identity::ensure_user_id;

// Renders bot-wide counters into the stats target.
pub struct StatsUseCase<A, O, P> {
    pub api: A,
    pub operator: O,
    pub page: P,
}

impl<A, O, P> StatsUseCase<A, O, P>
where
    A: BotApi,
    O: OperatorPrompt,
    P: Page,
{
    pub async fn execute(&self, session: &mut SessionIdentity) -> Result<(), DashboardError> {
        let user_id = ensure_user_id(session, &self.operator)?;

        match self.api.stats(&user_id).await {
            Ok(stats) => {
                let text = format!(
                    "Guilds: {}\nUsers: {}\nCogs loaded: {}",
                    stats.total_guilds,
                    stats.total_users,
                    stats.cogs_loaded.join(", ")
                );
                self.page.set_text(TextTarget::BotStats, &text);
                Ok(())
            }
            Err(ApiError::Upstream { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.page
                    .set_text(TextTarget::BotStats, &format!("Error: {message}"));
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
