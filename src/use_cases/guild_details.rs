use crate::domain::entities::SessionIdentity;
use crate::domain::errors::{ApiError, DashboardError};
use crate::domain::ports::{BotApi, OperatorPrompt, Page, TextTarget};
use crate::use_cases::identity::ensure_user_id;

// Shows one guild's counters in the details target. Upstream failures are
// rendered in place, so looking up a guild the bot is not in reads as
// "Error: Guild not found" rather than a blank screen.
pub struct GuildDetailsUseCase<A, O, P> {
    pub api: A,
    pub operator: O,
    pub page: P,
}

impl<A, O, P> GuildDetailsUseCase<A, O, P>
where
    A: BotApi,
    O: OperatorPrompt,
    P: Page,
{
    pub async fn execute(
        &self,
        session: &mut SessionIdentity,
        guild_id: &str,
    ) -> Result<(), DashboardError> {
        let user_id = ensure_user_id(session, &self.operator)?;

        match self.api.guild_details(&user_id, guild_id).await {
            Ok(details) => {
                let text = format!(
                    "{} (ID: {})\nMembers: {}\nMessages seen: {}",
                    details.name, details.id, details.member_count, details.message_count
                );
                self.page.set_text(TextTarget::GuildDetails, &text);
                Ok(())
            }
            Err(ApiError::Upstream { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.page
                    .set_text(TextTarget::GuildDetails, &format!("Error: {message}"));
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
