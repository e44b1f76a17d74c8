use crate::domain::entities::SessionIdentity;
use crate::domain::errors::{ApiError, DashboardError};
use crate::domain::ports::{BotApi, ListTarget, OperatorPrompt, Page};
use crate::use_cases::identity::ensure_user_id;

// Lists the guilds the bot shares with the session user: one item per
// guild on success, a single error item when the bot reports a failure.
// Every run replaces the previous rendering wholesale.
pub struct ListGuildsUseCase<A, O, P> {
    pub api: A,
    pub operator: O,
    pub page: P,
}

impl<A, O, P> ListGuildsUseCase<A, O, P>
where
    A: BotApi,
    O: OperatorPrompt,
    P: Page,
{
    pub async fn execute(&self, session: &mut SessionIdentity) -> Result<(), DashboardError> {
        let user_id = ensure_user_id(session, &self.operator)?;

        match self.api.guilds(&user_id).await {
            Ok(guilds) => {
                self.page.clear_list(ListTarget::GuildList);
                for guild in &guilds {
                    self.page.append_list_item(
                        ListTarget::GuildList,
                        &format!(
                            "{} (ID: {}, Members: {})",
                            guild.name, guild.id, guild.member_count
                        ),
                    );
                }
                Ok(())
            }
            Err(ApiError::Upstream { message, .. }) => {
                self.page.clear_list(ListTarget::GuildList);
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.page
                    .append_list_item(ListTarget::GuildList, &format!("Error: {message}"));
                Ok(())
            }
            Err(err @ ApiError::Decode(_)) => {
                // A response did arrive, so the old listing is stale.
                self.page.clear_list(ListTarget::GuildList);
                Err(err.into())
            }
            // No response at all: leave whatever was rendered before.
            Err(err) => Err(err.into()),
        }
    }
}
