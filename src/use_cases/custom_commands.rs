use crate::domain::entities::SessionIdentity;
use crate::domain::errors::{ApiError, DashboardError};
use crate::domain::ports::{BotApi, ListTarget, OperatorPrompt, Page, TextTarget};
use crate::use_cases::identity::ensure_user_id;

// Lists a guild's custom commands, one "name: response" item per command
// in name order. Rendering rules mirror the guild listing: replace on
// success, single error item on an upstream failure.
pub struct ListCommandsUseCase<A, O, P> {
    pub api: A,
    pub operator: O,
    pub page: P,
}

impl<A, O, P> ListCommandsUseCase<A, O, P>
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

        match self.api.custom_commands(&user_id, guild_id).await {
            Ok(commands) => {
                self.page.clear_list(ListTarget::CommandList);
                for (name, command) in &commands {
                    self.page.append_list_item(
                        ListTarget::CommandList,
                        &format!("{name}: {}", command.response),
                    );
                }
                Ok(())
            }
            Err(ApiError::Upstream { message, .. }) => {
                self.page.clear_list(ListTarget::CommandList);
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.page
                    .append_list_item(ListTarget::CommandList, &format!("Error: {message}"));
                Ok(())
            }
            Err(err @ ApiError::Decode(_)) => {
                self.page.clear_list(ListTarget::CommandList);
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

// Creates or replaces one custom command. Blank fields are rejected
// locally, before any identity prompt or request.
pub struct UpsertCommandUseCase<A, O, P> {
    pub api: A,
    pub operator: O,
    pub page: P,
}

impl<A, O, P> UpsertCommandUseCase<A, O, P>
where
    A: BotApi,
    O: OperatorPrompt,
    P: Page,
{
    pub async fn execute(
        &self,
        session: &mut SessionIdentity,
        guild_id: &str,
        name: &str,
        response: &str,
    ) -> Result<(), DashboardError> {
        if name.trim().is_empty() || response.trim().is_empty() {
            self.page.set_text(
                TextTarget::CommandResult,
                "Error: name and response are required",
            );
            return Ok(());
        }

        let user_id = ensure_user_id(session, &self.operator)?;

        match self
            .api
            .upsert_custom_command(&user_id, guild_id, name, response)
            .await
        {
            Ok(updated) => {
                self.page
                    .set_text(TextTarget::CommandResult, &format!("Updated '{updated}'"));
                Ok(())
            }
            Err(ApiError::Upstream { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.page
                    .set_text(TextTarget::CommandResult, &format!("Error: {message}"));
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

// Deletes one custom command by name.
pub struct DeleteCommandUseCase<A, O, P> {
    pub api: A,
    pub operator: O,
    pub page: P,
}

impl<A, O, P> DeleteCommandUseCase<A, O, P>
where
    A: BotApi,
    O: OperatorPrompt,
    P: Page,
{
    pub async fn execute(
        &self,
        session: &mut SessionIdentity,
        guild_id: &str,
        name: &str,
    ) -> Result<(), DashboardError> {
        if name.trim().is_empty() {
            self.page
                .set_text(TextTarget::CommandResult, "Error: a command name is required");
            return Ok(());
        }

        let user_id = ensure_user_id(session, &self.operator)?;

        match self
            .api
            .delete_custom_command(&user_id, guild_id, name)
            .await
        {
            Ok(command) => {
                self.page
                    .set_text(TextTarget::CommandResult, &format!("Deleted '{command}'"));
                Ok(())
            }
            Err(ApiError::Upstream { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.page
                    .set_text(TextTarget::CommandResult, &format!("Error: {message}"));
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
