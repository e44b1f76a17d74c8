use crate::domain::errors::ApiError;
use crate::domain::ports::{BotApi, Page, TextTarget};
use crate::use_cases::pretty_json;

// Looks up a user record by id and renders the body, indented, into the
// user target. The identifier is passed through verbatim; the transport
// layer is responsible for keeping it a single path segment.
pub struct LookupUserUseCase<A, P> {
    pub api: A,
    pub page: P,
}

impl<A, P> LookupUserUseCase<A, P>
where
    A: BotApi,
    P: Page,
{
    pub async fn execute(&self, user_id: &str) -> Result<(), ApiError> {
        let body = self.api.user(user_id).await?;
        self.page.set_text(TextTarget::UserResult, &pretty_json(&body));
        Ok(())
    }
}
