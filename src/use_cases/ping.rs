use crate::domain::errors::ApiError;
use crate::domain::ports::{BotApi, Page, TextTarget};
use crate::use_cases::pretty_json;

// Liveness check: fetches the ping endpoint and renders whatever JSON the
// bot answered with, indented, into the ping target.
pub struct PingUseCase<A, P> {
    pub api: A,
    pub page: P,
}

impl<A, P> PingUseCase<A, P>
where
    A: BotApi,
    P: Page,
{
    pub async fn execute(&self) -> Result<(), ApiError> {
        let body = self.api.ping().await?;
        self.page.set_text(TextTarget::PingResult, &pretty_json(&body));
        Ok(())
    }
}
