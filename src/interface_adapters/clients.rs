use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{BotStats, CustomCommand, GuildDetails, GuildSummary};
use crate::domain::errors::ApiError;
use crate::domain::ports::BotApi;
use crate::interface_adapters::protocol::{
    CommandMap, DeleteCommandResponse, EditCommandRequest, EditCommandResponse, ErrorBody,
    GuildListResponse, USER_ID_HEADER,
};

// HTTP client for the bot dashboard API.
#[derive(Debug, Clone)]
pub struct BotClient {
    http: Client,
    base_url: Url,
}

impl BotClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    // Builds an endpoint URL under the configured base. Each segment is
    // escaped so a caller-supplied identifier always stays one segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|err| ApiError::Transport(Box::new(err)))
    }

    // Splits a response into a decoded success body or an upstream error,
    // keeping the server-supplied message when one can be read.
    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let status = res.status();
        if !status.is_success() {
            let message = res.json::<ErrorBody>().await.ok().and_then(|body| body.error);
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        res.json::<T>()
            .await
            .map_err(|err| ApiError::Decode(Box::new(err)))
    }
}

#[async_trait]
impl BotApi for BotClient {
    async fn ping(&self) -> Result<Value, ApiError> {
        let url = self.endpoint(&["api", "ping"]);
        let res = self.send(self.http.get(url)).await?;
        Self::decode(res).await
    }

    async fn user(&self, user_id: &str) -> Result<Value, ApiError> {
        let url = self.endpoint(&["api", "user", user_id]);
        let res = self.send(self.http.get(url)).await?;
        Self::decode(res).await
    }

    async fn guilds(&self, identity: &str) -> Result<Vec<GuildSummary>, ApiError> {
        let url = self.endpoint(&["api", "guilds"]);
        let res = self
            .send(self.http.get(url).header(USER_ID_HEADER, identity))
            .await?;
        let body: GuildListResponse = Self::decode(res).await?;
        Ok(body.guilds)
    }

    async fn guild_details(&self, identity: &str, guild_id: &str) -> Result<GuildDetails, ApiError> {
        let url = self.endpoint(&["api", "guild", guild_id]);
        let res = self
            .send(self.http.get(url).header(USER_ID_HEADER, identity))
            .await?;
        Self::decode(res).await
    }

    async fn stats(&self, identity: &str) -> Result<BotStats, ApiError> {
        let url = self.endpoint(&["api", "stats"]);
        let res = self
            .send(self.http.get(url).header(USER_ID_HEADER, identity))
            .await?;
        Self::decode(res).await
    }

    async fn custom_commands(
        &self,
        identity: &str,
        guild_id: &str,
    ) -> Result<BTreeMap<String, CustomCommand>, ApiError> {
        let url = self.endpoint(&["api", "guild", guild_id, "ccs"]);
        let res = self
            .send(self.http.get(url).header(USER_ID_HEADER, identity))
            .await?;
        Self::decode::<CommandMap>(res).await
    }

    async fn upsert_custom_command(
        &self,
        identity: &str,
        guild_id: &str,
        name: &str,
        response: &str,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(&["api", "guild", guild_id, "ccs"]);
        let payload = EditCommandRequest { name, response };
        let res = self
            .send(
                self.http
                    .post(url)
                    .header(USER_ID_HEADER, identity)
                    .json(&payload),
            )
            .await?;
        let body: EditCommandResponse = Self::decode(res).await?;
        Ok(body.updated)
    }

    async fn delete_custom_command(
        &self,
        identity: &str,
        guild_id: &str,
        name: &str,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(&["api", "guild", guild_id, "ccs", name]);
        let res = self
            .send(self.http.delete(url).header(USER_ID_HEADER, identity))
            .await?;
        let body: DeleteCommandResponse = Self::decode(res).await?;
        Ok(body.command)
    }
}
