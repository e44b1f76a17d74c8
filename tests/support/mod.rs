// Shared doubles for the integration tests: a scripted stub of the bot
// dashboard API served over real HTTP with request recording, plus
// in-memory page and operator implementations.
//
// Not every helper is used by every test binary.
#![allow(dead_code)]

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

use dashboard_client::domain::ports::{ListTarget, OperatorPrompt, Page, TextTarget};

// One observed request, as the stub saw it on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    // Path exactly as sent, percent-encoding included.
    pub path: String,
    pub user_id_header: Option<String>,
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<Mutex<HashMap<&'static str, (u16, Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubBot {
    base_url: Url,
    state: StubState,
}

impl StubBot {
    // Binds an ephemeral port so parallel tests never collide.
    pub async fn start() -> Self {
        let state = StubState::default();
        let router = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral test port");
        let addr = listener.local_addr().expect("get local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub bot failed");
        });
        let base_url = Url::parse(&format!("http://{addr}")).expect("stub url should parse");
        Self { base_url, state }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }

    fn script(&self, endpoint: &'static str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .expect("responses mutex poisoned")
            .insert(endpoint, (status, body));
    }

    // For all setters: a `Value::Null` body scripts an empty response body
    // instead of JSON.
    pub fn set_ping(&self, status: u16, body: Value) {
        self.script("ping", status, body);
    }

    pub fn set_user(&self, status: u16, body: Value) {
        self.script("user", status, body);
    }

    pub fn set_guilds(&self, status: u16, body: Value) {
        self.script("guilds", status, body);
    }

    pub fn set_guild_details(&self, status: u16, body: Value) {
        self.script("guild", status, body);
    }

    pub fn set_stats(&self, status: u16, body: Value) {
        self.script("stats", status, body);
    }

    pub fn set_commands(&self, status: u16, body: Value) {
        self.script("ccs_list", status, body);
    }

    pub fn set_edit_result(&self, status: u16, body: Value) {
        self.script("ccs_edit", status, body);
    }

    pub fn set_delete_result(&self, status: u16, body: Value) {
        self.script("ccs_delete", status, body);
    }
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/user/{user_id}", get(user))
        .route("/api/guilds", get(guilds))
        .route("/api/guild/{guild_id}", get(guild_details))
        .route("/api/stats", get(stats))
        .route("/api/guild/{guild_id}/ccs", get(ccs_list).post(ccs_edit))
        .route("/api/guild/{guild_id}/ccs/{name}", delete(ccs_delete))
        .fallback(not_found)
        .with_state(state)
}

fn record(state: &StubState, method: &Method, uri: &Uri, headers: &HeaderMap) {
    let user_id_header = headers
        .get("X-User-ID")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .expect("requests mutex poisoned")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            user_id_header,
        });
}

fn respond(state: &StubState, endpoint: &'static str) -> Response {
    let scripted = state
        .responses
        .lock()
        .expect("responses mutex poisoned")
        .get(endpoint)
        .cloned();
    let (status, body) =
        scripted.unwrap_or((404, json!({"error": format!("{endpoint} not scripted")})));
    let status = StatusCode::from_u16(status).expect("scripted status should be valid");
    match body {
        Value::Null => (status, String::new()).into_response(),
        body => (status, Json(body)).into_response(),
    }
}

async fn ping(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "ping")
}

async fn user(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "user")
}

async fn guilds(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "guilds")
}

async fn guild_details(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "guild")
}

async fn stats(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "stats")
}

async fn ccs_list(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "ccs_list")
}

async fn ccs_edit(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "ccs_edit")
}

async fn ccs_delete(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    respond(&state, "ccs_delete")
}

async fn not_found(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &headers);
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
}

#[derive(Default)]
struct MemoryPageState {
    texts: HashMap<&'static str, String>,
    lists: HashMap<&'static str, Vec<String>>,
}

// Page double keyed by target id. `list` distinguishes a target that was
// never touched (None) from one cleared to empty.
#[derive(Clone, Default)]
pub struct MemoryPage {
    inner: Arc<Mutex<MemoryPageState>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, target: TextTarget) -> Option<String> {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .texts
            .get(target.id())
            .cloned()
    }

    pub fn list(&self, target: ListTarget) -> Option<Vec<String>> {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .lists
            .get(target.id())
            .cloned()
    }
}

impl Page for MemoryPage {
    fn set_text(&self, target: TextTarget, content: &str) {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .texts
            .insert(target.id(), content.to_string());
    }

    fn clear_list(&self, target: ListTarget) {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .lists
            .insert(target.id(), Vec::new());
    }

    fn append_list_item(&self, target: ListTarget, item: &str) {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .lists
            .entry(target.id())
            .or_default()
            .push(item.to_string());
    }
}

// Operator that always answers with the same id, or always declines.
#[derive(Clone)]
pub struct PresetOperator {
    answer: Option<String>,
    prompts: Arc<Mutex<usize>>,
    alerts: Arc<Mutex<Vec<String>>>,
}

impl PresetOperator {
    pub fn answering(user_id: &str) -> Self {
        Self {
            answer: Some(user_id.to_string()),
            prompts: Arc::new(Mutex::new(0)),
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: None,
            prompts: Arc::new(Mutex::new(0)),
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompt_count(&self) -> usize {
        *self.prompts.lock().expect("prompts mutex poisoned")
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts mutex poisoned").clone()
    }
}

impl OperatorPrompt for PresetOperator {
    fn request_user_id(&self) -> Option<String> {
        *self.prompts.lock().expect("prompts mutex poisoned") += 1;
        self.answer.clone()
    }

    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts mutex poisoned")
            .push(message.to_string());
    }
}
