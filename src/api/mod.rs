use crate::models::{GenerateNoteRequest, GenerateNoteResponse, Note, NoteId, NoteInput};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Note {0} not found")]
    NotFound(NoteId),

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Note generation was not successful")]
    GenerationFailed,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }

    /// Map a non-success response. `note_id` is set for `/notes/{id}/` routes,
    /// where a 404 means the note is gone.
    pub(crate) fn from_status(status: u16, body: &str, note_id: Option<NoteId>) -> Self {
        if status == 404 {
            if let Some(id) = note_id {
                return Self::NotFound(id);
            }
        }

        let message = match error_detail(body) {
            Some(detail) => format!("Request failed with status code {status}: {detail}"),
            None => format!("Request failed with status code {status}"),
        };
        Self::Http { status, message }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Pull a readable message out of a backend error body.
///
/// The backend answers with `{"error", "details"}` for generation failures and
/// a `field -> [messages]` map for validation failures. HTML error pages are
/// dropped.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() || body.starts_with('<') {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Some(body.to_string());
    };

    let Some(obj) = value.as_object() else {
        return Some(body.to_string());
    };

    let get_s = |k: &str| obj.get(k).and_then(|v| v.as_str()).map(|s| s.to_string());

    if let Some(error) = get_s("error") {
        return Some(match get_s("details") {
            Some(details) => format!("{error}: {details}"),
            None => error,
        });
    }

    if let Some(detail) = get_s("detail") {
        return Some(detail);
    }

    let fields: Vec<String> = obj
        .iter()
        .map(|(field, msgs)| {
            let text = match msgs {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{field}: {text}")
        })
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields.join("; "))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    /// Resolve the API base URL for the running page.
    ///
    /// `window.ENV.API_BASE_URL` (or `API_URL`) wins over the `API_BASE_URL`
    /// captured at build time.
    pub fn new() -> Self {
        Self::resolve(runtime_api_url(), option_env!("API_BASE_URL"))
    }

    pub(crate) fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let api_url = runtime
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn runtime_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let env = window.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    ["API_BASE_URL", "API_URL"].into_iter().find_map(|key| {
        js_sys::Reflect::get(&env, &key.into())
            .ok()
            .and_then(|v| v.as_string())
            .filter(|s| !s.trim().is_empty())
    })
}

/// The six remote operations the store depends on.
pub(crate) trait NotesBackend {
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;

    async fn get_note(&self, id: NoteId) -> ApiResult<Note>;

    async fn create_note(&self, input: &NoteInput) -> ApiResult<Note>;

    /// Full replacement of title and content.
    async fn update_note(&self, id: NoteId, input: &NoteInput) -> ApiResult<Note>;

    async fn delete_note(&self, id: NoteId) -> ApiResult<()>;

    async fn generate_note(&self, req: &GenerateNoteRequest) -> ApiResult<GenerateNoteResponse>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        body: Option<&impl Serialize>,
    ) -> ApiResult<reqwest::Response> {
        let method = endpoint.method();
        let url = self.url(&endpoint.path());
        tracing::debug!(%method, %url, "sending request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed to send");
            ApiError::network(e)
        })?;

        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body, endpoint.note_id());
        tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "request rejected");
        Err(err)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let res = self.send(endpoint, body).await?;
        res.json().await.map_err(ApiError::parse)
    }
}

/// One REST call of the notes backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    ListNotes,
    GetNote(NoteId),
    CreateNote,
    UpdateNote(NoteId),
    DeleteNote(NoteId),
    GenerateNote,
}

impl Endpoint {
    pub(crate) fn method(self) -> Method {
        match self {
            Endpoint::ListNotes | Endpoint::GetNote(_) => Method::GET,
            Endpoint::CreateNote | Endpoint::GenerateNote => Method::POST,
            Endpoint::UpdateNote(_) => Method::PUT,
            Endpoint::DeleteNote(_) => Method::DELETE,
        }
    }

    /// Path relative to the base URL. Always ends with `/`.
    pub(crate) fn path(self) -> String {
        match self {
            Endpoint::ListNotes | Endpoint::CreateNote => "/notes/".to_string(),
            Endpoint::GetNote(id) | Endpoint::UpdateNote(id) | Endpoint::DeleteNote(id) => {
                format!("/notes/{id}/")
            }
            Endpoint::GenerateNote => "/generate-note/".to_string(),
        }
    }

    /// Set on id routes, where a 404 means the note is gone.
    pub(crate) fn note_id(self) -> Option<NoteId> {
        match self {
            Endpoint::GetNote(id) | Endpoint::UpdateNote(id) | Endpoint::DeleteNote(id) => Some(id),
            Endpoint::ListNotes | Endpoint::CreateNote | Endpoint::GenerateNote => None,
        }
    }
}

impl NotesBackend for ApiClient {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        self.request(Endpoint::ListNotes, None::<&()>).await
    }

    async fn get_note(&self, id: NoteId) -> ApiResult<Note> {
        self.request(Endpoint::GetNote(id), None::<&()>).await
    }

    async fn create_note(&self, input: &NoteInput) -> ApiResult<Note> {
        self.request(Endpoint::CreateNote, Some(input)).await
    }

    async fn update_note(&self, id: NoteId, input: &NoteInput) -> ApiResult<Note> {
        self.request(Endpoint::UpdateNote(id), Some(input)).await
    }

    async fn delete_note(&self, id: NoteId) -> ApiResult<()> {
        self.send(Endpoint::DeleteNote(id), None::<&()>).await?;
        Ok(())
    }

    async fn generate_note(&self, req: &GenerateNoteRequest) -> ApiResult<GenerateNoteResponse> {
        self.request(Endpoint::GenerateNote, Some(req)).await
    }
}
