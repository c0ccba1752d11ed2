//! services/client/src/adapters/http.rs
//!
//! This module contains the HTTP adapter for the notes backend. One
//! [`HttpBackend`] implements the `AuthService`, `NoteProcessingService` and
//! `NoteStorageService` ports from the `core` crate using [`reqwest`].
//!
//! Responses are decoded from their JSON envelope whatever the status code:
//! the envelope, not the status, says whether the backend accepted a request.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use notes_beautifier_core::{
    domain::{AuthGrant, DraftNote, Note, Reply, ReplyFailure, Summary, User},
    ports::{
        AuthService, LoginCredentials, NoteProcessingService, NoteStorageService, PortError,
        PortResult, Registration,
    },
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// HTTP client for one backend instance.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a new `HttpBackend`.
    ///
    /// * `base_url` - e.g. `http://localhost:5000`; a trailing `/` is ignored.
    /// * `timeout` - per-request deadline, or `None` for none at all.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Creates an adapter reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a prepared request and decodes the JSON envelope.
    async fn exchange<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> PortResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| PortError::Decode(format!("HTTP {}: {}", status.as_u16(), e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> PortResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::exchange(request).await
    }

    async fn post<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> PortResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let mut request = self.client.post(url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::exchange(request).await
    }
}

//=========================================================================================
// "Impure" Wire Records
//=========================================================================================

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
}
impl UserRecord {
    fn to_domain(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

/// The `message`/`error` pair every envelope may carry.
#[derive(Deserialize, Default)]
#[serde(default)]
struct FailureFields {
    message: Option<String>,
    error: Option<String>,
}
impl FailureFields {
    fn to_domain(self) -> ReplyFailure {
        ReplyFailure {
            message: self.message,
            error: self.error,
        }
    }
}

#[derive(Deserialize)]
struct MeRecord {
    #[serde(default)]
    user: Option<UserRecord>,
    #[serde(flatten)]
    failure: FailureFields,
}
impl MeRecord {
    fn to_domain(self) -> Reply<User> {
        match self.user {
            Some(user) => Reply::Success(user.to_domain()),
            None => Reply::Failure(self.failure.to_domain()),
        }
    }
}

#[derive(Deserialize)]
struct AuthRecord {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<UserRecord>,
    #[serde(flatten)]
    failure: FailureFields,
}
impl AuthRecord {
    fn to_domain(self) -> Reply<AuthGrant> {
        match non_empty(self.token) {
            Some(token) => Reply::Success(AuthGrant {
                token,
                user: self.user.map(UserRecord::to_domain),
            }),
            None => Reply::Failure(self.failure.to_domain()),
        }
    }
}

#[derive(Deserialize)]
struct BeautifyRecord {
    #[serde(default)]
    result: Option<String>,
    #[serde(flatten)]
    failure: FailureFields,
}
impl BeautifyRecord {
    fn to_domain(self) -> Reply<String> {
        match non_empty(self.result) {
            Some(result) => Reply::Success(result),
            None => Reply::Failure(self.failure.to_domain()),
        }
    }
}

#[derive(Deserialize)]
struct SummaryRecord {
    #[serde(default, rename = "summaryText")]
    summary_text: Option<String>,
    #[serde(default)]
    takeaways: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct SummarizeRecord {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<SummaryRecord>,
    #[serde(flatten)]
    failure: FailureFields,
}
impl SummarizeRecord {
    fn to_domain(self) -> PortResult<Reply<Summary>> {
        if !self.success {
            return Ok(Reply::Failure(self.failure.to_domain()));
        }
        let data = self.data.ok_or_else(|| {
            PortError::Decode("summarize reported success without data".to_string())
        })?;
        Ok(Reply::Success(Summary {
            summary_text: data.summary_text.unwrap_or_default(),
            takeaways: data.takeaways.unwrap_or_default(),
        }))
    }
}

#[derive(Deserialize)]
struct AckRecord {
    #[serde(default)]
    success: bool,
    #[serde(flatten)]
    failure: FailureFields,
}
impl AckRecord {
    fn to_domain(self) -> Reply<()> {
        if self.success {
            Reply::Success(())
        } else {
            Reply::Failure(self.failure.to_domain())
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteRecord {
    #[serde(default, rename = "_id", alias = "id")]
    id: Option<String>,
    #[serde(default)]
    raw_text: Option<String>,
    #[serde(default)]
    beautified_text: Option<String>,
    #[serde(default)]
    summary_text: Option<String>,
    #[serde(default)]
    takeaways: Option<Vec<String>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}
impl NoteRecord {
    fn to_domain(self) -> Note {
        Note {
            id: self.id,
            raw_text: self.raw_text.unwrap_or_default(),
            beautified_text: self.beautified_text.unwrap_or_default(),
            summary_text: self.summary_text.unwrap_or_default(),
            takeaways: self.takeaways.unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

#[derive(Deserialize)]
struct NotesRecord {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<NoteRecord>>,
    #[serde(flatten)]
    failure: FailureFields,
}
impl NotesRecord {
    fn to_domain(self) -> Reply<Vec<Note>> {
        if !self.success {
            return Reply::Failure(self.failure.to_domain());
        }
        let notes = self
            .data
            .unwrap_or_default()
            .into_iter()
            .map(NoteRecord::to_domain)
            .collect();
        Reply::Success(notes)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveRequest<'a> {
    raw_text: &'a str,
    beautified_text: &'a str,
    summary_text: &'a str,
    takeaways: &'a [String],
}

//=========================================================================================
// Port Implementations
//=========================================================================================

#[async_trait]
impl AuthService for HttpBackend {
    async fn current_user(&self, token: &str) -> PortResult<Reply<User>> {
        let record: MeRecord = self.get("/api/auth/me", Some(token)).await?;
        Ok(record.to_domain())
    }

    async fn login(&self, credentials: &LoginCredentials) -> PortResult<Reply<AuthGrant>> {
        let body = serde_json::json!({
            "email": credentials.email,
            "password": credentials.password,
        });
        let record: AuthRecord = self.post("/api/auth/login", None, &body).await?;
        Ok(record.to_domain())
    }

    async fn register(&self, registration: &Registration) -> PortResult<Reply<AuthGrant>> {
        let body = serde_json::json!({
            "name": registration.name,
            "email": registration.email,
            "password": registration.password,
        });
        let record: AuthRecord = self.post("/api/auth/register", None, &body).await?;
        Ok(record.to_domain())
    }
}

#[async_trait]
impl NoteProcessingService for HttpBackend {
    async fn beautify(&self, token: &str, content: &str) -> PortResult<Reply<String>> {
        let body = serde_json::json!({ "content": content });
        let record: BeautifyRecord = self.post("/api/beautify", Some(token), &body).await?;
        Ok(record.to_domain())
    }

    async fn summarize(&self, token: &str, text: &str) -> PortResult<Reply<Summary>> {
        let body = serde_json::json!({ "text": text });
        let record: SummarizeRecord = self.post("/api/summarize", Some(token), &body).await?;
        record.to_domain()
    }
}

#[async_trait]
impl NoteStorageService for HttpBackend {
    async fn save(&self, token: &str, draft: &DraftNote) -> PortResult<Reply<()>> {
        let body = SaveRequest {
            raw_text: &draft.raw_text,
            beautified_text: &draft.beautified_text,
            summary_text: &draft.summary_text,
            takeaways: &draft.takeaways,
        };
        let record: AckRecord = self.post("/api/save", Some(token), &body).await?;
        Ok(record.to_domain())
    }

    async fn list(&self) -> PortResult<Reply<Vec<Note>>> {
        // Sent without a bearer token, unlike every other data endpoint.
        let record: NotesRecord = self.get("/api/notes", None).await?;
        Ok(record.to_domain())
    }
}
