//! Wikipedia search client backing the external lookup panel.
//!
//! One selection triggers one unauthenticated GET against the MediaWiki
//! search endpoint. The client stays deliberately thin: no retries and no
//! timeout beyond the transport default, matching the tool's
//! one-shot-per-selection usage. Callers own query truncation; the client
//! accepts any query length.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::sanitize::strip_span_tags;
use crate::types::RetrievalError;

/// Default MediaWiki API endpoint for English Wikipedia.
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Maximum number of results requested from and returned by a lookup.
pub const RESULT_LIMIT: usize = 3;

/// One normalized lookup hit: article title plus a markup-free excerpt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub excerpt: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    query: QueryBody,
}

#[derive(Deserialize)]
struct QueryBody {
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
    #[serde(default)]
    snippet: String,
}

/// Client for the encyclopedia search endpoint.
///
/// Cheap to clone; the underlying [`reqwest::Client`] pools connections.
/// Point it at a mock server in tests via [`WikipediaClientBuilder::endpoint`].
#[derive(Clone, Debug)]
pub struct WikipediaClient {
    http: Client,
    endpoint: Url,
}

impl WikipediaClient {
    /// Creates a client against the default English Wikipedia endpoint.
    pub fn new() -> Result<Self, RetrievalError> {
        Self::builder().build()
    }

    /// Create a new builder for constructing a `WikipediaClient`.
    pub fn builder() -> WikipediaClientBuilder {
        WikipediaClientBuilder::default()
    }

    /// Performs one free-text search and returns at most [`RESULT_LIMIT`]
    /// results with their snippets stripped of highlight markup.
    ///
    /// Fails on transport errors, non-success HTTP statuses, and response
    /// bodies that do not decode to the expected `query.search` shape.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, RetrievalError> {
        tracing::debug!(query_len = query.len(), "issuing lookup request");

        let srlimit = RESULT_LIMIT.to_string();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("prop", "info"),
                ("inprop", "url"),
                ("utf8", ""),
                ("format", "json"),
                ("origin", "*"),
                ("srlimit", srlimit.as_str()),
                ("srsearch", query),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|err| RetrievalError::Shape(err.to_string()))?;

        let results: Vec<SearchResult> = body
            .query
            .search
            .into_iter()
            .take(RESULT_LIMIT)
            .map(|hit| SearchResult {
                title: hit.title,
                excerpt: strip_span_tags(&hit.snippet),
            })
            .collect();

        tracing::debug!(count = results.len(), "lookup resolved");
        Ok(results)
    }
}

/// Builder for [`WikipediaClient`] instances.
#[derive(Default)]
pub struct WikipediaClientBuilder {
    http: Option<Client>,
    endpoint: Option<String>,
}

impl WikipediaClientBuilder {
    /// Use an existing HTTP client instead of constructing a fresh one.
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the search endpoint.
    ///
    /// Defaults to [`DEFAULT_ENDPOINT`]. Tests point this at a local mock
    /// server.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`WikipediaClient`].
    pub fn build(self) -> Result<WikipediaClient, RetrievalError> {
        let endpoint = Url::parse(
            self.endpoint
                .as_deref()
                .unwrap_or(DEFAULT_ENDPOINT),
        )?;
        Ok(WikipediaClient {
            http: self.http.unwrap_or_default(),
            endpoint,
        })
    }
}
