//! Session state for the reading companion.
//!
//! All derived state the frontend consumes lives in one immutable
//! [`SessionSnapshot`] that is replaced wholesale on every operation, so an
//! observer never sees a half-updated combination of segments, selection,
//! similar set, lookup results, and loading flag.
//!
//! Overlapping lookups resolve latest-request-wins: every selection issues a
//! monotonically increasing token, and a resolving lookup only commits if its
//! token still matches the most recent request. A stale resolution is
//! discarded entirely; it neither writes results nor clears the loading flag,
//! because a newer request owns that flag.

use std::path::Path;
use std::sync::Arc;

use tokio::fs;

use crate::lookup::{SearchResult, WikipediaClient};
use crate::segmenter::{preview, segment};
use crate::similarity::{SimilarityStrategy, TakeFirst};
use crate::types::SessionError;

/// Maximum number of characters of a segment forwarded as a lookup query.
pub const MAX_QUERY_CHARS: usize = 100;

/// Immutable view of everything the presentation layer renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Paragraph segments of the loaded document, in document order.
    pub segments: Vec<String>,
    /// Index of the active segment, if any.
    pub selected: Option<usize>,
    /// Segments suggested for the active segment. Never contains it.
    pub similar: Vec<String>,
    /// Lookup results for the active segment, at most three entries.
    pub results: Vec<SearchResult>,
    /// True while a lookup for the latest selection is still in flight.
    pub is_loading: bool,
}

/// Handle for one in-flight lookup, tying its eventual resolution back to
/// the selection that issued it.
#[derive(Clone, Debug)]
pub struct LookupRequest {
    token: u64,
    query: String,
}

impl LookupRequest {
    /// The query text this request will search for.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Drives segmentation, similar-segment suggestion, and external lookup for
/// one loaded document.
///
/// A session holds exactly one document at a time; loading another replaces
/// the whole snapshot. Each operation swaps in a freshly built snapshot
/// rather than mutating fields in place.
pub struct Session {
    snapshot: SessionSnapshot,
    strategy: Arc<dyn SimilarityStrategy>,
    client: WikipediaClient,
    latest_request: u64,
}

impl Session {
    /// Creates a session with the placeholder [`TakeFirst`] strategy.
    pub fn new(client: WikipediaClient) -> Self {
        Self::with_strategy(client, Arc::new(TakeFirst::default()))
    }

    /// Creates a session with a caller-supplied ranking strategy.
    pub fn with_strategy(client: WikipediaClient, strategy: Arc<dyn SimilarityStrategy>) -> Self {
        Self {
            snapshot: SessionSnapshot::default(),
            strategy,
            client,
            latest_request: 0,
        }
    }

    /// Current derived state.
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Loads a document from raw text, replacing all session state.
    ///
    /// Any lookup still in flight for the previous document becomes stale
    /// and will be discarded when it resolves.
    pub fn load_text(&mut self, text: &str) {
        let segments = segment(text);
        tracing::debug!(segments = segments.len(), "document loaded");
        self.latest_request += 1;
        self.snapshot = SessionSnapshot {
            segments,
            ..SessionSnapshot::default()
        };
    }

    /// Reads a document file and loads its contents.
    ///
    /// On read failure the prior snapshot is left untouched and the error is
    /// returned for the caller to surface.
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let text = fs::read_to_string(path.as_ref()).await?;
        self.load_text(&text);
        Ok(())
    }

    /// Marks the segment at `index` active and returns the lookup request
    /// for it.
    ///
    /// The snapshot is updated in one step: selection and similar set are
    /// set, previous results stay visible, and the loading flag is raised
    /// until the returned request resolves. Out-of-range indices leave the
    /// session untouched.
    pub fn begin_select(&mut self, index: usize) -> Result<LookupRequest, SessionError> {
        let chosen = self
            .snapshot
            .segments
            .get(index)
            .ok_or(SessionError::SelectionOutOfRange {
                index,
                len: self.snapshot.segments.len(),
            })?
            .clone();

        let similar = self.strategy.rank(&chosen, &self.snapshot.segments);
        self.latest_request += 1;
        let token = self.latest_request;

        self.snapshot = SessionSnapshot {
            segments: self.snapshot.segments.clone(),
            selected: Some(index),
            similar,
            results: self.snapshot.results.clone(),
            is_loading: true,
        };

        Ok(LookupRequest {
            token,
            query: preview(&chosen, MAX_QUERY_CHARS).to_string(),
        })
    }

    /// Runs the lookup for `request` and commits its outcome if the request
    /// is still the latest one.
    ///
    /// Lookup failure is recovered here: it is logged and committed as an
    /// empty result list, never propagated. A stale request is dropped
    /// without touching the snapshot.
    pub async fn resolve(&mut self, request: LookupRequest) {
        let results = match self.client.search(&request.query).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed, committing empty results");
                Vec::new()
            }
        };
        self.commit(request, results);
    }

    /// Selects a segment and runs its lookup to completion.
    ///
    /// Convenience path for single-threaded callers that never overlap
    /// lookups; equivalent to [`begin_select`](Self::begin_select) followed
    /// by [`resolve`](Self::resolve).
    pub async fn select(&mut self, index: usize) -> Result<(), SessionError> {
        let request = self.begin_select(index)?;
        self.resolve(request).await;
        Ok(())
    }

    fn commit(&mut self, request: LookupRequest, results: Vec<SearchResult>) {
        if request.token != self.latest_request {
            tracing::debug!(
                token = request.token,
                latest = self.latest_request,
                "discarding stale lookup result"
            );
            return;
        }
        self.snapshot = SessionSnapshot {
            results,
            is_loading: false,
            ..self.snapshot.clone()
        };
    }
}
