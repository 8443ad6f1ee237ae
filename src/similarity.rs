//! Pluggable ranking of candidate segments for a selected segment.
//!
//! The session consumes a [`SimilarityStrategy`] trait object so a real
//! semantic ranking implementation can be swapped in without touching the
//! calling code. The bundled [`TakeFirst`] strategy is a placeholder policy,
//! not a similarity measure.

/// Ranks candidate segments against a chosen segment.
///
/// Implementations must never include `chosen` (by value equality) in the
/// returned sequence.
pub trait SimilarityStrategy: Send + Sync {
    /// Returns a ranked, bounded sequence of candidates for `chosen`.
    fn rank(&self, chosen: &str, candidates: &[String]) -> Vec<String>;
}

/// Placeholder strategy: the first `limit` candidates that are not the
/// chosen segment, in original document order.
///
/// This is NOT a semantic similarity measure. It exists so the surrounding
/// pipeline has a deterministic, total ranking to drive; replacing it with a
/// real ranker is an intentional extension point, and any such replacement
/// should be flagged as a behavior change rather than slipped in silently.
#[derive(Debug, Clone)]
pub struct TakeFirst {
    limit: usize,
}

impl TakeFirst {
    /// Creates a strategy returning at most `limit` candidates.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TakeFirst {
    /// Defaults to the three-candidate bound the session renders.
    fn default() -> Self {
        Self::new(3)
    }
}

impl SimilarityStrategy for TakeFirst {
    fn rank(&self, chosen: &str, candidates: &[String]) -> Vec<String> {
        candidates
            .iter()
            .filter(|candidate| candidate.as_str() != chosen)
            .take(self.limit)
            .cloned()
            .collect()
    }
}
