//! ```text
//! Document text ──► segmenter::segment ──► ordered paragraph segments
//!                                              │
//!                              selection ──────┤
//!                                              │
//!                    ┌─────────────────────────┴──────────────────────┐
//!                    ▼                                                ▼
//!       similarity::SimilarityStrategy                  lookup::WikipediaClient
//!       (TakeFirst placeholder)                         (one search per selection,
//!                    │                                   snippets via sanitize)
//!                    └──────────────► session::Session ◄─────────────┘
//!                                          │
//!                                          ▼
//!                            session::SessionSnapshot
//!                            (segments, selection, similar set,
//!                             lookup results, loading flag)
//! ```
//!
//! Core logic for a document reading companion: split a loaded document into
//! paragraph segments, suggest other segments when one is selected, and fetch
//! related Wikipedia search results for the selection. Rendering and input
//! handling belong to the embedding application; this crate only maintains the
//! derived state such a frontend consumes.

pub mod lookup;
pub mod sanitize;
pub mod segmenter;
pub mod session;
pub mod similarity;
pub mod types;

pub use lookup::{SearchResult, WikipediaClient};
pub use segmenter::segment;
pub use session::{Session, SessionSnapshot};
pub use similarity::{SimilarityStrategy, TakeFirst};
pub use types::{RetrievalError, SessionError};
