//! # lens-regulatory
//!
//! Regulatory knowledge base and the enrichment engine that joins a
//! product's substance codes against it.
//!
//! - [`KnowledgeBase`]: remote table or embedded snapshot, chosen once by
//!   [`connect`]
//! - [`Enricher`]: batched lookup, unknown placeholders, severity ranking,
//!   and the overall verdict

mod enrich;
mod error;
pub mod knowledge_base;

pub use enrich::{
    CONCERN_SEVERITY, Enricher, Enrichment, VERDICT_BANNED, VERDICT_CONCERN, VERDICT_NONE,
    VERDICT_PERMITTED, VERDICT_RESTRICTED, empty_summary, rank, summarize, unknown_finding,
};
pub use error::KnowledgeBaseError;
pub use knowledge_base::{
    EmbeddedKnowledgeBase, KnowledgeBase, KnowledgeBaseSource, RemoteKnowledgeBase, connect,
};
