//! Knowledge base error types.

use thiserror::Error;

/// Errors from reading the regulatory knowledge base.
///
/// The embedded table never fails; only the remote store does.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base store error: {0}")]
    Store(#[from] lens_db::DatabaseError),
}
