//! # lens-resolver
//!
//! Resolution Controller for Truth Lens.
//!
//! [`Resolver::resolve`] checks the store, falls back to the catalog on a
//! miss, answers immediately from the catalog payload, and hands the write
//! to a bounded background queue ([`PersistenceQueue`]). Either way the
//! product is decorated with regulatory findings before it is returned.

mod error;
mod persist;
mod resolver;

pub use error::ResolveError;
pub use persist::{PersistJob, PersistenceQueue, QueueCounters, SCAN_INTENT};
pub use resolver::{Origin, ResolvedProduct, Resolver};
