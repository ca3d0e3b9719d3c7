//! Repository methods, implemented directly on [`crate::LensDb`].

pub mod flags;
pub mod products;
pub mod regulatory;
pub mod scans;
pub mod substances;
