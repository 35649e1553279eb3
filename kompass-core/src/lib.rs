//! kompass-core
//!
//! Core types, traits, and the scoring engine shared across the kompass
//! ecosystem.
//!
//! - `types`: common data structures (fundamentals, ratings, configs, errors).
//! - `connector`: the `KompassConnector` trait and capability provider traits.
//! - `normalize`: guarded ratio math and record assembly at the provider boundary.
//! - `score`: the pure, total scoring engine with its two rule variants.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Connector traits are `async_trait` based and assume the Tokio ecosystem as
//! the async runtime; the scoring engine itself is synchronous, allocation-free
//! over its hot path, and has no runtime requirements at all.
#![warn(missing_docs)]

/// Connector capability traits and the primary `KompassConnector` interface.
pub mod connector;
/// Guarded ratio helpers and normalized-record assembly.
pub mod normalize;
/// The scoring engine: ESG-Light and growth-scan rule variants.
pub mod score;
pub mod types;

pub use connector::KompassConnector;
pub use normalize::{assemble, cagr, pct_change, ratio, sanitize};
pub use score::{fair_pe, score_esg_light, score_growth};
pub use types::*;
