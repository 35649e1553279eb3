//! The scoring engine.
//!
//! Two rule variants over the same normalized [`FundamentalsRecord`]
//! (`kompass_types::FundamentalsRecord`), consolidated behind explicit
//! configuration tables instead of duplicated inline rules:
//!
//! - [`score_esg_light`]: additive 0–100 threshold score with letter rating
//!   and a configurable recommendation mapping.
//! - [`score_growth`]: five unweighted screening predicates yielding a 0–5
//!   star count, plus an extended recommendation from raw fundamentals.
//!
//! Both variants are pure and total: any missing input makes the affected
//! predicate contribute nothing, and no input can make them fail. Batches
//! may be scored independently and in parallel; there is no shared state.

pub mod esg_light;
pub mod growth;

pub use esg_light::score_esg_light;
pub use growth::{fair_pe, score_growth};
