use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with orchestrator endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Valuation, profitability, and balance-sheet fundamentals snapshot.
    Fundamentals,
    /// Company profile (name, sector, industry).
    Profile,
    /// ESG sustainability scores.
    Esg,
    /// Trailing price performance windows.
    Performance,

    /// Aggregate: normalized fundamentals record assembled from the above.
    Snapshot,
    /// Aggregate: batch scoring across a list of instruments.
    Screen,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fundamentals => "fundamentals",
            Self::Profile => "profile",
            Self::Esg => "esg",
            Self::Performance => "performance",
            Self::Snapshot => "snapshot",
            Self::Screen => "screen",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
