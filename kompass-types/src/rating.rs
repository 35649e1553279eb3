//! Rating and recommendation types produced by the scoring engine.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Letter rating tiers for the 0–100 additive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// Top tier.
    A,
    /// Upper-middle tier.
    B,
    /// Lower-middle tier.
    C,
    /// Bottom tier.
    D,
}

impl Rating {
    /// Stable single-letter identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Score cutoffs mapping a 0–100 score onto [`Rating`] tiers.
///
/// A score of at least `a` rates A, at least `b` rates B, at least `c`
/// rates C, anything below rates D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBands {
    /// Minimum score for an A rating.
    pub a: u8,
    /// Minimum score for a B rating.
    pub b: u8,
    /// Minimum score for a C rating.
    pub c: u8,
}

impl RatingBands {
    /// Classify a clipped 0–100 score into a rating tier.
    #[must_use]
    pub const fn classify(&self, score: u8) -> Rating {
        if score >= self.a {
            Rating::A
        } else if score >= self.b {
            Rating::B
        } else if score >= self.c {
            Rating::C
        } else {
            Rating::D
        }
    }
}

impl Default for RatingBands {
    fn default() -> Self {
        Self { a: 85, b: 70, c: 50 }
    }
}

/// Categorical action derived from a score or from raw fundamentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Recommendation {
    /// Accumulate the position.
    Buy,
    /// Keep on the watchlist.
    Watch,
    /// Hold an existing position.
    Hold,
    /// Re-examine before acting.
    Review,
    /// Stay away.
    Avoid,
    /// Not enough data for a verdict.
    Inconclusive,
}

impl Recommendation {
    /// Stable, kebab-case identifier for logs and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Watch => "watch",
            Self::Hold => "hold",
            Self::Review => "review",
            Self::Avoid => "avoid",
            Self::Inconclusive => "inconclusive",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Configurable mapping from [`Rating`] tiers to recommendations.
///
/// Different deployments label the same tiers differently; the mapping is a
/// table rather than a hardcoded chain so presentation variants only swap
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTable {
    /// Recommendation for an A rating.
    pub a: Recommendation,
    /// Recommendation for a B rating.
    pub b: Recommendation,
    /// Recommendation for a C rating.
    pub c: Recommendation,
    /// Recommendation for a D rating.
    pub d: Recommendation,
}

impl RecommendationTable {
    /// Look up the recommendation for a rating tier.
    #[must_use]
    pub const fn lookup(&self, rating: Rating) -> Recommendation {
        match rating {
            Rating::A => self.a,
            Rating::B => self.b,
            Rating::C => self.c,
            Rating::D => self.d,
        }
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self {
            a: Recommendation::Buy,
            b: Recommendation::Watch,
            c: Recommendation::Hold,
            d: Recommendation::Review,
        }
    }
}

/// Result of the additive 0–100 scoring variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Clipped additive score in [0, 100].
    pub score: u8,
    /// Rating tier derived from the score via [`RatingBands`].
    pub rating: Rating,
    /// Recommendation derived from the rating via [`RecommendationTable`].
    pub recommendation: Recommendation,
}

/// Star count in [0, 5] produced by the growth-scan variant.
///
/// Zero is a legitimate "no signal" display value, rendered as `-` rather
/// than an empty string; it is not a stand-in for missing data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// Construct a star rating, saturating at five stars.
    #[must_use]
    pub const fn new(count: u8) -> Self {
        if count > 5 { Self(5) } else { Self(count) }
    }

    /// Number of stars earned.
    #[must_use]
    pub const fn count(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.pad("-")
        } else {
            f.pad(&"*".repeat(usize::from(self.0)))
        }
    }
}

/// Result of the growth-scan scoring variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthSignal {
    /// Number of fulfilled screening predicates.
    pub stars: StarRating,
    /// Heuristic fair P/E derived from the earnings-growth estimate.
    pub fair_pe: f64,
    /// Upside to the analyst price target, when computable.
    pub upside: Option<f64>,
    /// Recommendation from the extended raw-field rules.
    pub recommendation: Recommendation,
}
