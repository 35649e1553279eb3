//! Instrument identity types used across connectors and the orchestrator.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::KompassError;

/// Asset classes a connector may declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AssetKind {
    /// Common stock.
    Equity,
    /// Exchange-traded fund.
    Etf,
    /// Market index.
    Index,
    /// Mutual fund.
    Fund,
}

/// Canonical ticker symbol: non-empty, no whitespace, uppercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Parse and canonicalize a ticker symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the input is empty or contains whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, KompassError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(KompassError::InvalidArg("empty symbol".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(KompassError::InvalidArg(format!(
                "symbol '{trimmed}' contains whitespace"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the canonical symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tradable instrument: a canonical symbol plus its asset kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    symbol: Symbol,
    kind: AssetKind,
}

impl Instrument {
    /// Build an instrument from a raw symbol string and asset kind.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol fails canonicalization.
    pub fn from_symbol(symbol: &str, kind: AssetKind) -> Result<Self, KompassError> {
        Ok(Self {
            symbol: Symbol::new(symbol)?,
            kind,
        })
    }

    /// Shorthand for an equity instrument.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol fails canonicalization.
    pub fn equity(symbol: &str) -> Result<Self, KompassError> {
        Self::from_symbol(symbol, AssetKind::Equity)
    }

    /// The canonical symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The canonical symbol as a borrowed string.
    #[must_use]
    pub fn symbol_str(&self) -> &str {
        self.symbol.as_str()
    }

    /// The declared asset kind.
    #[must_use]
    pub const fn kind(&self) -> AssetKind {
        self.kind
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol.as_str())
    }
}
