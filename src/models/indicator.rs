//! Resolved indicator records.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    PolicyRate,
    YieldCurve,
    RecessionProbability,
    Pmi,
    Valuation,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::PolicyRate,
        IndicatorKind::YieldCurve,
        IndicatorKind::RecessionProbability,
        IndicatorKind::Pmi,
        IndicatorKind::Valuation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::PolicyRate => "Fed funds rate",
            IndicatorKind::YieldCurve => "Yield curve (10Y-2Y)",
            IndicatorKind::RecessionProbability => "Sahm rule",
            IndicatorKind::Pmi => "ISM manufacturing PMI",
            IndicatorKind::Valuation => "Shiller CAPE",
        }
    }
}

/// Which candidate in the fallback chain supplied the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTag {
    /// Operator-supplied override from configuration.
    Manual,
    /// An external time-series, identified by its series code.
    Series(String),
    /// A scraped webpage field, identified by page name.
    Page(String),
    /// The hardcoded last-known constant. Possibly stale.
    Fallback,
}

impl SourceTag {
    pub fn series(id: impl Into<String>) -> Self {
        Self::Series(id.into())
    }

    pub fn page(name: impl Into<String>) -> Self {
        Self::Page(name.into())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SourceTag::Fallback)
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTag::Manual => write!(f, "manual"),
            SourceTag::Series(id) => write!(f, "series:{}", id),
            SourceTag::Page(name) => write!(f, "page:{}", name),
            SourceTag::Fallback => write!(f, "fallback"),
        }
    }
}

/// One resolved indicator. `current` is always present once resolution
/// completes; `previous` equals `current` when no prior observation exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIndicator {
    pub kind: IndicatorKind,
    pub current: f64,
    pub previous: f64,
    pub source: SourceTag,
}

impl ResolvedIndicator {
    pub fn new(kind: IndicatorKind, current: f64, previous: f64, source: SourceTag) -> Self {
        Self {
            kind,
            current,
            previous,
            source,
        }
    }

    /// A degenerate record with no prior observation (flat trend).
    pub fn flat(kind: IndicatorKind, value: f64, source: SourceTag) -> Self {
        Self::new(kind, value, value, source)
    }
}

/// All five indicators for one run. PMI and valuation carry static
/// fallbacks and are always present; the rest may resolve to unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub policy_rate: Option<ResolvedIndicator>,
    pub yield_curve: Option<ResolvedIndicator>,
    pub recession: Option<ResolvedIndicator>,
    pub pmi: Option<ResolvedIndicator>,
    pub valuation: Option<ResolvedIndicator>,
}

impl IndicatorSet {
    pub fn get(&self, kind: IndicatorKind) -> Option<&ResolvedIndicator> {
        match kind {
            IndicatorKind::PolicyRate => self.policy_rate.as_ref(),
            IndicatorKind::YieldCurve => self.yield_curve.as_ref(),
            IndicatorKind::RecessionProbability => self.recession.as_ref(),
            IndicatorKind::Pmi => self.pmi.as_ref(),
            IndicatorKind::Valuation => self.valuation.as_ref(),
        }
    }

    /// Resolved indicators in display order, skipping unavailable ones.
    pub fn available(&self) -> impl Iterator<Item = &ResolvedIndicator> {
        IndicatorKind::ALL.iter().filter_map(|kind| self.get(*kind))
    }
}
