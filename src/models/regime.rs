//! Composite regime: the single aggregated traffic-light verdict.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Green,
    Yellow,
    Red,
}

impl Regime {
    pub fn emoji(&self) -> &'static str {
        match self {
            Regime::Green => "\u{1F7E2}",
            Regime::Yellow => "\u{1F7E1}",
            Regime::Red => "\u{1F534}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Regime::Green => "green, hold comfortably",
            Regime::Yellow => "yellow, wait and see",
            Regime::Red => "red, defensive",
        }
    }
}

/// Derived each run, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRegime {
    pub regime: Regime,
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
    /// Curve inverted-then-recovered detection, surfaced as the single
    /// highest-severity condition.
    pub reverting: bool,
}
