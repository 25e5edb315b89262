//! Classified signals: discrete labels plus a traffic-light color, derived
//! from resolved indicators by pure rules.

use serde::{Deserialize, Serialize};

use crate::models::indicator::IndicatorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Light {
    Green,
    Yellow,
    Red,
}

impl Light {
    pub fn emoji(&self) -> &'static str {
        match self {
            Light::Green => "\u{1F7E2}",
            Light::Yellow => "\u{1F7E1}",
            Light::Red => "\u{1F534}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl Trend {
    pub fn of(current: f64, previous: f64) -> Self {
        if current > previous {
            Trend::Rising
        } else if current < previous {
            Trend::Falling
        } else {
            Trend::Flat
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Flat => "flat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Safe,
    Watch,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PmiStatus {
    Expansion,
    Contraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuationBand {
    Cheap,
    Fair,
    Expensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDetail {
    PolicyRate { direction: Trend },
    YieldCurve { inverted: bool, reverting: bool },
    Recession { band: RiskBand },
    Pmi { status: PmiStatus, trend: Trend },
    Valuation { band: ValuationBand },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSignal {
    pub kind: IndicatorKind,
    pub light: Light,
    pub detail: SignalDetail,
}

impl ClassifiedSignal {
    /// The curve re-steepening after an inversion is the single
    /// highest-severity transition.
    pub fn is_reverting(&self) -> bool {
        matches!(
            self.detail,
            SignalDetail::YieldCurve {
                reverting: true,
                ..
            }
        )
    }

    /// Narrative status phrase used in reports and analysis prompts.
    pub fn status_text(&self) -> String {
        match self.detail {
            SignalDetail::PolicyRate { direction } => match direction {
                Trend::Rising => "hiking".to_string(),
                Trend::Falling => "cutting".to_string(),
                Trend::Flat => "on hold".to_string(),
            },
            SignalDetail::YieldCurve {
                inverted,
                reverting,
            } => {
                if reverting {
                    "re-steepening after inversion".to_string()
                } else if inverted {
                    "inverted".to_string()
                } else {
                    "normal".to_string()
                }
            }
            SignalDetail::Recession { band } => match band {
                RiskBand::Confirmed => "recession signal confirmed".to_string(),
                RiskBand::Watch => "watch zone".to_string(),
                RiskBand::Safe => "safe".to_string(),
            },
            SignalDetail::Pmi { status, trend } => {
                let status = match status {
                    PmiStatus::Expansion => "expansion",
                    PmiStatus::Contraction => "contraction",
                };
                format!("{}, {}", status, trend.word())
            }
            SignalDetail::Valuation { band } => match band {
                ValuationBand::Expensive => "expensive, add with caution".to_string(),
                ValuationBand::Fair => "fair range".to_string(),
                ValuationBand::Cheap => "cheap, good entry window".to_string(),
            },
        }
    }
}
