//! Per-indicator classification rules.
//!
//! Pure and deterministic: identical inputs always yield identical labels
//! and colors.

use crate::models::indicator::{IndicatorKind, ResolvedIndicator};
use crate::models::signal::{
    ClassifiedSignal, Light, PmiStatus, RiskBand, SignalDetail, Trend, ValuationBand,
};

/// Recession-probability thresholds.
const RECESSION_CONFIRMED: f64 = 0.5;
const RECESSION_WATCH: f64 = 0.3;

/// PMI expansion/contraction boundary and the wider color bands.
const PMI_BOUNDARY: f64 = 50.0;
const PMI_GREEN_ABOVE: f64 = 52.0;
const PMI_RED_BELOW: f64 = 48.0;

/// Valuation narrative bands and color thresholds. These two sets are
/// intentionally offset and must not be unified.
const CAPE_EXPENSIVE_ABOVE: f64 = 30.0;
const CAPE_FAIR_ABOVE: f64 = 20.0;
const CAPE_RED_ABOVE: f64 = 33.0;
const CAPE_YELLOW_ABOVE: f64 = 22.0;

pub fn classify(indicator: &ResolvedIndicator) -> ClassifiedSignal {
    match indicator.kind {
        IndicatorKind::PolicyRate => classify_policy_rate(indicator),
        IndicatorKind::YieldCurve => classify_yield_curve(indicator),
        IndicatorKind::RecessionProbability => classify_recession(indicator),
        IndicatorKind::Pmi => classify_pmi(indicator),
        IndicatorKind::Valuation => classify_valuation(indicator),
    }
}

fn classify_policy_rate(indicator: &ResolvedIndicator) -> ClassifiedSignal {
    let direction = Trend::of(indicator.current, indicator.previous);
    let light = match direction {
        Trend::Falling => Light::Green,
        Trend::Rising => Light::Red,
        Trend::Flat => Light::Yellow,
    };
    ClassifiedSignal {
        kind: indicator.kind,
        light,
        detail: SignalDetail::PolicyRate { direction },
    }
}

fn classify_yield_curve(indicator: &ResolvedIndicator) -> ClassifiedSignal {
    let inverted = indicator.current < 0.0;
    // Inversion resolving back to positive is the highest-risk transition,
    // historically closer to recession onset than the inversion itself.
    let reverting = indicator.previous < 0.0 && indicator.current > 0.0;
    let light = if reverting {
        Light::Red
    } else if inverted {
        Light::Yellow
    } else {
        Light::Green
    };
    ClassifiedSignal {
        kind: indicator.kind,
        light,
        detail: SignalDetail::YieldCurve {
            inverted,
            reverting,
        },
    }
}

fn classify_recession(indicator: &ResolvedIndicator) -> ClassifiedSignal {
    let band = if indicator.current >= RECESSION_CONFIRMED {
        RiskBand::Confirmed
    } else if indicator.current >= RECESSION_WATCH {
        RiskBand::Watch
    } else {
        RiskBand::Safe
    };
    let light = match band {
        RiskBand::Confirmed => Light::Red,
        RiskBand::Watch => Light::Yellow,
        RiskBand::Safe => Light::Green,
    };
    ClassifiedSignal {
        kind: indicator.kind,
        light,
        detail: SignalDetail::Recession { band },
    }
}

fn classify_pmi(indicator: &ResolvedIndicator) -> ClassifiedSignal {
    let status = if indicator.current > PMI_BOUNDARY {
        PmiStatus::Expansion
    } else {
        PmiStatus::Contraction
    };
    let trend = Trend::of(indicator.current, indicator.previous);
    // Color bands are deliberately wider than the 50 boundary, so a weak
    // expansion (50-52) still shows yellow.
    let light = if indicator.current > PMI_GREEN_ABOVE {
        Light::Green
    } else if indicator.current < PMI_RED_BELOW {
        Light::Red
    } else {
        Light::Yellow
    };
    ClassifiedSignal {
        kind: indicator.kind,
        light,
        detail: SignalDetail::Pmi { status, trend },
    }
}

fn classify_valuation(indicator: &ResolvedIndicator) -> ClassifiedSignal {
    let band = if indicator.current > CAPE_EXPENSIVE_ABOVE {
        ValuationBand::Expensive
    } else if indicator.current > CAPE_FAIR_ABOVE {
        ValuationBand::Fair
    } else {
        ValuationBand::Cheap
    };
    let light = if indicator.current > CAPE_RED_ABOVE {
        Light::Red
    } else if indicator.current > CAPE_YELLOW_ABOVE {
        Light::Yellow
    } else {
        Light::Green
    };
    ClassifiedSignal {
        kind: indicator.kind,
        light,
        detail: SignalDetail::Valuation { band },
    }
}
