//! Unit tests for the per-indicator classification rules

use macropulse::models::indicator::{IndicatorKind, ResolvedIndicator, SourceTag};
use macropulse::models::signal::{
    Light, PmiStatus, RiskBand, SignalDetail, Trend, ValuationBand,
};
use macropulse::signals::classify;

fn resolved(kind: IndicatorKind, current: f64, previous: f64) -> ResolvedIndicator {
    ResolvedIndicator::new(kind, current, previous, SourceTag::series("TEST"))
}

#[test]
fn classify_is_pure() {
    let indicator = resolved(IndicatorKind::PolicyRate, 4.33, 4.58);
    assert_eq!(classify(&indicator), classify(&indicator));
}

#[test]
fn policy_rate_direction_and_colors() {
    let falling = classify(&resolved(IndicatorKind::PolicyRate, 4.33, 4.58));
    assert_eq!(
        falling.detail,
        SignalDetail::PolicyRate {
            direction: Trend::Falling
        }
    );
    assert_eq!(falling.light, Light::Green);

    let rising = classify(&resolved(IndicatorKind::PolicyRate, 4.58, 4.33));
    assert_eq!(rising.light, Light::Red);

    let flat = classify(&resolved(IndicatorKind::PolicyRate, 4.33, 4.33));
    assert_eq!(
        flat.detail,
        SignalDetail::PolicyRate {
            direction: Trend::Flat
        }
    );
    assert_eq!(flat.light, Light::Yellow);
}

#[test]
fn yield_curve_reverting_truth_table() {
    // inversion resolving to positive
    let reverting = classify(&resolved(IndicatorKind::YieldCurve, 0.2, -0.1));
    assert_eq!(
        reverting.detail,
        SignalDetail::YieldCurve {
            inverted: false,
            reverting: true
        }
    );
    assert_eq!(reverting.light, Light::Red);
    assert!(reverting.is_reverting());

    // already positive before: nothing to revert from
    let normal = classify(&resolved(IndicatorKind::YieldCurve, 0.2, 0.1));
    assert!(!normal.is_reverting());
    assert_eq!(normal.light, Light::Green);

    // still inverted: not reverting yet
    let inverted = classify(&resolved(IndicatorKind::YieldCurve, -0.05, -0.1));
    assert_eq!(
        inverted.detail,
        SignalDetail::YieldCurve {
            inverted: true,
            reverting: false
        }
    );
    assert_eq!(inverted.light, Light::Yellow);
}

#[test]
fn recession_bands_at_thresholds() {
    let confirmed = classify(&resolved(IndicatorKind::RecessionProbability, 0.5, 0.4));
    assert_eq!(
        confirmed.detail,
        SignalDetail::Recession {
            band: RiskBand::Confirmed
        }
    );
    assert_eq!(confirmed.light, Light::Red);

    let watch = classify(&resolved(IndicatorKind::RecessionProbability, 0.3, 0.2));
    assert_eq!(
        watch.detail,
        SignalDetail::Recession {
            band: RiskBand::Watch
        }
    );
    assert_eq!(watch.light, Light::Yellow);

    let safe = classify(&resolved(IndicatorKind::RecessionProbability, 0.29, 0.3));
    assert_eq!(
        safe.detail,
        SignalDetail::Recession {
            band: RiskBand::Safe
        }
    );
    assert_eq!(safe.light, Light::Green);
}

#[test]
fn pmi_two_tier_granularity() {
    // weak expansion still shows yellow
    let weak = classify(&resolved(IndicatorKind::Pmi, 51.0, 50.0));
    assert_eq!(
        weak.detail,
        SignalDetail::Pmi {
            status: PmiStatus::Expansion,
            trend: Trend::Rising
        }
    );
    assert_eq!(weak.light, Light::Yellow);

    let strong = classify(&resolved(IndicatorKind::Pmi, 53.0, 52.0));
    assert_eq!(strong.light, Light::Green);

    let deep = classify(&resolved(IndicatorKind::Pmi, 47.0, 48.0));
    assert_eq!(
        deep.detail,
        SignalDetail::Pmi {
            status: PmiStatus::Contraction,
            trend: Trend::Falling
        }
    );
    assert_eq!(deep.light, Light::Red);

    // mild contraction sits in the yellow band
    let mild = classify(&resolved(IndicatorKind::Pmi, 49.0, 49.0));
    assert_eq!(
        mild.detail,
        SignalDetail::Pmi {
            status: PmiStatus::Contraction,
            trend: Trend::Flat
        }
    );
    assert_eq!(mild.light, Light::Yellow);
}

#[test]
fn valuation_narrative_and_color_bands_stay_offset() {
    // 31 reads expensive in the narrative but only yellow on the light
    let offset = classify(&resolved(IndicatorKind::Valuation, 31.0, 31.0));
    assert_eq!(
        offset.detail,
        SignalDetail::Valuation {
            band: ValuationBand::Expensive
        }
    );
    assert_eq!(offset.light, Light::Yellow);

    let red = classify(&resolved(IndicatorKind::Valuation, 34.0, 34.0));
    assert_eq!(red.light, Light::Red);

    // 21 reads fair but already shows green
    let fair_green = classify(&resolved(IndicatorKind::Valuation, 21.0, 21.0));
    assert_eq!(
        fair_green.detail,
        SignalDetail::Valuation {
            band: ValuationBand::Fair
        }
    );
    assert_eq!(fair_green.light, Light::Green);

    let cheap = classify(&resolved(IndicatorKind::Valuation, 19.0, 19.0));
    assert_eq!(
        cheap.detail,
        SignalDetail::Valuation {
            band: ValuationBand::Cheap
        }
    );
    assert_eq!(cheap.light, Light::Green);

    let mid = classify(&resolved(IndicatorKind::Valuation, 25.0, 25.0));
    assert_eq!(
        mid.detail,
        SignalDetail::Valuation {
            band: ValuationBand::Fair
        }
    );
    assert_eq!(mid.light, Light::Yellow);
}
