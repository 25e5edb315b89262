//! Unit tests for the composite regime vote

use macropulse::models::indicator::IndicatorKind;
use macropulse::models::regime::Regime;
use macropulse::models::signal::{ClassifiedSignal, Light, SignalDetail, Trend};
use macropulse::signals::evaluate_composite;

fn signal(light: Light) -> ClassifiedSignal {
    ClassifiedSignal {
        kind: IndicatorKind::PolicyRate,
        light,
        detail: SignalDetail::PolicyRate {
            direction: Trend::Flat,
        },
    }
}

fn curve_signal(light: Light, reverting: bool) -> ClassifiedSignal {
    ClassifiedSignal {
        kind: IndicatorKind::YieldCurve,
        light,
        detail: SignalDetail::YieldCurve {
            inverted: false,
            reverting,
        },
    }
}

#[test]
fn two_reds_dominate_a_green_majority() {
    let signals = vec![
        signal(Light::Red),
        signal(Light::Red),
        signal(Light::Green),
        signal(Light::Green),
        signal(Light::Green),
    ];
    let composite = evaluate_composite(&signals);
    assert_eq!(composite.regime, Regime::Red);
    assert_eq!((composite.red, composite.yellow, composite.green), (2, 0, 3));
}

#[test]
fn green_needs_zero_red_and_three_greens() {
    let signals = vec![
        signal(Light::Green),
        signal(Light::Green),
        signal(Light::Green),
        signal(Light::Yellow),
        signal(Light::Yellow),
    ];
    assert_eq!(evaluate_composite(&signals).regime, Regime::Green);
}

#[test]
fn all_yellow_stays_yellow() {
    let signals = vec![signal(Light::Yellow); 5];
    assert_eq!(evaluate_composite(&signals).regime, Regime::Yellow);
}

#[test]
fn single_red_blocks_green_without_reaching_red() {
    let signals = vec![
        signal(Light::Red),
        signal(Light::Green),
        signal(Light::Green),
        signal(Light::Green),
        signal(Light::Green),
    ];
    assert_eq!(evaluate_composite(&signals).regime, Regime::Yellow);
}

#[test]
fn no_signals_defaults_to_yellow() {
    let composite = evaluate_composite(&[]);
    assert_eq!(composite.regime, Regime::Yellow);
    assert!(!composite.reverting);
}

#[test]
fn reverting_flag_is_surfaced() {
    let signals = vec![
        curve_signal(Light::Red, true),
        signal(Light::Green),
        signal(Light::Green),
        signal(Light::Green),
    ];
    let composite = evaluate_composite(&signals);
    assert!(composite.reverting);
    // one red is not a red regime, but the flag still rides along
    assert_eq!(composite.regime, Regime::Yellow);
}
