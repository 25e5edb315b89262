//! Composite regime evaluation over the available signals.

use crate::models::regime::{CompositeRegime, Regime};
use crate::models::signal::{ClassifiedSignal, Light};

/// One-shot vote over the available lights. Unavailable indicators are
/// omitted from the vote, not counted as neutral.
///
/// The rule is asymmetric by intent: two reds dominate even a green
/// majority, while green needs a zero-red, three-green quorum. With no
/// signals at all the verdict is yellow.
pub fn evaluate_composite(signals: &[ClassifiedSignal]) -> CompositeRegime {
    let mut red = 0;
    let mut yellow = 0;
    let mut green = 0;
    for signal in signals {
        match signal.light {
            Light::Red => red += 1,
            Light::Yellow => yellow += 1,
            Light::Green => green += 1,
        }
    }

    let regime = if red == 0 && green >= 3 {
        Regime::Green
    } else if red >= 2 {
        Regime::Red
    } else {
        Regime::Yellow
    };

    let reverting = signals.iter().any(|s| s.is_reverting());

    CompositeRegime {
        regime,
        red,
        yellow,
        green,
        reverting,
    }
}
