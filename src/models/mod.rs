//! Shared data models spanning the resolver and signal layers.

pub mod indicator;
pub mod observation;
pub mod regime;
pub mod signal;

pub use indicator::{IndicatorKind, IndicatorSet, ResolvedIndicator, SourceTag};
pub use observation::{RawObservation, RawSeries};
pub use regime::{CompositeRegime, Regime};
pub use signal::{
    ClassifiedSignal, Light, PmiStatus, RiskBand, SignalDetail, Trend, ValuationBand,
};
