//! Indicator resolution with per-source fallback chains.
//!
//! Resolution never fails outright: an indicator whose sources are all
//! exhausted either degrades to a static constant (PMI, valuation) or is
//! reported as unavailable and simply omitted from the composite vote.

pub mod chain;

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ManualOverrides;
use crate::error::SourceError;
use crate::models::indicator::{IndicatorKind, IndicatorSet, ResolvedIndicator, SourceTag};
use crate::services::sources::{TimeSeriesSource, ValuationPageSource};
use chain::{first_success, Candidate};

const POLICY_RATE_SERIES: &str = "FEDFUNDS";
const CURVE_LONG_SERIES: &str = "DGS10";
const CURVE_SHORT_SERIES: &str = "DGS2";
const RECESSION_SERIES: &str = "SAHMREALTIME";

/// PMI candidate series, tried in order. The headline series lags about a
/// month, hence the manual-override escape hatch.
const PMI_SERIES: [&str; 3] = ["NAPM", "NAPMPI", "NAPMNOI"];

/// Last known PMI print, used when every source fails. Possibly stale.
const PMI_FALLBACK: f64 = 49.0;

/// Last known Shiller CAPE, used when every source fails. Possibly stale.
const CAPE_FALLBACK: f64 = 37.0;

/// Automated CAPE readings outside this open interval are discarded and the
/// chain advances; the manual override is trusted as entered.
const CAPE_SANITY: (f64, f64) = (5.0, 100.0);

/// Shiller P/E dataset on the secondary time-series API.
const SHILLER_PE_DATASET: &str = "MULTPL/SHILLER_PE_RATIO_MONTH";

fn check_cape_sanity(value: f64) -> Result<f64, SourceError> {
    let (low, high) = CAPE_SANITY;
    if value > low && value < high {
        Ok(value)
    } else {
        Err(SourceError::OutOfRange { value, low, high })
    }
}

/// Resolves the five indicators sequentially. Sources are injected; a
/// missing source behaves as not-configured and fails fast to the next
/// candidate without a network call.
pub struct IndicatorResolver {
    series: Option<Arc<dyn TimeSeriesSource>>,
    valuation_series: Option<Arc<dyn TimeSeriesSource>>,
    valuation_page: Option<Arc<dyn ValuationPageSource>>,
    overrides: ManualOverrides,
}

impl IndicatorResolver {
    pub fn new(overrides: ManualOverrides) -> Self {
        Self {
            series: None,
            valuation_series: None,
            valuation_page: None,
            overrides,
        }
    }

    /// Primary time-series source (FRED).
    pub fn with_series_source(mut self, source: Arc<dyn TimeSeriesSource>) -> Self {
        self.series = Some(source);
        self
    }

    /// Secondary valuation time-series source (Data Link).
    pub fn with_valuation_series(mut self, source: Arc<dyn TimeSeriesSource>) -> Self {
        self.valuation_series = Some(source);
        self
    }

    /// Valuation webpage source (multpl.com).
    pub fn with_valuation_page(mut self, source: Arc<dyn ValuationPageSource>) -> Self {
        self.valuation_page = Some(source);
        self
    }

    /// Resolve all five indicators, one at a time. Idempotent for identical
    /// source responses; order between indicators is display order only.
    pub async fn resolve_all(&self) -> IndicatorSet {
        let policy_rate = self.resolve_policy_rate().await;
        let yield_curve = self.resolve_yield_curve().await;
        let recession = self.resolve_recession().await;
        let pmi = Some(self.resolve_pmi().await);
        let valuation = Some(self.resolve_valuation().await);

        IndicatorSet {
            policy_rate,
            yield_curve,
            recession,
            pmi,
            valuation,
        }
    }

    /// Filtered numeric values for a series from the primary source,
    /// newest first.
    async fn fetch_values(&self, series_id: &str, limit: usize) -> Result<Vec<f64>, SourceError> {
        let source = self.series.as_ref().ok_or(SourceError::NotConfigured)?;
        let series = source.fetch_series(series_id, limit).await?;
        series.numeric_values()
    }

    async fn resolve_policy_rate(&self) -> Option<ResolvedIndicator> {
        match self.fetch_values(POLICY_RATE_SERIES, 3).await {
            Ok(values) => {
                let current = values[0];
                let previous = values.get(1).copied().unwrap_or(current);
                info!(value = current, "policy rate resolved");
                Some(ResolvedIndicator::new(
                    IndicatorKind::PolicyRate,
                    current,
                    previous,
                    SourceTag::series(POLICY_RATE_SERIES),
                ))
            }
            Err(e) => {
                warn!(error = %e, "policy rate unavailable");
                None
            }
        }
    }

    async fn resolve_yield_curve(&self) -> Option<ResolvedIndicator> {
        let long = self.fetch_values(CURVE_LONG_SERIES, 3).await;
        let short = self.fetch_values(CURVE_SHORT_SERIES, 3).await;
        match (long, short) {
            (Ok(long), Ok(short)) => {
                let spread = long[0] - short[0];
                // previous spread needs a prior point on both legs
                let previous = match (long.get(1), short.get(1)) {
                    (Some(l), Some(s)) => l - s,
                    _ => spread,
                };
                info!(spread = spread, "yield curve resolved");
                Some(ResolvedIndicator::new(
                    IndicatorKind::YieldCurve,
                    spread,
                    previous,
                    SourceTag::series("DGS10-DGS2"),
                ))
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "yield curve unavailable");
                None
            }
        }
    }

    async fn resolve_recession(&self) -> Option<ResolvedIndicator> {
        match self.fetch_values(RECESSION_SERIES, 2).await {
            Ok(values) => {
                let current = values[0];
                let previous = values.get(1).copied().unwrap_or(current);
                info!(value = current, "recession probability resolved");
                Some(ResolvedIndicator::new(
                    IndicatorKind::RecessionProbability,
                    current,
                    previous,
                    SourceTag::series(RECESSION_SERIES),
                ))
            }
            Err(e) => {
                warn!(error = %e, "recession probability unavailable");
                None
            }
        }
    }

    /// First PMI candidate series with at least two usable points.
    async fn pmi_series_values(&self) -> Option<(SourceTag, Vec<f64>)> {
        let candidates = PMI_SERIES
            .iter()
            .copied()
            .map(|id| {
                Candidate::new(
                    SourceTag::series(id),
                    Box::pin(async move {
                        let values = self.fetch_values(id, 3).await?;
                        if values.len() < 2 {
                            return Err(SourceError::Empty);
                        }
                        Ok(values)
                    }),
                )
            })
            .collect();
        first_success(IndicatorKind::Pmi, candidates).await
    }

    /// Never unavailable: manual override, then candidate series, then the
    /// static constant.
    async fn resolve_pmi(&self) -> ResolvedIndicator {
        if let Some(current) = self.overrides.pmi {
            let previous = match self.overrides.pmi_prev {
                Some(prev) => prev,
                None => self
                    .pmi_series_values()
                    .await
                    .and_then(|(_, values)| values.get(1).copied())
                    .unwrap_or(current),
            };
            info!(value = current, "PMI resolved from manual override");
            return ResolvedIndicator::new(
                IndicatorKind::Pmi,
                current,
                previous,
                SourceTag::Manual,
            );
        }

        match self.pmi_series_values().await {
            Some((tag, values)) => {
                let current = values[0];
                let previous = self.overrides.pmi_prev.unwrap_or(values[1]);
                info!(value = current, source = %tag, "PMI resolved");
                ResolvedIndicator::new(IndicatorKind::Pmi, current, previous, tag)
            }
            None => {
                warn!(value = PMI_FALLBACK, "PMI falling back to last known constant, possibly stale");
                ResolvedIndicator::flat(IndicatorKind::Pmi, PMI_FALLBACK, SourceTag::Fallback)
            }
        }
    }

    /// Never unavailable: manual override, page scrape, secondary series,
    /// table export, then the static constant. Automated values must sit
    /// inside the sanity interval or the chain advances.
    async fn resolve_valuation(&self) -> ResolvedIndicator {
        let mut candidates: Vec<Candidate<'_, (f64, Option<f64>)>> = Vec::new();

        if let Some(cape) = self.overrides.cape {
            candidates.push(Candidate::new(
                SourceTag::Manual,
                Box::pin(async move { Ok((cape, None)) }),
            ));
        }

        candidates.push(Candidate::new(
            SourceTag::page("multpl"),
            Box::pin(async move {
                let page = self.valuation_page.as_ref().ok_or(SourceError::NotConfigured)?;
                let value = check_cape_sanity(page.fetch_current().await?)?;
                Ok((value, None))
            }),
        ));

        candidates.push(Candidate::new(
            SourceTag::series(SHILLER_PE_DATASET),
            Box::pin(async move {
                let source = self
                    .valuation_series
                    .as_ref()
                    .ok_or(SourceError::NotConfigured)?;
                let values = source
                    .fetch_series(SHILLER_PE_DATASET, 2)
                    .await?
                    .numeric_values()?;
                let current = check_cape_sanity(values[0])?;
                Ok((current, values.get(1).copied()))
            }),
        ));

        candidates.push(Candidate::new(
            SourceTag::page("multpl-table"),
            Box::pin(async move {
                let page = self.valuation_page.as_ref().ok_or(SourceError::NotConfigured)?;
                let value = check_cape_sanity(page.fetch_table_latest().await?)?;
                Ok((value, None))
            }),
        ));

        match first_success(IndicatorKind::Valuation, candidates).await {
            Some((tag, (current, previous))) => {
                info!(value = current, source = %tag, "valuation resolved");
                ResolvedIndicator::new(
                    IndicatorKind::Valuation,
                    current,
                    previous.unwrap_or(current),
                    tag,
                )
            }
            None => {
                warn!(value = CAPE_FALLBACK, "valuation falling back to last known constant, possibly stale");
                ResolvedIndicator::flat(
                    IndicatorKind::Valuation,
                    CAPE_FALLBACK,
                    SourceTag::Fallback,
                )
            }
        }
    }
}
