//! Report rendering: the monthly summary message and the analysis prompt
//! lines, both derived from the resolved set.

use crate::models::indicator::{IndicatorKind, IndicatorSet, ResolvedIndicator, SourceTag};
use crate::models::regime::CompositeRegime;
use crate::models::signal::ClassifiedSignal;
use crate::services::telegram::MESSAGE_SPLIT_THRESHOLD;
use crate::signals::classify;

const DIVIDER: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

const SOURCE_LINKS: &str = "\u{2022} <a href='https://www.cmegroup.com/markets/interest-rates/cme-fedwatch-tool.html'>Rate expectations \u{b7} CME FedWatch</a>\n\
\u{2022} <a href='https://fred.stlouisfed.org/graph/?g=A9Ed'>Yield curve \u{b7} FRED (10Y-2Y)</a>\n\
\u{2022} <a href='https://fred.stlouisfed.org/series/SAHMREALTIME'>Sahm rule \u{b7} FRED</a>\n\
\u{2022} <a href='https://www.ismworld.org/supply-management-news-and-reports/reports/ism-report-on-business/pmi/'>ISM PMI \u{b7} official site</a>\n\
\u{2022} <a href='https://www.multpl.com/shiller-pe'>Shiller CAPE \u{b7} multpl.com</a>";

pub struct MonthlyReport {
    pub summary: String,
    pub analysis_section: String,
    pub full: String,
}

fn value_text(indicator: &ResolvedIndicator) -> String {
    match indicator.kind {
        IndicatorKind::PolicyRate => format!("{}%", indicator.current),
        IndicatorKind::YieldCurve => format!("{:.2}%", indicator.current),
        _ => format!("{}", indicator.current),
    }
}

fn source_marker(indicator: &ResolvedIndicator) -> &'static str {
    match indicator.source {
        SourceTag::Manual => " (manual)",
        SourceTag::Fallback => " (possibly stale)",
        _ => "",
    }
}

fn reverting_marker(signal: &ClassifiedSignal) -> &'static str {
    if signal.is_reverting() {
        "\u{26A0}\u{FE0F} "
    } else {
        ""
    }
}

/// Message-style lines for the available indicators.
pub fn summary_lines(set: &IndicatorSet) -> Vec<String> {
    set.available()
        .map(|indicator| {
            let signal = classify(indicator);
            format!(
                "\u{1F4CC} {} {} \u{b7} {}{}{}",
                indicator.kind.name(),
                value_text(indicator),
                reverting_marker(&signal),
                signal.status_text(),
                source_marker(indicator),
            )
        })
        .collect()
}

/// Prompt-style lines covering all five indicators, including explicit
/// data-missing lines for unavailable ones.
pub fn prompt_lines(set: &IndicatorSet) -> Vec<String> {
    IndicatorKind::ALL
        .iter()
        .map(|kind| match set.get(*kind) {
            Some(indicator) => {
                let signal = classify(indicator);
                format!(
                    "{}: {}, {}{}",
                    kind.name(),
                    value_text(indicator),
                    signal.status_text(),
                    source_marker(indicator),
                )
            }
            None => format!("{}: data missing", kind.name()),
        })
        .collect()
}

fn lights_row(set: &IndicatorSet) -> String {
    set.available()
        .map(|indicator| classify(indicator).light.emoji())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(
    period_label: &str,
    set: &IndicatorSet,
    composite: &CompositeRegime,
    analysis: &str,
) -> MonthlyReport {
    let lines = summary_lines(set);
    let indicators_block = if lines.is_empty() {
        "(set FRED_API_KEY to enable series data)".to_string()
    } else {
        lines.join("\n")
    };

    let reverting_note = if composite.reverting {
        "\n\u{26A0}\u{FE0F} <b>Curve re-steepening after inversion \u{b7} highest-risk transition</b>"
    } else {
        ""
    };

    let summary = format!(
        "\u{1F4CA} <b>Monthly market check \u{b7} {period}</b>\n\n\
         <b>Five indicators</b>\n{indicators}\n\n\
         <b>Lights</b>  {lights}\n\
         <b>Overall: {emoji} {label}</b>{reverting}",
        period = period_label,
        indicators = indicators_block,
        lights = lights_row(set),
        emoji = composite.regime.emoji(),
        label = composite.regime.label(),
        reverting = reverting_note,
    );

    let analysis_section = format!(
        "<b>\u{1F916} Analysis and positioning</b>\n\n{analysis}\n\n\
         <i>This is information, not investment advice.</i>"
    );

    let full = format!(
        "{summary}\n\n{DIVIDER}\n\n{analysis_section}\n\n{DIVIDER}\n\
         <b>\u{1F4CE} Sources</b>\n{SOURCE_LINKS}"
    );

    MonthlyReport {
        summary,
        analysis_section,
        full,
    }
}

/// Transport-sized parts, in delivery order. Reports within the limit go
/// out as one message; longer ones as summary then analysis.
pub fn message_parts(report: &MonthlyReport) -> Vec<String> {
    if report.full.chars().count() > MESSAGE_SPLIT_THRESHOLD {
        vec![report.summary.clone(), report.analysis_section.clone()]
    } else {
        vec![report.full.clone()]
    }
}
