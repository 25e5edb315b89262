//! Unit tests for report rendering and message splitting

use macropulse::models::indicator::{
    IndicatorKind, IndicatorSet, ResolvedIndicator, SourceTag,
};
use macropulse::report::{self, MonthlyReport};
use macropulse::signals::{classify, evaluate_composite};

fn full_set() -> IndicatorSet {
    IndicatorSet {
        policy_rate: Some(ResolvedIndicator::new(
            IndicatorKind::PolicyRate,
            4.33,
            4.58,
            SourceTag::series("FEDFUNDS"),
        )),
        yield_curve: Some(ResolvedIndicator::new(
            IndicatorKind::YieldCurve,
            0.52,
            0.48,
            SourceTag::series("DGS10-DGS2"),
        )),
        recession: Some(ResolvedIndicator::new(
            IndicatorKind::RecessionProbability,
            0.23,
            0.2,
            SourceTag::series("SAHMREALTIME"),
        )),
        pmi: Some(ResolvedIndicator::flat(
            IndicatorKind::Pmi,
            49.0,
            SourceTag::Fallback,
        )),
        valuation: Some(ResolvedIndicator::flat(
            IndicatorKind::Valuation,
            37.0,
            SourceTag::Manual,
        )),
    }
}

fn composite_of(set: &IndicatorSet) -> macropulse::models::regime::CompositeRegime {
    let signals: Vec<_> = set.available().map(classify).collect();
    evaluate_composite(&signals)
}

#[test]
fn summary_lines_mark_fallback_and_manual_sources() {
    let lines = report::summary_lines(&full_set());
    assert_eq!(lines.len(), 5);
    assert!(lines[3].contains("possibly stale"));
    assert!(lines[4].contains("(manual)"));
}

#[test]
fn prompt_lines_cover_all_five_with_missing_markers() {
    let mut set = full_set();
    set.policy_rate = None;
    set.yield_curve = None;
    let lines = report::prompt_lines(&set);
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("data missing"));
    assert!(lines[1].contains("data missing"));
    assert!(lines[2].contains("0.23"));
}

#[test]
fn render_includes_lights_and_overall_verdict() {
    let set = full_set();
    let composite = composite_of(&set);
    let rendered = report::render("July 2026", &set, &composite, "steady as she goes");
    assert!(rendered.full.contains("Monthly market check"));
    assert!(rendered.full.contains("July 2026"));
    assert!(rendered.full.contains("Overall:"));
    assert!(rendered.full.contains("steady as she goes"));
    assert!(rendered.full.contains("multpl.com"));
}

#[test]
fn reverting_banner_appears_on_composite_flag() {
    let mut set = full_set();
    set.yield_curve = Some(ResolvedIndicator::new(
        IndicatorKind::YieldCurve,
        0.2,
        -0.1,
        SourceTag::series("DGS10-DGS2"),
    ));
    let composite = composite_of(&set);
    assert!(composite.reverting);
    let rendered = report::render("July 2026", &set, &composite, "caution");
    assert!(rendered.summary.contains("highest-risk transition"));
}

#[test]
fn short_report_goes_out_as_one_message() {
    let report = MonthlyReport {
        summary: "summary".to_string(),
        analysis_section: "analysis".to_string(),
        full: "full text".to_string(),
    };
    assert_eq!(report::message_parts(&report), vec!["full text".to_string()]);
}

#[test]
fn long_report_splits_into_summary_and_analysis() {
    let report = MonthlyReport {
        summary: "summary".to_string(),
        analysis_section: "analysis".to_string(),
        full: "x".repeat(4001),
    };
    let parts = report::message_parts(&report);
    assert_eq!(parts, vec!["summary".to_string(), "analysis".to_string()]);
}

#[test]
fn empty_set_renders_configuration_hint() {
    let set = IndicatorSet::default();
    let composite = composite_of(&set);
    let rendered = report::render("July 2026", &set, &composite, "n/a");
    assert!(rendered.summary.contains("FRED_API_KEY"));
}
