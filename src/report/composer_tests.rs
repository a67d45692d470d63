use std::fs;

use tempfile::TempDir;

use super::*;
use crate::output::PanelOutcome;

fn artifacts() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("confusion_matrix.csv"),
        "Actual Negative,Other\n50,45\n5,3\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("classification_report.txt"),
        "label,precision,recall\nNegative,0.71,0.69\nPositive,0.74,0.76\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("average_scores.csv"),
        "Metric,Score\nAccuracy,0.72\nPrecision,0.75\nRecall,0.77\n",
    )
    .unwrap();
    dir
}

#[test]
fn failed_panel_does_not_stop_the_page() {
    let dir = artifacts();
    let composer = ReportComposer::new(ReportConfig::default(), dir.path().to_path_buf());
    let report = composer.compose(&[Page::Metrics]);

    let panels: Vec<&RenderedPanel> = report.panels().collect();
    assert_eq!(panels.len(), 2);
    assert!(panels[0].is_failed());
    assert!(matches!(panels[1].outcome, PanelOutcome::Rendered { .. }));
    assert_eq!(report.failed_panels().len(), 1);
}

#[test]
fn pages_keep_requested_order_without_repeats() {
    let dir = artifacts();
    let composer = ReportComposer::new(ReportConfig::default(), dir.path().to_path_buf());
    let report = composer.compose(&[Page::KFold, Page::Metrics, Page::KFold]);

    let pages: Vec<Page> = report.pages.iter().map(|p| p.page).collect();
    assert_eq!(pages, vec![Page::KFold, Page::Metrics]);
}

#[test]
fn empty_selection_uses_configured_default() {
    let dir = artifacts();
    let mut config = ReportConfig::default();
    config.pages.default = vec![Page::KFold];
    let report = ReportComposer::new(config, dir.path().to_path_buf()).compose(&[]);

    assert_eq!(report.pages.len(), 1);
    assert!(report.failed_panels().is_empty());
}

#[test]
fn missing_artifacts_fail_every_panel_of_the_page() {
    let dir = TempDir::new().unwrap();
    let report = ReportComposer::new(ReportConfig::default(), dir.path().to_path_buf())
        .compose(&[Page::RandomForest]);

    assert_eq!(report.failed_panels().len(), 4);
    assert!(matches!(
        report.pages[0].sections[0],
        RenderedSection::Narrative { .. }
    ));
}
