use super::*;
use crate::output::PanelContent;

fn panel_titles(layout: &PageLayout) -> Vec<&str> {
    layout
        .sections
        .iter()
        .filter_map(|s| match s {
            Section::Panel(panel) => Some(panel.title.as_str()),
            Section::Narrative { .. } => None,
        })
        .collect()
}

#[test]
fn random_forest_page_has_narrative_then_four_panels() {
    let layout = page_layout(Page::RandomForest, &ReportConfig::default(), Path::new("data"));
    assert!(matches!(layout.sections[0], Section::Narrative { .. }));
    assert_eq!(
        panel_titles(&layout),
        vec![
            "Raw Data and Clean Data",
            "Labeled Dataset",
            "Sentiment Distribution",
            "Sentiment Count"
        ]
    );
}

#[test]
fn artifacts_resolve_against_directory() {
    let layout = page_layout(Page::KFold, &ReportConfig::default(), Path::new("data"));
    let Section::Panel(panel) = &layout.sections[1] else {
        panic!("expected panel");
    };
    assert_eq!(
        panel.content,
        PanelContent::Chart {
            artifact: PathBuf::from("data/average_scores.csv"),
            spec: ChartSpec::MetricBar {
                metric_column: "Metric".to_string(),
                score_column: "Score".to_string(),
            },
        }
    );
}

#[test]
fn absolute_artifact_paths_are_kept() {
    let absolute = std::env::temp_dir().join("scores.csv");
    assert_eq!(resolve_artifact(Path::new("data"), &absolute), absolute);
}

#[test]
fn metrics_page_defaults_to_heatmap() {
    let layout = page_layout(Page::Metrics, &ReportConfig::default(), Path::new("."));
    let Section::Panel(panel) = &layout.sections[0] else {
        panic!("expected panel");
    };
    assert!(matches!(
        panel.content,
        PanelContent::Chart {
            spec: ChartSpec::Heatmap,
            ..
        }
    ));
}

#[test]
fn metrics_page_can_show_the_image() {
    let mut config = ReportConfig::default();
    config.pages.confusion_display = ConfusionDisplay::Image;
    let layout = page_layout(Page::Metrics, &config, Path::new("."));
    let Section::Panel(panel) = &layout.sections[0] else {
        panic!("expected panel");
    };
    assert!(matches!(
        &panel.content,
        PanelContent::Image { path, .. } if path.ends_with("confusion_matrix.png")
    ));
}

#[test]
fn configured_columns_flow_into_specs() {
    let mut config = ReportConfig::default();
    config.columns.sentiment = "label".to_string();
    let layout = page_layout(Page::RandomForest, &config, Path::new("."));
    assert!(layout.sections.iter().any(|s| matches!(
        s,
        Section::Panel(PanelSpec {
            content: PanelContent::Chart {
                spec: ChartSpec::Pie { column },
                ..
            },
            ..
        }) if column == "label"
    )));
}
