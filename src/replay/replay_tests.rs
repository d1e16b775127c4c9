//! Tests for scenario replay

use super::*;
use crate::hover::HoverPhase;
use crate::position::Placement;

const HOVER_BASIC: &str = include_str!("../../tests/fixtures/hover_basic.json");
const EDGE_OF_VIEWPORT: &str = include_str!("../../tests/fixtures/edge_of_viewport.json");

fn run(json: &str) -> ReplayReport {
    let scenario = parse_scenario(json).unwrap();
    run_scenario(&scenario, TooltipConfig::default()).unwrap()
}

#[test]
fn test_parse_scenario_defaults() {
    let scenario = parse_scenario(
        r#"{"viewport": {"width": 100, "height": 50}, "elements": [{"id": "a"}]}"#,
    )
    .unwrap();

    assert!(scenario.popover_supported);
    assert!(scenario.steps.is_empty());
    assert_eq!(scenario.elements[0].tag, "div");
    assert_eq!(scenario.elements[0].parent, None);
    assert!(!scenario.elements[0].popover);
}

#[test]
fn test_parse_steps() {
    let scenario = parse_scenario(
        r#"{
            "viewport": {"width": 100, "height": 50},
            "elements": [],
            "steps": [
                {"action": "enter", "target": "a"},
                {"action": "wait", "ms": 10},
                {"action": "resize", "width": 10, "height": 20}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        scenario.steps,
        vec![
            Step::Enter {
                target: "a".to_string()
            },
            Step::Wait { ms: 10 },
            Step::Resize {
                width: 10.0,
                height: 20.0
            },
        ]
    );
}

#[test]
fn test_parse_rejects_unknown_action() {
    let result = parse_scenario(
        r#"{"viewport": {"width": 1, "height": 1}, "elements": [], "steps": [{"action": "click", "target": "a"}]}"#,
    );

    assert!(matches!(result, Err(HoverpopError::Json(_))));
}

#[test]
fn test_build_document_nests_elements() {
    let scenario = parse_scenario(HOVER_BASIC).unwrap();

    let (doc, nodes) = build_document(&scenario).unwrap();

    assert_eq!(doc.parent(nodes["matrix"]), Some(doc.body()));
    assert_eq!(doc.parent(nodes["tip-1"]), Some(nodes["cell-1"]));
    assert_eq!(doc.query_popover_target("tip-1"), Some(nodes["badge-1"]));
    assert!(doc.element(nodes["tip-1"]).unwrap().is_popover());
}

#[test]
fn test_build_document_rejects_duplicate_ids() {
    let scenario = parse_scenario(
        r#"{"viewport": {"width": 1, "height": 1}, "elements": [{"id": "a"}, {"id": "a"}]}"#,
    )
    .unwrap();

    let result = build_document(&scenario);

    assert!(matches!(result, Err(HoverpopError::InvalidScenario(_))));
}

#[test]
fn test_build_document_rejects_unknown_parent() {
    let scenario = parse_scenario(
        r#"{"viewport": {"width": 1, "height": 1}, "elements": [{"id": "a", "parent": "ghost"}]}"#,
    )
    .unwrap();

    let result = build_document(&scenario);

    assert!(matches!(result, Err(HoverpopError::UnknownElement(id)) if id == "ghost"));
}

#[test]
fn test_build_document_rejects_cycles() {
    let scenario = parse_scenario(
        r#"{"viewport": {"width": 1, "height": 1}, "elements": [
            {"id": "a", "parent": "b"},
            {"id": "b", "parent": "a"}
        ]}"#,
    )
    .unwrap();

    let result = build_document(&scenario);

    assert!(matches!(result, Err(HoverpopError::InvalidScenario(_))));
}

#[test]
fn test_run_rejects_unknown_step_target_before_running() {
    let scenario = parse_scenario(
        r#"{"viewport": {"width": 1, "height": 1}, "elements": [], "steps": [{"action": "enter", "target": "nope"}]}"#,
    )
    .unwrap();

    let result = run_scenario(&scenario, TooltipConfig::default());

    assert!(matches!(result, Err(HoverpopError::UnknownElement(id)) if id == "nope"));
}

#[test]
fn test_hover_basic_activity() {
    let report = run(HOVER_BASIC);

    insta::assert_yaml_snapshot!(report.activity_lines(), @r"
    - t=300ms tip-1 open requested
    - t=300ms tip-1 moved to portal
    - t=300ms tip-1 positioned at top=108 left=50
    - t=300ms tip-1 opened
    - t=950ms tip-1 close requested
    - t=950ms tip-1 closed
    ");
}

#[test]
fn test_hover_basic_summary() {
    let report = run(HOVER_BASIC);

    assert_eq!(report.elapsed_ms, 950);
    assert_eq!(report.tooltips.len(), 1);
    let summary = &report.tooltips[0];
    assert_eq!(summary.id, "tip-1");
    assert!(!summary.open);
    assert_eq!(summary.phase, HoverPhase::Idle);
    assert!(summary.in_portal);
    assert_eq!(
        summary.placement,
        Some(Placement {
            top: 108.0,
            left: 50.0
        })
    );
    assert_eq!(
        summary.to_string(),
        "tip-1: closed, phase=idle, top=108 left=50, in portal"
    );
}

#[test]
fn test_edge_of_viewport_flips_and_shifts() {
    let report = run(EDGE_OF_VIEWPORT);

    assert_eq!(
        report.tooltips[0].placement,
        Some(Placement {
            top: 722.0,
            left: 816.0
        })
    );
    assert!(report.tooltips[0].open);
}

#[test]
fn test_unsupported_scenario_reports_skip() {
    let json = HOVER_BASIC.replacen(
        r#""viewport": { "width": 1024, "height": 800 },"#,
        r#""viewport": { "width": 1024, "height": 800 }, "popover_supported": false,"#,
        1,
    );

    let report = run(&json);

    assert_eq!(
        report.activity_lines(),
        vec![
            "t=300ms tip-1 show skipped (popover unsupported)".to_string(),
            "t=950ms tip-1 hide skipped (popover unsupported)".to_string(),
        ]
    );
    assert!(!report.tooltips[0].in_portal);
}

#[test]
fn test_programmatic_open_and_resize() {
    let json = r#"{
        "viewport": {"width": 1024, "height": 800},
        "elements": [
            {"id": "b", "popovertarget": "t", "rect": {"x": 50, "y": 80, "width": 40, "height": 20}},
            {"id": "t", "classes": ["tooltip-popover"], "popover": true, "rect": {"x": 0, "y": 0, "width": 200, "height": 50}}
        ],
        "steps": [
            {"action": "resize", "width": 1024, "height": 150},
            {"action": "open", "target": "t"},
            {"action": "close", "target": "t"},
            {"action": "close", "target": "b"}
        ]
    }"#;

    let report = run(json);

    assert_eq!(
        report.activity_lines(),
        vec![
            "t=0ms t moved to portal".to_string(),
            "t=0ms t positioned at top=22 left=50".to_string(),
            "t=0ms t opened".to_string(),
            "t=0ms t closed".to_string(),
        ]
    );
}

#[test]
fn test_report_display_and_json() {
    let report = run(HOVER_BASIC);

    let text = report.to_string();
    assert!(text.starts_with("t=300ms tip-1 open requested\n"));
    assert!(text.contains("\n\ntip-1: closed"));
    assert!(text.ends_with("elapsed: 950ms\n"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["elapsed_ms"], 950);
    assert_eq!(json["activity"][0]["kind"], "open_requested");
    assert_eq!(json["activity"][2]["top"], 108.0);
    assert_eq!(json["tooltips"][0]["phase"], "idle");
}
