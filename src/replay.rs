//! Scenario replay
//!
//! Builds a [`Document`] from a JSON scenario, runs its pointer script
//! through a [`TooltipPage`] and reports what the page did. Used by the
//! `hoverpop` binary to try layouts and timings without a browser.

mod report;
mod scenario;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub use report::{ReplayReport, TooltipSummary};
pub use scenario::{ElementSpec, Scenario, Step};

use crate::config::TooltipConfig;
use crate::dom::{Document, NodeId};
use crate::error::HoverpopError;
use crate::geometry::Viewport;
use crate::page::TooltipPage;

pub fn load_scenario(path: &Path) -> Result<Scenario, HoverpopError> {
    let content = fs::read_to_string(path)?;
    parse_scenario(&content)
}

pub fn parse_scenario(json: &str) -> Result<Scenario, HoverpopError> {
    Ok(serde_json::from_str(json)?)
}

/// Create the scenario's elements, returning the document and an id lookup
pub fn build_document(
    scenario: &Scenario,
) -> Result<(Document, HashMap<String, NodeId>), HoverpopError> {
    let mut doc = Document::new(scenario.viewport);
    doc.set_popover_supported(scenario.popover_supported);

    let mut nodes = HashMap::new();
    for spec in &scenario.elements {
        if nodes.contains_key(&spec.id) {
            return Err(HoverpopError::InvalidScenario(format!(
                "duplicate element id '{}'",
                spec.id
            )));
        }
        let node = doc.create_element(&spec.tag);
        doc.set_id(node, &spec.id);
        for class in &spec.classes {
            doc.add_class(node, class);
        }
        if spec.popover {
            doc.set_attribute(node, "popover", "auto");
        }
        if let Some(target) = &spec.popovertarget {
            doc.set_attribute(node, "popovertarget", target);
        }
        doc.set_layout(node, spec.rect);
        nodes.insert(spec.id.clone(), node);
    }

    for spec in &scenario.elements {
        let parent = match &spec.parent {
            Some(parent) => *nodes
                .get(parent)
                .ok_or_else(|| HoverpopError::UnknownElement(parent.clone()))?,
            None => doc.body(),
        };
        if !doc.append_child(parent, nodes[&spec.id]) {
            return Err(HoverpopError::InvalidScenario(format!(
                "element '{}' cannot be placed inside '{}'",
                spec.id,
                spec.parent.as_deref().unwrap_or("body")
            )));
        }
    }

    Ok((doc, nodes))
}

/// Run every step of `scenario` and summarize the result
pub fn run_scenario(
    scenario: &Scenario,
    config: TooltipConfig,
) -> Result<ReplayReport, HoverpopError> {
    let (doc, nodes) = build_document(scenario)?;
    let lookup = |id: &str| {
        nodes
            .get(id)
            .copied()
            .ok_or_else(|| HoverpopError::UnknownElement(id.to_string()))
    };
    // Reject bad references before anything runs
    for step in &scenario.steps {
        if let Some(target) = step.target() {
            lookup(target)?;
        }
    }

    let mut page = TooltipPage::new(doc, config).with_activity_log();
    for step in &scenario.steps {
        match step {
            Step::Enter { target } => page.pointer_enter(lookup(target)?),
            Step::Leave { target } => page.pointer_leave(lookup(target)?),
            Step::Wait { ms } => page.advance(*ms),
            Step::Open { target } => {
                if let Err(e) = page.show_popover(lookup(target)?) {
                    log::warn!("Could not open '{}': {}", target, e);
                }
            }
            Step::Close { target } => {
                if let Err(e) = page.hide_popover(lookup(target)?) {
                    log::warn!("Could not close '{}': {}", target, e);
                }
            }
            Step::Resize { width, height } => page.set_viewport(Viewport::new(*width, *height)),
        }
    }

    Ok(summarize(&page))
}

fn summarize(page: &TooltipPage) -> ReplayReport {
    let doc = page.document();
    let tooltips = page
        .bindings()
        .iter()
        .map(|binding| TooltipSummary {
            id: binding.dom_id.clone(),
            open: doc.is_popover_open(binding.tooltip),
            phase: page.phase(binding.tooltip),
            in_portal: page.portal().contains(doc, binding.tooltip),
            placement: binding.last_placement,
        })
        .collect();

    ReplayReport {
        elapsed_ms: page.now(),
        activity: page.activity().to_vec(),
        tooltips,
    }
}

#[cfg(test)]
#[path = "replay/replay_tests.rs"]
mod replay_tests;
