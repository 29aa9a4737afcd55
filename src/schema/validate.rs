use crate::foundation::core::Range;
use crate::foundation::error::ReelError;
use crate::scene::model::{LayerDef, RangeTableDef, SegmentDef};
use std::collections::HashSet;
use std::fmt;

/// One rejected field of a range table, addressed like `$.layers[1].texts[0].range`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Issue {
    pub(crate) path: String,
    pub(crate) message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Default)]
struct Issues(Vec<Issue>);

impl Issues {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.push(Issue {
            path: path.into(),
            message: message.into(),
        });
    }

    fn check_range(&mut self, raw: [f64; 2], path: String) -> Option<Range> {
        match Range::new(raw[0], raw[1]) {
            Ok(r) => Some(r),
            Err(ReelError::Validation(msg)) => {
                self.push(path, msg);
                None
            }
            Err(e) => {
                self.push(path, e.to_string());
                None
            }
        }
    }
}

/// Join issues one per line.
pub(crate) fn describe(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn validate_range_table(def: &RangeTableDef) -> Result<(), Vec<Issue>> {
    let mut issues = Issues::default();

    if !def.scroll.container_viewports.is_finite() || def.scroll.container_viewports <= 1.0 {
        issues.push(
            "$.scroll.container_viewports",
            "container_viewports must be finite and > 1",
        );
    }
    if let Some(sm) = &def.scroll.smoothing {
        if !sm.duration_secs.is_finite() || sm.duration_secs <= 0.0 {
            issues.push(
                "$.scroll.smoothing.duration_secs",
                "duration_secs must be finite and > 0",
            );
        }
        if !sm.wheel_multiplier.is_finite() || sm.wheel_multiplier <= 0.0 {
            issues.push(
                "$.scroll.smoothing.wheel_multiplier",
                "wheel_multiplier must be finite and > 0",
            );
        }
    }
    if !def.dead_zone.is_finite() || def.dead_zone < 0.0 || def.dead_zone >= 1.0 {
        issues.push("$.dead_zone", "dead_zone must be finite and inside [0, 1)");
    }

    let mut segment_ids = HashSet::<&str>::new();
    for (i, seg) in def.segments.iter().enumerate() {
        let path = format!("$.segments[{i}]");
        validate_segment(seg, &path, &mut issues);
        if !seg.id.trim().is_empty() && !segment_ids.insert(seg.id.as_str()) {
            issues.push(
                format!("{path}.id"),
                format!("duplicate segment id \"{}\"", seg.id),
            );
        }
    }

    let mut layer_ids = HashSet::<&str>::new();
    let mut text_ids = HashSet::<&str>::new();
    let mut owned_segments = HashSet::<&str>::new();
    for (i, layer) in def.layers.iter().enumerate() {
        let path = format!("$.layers[{i}]");
        if layer.id.trim().is_empty() {
            issues.push(format!("{path}.id"), "layer id must be non-empty");
        } else if !layer_ids.insert(layer.id.as_str()) {
            issues.push(
                format!("{path}.id"),
                format!("duplicate layer id \"{}\"", layer.id),
            );
        }

        if let Some(seg) = &layer.segment {
            if !segment_ids.contains(seg.as_str()) {
                issues.push(
                    format!("{path}.segment"),
                    format!("unknown segment \"{seg}\""),
                );
            } else if !owned_segments.insert(seg.as_str()) {
                issues.push(
                    format!("{path}.segment"),
                    format!("segment \"{seg}\" is already owned by another layer"),
                );
            }
        }

        validate_transitions(layer, def.dead_zone, &path, &mut issues);

        for (j, text) in layer.texts.iter().enumerate() {
            let text_path = format!("{path}.texts[{j}]");
            if text.id.trim().is_empty() {
                issues.push(format!("{text_path}.id"), "text id must be non-empty");
            } else if !text_ids.insert(text.id.as_str()) {
                issues.push(
                    format!("{text_path}.id"),
                    format!("duplicate text id \"{}\"", text.id),
                );
            }
            issues.check_range(text.range, format!("{text_path}.range"));
        }
    }

    if issues.0.is_empty() {
        Ok(())
    } else {
        Err(issues.0)
    }
}

fn validate_segment(seg: &SegmentDef, path: &str, issues: &mut Issues) {
    if seg.id.trim().is_empty() {
        issues.push(format!("{path}.id"), "segment id must be non-empty");
    }
    if seg.source.trim().is_empty() {
        issues.push(format!("{path}.source"), "segment source must be non-empty");
    }
    issues.check_range(seg.range, format!("{path}.range"));
    for (name, v) in [
        ("start_offset", seg.start_offset),
        ("end_offset", seg.end_offset),
    ] {
        if !v.is_finite() || v < 0.0 {
            issues.push(
                format!("{path}.{name}"),
                format!("{name} must be finite and >= 0"),
            );
        }
    }
    if let Some(lag) = seg.scrub_lag_secs
        && (!lag.is_finite() || lag < 0.0)
    {
        issues.push(
            format!("{path}.scrub_lag_secs"),
            "scrub_lag_secs must be finite and >= 0",
        );
    }
}

// Transitions of one layer move the same target, so they must be ordered, disjoint and at
// least `dead_zone` apart.
fn validate_transitions(layer: &LayerDef, dead_zone: f64, path: &str, issues: &mut Issues) {
    let mut prev: Option<Range> = None;
    for (k, tr) in layer.transitions.iter().enumerate() {
        let tr_path = format!("{path}.transitions[{k}]");
        if !tr.from_vh.is_finite() || !tr.to_vh.is_finite() {
            issues.push(tr_path.clone(), "from_vh and to_vh must be finite");
        }
        let Some(range) = issues.check_range(tr.range, format!("{tr_path}.range")) else {
            continue;
        };
        if let Some(p) = prev {
            if range.start() < p.start() {
                issues.push(tr_path, "transitions must be listed in progress order");
            } else if p.overlaps(range) {
                issues.push(
                    tr_path,
                    "transition overlaps the previous transition of the same layer",
                );
            } else if p.gap_to(range) + 1e-9 < dead_zone {
                issues.push(
                    tr_path,
                    format!("gap to the previous transition is below dead_zone {dead_zone}"),
                );
            }
        }
        prev = Some(range);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
