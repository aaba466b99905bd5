//! Pain Point Analysis
//!
//! Unrecognized identifiers are dropped silently and repeats collapse onto
//! their first occurrence, so the insight list never holds duplicates.

use serde::Serialize;

use super::rules::{rule_for, PainRule};
use crate::profile::PainPoint;

/// Note appended to the fit when any pain guidance is attached
pub const PAIN_GUIDANCE_NOTE: &str =
    "Pain guidance added. Make one change at a time and retest on a short ride.";

/// Confidence lost when the rider reports pain
pub const PAIN_CONFIDENCE_PENALTY: f64 = 0.05;

/// A recognized pain point with its rule projected out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainInsight {
    /// Wire identifier, e.g. `knee_front`
    pub pain_point: String,
    pub label: &'static str,
    pub likely_causes: &'static [&'static str],
    pub first_adjustment: &'static str,
    pub caution: &'static str,
}

impl PainInsight {
    fn new(point: &PainPoint, rule: &'static PainRule) -> Self {
        Self {
            pain_point: point.as_str().to_string(),
            label: rule.label,
            likely_causes: rule.likely_causes,
            first_adjustment: rule.first_adjustment,
            caution: rule.caution,
        }
    }
}

/// Result of analyzing a rider's pain points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PainAnalysis {
    /// Input order, first occurrence only
    pub insights: Vec<PainInsight>,
    /// First insight's first adjustment
    pub priority_adjustment: Option<&'static str>,
}

impl PainAnalysis {
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}

/// Analyze reported pain points against the rule table
pub fn analyze(pain_points: &[PainPoint]) -> PainAnalysis {
    let mut seen: Vec<&PainPoint> = Vec::with_capacity(pain_points.len());
    let mut insights = Vec::new();
    let mut priority_adjustment = None;

    for point in pain_points {
        let Some(rule) = rule_for(point) else {
            continue;
        };
        if seen.contains(&point) {
            continue;
        }
        seen.push(point);

        if priority_adjustment.is_none() {
            priority_adjustment = Some(rule.first_adjustment);
        }
        insights.push(PainInsight::new(point, rule));
    }

    PainAnalysis {
        insights,
        priority_adjustment,
    }
}
