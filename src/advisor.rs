//! Fit Advisor Pipeline
//!
//! Runs the fit estimator, then the pain advisor, and merges the two into a
//! single typed report. Pure: the same profile always yields the same report.

use serde::Serialize;

use crate::fit::{estimate, round_to_decimals, FitRecommendation};
use crate::fit::estimator::MIN_CONFIDENCE;
use crate::pain::{analyze, PainAnalysis, PainInsight, PAIN_CONFIDENCE_PENALTY, PAIN_GUIDANCE_NOTE};
use crate::profile::RiderProfile;

/// Complete response for one rider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    #[serde(flatten)]
    pub fit: FitRecommendation,
    /// Always present, possibly empty
    pub pain_analysis: Vec<PainInsight>,
    /// `null` on the wire when no pain point was recognized
    pub priority_adjustment: Option<&'static str>,
}

impl FitReport {
    /// Merge pain guidance into a baseline recommendation
    ///
    /// With no insights the recommendation passes through untouched.
    pub fn merge(mut fit: FitRecommendation, analysis: PainAnalysis) -> Self {
        if !analysis.is_empty() {
            fit.notes.push(PAIN_GUIDANCE_NOTE.to_string());
            fit.confidence = round_to_decimals(
                (fit.confidence - PAIN_CONFIDENCE_PENALTY).max(MIN_CONFIDENCE),
                2,
            );
        }

        Self {
            fit,
            pain_analysis: analysis.insights,
            priority_adjustment: analysis.priority_adjustment,
        }
    }
}

/// Produce the full fit report for a rider
pub fn advise(profile: &RiderProfile) -> FitReport {
    let fit = estimate(
        profile.height_in,
        profile.inseam_in,
        &profile.riding_style,
        &profile.flexibility,
    );
    let analysis = analyze(&profile.pain_points);

    FitReport::merge(fit, analysis)
}
