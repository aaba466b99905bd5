//! Saddle Height and Geometry Estimation
//!
//! Inseam-based saddle height heuristic (bottom bracket center to saddle top)
//! with small per-style tweaks, plus qualitative reach/drop/geometry text.
//!
//! Confidence is a plausibility score, not a statistic. It starts at
//! `BASE_CONFIDENCE` and loses a fixed amount for every input that looks
//! unusual; each penalty also leaves a note for the rider.

use serde::Serialize;

use super::guidance;
use super::units::{cm_to_in, in_to_cm, round_to_decimals};
use crate::profile::{Flexibility, RidingStyle};

/// Saddle height as a fraction of inseam
pub const SADDLE_INSEAM_RATIO: f64 = 0.883;

/// Half-width of the recommended range, per unit
pub const RANGE_HALF_WIDTH_IN: f64 = 0.35;
pub const RANGE_HALF_WIDTH_CM: f64 = 0.9;

pub const BASE_CONFIDENCE: f64 = 0.78;
pub const MIN_CONFIDENCE: f64 = 0.35;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Plausible measurement bounds (inches, inclusive)
pub const INSEAM_BOUNDS_IN: (f64, f64) = (24.0, 42.0);
pub const HEIGHT_BOUNDS_IN: (f64, f64) = (54.0, 84.0);

const MEASUREMENT_PENALTY: f64 = 0.15;
const UNRECOGNIZED_PENALTY: f64 = 0.10;

pub const NOTE_INSEAM_UNUSUAL: &str =
    "Inseam value looks unusual. Re-measure inseam for best results.";
pub const NOTE_HEIGHT_UNUSUAL: &str = "Height value looks unusual. Confirm height in inches.";
pub const NOTE_STYLE_UNRECOGNIZED: &str =
    "Riding style not recognized. Use endurance, race, gravel, or commute.";
pub const NOTE_FLEX_UNRECOGNIZED: &str = "Flexibility not recognized. Use low, medium, or high.";

pub const DISCLAIMER: &str =
    "Starting estimate only. If you have pain, numbness, or injuries, consult a professional fitter.";

/// Baseline fit recommendation
///
/// Serialized field names are the public wire format of `/fit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitRecommendation {
    pub saddle_height_in: f64,
    pub saddle_height_cm: f64,
    /// (low, high), 2 decimals
    pub saddle_height_range_in: (f64, f64),
    /// (low, high), 1 decimal; offset in cm, not converted from the inch range
    pub saddle_height_range_cm: (f64, f64),
    pub reach_guidance: &'static str,
    pub bar_drop_guidance: &'static str,
    pub geometry_guidance: &'static str,
    pub confidence: f64,
    pub notes: Vec<String>,
    pub next_adjustment: &'static str,
    pub disclaimer: &'static str,
}

/// Estimate a starting fit. Total over its inputs: nothing here fails.
pub fn estimate(
    height_in: f64,
    inseam_in: f64,
    riding_style: &RidingStyle,
    flexibility: &Flexibility,
) -> FitRecommendation {
    // Baseline from inseam, then style tweak in inches
    let baseline_cm = in_to_cm(inseam_in) * SADDLE_INSEAM_RATIO;
    let saddle_in = cm_to_in(baseline_cm) + riding_style.saddle_offset_in();
    let saddle_cm = in_to_cm(saddle_in);

    let range_in = (
        round_to_decimals(saddle_in - RANGE_HALF_WIDTH_IN, 2),
        round_to_decimals(saddle_in + RANGE_HALF_WIDTH_IN, 2),
    );
    let range_cm = (
        round_to_decimals(saddle_cm - RANGE_HALF_WIDTH_CM, 1),
        round_to_decimals(saddle_cm + RANGE_HALF_WIDTH_CM, 1),
    );

    let (confidence, notes) = plausibility(height_in, inseam_in, riding_style, flexibility);

    FitRecommendation {
        saddle_height_in: round_to_decimals(saddle_in, 2),
        saddle_height_cm: round_to_decimals(saddle_cm, 1),
        saddle_height_range_in: range_in,
        saddle_height_range_cm: range_cm,
        reach_guidance: guidance::reach_guidance(riding_style),
        bar_drop_guidance: guidance::bar_drop_guidance(flexibility),
        geometry_guidance: guidance::geometry_guidance(riding_style, flexibility),
        confidence: round_to_decimals(confidence, 2),
        notes,
        next_adjustment: guidance::next_adjustment(flexibility),
        disclaimer: DISCLAIMER,
    }
}

/// Strictly outside the closed interval
fn outside(value: f64, (lower, upper): (f64, f64)) -> bool {
    value < lower || value > upper
}

/// Stacking penalties, clamped once at the end
fn plausibility(
    height_in: f64,
    inseam_in: f64,
    riding_style: &RidingStyle,
    flexibility: &Flexibility,
) -> (f64, Vec<String>) {
    let mut confidence = BASE_CONFIDENCE;
    let mut notes = Vec::new();

    if outside(inseam_in, INSEAM_BOUNDS_IN) {
        confidence -= MEASUREMENT_PENALTY;
        notes.push(NOTE_INSEAM_UNUSUAL.to_string());
    }

    if outside(height_in, HEIGHT_BOUNDS_IN) {
        confidence -= MEASUREMENT_PENALTY;
        notes.push(NOTE_HEIGHT_UNUSUAL.to_string());
    }

    if !riding_style.is_recognized() {
        confidence -= UNRECOGNIZED_PENALTY;
        notes.push(NOTE_STYLE_UNRECOGNIZED.to_string());
    }

    if !flexibility.is_recognized() {
        confidence -= UNRECOGNIZED_PENALTY;
        notes.push(NOTE_FLEX_UNRECOGNIZED.to_string());
    }

    (confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE), notes)
}
