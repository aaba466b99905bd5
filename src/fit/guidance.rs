//! Guidance Lookup Tables
//!
//! Qualitative reach, bar drop and geometry advice. Each lookup is total:
//! unrecognized inputs fall through to a neutral default.

use crate::profile::{Flexibility, RidingStyle};

// ============================================================================
// Reach (by riding style)
// ============================================================================

pub const REACH_RACE: &str =
    "Longer reach common. Start neutral, then lengthen only if stable and pain-free.";
pub const REACH_ENDURANCE: &str = "Balanced reach. Prioritize comfort and breathing.";
pub const REACH_GRAVEL: &str =
    "Slightly shorter reach for control and confidence on rough terrain.";
pub const REACH_COMMUTE: &str = "Upright and relaxed. Visibility and comfort first.";
pub const REACH_DEFAULT: &str = "Start neutral and adjust slowly.";

pub fn reach_guidance(style: &RidingStyle) -> &'static str {
    match style {
        RidingStyle::Race => REACH_RACE,
        RidingStyle::Endurance => REACH_ENDURANCE,
        RidingStyle::Gravel => REACH_GRAVEL,
        RidingStyle::Commute => REACH_COMMUTE,
        RidingStyle::Unrecognized(_) => REACH_DEFAULT,
    }
}

// ============================================================================
// Bar drop (by flexibility)
// ============================================================================

pub const DROP_LOW: &str =
    "Lower flexibility: aim for less bar drop (higher bars) and shorter reach.";
pub const DROP_MEDIUM: &str = "Medium flexibility: moderate bar drop usually works well.";
pub const DROP_HIGH: &str =
    "High flexibility: you can often tolerate more bar drop if you want a racier posture.";
pub const DROP_DEFAULT: &str =
    "Flexibility guidance: prioritize comfort, then adjust gradually.";

pub fn bar_drop_guidance(flexibility: &Flexibility) -> &'static str {
    match flexibility {
        Flexibility::Low => DROP_LOW,
        Flexibility::Medium => DROP_MEDIUM,
        Flexibility::High => DROP_HIGH,
        Flexibility::Unrecognized(_) => DROP_DEFAULT,
    }
}

// ============================================================================
// Stack/reach direction
// ============================================================================

pub const GEOMETRY_RELAXED: &str =
    "Consider higher stack and slightly shorter reach (comfort and control).";
pub const GEOMETRY_AGGRESSIVE: &str =
    "Consider lower stack and slightly longer reach (aggressive posture).";
pub const GEOMETRY_BALANCED: &str = "Consider a balanced stack and reach (endurance-friendly).";

/// First matching branch wins: a low-flexibility rider gets the relaxed
/// geometry even when racing.
pub fn geometry_guidance(style: &RidingStyle, flexibility: &Flexibility) -> &'static str {
    let relaxed_style = matches!(style, RidingStyle::Commute | RidingStyle::Gravel);

    if *flexibility == Flexibility::Low || relaxed_style {
        GEOMETRY_RELAXED
    } else if *style == RidingStyle::Race && *flexibility == Flexibility::High {
        GEOMETRY_AGGRESSIVE
    } else {
        GEOMETRY_BALANCED
    }
}

// ============================================================================
// First adjustment
// ============================================================================

pub const NEXT_STEP_DEFAULT: &str =
    "Set saddle height to the midpoint of the range, then adjust in 2-3mm steps after short rides.";
pub const NEXT_STEP_LOW_FLEX: &str =
    "Start at the lower end of the saddle range and reduce reach before lowering the bars.";

pub fn next_adjustment(flexibility: &Flexibility) -> &'static str {
    match flexibility {
        Flexibility::Low => NEXT_STEP_LOW_FLEX,
        _ => NEXT_STEP_DEFAULT,
    }
}
