//! Pain Advisor
//!
//! Maps self-reported pain points onto the static rule table and picks the
//! single adjustment to try first.

pub mod rules;
pub mod advisor;

pub use advisor::{analyze, PainAnalysis, PainInsight, PAIN_GUIDANCE_NOTE, PAIN_CONFIDENCE_PENALTY};
pub use rules::{rule_for, PainRule};
