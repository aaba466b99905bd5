//! Rider Profile
//!
//! Input types for the fit pipeline. Style, flexibility and pain points arrive
//! as free-form text and are parsed into closed enums. Anything unknown lands
//! in an `Unrecognized` variant carrying the normalized text, so parsing never
//! fails.

use std::fmt;

/// Trim and lowercase raw user text before matching
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Riding style the rider wants the bike set up for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RidingStyle {
    Endurance,
    Race,
    Gravel,
    Commute,
    Unrecognized(String),
}

impl RidingStyle {
    /// Parse user text (case and surrounding whitespace ignored)
    pub fn from_input(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "endurance" => RidingStyle::Endurance,
            "race" => RidingStyle::Race,
            "gravel" => RidingStyle::Gravel,
            "commute" => RidingStyle::Commute,
            other => RidingStyle::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RidingStyle::Endurance => "endurance",
            RidingStyle::Race => "race",
            RidingStyle::Gravel => "gravel",
            RidingStyle::Commute => "commute",
            RidingStyle::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, RidingStyle::Unrecognized(_))
    }

    /// Saddle height tweak in inches applied on top of the inseam baseline
    pub fn saddle_offset_in(&self) -> f64 {
        match self {
            RidingStyle::Endurance => 0.0,
            RidingStyle::Race => 0.2,
            RidingStyle::Gravel => -0.1,
            RidingStyle::Commute => -0.2,
            RidingStyle::Unrecognized(_) => 0.0,
        }
    }
}

impl fmt::Display for RidingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported flexibility, drives bar drop tolerance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Flexibility {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl Flexibility {
    /// Parse user text (case and surrounding whitespace ignored)
    pub fn from_input(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "low" => Flexibility::Low,
            "medium" => Flexibility::Medium,
            "high" => Flexibility::High,
            other => Flexibility::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Flexibility::Low => "low",
            Flexibility::Medium => "medium",
            Flexibility::High => "high",
            Flexibility::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Flexibility::Unrecognized(_))
    }
}

impl fmt::Display for Flexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discomfort the rider reports during or after rides
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PainPoint {
    KneeFront,
    KneeBack,
    HandNumbness,
    NeckPain,
    LowerBackPain,
    HipPain,
    Unrecognized(String),
}

impl PainPoint {
    /// All pain points with a rule behind them, in display order
    pub const KNOWN: [PainPoint; 6] = [
        PainPoint::KneeFront,
        PainPoint::KneeBack,
        PainPoint::HandNumbness,
        PainPoint::NeckPain,
        PainPoint::LowerBackPain,
        PainPoint::HipPain,
    ];

    /// Parse an identifier such as `knee_front` (case and surrounding whitespace ignored)
    pub fn from_input(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "knee_front" => PainPoint::KneeFront,
            "knee_back" => PainPoint::KneeBack,
            "hand_numbness" => PainPoint::HandNumbness,
            "neck_pain" => PainPoint::NeckPain,
            "lower_back_pain" => PainPoint::LowerBackPain,
            "hip_pain" => PainPoint::HipPain,
            other => PainPoint::Unrecognized(other.to_string()),
        }
    }

    /// Wire identifier
    pub fn as_str(&self) -> &str {
        match self {
            PainPoint::KneeFront => "knee_front",
            PainPoint::KneeBack => "knee_back",
            PainPoint::HandNumbness => "hand_numbness",
            PainPoint::NeckPain => "neck_pain",
            PainPoint::LowerBackPain => "lower_back_pain",
            PainPoint::HipPain => "hip_pain",
            PainPoint::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PainPoint::Unrecognized(_))
    }
}

impl fmt::Display for PainPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the pipeline needs to know about a rider
///
/// Height and inseam are in inches. Positivity is checked at the request
/// boundary; the pipeline itself only penalizes implausible values.
#[derive(Debug, Clone, PartialEq)]
pub struct RiderProfile {
    pub height_in: f64,
    pub inseam_in: f64,
    pub riding_style: RidingStyle,
    pub flexibility: Flexibility,
    pub pain_points: Vec<PainPoint>,
}

impl RiderProfile {
    /// Build a profile from raw user text
    pub fn from_input<S: AsRef<str>>(
        height_in: f64,
        inseam_in: f64,
        riding_style: &str,
        flexibility: &str,
        pain_points: &[S],
    ) -> Self {
        Self {
            height_in,
            inseam_in,
            riding_style: RidingStyle::from_input(riding_style),
            flexibility: Flexibility::from_input(flexibility),
            pain_points: pain_points
                .iter()
                .map(|p| PainPoint::from_input(p.as_ref()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing_ignores_case_and_whitespace() {
        assert_eq!(RidingStyle::from_input("  Race "), RidingStyle::Race);
        assert_eq!(RidingStyle::from_input("GRAVEL"), RidingStyle::Gravel);
        assert_eq!(
            RidingStyle::from_input(" Touring "),
            RidingStyle::Unrecognized("touring".to_string())
        );
        assert!(!RidingStyle::from_input("").is_recognized());
    }

    #[test]
    fn test_style_offsets() {
        assert_eq!(RidingStyle::Endurance.saddle_offset_in(), 0.0);
        assert_eq!(RidingStyle::Race.saddle_offset_in(), 0.2);
        assert_eq!(RidingStyle::Gravel.saddle_offset_in(), -0.1);
        assert_eq!(RidingStyle::Commute.saddle_offset_in(), -0.2);
        assert_eq!(RidingStyle::from_input("bmx").saddle_offset_in(), 0.0);
    }

    #[test]
    fn test_flexibility_parsing() {
        assert_eq!(Flexibility::from_input("Low"), Flexibility::Low);
        assert_eq!(Flexibility::from_input("medium\n"), Flexibility::Medium);
        assert_eq!(Flexibility::from_input("HIGH"), Flexibility::High);
        assert_eq!(Flexibility::from_input("bendy").as_str(), "bendy");
    }

    #[test]
    fn test_pain_point_identifiers_round_trip() {
        for point in PainPoint::KNOWN.iter() {
            assert_eq!(&PainPoint::from_input(point.as_str()), point);
        }
        assert_eq!(PainPoint::from_input(" Knee_Front "), PainPoint::KneeFront);
        assert!(!PainPoint::from_input("elbow").is_recognized());
    }

    #[test]
    fn test_profile_from_input() {
        let profile = RiderProfile::from_input(70.0, 32.0, "Commute", "low", &["hip_pain", "toe"]);
        assert_eq!(profile.riding_style, RidingStyle::Commute);
        assert_eq!(profile.flexibility, Flexibility::Low);
        assert_eq!(
            profile.pain_points,
            vec![PainPoint::HipPain, PainPoint::Unrecognized("toe".to_string())]
        );
    }
}
