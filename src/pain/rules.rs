//! Pain Rule Table
//!
//! One static rule per known pain point. The table is compiled in and has no
//! mutation API, so it is shared freely across concurrent requests.

use crate::profile::PainPoint;

/// Diagnostic guidance for a single pain point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainRule {
    pub label: &'static str,
    /// Most likely first
    pub likely_causes: &'static [&'static str],
    pub first_adjustment: &'static str,
    pub caution: &'static str,
}

static KNEE_FRONT: PainRule = PainRule {
    label: "Front knee pain",
    likely_causes: &[
        "Saddle too low, increasing knee flexion under load",
        "Saddle too far forward",
        "Pushing big gears at low cadence",
    ],
    first_adjustment: "Raise saddle 2-3mm and check you are not too far forward over the pedals.",
    caution: "Stop and get checked if pain is sharp, swelling appears, or it persists off the bike.",
};

static KNEE_BACK: PainRule = PainRule {
    label: "Back knee pain",
    likely_causes: &[
        "Saddle too high, overextending the leg at the bottom of the stroke",
        "Saddle too far back",
        "Cleats set too far forward on the shoe",
    ],
    first_adjustment: "Lower saddle 2-3mm and watch for hip rocking on the pedal stroke.",
    caution: "Pain behind the knee with swelling or locking needs a professional assessment.",
};

static HAND_NUMBNESS: PainRule = PainRule {
    label: "Hand numbness",
    likely_causes: &[
        "Too much weight on the hands from a long or low reach",
        "Hoods or levers angled so wrists bend sharply",
        "Thin bar tape or gloves that compress the nerves in the palm",
    ],
    first_adjustment: "Shorten reach (stem/spacers) or raise bars slightly. Check hood angle and bar tape too.",
    caution: "Numbness that lasts long after the ride or causes weakness should be checked by a professional.",
};

static NECK_PAIN: PainRule = PainRule {
    label: "Neck pain",
    likely_causes: &[
        "Bars too low, forcing the head to crane upward",
        "Reach too long for current flexibility",
        "Locked elbows and tense shoulders",
    ],
    first_adjustment: "Raise bars with a spacer or shorten the stem so you can see ahead with a relaxed neck.",
    caution: "Seek medical advice for neck pain with headaches, tingling, or pain radiating into the arms.",
};

static LOWER_BACK_PAIN: PainRule = PainRule {
    label: "Lower back pain",
    likely_causes: &[
        "Reach too long or bars too low for hamstring and hip flexibility",
        "Saddle too high, making the pelvis rock",
        "Weak core under long efforts",
    ],
    first_adjustment: "Reduce bar drop or reach slightly before changing anything else.",
    caution: "Back pain with leg numbness or weakness is not a fit problem; see a professional.",
};

static HIP_PAIN: PainRule = PainRule {
    label: "Hip pain",
    likely_causes: &[
        "Saddle too high, causing the hips to rock side to side",
        "Saddle tilted or too wide or narrow for your sit bones",
        "Leg length difference not accounted for",
    ],
    first_adjustment: "Check saddle height and level the saddle, then lower it 2-3mm if the hips rock.",
    caution: "Persistent hip pain or clicking off the bike should be assessed by a professional.",
};

/// Rule for a pain point, or `None` for unrecognized identifiers
pub fn rule_for(point: &PainPoint) -> Option<&'static PainRule> {
    match point {
        PainPoint::KneeFront => Some(&KNEE_FRONT),
        PainPoint::KneeBack => Some(&KNEE_BACK),
        PainPoint::HandNumbness => Some(&HAND_NUMBNESS),
        PainPoint::NeckPain => Some(&NECK_PAIN),
        PainPoint::LowerBackPain => Some(&LOWER_BACK_PAIN),
        PainPoint::HipPain => Some(&HIP_PAIN),
        PainPoint::Unrecognized(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_point_has_a_rule() {
        for point in PainPoint::KNOWN.iter() {
            let rule = rule_for(point).unwrap();
            assert!(!rule.label.is_empty());
            assert!(!rule.likely_causes.is_empty());
            assert!(!rule.first_adjustment.is_empty());
            assert!(!rule.caution.is_empty());
        }
    }

    #[test]
    fn test_unrecognized_has_no_rule() {
        assert!(rule_for(&PainPoint::from_input("elbow")).is_none());
    }

    #[test]
    fn test_hand_numbness_rule() {
        let rule = rule_for(&PainPoint::HandNumbness).unwrap();
        assert_eq!(rule.label, "Hand numbness");
        assert_eq!(
            rule.first_adjustment,
            "Shorten reach (stem/spacers) or raise bars slightly. Check hood angle and bar tape too."
        );
    }
}
