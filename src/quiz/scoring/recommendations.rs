use crate::quiz::domain::{Profile, ReadinessLevel};

/// Base guidance keyed by readiness level followed by archetype-specific
/// guidance, in that fixed order.
pub(crate) fn for_result(level: ReadinessLevel, profile: Profile) -> Vec<String> {
    base(level)
        .iter()
        .chain(profile_specific(profile))
        .map(|text| text.to_string())
        .collect()
}

const fn base(level: ReadinessLevel) -> &'static [&'static str] {
    match level {
        ReadinessLevel::High => &[
            "Direct engagement with mutual aid networks in your area",
            "Explore cooperative housing options",
            "Consider joining debt resistance movements",
            "Connect with community-based financial alternatives",
        ],
        ReadinessLevel::Medium => &[
            "Start with small collaborative economic experiments",
            "Join debt support communities and groups",
            "Explore hybrid approaches combining traditional and alternative methods",
            "Gradually build community connections",
        ],
        ReadinessLevel::Low => &[
            "Focus on financial literacy and conventional debt reduction",
            "Explore traditional consolidation and payment plan options",
            "Begin gradual community building activities",
            "Research alternative economic models at your own pace",
        ],
    }
}

const fn profile_specific(profile: Profile) -> &'static [&'static str] {
    match profile {
        Profile::Student => &[
            "Research income-driven repayment plans",
            "Connect with other graduates facing similar challenges",
            "Explore cooperative living to reduce expenses",
        ],
        Profile::Credit => &[
            "Consider debt consolidation options",
            "Explore balance transfer opportunities",
            "Join credit counseling programs",
        ],
        Profile::Medical => &[
            "Research medical debt forgiveness programs",
            "Connect with patient advocacy groups",
            "Explore mutual aid networks for medical expenses",
        ],
        Profile::Mortgage => &[
            "Investigate housing cooperatives",
            "Explore co-housing communities",
            "Consider house hacking strategies",
        ],
        Profile::Multi => &[
            "Connect with multigenerational support networks",
            "Explore cooperative childcare/eldercare options",
            "Consider community resource sharing programs",
        ],
        Profile::Solidarity => &[
            "Share your debt-free strategies with others",
            "Consider mentoring those struggling with debt",
            "Explore ways to support community financial wellness",
            "Join or create mutual aid networks in your area",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_guidance_always_has_four_entries() {
        for level in [
            ReadinessLevel::Low,
            ReadinessLevel::Medium,
            ReadinessLevel::High,
        ] {
            assert_eq!(base(level).len(), 4);
        }
    }

    #[test]
    fn base_entries_precede_profile_entries() {
        let recommendations = for_result(ReadinessLevel::Low, Profile::Credit);
        assert_eq!(recommendations.len(), 7);
        assert_eq!(
            recommendations[0],
            "Focus on financial literacy and conventional debt reduction"
        );
        assert_eq!(recommendations[4], "Consider debt consolidation options");
    }

    #[test]
    fn solidarity_carries_a_fourth_entry() {
        let recommendations = for_result(ReadinessLevel::High, Profile::Solidarity);
        assert_eq!(recommendations.len(), 8);
    }
}
