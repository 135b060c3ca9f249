use std::cmp::Ordering;

use crate::quiz::domain::{PrimaryProfile, Profile, ProfileScores, ReadinessLevel};

/// Picks the winning archetype. Highest score wins; on ties the
/// multi-generational and solidarity archetypes take precedence over the
/// other four, and remaining ties fall back to enumeration order.
pub(crate) fn derive_primary(scores: &ProfileScores) -> PrimaryProfile {
    let mut candidates: Vec<(Profile, f64)> = Profile::ALL
        .iter()
        .map(|&profile| (profile, scores.get(profile)))
        .collect();

    candidates.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| tie_break_rank(a.0).cmp(&tie_break_rank(b.0)))
    });

    let (profile, score) = candidates[0];
    PrimaryProfile {
        profile,
        name: profile.display_name().to_string(),
        match_percentage: match_percentage(score),
    }
}

fn tie_break_rank(profile: Profile) -> u8 {
    match profile {
        Profile::Multi | Profile::Solidarity => 0,
        _ => 1,
    }
}

/// Score 0 maps to the 60% floor; every point adds 10 up to the 95% cap.
fn match_percentage(score: f64) -> u8 {
    (60.0 + score * 10.0).round().min(95.0) as u8
}

pub(crate) fn readiness_level(score: u8) -> ReadinessLevel {
    if score >= 80 {
        ReadinessLevel::High
    } else if score >= 50 {
        ReadinessLevel::Medium
    } else {
        ReadinessLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_with(entries: &[(Profile, f64)]) -> ProfileScores {
        let mut scores = ProfileScores::default();
        for &(profile, points) in entries {
            match profile {
                Profile::Student => scores.student = points,
                Profile::Credit => scores.credit = points,
                Profile::Medical => scores.medical = points,
                Profile::Mortgage => scores.mortgage = points,
                Profile::Multi => scores.multi = points,
                Profile::Solidarity => scores.solidarity = points,
            }
        }
        scores
    }

    #[test]
    fn highest_score_wins_outright() {
        let primary = derive_primary(&scores_with(&[
            (Profile::Credit, 3.0),
            (Profile::Multi, 2.0),
        ]));
        assert_eq!(primary.profile, Profile::Credit);
        assert_eq!(primary.name, "Credit Card Cycler");
    }

    #[test]
    fn multi_and_solidarity_take_tie_precedence() {
        let primary = derive_primary(&scores_with(&[
            (Profile::Student, 2.0),
            (Profile::Multi, 2.0),
        ]));
        assert_eq!(primary.profile, Profile::Multi);

        let primary = derive_primary(&scores_with(&[
            (Profile::Credit, 1.5),
            (Profile::Solidarity, 1.5),
        ]));
        assert_eq!(primary.profile, Profile::Solidarity);
    }

    #[test]
    fn multi_solidarity_tie_resolves_by_enumeration_order() {
        let primary = derive_primary(&scores_with(&[
            (Profile::Multi, 2.0),
            (Profile::Solidarity, 2.0),
        ]));
        assert_eq!(primary.profile, Profile::Multi);
    }

    #[test]
    fn non_priority_tie_resolves_by_enumeration_order() {
        let primary = derive_primary(&scores_with(&[
            (Profile::Credit, 1.0),
            (Profile::Medical, 1.0),
        ]));
        assert_eq!(primary.profile, Profile::Credit);
    }

    #[test]
    fn match_percentage_floors_at_60_and_caps_at_95() {
        assert_eq!(derive_primary(&ProfileScores::default()).match_percentage, 60);

        let primary = derive_primary(&scores_with(&[(Profile::Student, 9.0)]));
        assert_eq!(primary.match_percentage, 95);

        let primary = derive_primary(&scores_with(&[(Profile::Student, 0.4)]));
        assert_eq!(primary.match_percentage, 64);
    }

    #[test]
    fn readiness_level_thresholds() {
        assert_eq!(readiness_level(0), ReadinessLevel::Low);
        assert_eq!(readiness_level(49), ReadinessLevel::Low);
        assert_eq!(readiness_level(50), ReadinessLevel::Medium);
        assert_eq!(readiness_level(79), ReadinessLevel::Medium);
        assert_eq!(readiness_level(80), ReadinessLevel::High);
        assert_eq!(readiness_level(100), ReadinessLevel::High);
    }
}
