use crate::models::{CareerRequirement, Orientation, ScoreBreakdown, ScoredCareer, UserProfile};

pub const DEFAULT_TOP_N: usize = 5;

/// Maximum contribution of each term to the 0-100 fit score.
pub const WEIGHTS: Weights = Weights {
    academic: 20.0,
    coding: 15.0,
    logical: 15.0,
    orientation: 15.0,
    keywords: 20.0,
    work_ethic: 15.0,
};

const MAX_HOURS_PER_DAY: f64 = 12.0;

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub academic: f64,
    pub coding: f64,
    pub logical: f64,
    pub orientation: f64,
    pub keywords: f64,
    pub work_ethic: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.academic + self.coding + self.logical + self.orientation + self.keywords + self.work_ethic
    }
}

pub fn score(profile: &UserProfile, career: &CareerRequirement) -> f64 {
    breakdown(profile, career).total()
}

pub fn breakdown(profile: &UserProfile, career: &CareerRequirement) -> ScoreBreakdown {
    ScoreBreakdown {
        academic: academic_fit(profile.academic_average(), career.min_academic),
        coding: threshold_fit(profile.coding, career.min_coding, WEIGHTS.coding),
        logical: threshold_fit(profile.logical, career.min_logical, WEIGHTS.logical),
        orientation: if profile.mgt_or_tech.matches(career.tech_oriented) {
            WEIGHTS.orientation
        } else {
            0.0
        },
        keywords: keyword_fit(profile, &career.keywords),
        work_ethic: work_ethic(profile),
    }
}

/// Scores every career and returns the best `top_n`, highest first.
/// Equal scores keep catalog order.
pub fn recommend(
    profile: &UserProfile,
    careers: &[CareerRequirement],
    top_n: usize,
) -> Vec<ScoredCareer> {
    tracing::debug!(careers = careers.len(), top_n, "scoring careers");

    let mut ranked: Vec<ScoredCareer> = careers
        .iter()
        .map(|career| ScoredCareer {
            career_name: career.name.clone(),
            score: score(profile, career),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

fn academic_fit(average: f64, min_academic: u32) -> f64 {
    if average >= min_academic as f64 {
        WEIGHTS.academic
    } else {
        (average / min_academic as f64) * WEIGHTS.academic
    }
}

fn threshold_fit(value: u32, minimum: u32, weight: f64) -> f64 {
    if value >= minimum {
        weight
    } else {
        (value as f64 / minimum.max(1) as f64) * weight
    }
}

fn keyword_fit(profile: &UserProfile, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let matches: usize = keywords
        .iter()
        .map(|keyword| {
            usize::from(profile.workshops.contains(keyword))
                + usize::from(profile.certifications.contains(keyword))
                + usize::from(orientation_mentions(keyword, profile.mgt_or_tech))
        })
        .sum();

    let fit = matches as f64 / keywords.len() as f64 * WEIGHTS.keywords;
    fit.min(WEIGHTS.keywords)
}

/// Case-insensitive test of whether `keyword` occurs inside the orientation
/// label, e.g. "manage" inside "Management". Counts as one keyword match.
pub fn orientation_mentions(keyword: &str, orientation: Orientation) -> bool {
    orientation
        .as_str()
        .to_lowercase()
        .contains(&keyword.to_lowercase())
}

fn work_ethic(profile: &UserProfile) -> f64 {
    let flags = [profile.self_learning, profile.extra_courses, profile.hackathons]
        .iter()
        .filter(|answer| answer.is_yes())
        .count() as f64;
    let hours = profile.hours_per_day as f64 / MAX_HOURS_PER_DAY;
    (hours + flags) / 4.0 * WEIGHTS.work_ethic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Answer;

    const EPSILON: f64 = 1e-9;

    fn sample_profile() -> UserProfile {
        UserProfile {
            tenth: 80,
            twelfth: 80,
            ug: 80,
            logical: 8,
            coding: 8,
            public_speaking: 5,
            hours_per_day: 10,
            mgt_or_tech: Orientation::Technical,
            self_learning: Answer::Yes,
            extra_courses: Answer::Yes,
            hackathons: Answer::No,
            workshops: vec!["ML".to_string(), "AI".to_string()],
            certifications: vec![],
        }
    }

    fn sample_career() -> CareerRequirement {
        CareerRequirement {
            name: "AI ML Specialist".to_string(),
            min_coding: 7,
            min_logical: 7,
            min_academic: 70,
            tech_oriented: true,
            keywords: vec!["ML".to_string(), "AI".to_string(), "Python".to_string()],
            description: "Builds models.".to_string(),
            required_skills: vec![],
            growth_path: vec![],
        }
    }

    fn ideal_profile_for(career: &CareerRequirement) -> UserProfile {
        UserProfile {
            tenth: career.min_academic,
            twelfth: career.min_academic,
            ug: career.min_academic,
            logical: career.min_logical,
            coding: career.min_coding,
            public_speaking: 5,
            hours_per_day: 12,
            mgt_or_tech: if career.tech_oriented {
                Orientation::Technical
            } else {
                Orientation::Management
            },
            self_learning: Answer::Yes,
            extra_courses: Answer::Yes,
            hackathons: Answer::Yes,
            workshops: career.keywords.clone(),
            certifications: vec![],
        }
    }

    fn empty_profile_against(career: &CareerRequirement) -> UserProfile {
        UserProfile {
            tenth: 0,
            twelfth: 0,
            ug: 0,
            logical: 0,
            coding: 0,
            public_speaking: 0,
            hours_per_day: 0,
            mgt_or_tech: if career.tech_oriented {
                Orientation::Management
            } else {
                Orientation::Technical
            },
            self_learning: Answer::No,
            extra_courses: Answer::No,
            hackathons: Answer::No,
            workshops: vec![],
            certifications: vec![],
        }
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        assert!((WEIGHTS.sum() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn worked_example_matches_expected_terms() {
        let parts = breakdown(&sample_profile(), &sample_career());
        assert_eq!(parts.academic, 20.0);
        assert_eq!(parts.coding, 15.0);
        assert_eq!(parts.logical, 15.0);
        assert_eq!(parts.orientation, 15.0);
        assert!((parts.keywords - 40.0 / 3.0).abs() < EPSILON);
        assert!((parts.work_ethic - 10.625).abs() < EPSILON);

        let total = score(&sample_profile(), &sample_career());
        assert!((total - 88.958).abs() < 0.001);
        assert!((total - parts.total()).abs() < EPSILON);
    }

    #[test]
    fn below_threshold_earns_linear_fraction() {
        let mut profile = sample_profile();
        profile.coding = 3;
        profile.tenth = 35;
        profile.twelfth = 35;
        profile.ug = 35;
        let parts = breakdown(&profile, &sample_career());
        assert!((parts.coding - 3.0 / 7.0 * 15.0).abs() < EPSILON);
        assert!((parts.academic - 35.0 / 70.0 * 20.0).abs() < EPSILON);
    }

    #[test]
    fn zero_threshold_does_not_divide_by_zero() {
        let mut career = sample_career();
        career.min_coding = 0;
        career.min_logical = 0;
        let mut profile = sample_profile();
        profile.coding = 0;
        profile.logical = 0;
        let parts = breakdown(&profile, &career);
        assert_eq!(parts.coding, 15.0);
        assert_eq!(parts.logical, 15.0);
    }

    #[test]
    fn keyword_term_is_clamped() {
        let mut profile = sample_profile();
        profile.workshops = vec!["ML".to_string(), "AI".to_string(), "Python".to_string()];
        profile.certifications = profile.workshops.clone();
        let parts = breakdown(&profile, &sample_career());
        assert_eq!(parts.keywords, WEIGHTS.keywords);
    }

    #[test]
    fn empty_keyword_list_contributes_nothing() {
        let mut career = sample_career();
        career.keywords.clear();
        assert_eq!(breakdown(&sample_profile(), &career).keywords, 0.0);
    }

    #[test]
    fn orientation_label_counts_as_keyword_match() {
        assert!(orientation_mentions("manage", Orientation::Management));
        assert!(orientation_mentions("TECH", Orientation::Technical));
        assert!(!orientation_mentions("Management", Orientation::Technical));

        let mut career = sample_career();
        career.keywords = vec!["Management".to_string(), "Agile".to_string()];
        career.tech_oriented = false;
        let mut profile = sample_profile();
        profile.mgt_or_tech = Orientation::Management;
        profile.workshops.clear();
        assert!((breakdown(&profile, &career).keywords - 10.0).abs() < EPSILON);
    }

    #[test]
    fn builtin_careers_reach_full_score_for_ideal_profile() {
        for career in Catalog::builtin().careers() {
            let total = score(&ideal_profile_for(career), career);
            assert!((total - 100.0).abs() < EPSILON, "{} scored {}", career.name, total);
        }
    }

    #[test]
    fn builtin_careers_score_zero_for_empty_mismatched_profile() {
        for career in Catalog::builtin().careers() {
            let total = score(&empty_profile_against(career), career);
            assert_eq!(total, 0.0, "{} scored {}", career.name, total);
        }
    }

    #[test]
    fn scores_stay_within_bounds() {
        let catalog = Catalog::builtin();
        let mut profile = sample_profile();
        for coding in [0, 5, 10] {
            for hours in [0, 6, 12] {
                profile.coding = coding;
                profile.hours_per_day = hours;
                profile.certifications = vec!["CCNA".to_string(), "AWS".to_string()];
                for career in catalog.careers() {
                    let total = score(&profile, career);
                    assert!((0.0..=100.0).contains(&total), "{} scored {}", career.name, total);
                }
            }
        }
    }

    #[test]
    fn scoring_is_repeatable() {
        let profile = sample_profile();
        let career = sample_career();
        assert_eq!(score(&profile, &career), score(&profile, &career));
    }

    #[test]
    fn recommend_sorts_and_truncates() {
        let catalog = Catalog::builtin();
        let ranked = recommend(&sample_profile(), catalog.careers(), DEFAULT_TOP_N);
        assert_eq!(ranked.len(), DEFAULT_TOP_N.min(catalog.len()));
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn recommend_returns_everything_for_small_catalogs() {
        let careers = vec![sample_career()];
        let ranked = recommend(&sample_profile(), &careers, DEFAULT_TOP_N);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].career_name, "AI ML Specialist");
    }

    #[test]
    fn recommend_on_empty_catalog_is_empty() {
        assert!(recommend(&sample_profile(), &[], DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut first = sample_career();
        first.name = "First".to_string();
        let mut second = sample_career();
        second.name = "Second".to_string();
        let mut third = sample_career();
        third.name = "Third".to_string();
        third.min_coding = 10;

        let ranked = recommend(&sample_profile(), &[third, first, second], 3);
        let names: Vec<&str> = ranked.iter().map(|r| r.career_name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
