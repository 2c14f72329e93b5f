use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::intake::Participant;
use crate::models::{ScoredCareer, UserProfile};
use crate::scoring;

pub fn build_report(
    participant: &Participant,
    profile: &UserProfile,
    ranked: &[ScoredCareer],
    catalog: &Catalog,
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Career Match Report");
    let _ = writeln!(
        output,
        "Prepared for {}{} on {}",
        participant.name,
        participant
            .email
            .as_deref()
            .map(|email| format!(" ({email})"))
            .unwrap_or_default(),
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Profile");
    let _ = writeln!(
        output,
        "- Academic average: {:.1}% (10th {}, 12th {}, UG {})",
        profile.academic_average(),
        profile.tenth,
        profile.twelfth,
        profile.ug
    );
    let _ = writeln!(
        output,
        "- Coding {}/10, logical {}/10, public speaking {}/10",
        profile.coding, profile.logical, profile.public_speaking
    );
    let _ = writeln!(output, "- Orientation: {}", profile.mgt_or_tech.as_str());
    let _ = writeln!(
        output,
        "- {} study hours/day; self-learning {}, extra courses {}, hackathons {}",
        profile.hours_per_day,
        profile.self_learning.as_str(),
        profile.extra_courses.as_str(),
        profile.hackathons.as_str()
    );
    if !profile.workshops.is_empty() {
        let _ = writeln!(output, "- Workshops: {}", profile.workshops.join(", "));
    }
    if !profile.certifications.is_empty() {
        let _ = writeln!(output, "- Certifications: {}", profile.certifications.join(", "));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Matches");

    if ranked.is_empty() {
        let _ = writeln!(output, "No careers available in the catalog.");
        return output;
    }

    for (position, scored) in ranked.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} score {:.2}",
            position + 1,
            scored.career_name,
            scored.score
        );
    }

    let Some(top) = catalog.get(&ranked[0].career_name) else {
        return output;
    };
    let parts = scoring::breakdown(profile, top);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Why {}", top.name);
    let _ = writeln!(output, "- Academics: {:.2} / {:.0}", parts.academic, scoring::WEIGHTS.academic);
    let _ = writeln!(output, "- Coding: {:.2} / {:.0}", parts.coding, scoring::WEIGHTS.coding);
    let _ = writeln!(output, "- Logical reasoning: {:.2} / {:.0}", parts.logical, scoring::WEIGHTS.logical);
    let _ = writeln!(output, "- Orientation: {:.2} / {:.0}", parts.orientation, scoring::WEIGHTS.orientation);
    let _ = writeln!(output, "- Workshops & certifications: {:.2} / {:.0}", parts.keywords, scoring::WEIGHTS.keywords);
    let _ = writeln!(output, "- Work ethic: {:.2} / {:.0}", parts.work_ethic, scoring::WEIGHTS.work_ethic);

    if !top.description.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", top.description);
    }

    if !top.required_skills.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Required Skills");
        for skill in &top.required_skills {
            let _ = writeln!(output, "- {skill}");
        }
    }

    if !top.growth_path.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Growth Path");
        let _ = writeln!(output, "{}", top.growth_path.join(" -> "));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Orientation};
    use chrono::TimeZone;

    fn participant() -> Participant {
        Participant {
            name: "Kavya Rao".to_string(),
            email: Some("kavya@example.com".to_string()),
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            tenth: 90,
            twelfth: 85,
            ug: 80,
            logical: 8,
            coding: 9,
            public_speaking: 4,
            hours_per_day: 8,
            mgt_or_tech: Orientation::Technical,
            self_learning: Answer::Yes,
            extra_courses: Answer::No,
            hackathons: Answer::Yes,
            workshops: vec!["Python".to_string()],
            certifications: vec![],
        }
    }

    #[test]
    fn report_lists_matches_and_explains_the_top_one() {
        let catalog = Catalog::builtin();
        let ranked = scoring::recommend(&profile(), catalog.careers(), 3);
        let generated_at = Utc.with_ymd_and_hms(2026, 5, 2, 10, 0, 0).unwrap();
        let report = build_report(&participant(), &profile(), &ranked, &catalog, generated_at);

        assert!(report.starts_with("# Career Match Report"));
        assert!(report.contains("Prepared for Kavya Rao (kavya@example.com) on 2026-05-02 10:00 UTC"));
        assert!(report.contains("- Academic average: 85.0%"));
        assert!(report.contains(&format!("1. {} score", ranked[0].career_name)));
        assert!(report.contains(&format!("## Why {}", ranked[0].career_name)));
        assert!(report.contains("## Growth Path"));

        let top = catalog.get(&ranked[0].career_name).expect("top career");
        assert!(report.contains("## Required Skills"));
        assert!(report.contains(&format!("- {}", top.required_skills[0])));
    }

    #[test]
    fn report_handles_empty_ranking() {
        let catalog = Catalog::from_careers(vec![]).expect("empty");
        let report = build_report(&participant(), &profile(), &[], &catalog, Utc::now());
        assert!(report.contains("No careers available in the catalog."));
        assert!(!report.contains("## Why"));
    }
}
