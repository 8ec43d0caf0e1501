//! Flattened text rendering of a job profile.
//!
//! The import pipeline stores this rendering on the `JobProfile` node and
//! chunks it for embedding, so the section order must stay deterministic:
//! re-rendering an unchanged article has to produce identical chunk ids.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use std::fmt::Write;

use crate::article::Article;

/// Render an article into the section-per-line text used for chunking and
/// full-text search.
#[must_use]
pub fn render_profile_text(article: &Article) -> String {
    let mut out = String::new();
    let profile = &article.job_profile;

    let _ = writeln!(out, "Job Role: {}", article.job_role);
    let _ = writeln!(out, "Sector: {}", article.sector);
    let _ = writeln!(out, "Sub-Sector: {}", article.sub_sector);
    let _ = writeln!(out, "College Category: {}", article.college_category);

    let _ = writeln!(out, "\nJob Profile:");
    let _ = writeln!(out, "- General Description: {}", profile.general_description.text);
    let _ = writeln!(out, "- Day in the Life: {}", profile.day_in_the_life.text);

    let _ = writeln!(out, "- Reasons Liked:");
    for reason in &profile.reasons_liked {
        let _ = writeln!(out, "  * {}", reason.reason);
    }
    let _ = writeln!(out, "- Reasons Disliked:");
    for reason in &profile.reasons_disliked {
        let _ = writeln!(out, "  * {}", reason.reason);
    }

    let prepare = &profile.prepare_for_role;
    let _ = writeln!(out, "Preparing For The Role:");
    let _ = writeln!(out, "- {}", prepare.education_vs_degree_heading);
    let _ = writeln!(out, "- Education vs Degree: {}", prepare.education_vs_degree);
    let _ = writeln!(out, "- Training Needed: {}", prepare.training_needed);
    let _ = writeln!(out, "- Prior Work Experience: {}", prepare.prior_work_experience);

    render_ratings(&mut out, "Aptitude Ratings:", &article.aptitude_ratings);
    render_ratings(&mut out, "Interest Ratings:", &article.interest_ratings);
    render_ratings(&mut out, "Value Ratings:", &article.value_ratings);

    let _ = writeln!(out, "Career Pathways");
    for (index, pathway) in article.career_pathways.iter().enumerate() {
        let _ = writeln!(out, "- Pathway {}: {}", index + 1, pathway.pathway_title);
        let _ = writeln!(out, "  Description: {}", pathway.description);
        for role in &pathway.job_roles {
            let _ = writeln!(out, "  * {}: {} years", role.title, role.years);
        }
    }

    let _ = writeln!(out, "Well Known Employers");
    for employer in &article.employers.well_known_employers {
        let _ = writeln!(out, "- {}: {}", employer.name, employer.website);
        let _ = writeln!(out, "  description: {}", employer.description);
    }

    let _ = writeln!(out, "Employer Profiles");
    for profile in &article.employers.employer_profiles {
        let _ = writeln!(out, "- Location: {}", profile.geographic_option);
        let _ = writeln!(out, "  profile: {}", profile.profiles);
    }

    let _ = writeln!(out, "Geographic Job Details");
    for detail in &article.geographic_job_details {
        let _ = writeln!(
            out,
            "- Location: {}, availability: {}",
            detail.geographic_option, detail.job_availability
        );
        let _ = writeln!(out, "  Salary Range: {}", detail.estimated_salary_range);
    }

    // Trailing newline carries no information for search or chunking.
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn render_ratings(out: &mut String, heading: &str, ratings: &[crate::article::Rating]) {
    let _ = writeln!(out, "{heading}");
    for rating in ratings {
        let _ = writeln!(out, "- {}, score: {}", rating.attribute, rating.score);
        let _ = writeln!(out, "  Reason: {}", rating.reason);
    }
}
