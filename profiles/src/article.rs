//! Job-profile article model.
//!
//! Mirrors the MongoDB export shape consumed by the import pipeline. Field
//! names follow the export's camelCase keys; collections that may be absent
//! in older exports default to empty so a partial document still imports.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use serde::{Deserialize, Deserializer, Serialize};

/// MongoDB extended-JSON object id wrapper (`{"$oid": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleId {
    #[serde(rename = "$oid")]
    pub oid: String,
}

/// One job-profile article from the export file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: ArticleId,
    pub sector: String,
    pub sub_sector: String,
    pub college_category: String,
    #[serde(default)]
    pub deleted: bool,
    pub job_profile: JobProfile,
    #[serde(default)]
    pub aptitude_ratings: Vec<Rating>,
    #[serde(default)]
    pub interest_ratings: Vec<Rating>,
    #[serde(default)]
    pub value_ratings: Vec<Rating>,
    #[serde(default)]
    pub career_pathways: Vec<CareerPathway>,
    pub job_location: String,
    pub job_role: String,
    #[serde(default)]
    pub job_role_key: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub employers: Employers,
    #[serde(default)]
    pub geographic_job_details: Vec<GeographicJobDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    pub general_description: GeneralDescription,
    pub day_in_the_life: TextBlock,
    /// The export spells this key without the plural `s`.
    #[serde(rename = "reasonLiked", default)]
    pub reasons_liked: Vec<Reason>,
    #[serde(rename = "reasonsDisliked", default)]
    pub reasons_disliked: Vec<Reason>,
    pub prepare_for_role: PrepareForRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralDescription {
    pub text: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(rename = "mediaURLs", default)]
    pub media_urls: MediaUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaUrls {
    #[serde(default)]
    pub male: String,
    #[serde(default)]
    pub female: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reason {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareForRole {
    pub education_vs_degree_heading: String,
    #[serde(default)]
    pub education_vs_degree: String,
    #[serde(default)]
    pub training_needed: String,
    #[serde(default)]
    pub prior_work_experience: String,
}

/// An aptitude/interest/value rating. Older exports carry scores as strings,
/// so deserialization accepts both forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub attribute: String,
    #[serde(deserialize_with = "score_from_number_or_string")]
    pub score: i64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathway {
    pub pathway_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_roles: Vec<PathwayRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayRole {
    pub title: String,
    #[serde(deserialize_with = "score_from_number_or_string")]
    pub years: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employers {
    #[serde(default)]
    pub well_known_employers: Vec<Employer>,
    #[serde(default)]
    pub employer_profiles: Vec<EmployerProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub geographic_option: String,
    #[serde(default)]
    pub profiles: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicJobDetail {
    pub geographic_option: String,
    #[serde(default)]
    pub job_availability: String,
    #[serde(default)]
    pub estimated_salary_range: String,
}

fn score_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(|f| f as i64)
            .ok_or_else(|| serde::de::Error::custom("score out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid score: {s:?}"))),
        other => Err(serde::de::Error::custom(format!(
            "expected number or string score, got {other}"
        ))),
    }
}

/// Parse a salary range like `"₹2,00,000 – ₹4,50,000 per annum"` into
/// `(minimum, maximum)`. Returns `None` unless at least two rupee amounts
/// are present. Amounts keep the export's digit grouping, so commas are
/// stripped before parsing.
#[must_use]
pub fn parse_salary_range(range: &str) -> Option<(i64, i64)> {
    let amounts = rupee_amounts(range);
    match amounts.as_slice() {
        [] | [_] => None,
        [first, second, ..] => Some((*first, *second)),
    }
}

/// Extract every `₹`-prefixed amount from a string, in order of appearance.
fn rupee_amounts(text: &str) -> Vec<i64> {
    let mut amounts = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '₹' {
            continue;
        }
        let mut digits = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() {
                digits.push(next);
                chars.next();
            } else if next == ',' {
                chars.next();
            } else {
                break;
            }
        }
        if let Ok(value) = digits.parse::<i64>() {
            amounts.push(value);
        }
    }
    amounts
}
