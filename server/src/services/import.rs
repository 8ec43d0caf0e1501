//! Article import pipeline.
//!
//! PIPELINE
//! ========
//! export file → typed articles → rendered text → chunks → one embeddings
//! request for every chunk → one `UNWIND` import statement. Embedding in a
//! single batch mirrors the write path: either the whole export lands or
//! none of it does.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use serde_json::{Value, json};

use profiles::{Article, Chunk, chunk_text, parse_salary_range, render_profile_text};

use crate::graph::{GraphError, cypher};
use crate::llm::LlmError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("failed to read article export {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse article export: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("article {article}: unparsable salary range {range:?}")]
    SalaryRange { article: String, range: String },
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Run the full import and return the number of imported articles.
///
/// # Errors
///
/// Returns an [`ImportError`] if the export cannot be read or parsed, a
/// salary range is malformed, or the embeddings/import calls fail.
pub async fn run_import(state: &AppState) -> Result<usize, ImportError> {
    let llm = state.llm.as_ref().ok_or(ImportError::LlmNotConfigured)?;

    let path = &state.articles_path;
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| ImportError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let articles: Vec<Article> = serde_json::from_str(&raw)?;
    tracing::info!(count = articles.len(), "articles loaded from export");

    let prepared: Vec<PreparedArticle> = articles.into_iter().map(PreparedArticle::new).collect();

    let chunk_texts: Vec<String> = prepared
        .iter()
        .flat_map(|p| p.chunks.iter().map(|c| c.text.clone()))
        .collect();
    tracing::info!(chunks = chunk_texts.len(), "embedding chunk texts");
    let mut embeddings = llm.embed(&chunk_texts).await?.into_iter();

    let mut rows = Vec::with_capacity(prepared.len());
    for article in &prepared {
        let chunk_embeddings: Vec<Vec<f32>> =
            embeddings.by_ref().take(article.chunks.len()).collect();
        rows.push(import_row(article, &chunk_embeddings)?);
    }

    state.graph.run(cypher::IMPORT_ARTICLES, json!({ "data": rows })).await?;
    tracing::info!(count = rows.len(), "article import statement executed");
    Ok(rows.len())
}

/// An article with its rendered text and chunk windows.
struct PreparedArticle {
    article: Article,
    text: String,
    chunks: Vec<Chunk>,
}

impl PreparedArticle {
    fn new(article: Article) -> Self {
        let text = render_profile_text(&article);
        let chunks = chunk_text(&article.id.oid, &text);
        Self { article, text, chunks }
    }
}

/// Shape one article into the parameter row the import statement expects.
fn import_row(prepared: &PreparedArticle, embeddings: &[Vec<f32>]) -> Result<Value, ImportError> {
    let article = &prepared.article;
    let profile = &article.job_profile;

    let mut geographic = Vec::with_capacity(article.geographic_job_details.len());
    for detail in &article.geographic_job_details {
        let (minimum, maximum) = parse_salary_range(&detail.estimated_salary_range).ok_or_else(|| {
            ImportError::SalaryRange {
                article: article.id.oid.clone(),
                range: detail.estimated_salary_range.clone(),
            }
        })?;
        geographic.push(json!({
            "geographicOption": detail.geographic_option,
            "jobAvailability": detail.job_availability,
            "estimatedSalaryRange": detail.estimated_salary_range,
            "minimumSalary": minimum,
            "maximumSalary": maximum,
        }));
    }

    let chunks: Vec<Value> = prepared
        .chunks
        .iter()
        .zip(embeddings)
        .map(|(chunk, embedding)| {
            json!({ "index": chunk.id, "text": chunk.text, "embedding": embedding })
        })
        .collect();

    let ratings = |list: &[profiles::Rating]| -> Vec<Value> {
        list.iter()
            .map(|r| json!({ "attribute": r.attribute, "score": r.score, "reason": r.reason }))
            .collect()
    };

    Ok(json!({
        "id": article.id.oid,
        "sector": article.sector,
        "subSector": article.sub_sector,
        "collegeCategory": article.college_category,
        "deleted": article.deleted,
        "jobProfile": {
            "generalDescription": {
                "text": profile.general_description.text,
                "mediaURL": profile.general_description.media_url,
                "mediaURLs": {
                    "male": profile.general_description.media_urls.male,
                    "female": profile.general_description.media_urls.female,
                },
            },
            "dayInTheLife": { "text": profile.day_in_the_life.text },
            "reasonsLiked": profile.reasons_liked.iter().map(|r| &r.reason).collect::<Vec<_>>(),
            "reasonsDisliked": profile.reasons_disliked.iter().map(|r| &r.reason).collect::<Vec<_>>(),
            "prepareForRole": {
                "educationVsDegreeHeading": profile.prepare_for_role.education_vs_degree_heading,
                "educationVsDegree": profile.prepare_for_role.education_vs_degree,
                "trainingNeeded": profile.prepare_for_role.training_needed,
                "priorWorkExperience": profile.prepare_for_role.prior_work_experience,
            },
        },
        "aptitudeRatings": ratings(&article.aptitude_ratings),
        "interestRatings": ratings(&article.interest_ratings),
        "valueRatings": ratings(&article.value_ratings),
        "careerPathways": article.career_pathways.iter().map(|pathway| json!({
            "pathwayTitle": pathway.pathway_title,
            "description": pathway.description,
            "jobRoles": pathway.job_roles.iter().map(|role| json!({
                "title": role.title,
                "years": role.years,
            })).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
        "jobLocation": article.job_location,
        "jobRole": article.job_role,
        "jobRoleKey": article.job_role_key,
        "experienceLevel": article.experience_level,
        "employers": {
            "wellKnownEmployers": article.employers.well_known_employers.iter().map(|e| json!({
                "name": e.name,
                "description": e.description,
                "website": e.website,
            })).collect::<Vec<_>>(),
            "employerProfiles": article.employers.employer_profiles.iter().map(|p| json!({
                "geographicOption": p.geographic_option,
                "profiles": p.profiles,
            })).collect::<Vec<_>>(),
        },
        "geographicJobDetails": geographic,
        "text": prepared.text,
        "chunks": chunks,
    }))
}
