use super::*;

fn sample_article(salary: &str) -> Article {
    serde_json::from_value(serde_json::json!({
        "_id": { "$oid": "66d1c7f2a4b0e83f5c9d1234" },
        "sector": "Healthcare",
        "subSector": "Hospitals",
        "collegeCategory": "College",
        "deleted": false,
        "jobProfile": {
            "generalDescription": { "text": "Cares for patients.", "mediaURL": "" },
            "dayInTheLife": { "text": "Rounds start at 7am." },
            "reasonLiked": [ { "reason": "Helping people" } ],
            "reasonsDisliked": [ { "reason": "Night shifts" } ],
            "prepareForRole": {
                "educationVsDegreeHeading": "Nursing degree required",
                "educationVsDegree": "B.Sc Nursing",
                "trainingNeeded": "Clinical rotations",
                "priorWorkExperience": "Internship"
            }
        },
        "aptitudeRatings": [ { "attribute": "Interpersonal Skills", "score": 9, "reason": "Patient contact" } ],
        "jobLocation": "Urban",
        "jobRole": "Nurse",
        "jobRoleKey": "nurse",
        "experienceLevel": "Entry",
        "employers": {
            "wellKnownEmployers": [ { "name": "Apollo", "description": "Chain", "website": "https://apollo.example" } ]
        },
        "geographicJobDetails": [
            { "geographicOption": "Large Cities", "jobAvailability": "High", "estimatedSalaryRange": salary }
        ]
    }))
    .unwrap()
}

#[test]
fn prepared_article_chunks_rendered_text() {
    let prepared = PreparedArticle::new(sample_article("₹3,00,000 – ₹5,50,000"));
    assert!(prepared.text.starts_with("Job Role: Nurse"));
    assert_eq!(prepared.chunks.len(), 1);
    assert_eq!(prepared.chunks[0].id, "66d1c7f2a4b0e83f5c9d1234-0");
}

#[test]
fn import_row_carries_keys_the_cypher_reads() {
    let prepared = PreparedArticle::new(sample_article("₹3,00,000 – ₹5,50,000"));
    let row = import_row(&prepared, &[vec![0.1, 0.2]]).unwrap();

    assert_eq!(row["id"], "66d1c7f2a4b0e83f5c9d1234");
    assert_eq!(row["jobProfile"]["generalDescription"]["text"], "Cares for patients.");
    assert_eq!(row["jobProfile"]["generalDescription"]["mediaURLs"]["male"], "");
    assert_eq!(row["jobProfile"]["reasonsLiked"][0], "Helping people");
    assert_eq!(row["jobProfile"]["prepareForRole"]["trainingNeeded"], "Clinical rotations");
    assert_eq!(row["aptitudeRatings"][0]["score"], 9);
    assert_eq!(row["employers"]["wellKnownEmployers"][0]["name"], "Apollo");
    assert!(row["text"].as_str().unwrap().contains("Day in the Life"));
}

#[test]
fn import_row_parses_salary_bounds() {
    let prepared = PreparedArticle::new(sample_article("₹3,00,000 – ₹5,50,000 per annum"));
    let row = import_row(&prepared, &[vec![0.0]]).unwrap();
    let detail = &row["geographicJobDetails"][0];
    assert_eq!(detail["minimumSalary"], 300_000);
    assert_eq!(detail["maximumSalary"], 550_000);
    assert_eq!(detail["estimatedSalaryRange"], "₹3,00,000 – ₹5,50,000 per annum");
}

#[test]
fn import_row_rejects_bad_salary_range() {
    let prepared = PreparedArticle::new(sample_article("negotiable"));
    let err = import_row(&prepared, &[vec![0.0]]).unwrap_err();
    match err {
        ImportError::SalaryRange { article, range } => {
            assert_eq!(article, "66d1c7f2a4b0e83f5c9d1234");
            assert_eq!(range, "negotiable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn import_row_zips_chunks_with_embeddings() {
    let prepared = PreparedArticle::new(sample_article("₹1,000 – ₹2,000"));
    let row = import_row(&prepared, &[vec![0.5, 0.25]]).unwrap();
    let chunk = &row["chunks"][0];
    assert_eq!(chunk["index"], "66d1c7f2a4b0e83f5c9d1234-0");
    assert_eq!(chunk["embedding"], serde_json::json!([0.5, 0.25]));
    // Chunk text is whitespace-normalized by the word splitter.
    assert!(chunk["text"].as_str().unwrap().starts_with("Job Role: Nurse Sector: Healthcare"));
}
