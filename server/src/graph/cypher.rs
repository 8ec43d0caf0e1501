//! Canonical Cypher statements.
//!
//! The import statement is one `UNWIND` over the prepared article rows so a
//! whole export lands in a single transaction. Every node is `MERGE`d on its
//! natural key, which makes re-imports idempotent.

#[cfg(test)]
#[path = "cypher_test.rs"]
mod cypher_test;

pub const VECTOR_INDEX_NAME: &str = "chunk_vector";
pub const FULLTEXT_INDEX_NAME: &str = "chunk_fulltext";
/// Must match the embedding model's output width.
pub const VECTOR_DIMENSIONS: usize = 1536;

/// Index DDL run at startup; all statements are `IF NOT EXISTS`.
pub const INDEX_STATEMENTS: [&str; 3] = [
    "CREATE INDEX jobRole_range IF NOT EXISTS FOR (n:JobProfile) ON (n.jobRole)",
    "CREATE FULLTEXT INDEX chunk_fulltext IF NOT EXISTS FOR (n:Chunk) ON EACH [n.text]",
    "CREATE VECTOR INDEX chunk_vector IF NOT EXISTS \
     FOR (n:Chunk) ON (n.embedding) \
     OPTIONS {indexConfig: {`vector.dimensions`: 1536, `vector.similarity_function`: 'cosine'}}",
];

/// Vector search over chunk embeddings. Parameters: `index`, `k`, `embedding`.
pub const VECTOR_SEARCH: &str = "CALL db.index.vector.queryNodes($index, $k, $embedding) \
     YIELD node, score RETURN node.text AS text, score";

/// Full-text search over chunk texts. Parameters: `index`, `query`, `k`.
pub const FULLTEXT_SEARCH: &str = "CALL db.index.fulltext.queryNodes($index, $query) \
     YIELD node, score RETURN node.text AS text, score LIMIT $k";

/// Import prepared article rows. Parameter: `data` (list of rows shaped by
/// `services::import::import_row`).
pub const IMPORT_ARTICLES: &str = r"
UNWIND $data AS row
MERGE (j:JobProfile {id: row.id})
SET j.sector = row.sector,
    j.subSector = row.subSector,
    j.descriptionText = row.jobProfile.generalDescription.text,
    j.mediaURL = row.jobProfile.generalDescription.mediaURL,
    j.mediaURLsMale = row.jobProfile.generalDescription.mediaURLs.male,
    j.mediaURLsFemale = row.jobProfile.generalDescription.mediaURLs.female,
    j.collegeCategory = row.collegeCategory,
    j.jobRole = row.jobRole,
    j.jobRoleKey = row.jobRoleKey,
    j.jobLocation = row.jobLocation,
    j.experienceLevel = row.experienceLevel,
    j.dayInTheLifeText = row.jobProfile.dayInTheLife.text,
    j.text = row.text,
    j.deleted = row.deleted

WITH j, row, row.jobProfile.prepareForRole.educationVsDegreeHeading AS heading
MERGE (p:PrepareForRole {heading: heading})
MERGE (j)-[rel:FOR_ROLE]->(p)
SET rel.educationVsDegree = row.jobProfile.prepareForRole.educationVsDegree,
    rel.trainingNeeded = row.jobProfile.prepareForRole.trainingNeeded,
    rel.priorWorkExperience = row.jobProfile.prepareForRole.priorWorkExperience

WITH j, row
FOREACH (reason IN row.jobProfile.reasonsLiked |
  MERGE (rl:ReasonLiked {reason: reason})
  MERGE (j)-[:LIKED_FOR]->(rl)
)

WITH j, row
FOREACH (reason IN row.jobProfile.reasonsDisliked |
  MERGE (rd:ReasonDisliked {reason: reason})
  MERGE (j)-[:DISLIKED_FOR]->(rd)
)

WITH j, row
FOREACH (aptitude IN row.aptitudeRatings |
  MERGE (a:Aptitude {attribute: aptitude.attribute})
  MERGE (j)-[rel:HAS_APTITUDE]->(a)
  SET rel.score = toFloat(aptitude.score)
)

WITH j, row
FOREACH (interest IN row.interestRatings |
  MERGE (ir:Interest {attribute: interest.attribute})
  MERGE (j)-[rel:HAS_INTEREST]->(ir)
  SET rel.score = toFloat(interest.score)
)

WITH j, row
FOREACH (value IN row.valueRatings |
  MERGE (vr:Value {attribute: value.attribute})
  MERGE (j)-[rel:HAS_VALUE]->(vr)
  SET rel.score = toFloat(value.score)
)

WITH j, row
UNWIND row.careerPathways AS pathway
  MERGE (cp:CareerPathway {title: pathway.pathwayTitle})
  SET cp.description = pathway.description
  MERGE (j)-[:HAS_CAREER_PATHWAY]->(cp)
  FOREACH (jobRole IN pathway.jobRoles |
    MERGE (jr:JobRole {title: jobRole.title, years: jobRole.years})
    MERGE (cp)-[:HAS_JOB_ROLE]->(jr)
  )

WITH j, row
FOREACH (employer IN row.employers.wellKnownEmployers |
  MERGE (e:Employer {name: employer.name})
  SET e.description = employer.description,
      e.website = employer.website
  MERGE (j)-[:EMPLOYED_BY]->(e)
)

WITH j, row
FOREACH (profile IN row.employers.employerProfiles |
  MERGE (ep:EmployerProfile {geographicOption: profile.geographicOption})
  MERGE (j)-[rel:HAS_EMPLOYER_PROFILE]->(ep)
  SET rel.profiles = profile.profiles
)

WITH j, row
FOREACH (geoDetail IN row.geographicJobDetails |
  MERGE (g:GeographicDetail {option: geoDetail.geographicOption})
  MERGE (j)-[rel:HAS_GEOGRAPHIC_DETAIL]->(g)
  SET rel.jobAvailability = geoDetail.jobAvailability,
      rel.estimatedSalaryRange = geoDetail.estimatedSalaryRange,
      rel.minimumSalary = geoDetail.minimumSalary,
      rel.maximumSalary = geoDetail.maximumSalary
)

WITH j, row
UNWIND row.chunks AS chunk
  MERGE (c:Chunk {id: chunk.index})
  SET c.text = chunk.text,
      c.index = chunk.index
  MERGE (j)-[:HAS_CHUNK]->(c)
  WITH c, chunk
  CALL db.create.setNodeVectorProperty(c, 'embedding', chunk.embedding)
";

/// Collect `JobProfile` neighborhoods (excluding chunks) plus their
/// second-degree neighbors for the network view. Requires APOC.
pub const FETCH_NETWORK: &str = r#"
CALL {
    MATCH (a:JobProfile)-[r]->(end)
    WHERE NOT end:Chunk
    WITH a, r, end
    WITH apoc.coll.toSet(collect(DISTINCT a) + collect(DISTINCT end)) AS nodes,
         collect(r) AS rels
    RETURN nodes, rels
UNION ALL
    MATCH (a:JobProfile)-[]->(end)
    WHERE NOT end:Chunk
    WITH end
    MATCH (end)-[r]->(neighbor)
    WITH collect(DISTINCT neighbor) AS nodes, collect(r) AS rels
    RETURN nodes, rels
}
WITH collect(nodes) AS allNodeSets, collect(rels) AS allRelSets
WITH apoc.coll.flatten(allNodeSets) AS allNodes, apoc.coll.flatten(allRelSets) AS allRels
RETURN {nodes: [n IN allNodes |
                {
                    id: coalesce(n.id, elementId(n)),
                    tag: [el IN labels(n) WHERE el <> "__Entity__" | el][0],
                    properties: n {.*}
                }],
        relationships: [r IN allRels |
                {
                    start: coalesce(startNode(r).id, elementId(startNode(r))),
                    end: coalesce(endNode(r).id, elementId(endNode(r))),
                    type: type(r),
                    properties: r {.*}
                }]
       } AS output
"#;
