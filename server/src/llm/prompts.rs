//! Prompt templates for the RAG chains.
//!
//! Templates are plain strings with `{placeholder}` markers filled by the
//! helpers below; generated Cypher samples contain literal braces, so
//! `format!` escaping would make the templates unreadable.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

/// Fallback answer when structured retrieval cannot help.
pub const UNKNOWN_ANSWER: &str = "I don't know the answer.";

const ANSWER_SYSTEM_TEMPLATE: &str = r"You are a helpful assistant that answers questions based on the provided context.

---Special Instructions---
1. When answering salary-related questions, prioritize mentioning positions with the highest salaries.
2. Ensure all responses are closely related to the recruitment theme. Avoid discussing information unrelated to job positions, companies, or the application process.
3. When encountering ambiguous queries, attempt to understand the job seeker's potential intentions.
4. If asked about specific skills or qualifications, only mention those explicitly stated in the provided data. Do not assume or infer requirements not listed in the job descriptions.
5. When comparing multiple positions, focus on objective data points such as salary, required experience, and listed responsibilities.
6. Always treat scores and ratings as numerical values. When sorting or ranking based on scores, convert all scores to numbers, sort on the numerical values, and double-check the ordering before answering.
7. For questions about top aptitudes or skills, use ONLY the Aptitude Ratings in the data, list the selected aptitudes from highest score to lowest, and include the numerical score for each.
8. For salary questions specific to certain locations, use the salary range recorded for that location category.
9. When selecting top N items and there is a tie for the Nth position, include ALL items with that score, even if more than N items result.
10. If there is salary information, the currency unit is '₹'. For salary questions, check whether the figure is monthly or annual and process it accordingly.

Answer the question based only on the following context:
<context>
{context}
</context>
If the context doesn't provide any helpful information, say that you don't know the answer.
";

const CYPHER_GENERATION_TEMPLATE: &str = r#"## Overview
This prompt converts natural language questions into Cypher queries for a graph database of job profiles, covering job roles, aptitudes, career pathways, and employers.

Schema:
{schema}

Important: Exclude explanations or apologies from your responses. Use only the relationship types and properties present in the schema. Present only the resulting Cypher query.

## Cypher Query Construction Guidelines
MATCH: Initiate with MATCH to outline nodes and relationships. Employ labels and properties for node filtering.
WHERE: Use WHERE for additional criteria to refine results.
RETURN: Specify desired outputs using the RETURN clause.
Aggregation: For data aggregation, apply the WITH clause with functions like COUNT, SUM, AVG prior to RETURN.
Avoid Non-Cypher Keywords: Refrain from SQL-specific keywords like GROUP; use Cypher's WITH for aggregations.
Additional Clauses: Use OPTIONAL MATCH for optional patterns, and ORDER BY, SKIP, LIMIT for manipulating results.

## Mapping Standards
GeographicDetail.option: one of 'Large Cities', 'Medium & Small Cities', 'Towns & Villages'.
JobProfile.collegeCategory: 'College' or 'Non-College'.
Aptitude.attribute: one of 'Logical Reasoning and Analytical Skills', 'Verbal Ability and Communication Skills', 'Numerical Aptitude', 'Creative Thinking and Innovation', 'Spatial Awareness', 'Interpersonal Skills', 'Technical Proficiency', 'Organizational Skills', 'Entrepreneurial Skills', 'Physical and Manual Skills'.
Interest.attribute: one of 'Realistic', 'Investigative', 'Artistic', 'Social', 'Enterprising', 'Conventional'.
Value.attribute: one of 'Work-Life Balance', 'Achievement', 'Independence', 'Recognition', 'Supportive Environment', 'Compensation', 'Security'.

## Sample Questions and Queries
Question: Which employers are notable for hiring in the healthcare industry?
Cypher Query:
MATCH (j:JobProfile)-[:EMPLOYED_BY]->(e:Employer) WHERE j.sector = 'Healthcare' RETURN DISTINCT e.name AS EmployerName, e.description AS EmployerDescription

Question: Top 3 aptitudes needed for excelling as a Retail Sales Associate?
Cypher Query:
MATCH (j:JobProfile {jobRole: "Retail Sales Associate"})-[r:HAS_APTITUDE]->(a:Aptitude) RETURN a.attribute ORDER BY r.score DESC LIMIT 3

Question: Salary information for Automotive Engineer role?
Cypher Query:
MATCH (j:JobProfile {jobRole: 'Automotive Engineer'})-[r:HAS_GEOGRAPHIC_DETAIL]->(g:GeographicDetail) WHERE g.option = 'Large Cities' RETURN r.estimatedSalaryRange AS EstimatedSalaryRange

Question: Educational qualifications for an Automotive Engineer?
Cypher Query:
MATCH (j:JobProfile {jobRole: 'Automotive Engineer'})-[:FOR_ROLE]->(p:PrepareForRole) RETURN p.heading AS EducationalQualifications

Question: Role with a college degree offering the highest salary in small cities?
Cypher Query:
MATCH (j:JobProfile) WHERE j.collegeCategory = 'College' MATCH (j)-[r:HAS_GEOGRAPHIC_DETAIL]->(g:GeographicDetail) WHERE g.option = 'Medium & Small Cities' RETURN j.jobRole AS JobRole, r.maximumSalary AS MaximumSalary ORDER BY r.maximumSalary DESC LIMIT 1

## Translation Approach
Identify the relevant nodes and relationships and assemble a Cypher query by correlating the question's elements with the graph schema.

Question: {question}
Now, compose only the query statement without any associated Markdown formatting elements.
"#;

const QA_TEMPLATE: &str = r"You are an assistant that helps to form nice and human understandable answers.
The information part contains the provided information that you must use to construct an answer.
The provided information is authoritative, you must never doubt it or try to use your internal knowledge to correct it.
Make the answer sound as a response to the question. Do not mention that you based the result on the given information.
If there is salary information, the currency unit is '₹'.
For questions about salaries, please check whether it is a monthly or annual salary and process it accordingly.
Here is an example:

Question: Which managers own Neo4j stocks?
Context:[manager:CTL LLC, manager:JANE STREET GROUP LLC]
Helpful Answer: CTL LLC, JANE STREET GROUP LLC owns Neo4j stocks.

Follow this example when generating answers.
If the provided information is empty, say that you don't know the answer.
Information:
{context}

Question: {question}
Helpful Answer:";

const CONDENSE_TEMPLATE: &str = r"Given the following conversation and a follow-up question, rewrite the follow-up question as a standalone question so that it can be easily understood and parsed by an LLM.
Double check the spelling and grammar of the question.
Chat History:
{chat_history}
Follow Up Input: {question}
";

/// System prompt for the final RAG answer.
#[must_use]
pub fn answer_system_prompt(context: &str) -> String {
    ANSWER_SYSTEM_TEMPLATE.replace("{context}", context)
}

/// Prompt asking the model to translate a question into Cypher.
#[must_use]
pub fn cypher_generation_prompt(schema: &str, question: &str) -> String {
    CYPHER_GENERATION_TEMPLATE
        .replace("{schema}", schema)
        .replace("{question}", question)
}

/// Prompt summarizing query rows into a human answer.
#[must_use]
pub fn qa_prompt(context: &str, question: &str) -> String {
    QA_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}

/// Prompt condensing a follow-up plus history into a standalone question.
#[must_use]
pub fn condense_prompt(chat_history: &str, question: &str) -> String {
    CONDENSE_TEMPLATE
        .replace("{chat_history}", chat_history)
        .replace("{question}", question)
}
