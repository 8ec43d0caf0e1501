//! Introduction page, a static description of the pipeline.

use leptos::prelude::*;

#[component]
pub fn IntroductionPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"GraphRAG over a Neo4j Knowledge Graph"</h2>
                <p class="card__lead">
                    "An end-to-end pipeline from constructing knowledge graphs out of \
                     job-profile articles to querying them with LLMs and various RAG \
                     approaches."
                </p>
                <p>"The sections are the following:"</p>
                <ol class="card__list">
                    <li>
                        <strong>"Import database: "</strong>
                        "retrieves job-profile data from the MongoDB export, integrating \
                         it into the pipeline for subsequent processes."
                    </li>
                    <li>
                        <strong>"Write data to Neo4j: "</strong>
                        "transforms and stores the imported data in the Neo4j graph \
                         database, giving it a structured graph representation."
                    </li>
                    <li>
                        <strong>"Construct knowledge graph: "</strong>
                        "builds a detailed knowledge graph tailored for \
                         Retrieval-Augmented Generation, enabling richer data \
                         relationships and context understanding."
                    </li>
                    <li>
                        <strong>"Combine vector search and knowledge graph: "</strong>
                        "merges vector search with the knowledge graph to extract more \
                         relevant, contextually enriched data for complex queries."
                    </li>
                </ol>
            </div>
        </div>
    }
}
