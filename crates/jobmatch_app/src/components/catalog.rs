use leptos::prelude::*;

use jobmatch_engine::{CatalogProvider, StaticCatalog};

/// Static catalog of external postings, rendered once per page load and
/// independent of the artifact store.
#[component]
pub fn CatalogPanel() -> impl IntoView {
    let postings = StaticCatalog.postings();

    view! {
        <section class="real-jobs">
            <h2>"Live Job Opportunities"</h2>
            {postings
                .iter()
                .map(|job| {
                    view! {
                        <div class="real-job-card">
                            <div class="job-header">
                                <div>
                                    <div class="job-title">{job.title}</div>
                                    <div class="job-company">
                                        {format!("{} • {}", job.company, job.location)}
                                    </div>
                                </div>
                                <a href=job.link target="_blank" class="job-link">
                                    {format!("View {}", job.source)}
                                </a>
                            </div>
                            <div class="job-snippet">{job.snippet}</div>
                            <div class="skills-list">
                                {job
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! { <span class="skill-tag">{*skill}</span> }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
