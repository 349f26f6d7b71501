use leptos::prelude::*;

use jobmatch_core::{AppViewModel, SkillListView};

/// Renders the last match report, replaced wholesale on each submission.
#[component]
pub fn ResultsPanel(view: Memo<AppViewModel>) -> impl IntoView {
    view! {
        <section class="results">
            {move || {
                view.get().result.map(|result| {
                    view! {
                        <div class="match-card">
                            <div class="match-header">
                                <h3>"Match Analysis"</h3>
                                <div class="match-score">{result.score_label}</div>
                            </div>
                            {result
                                .analysis_type
                                .map(|label| view! { <span class="analysis-type">{label}</span> })}
                            <div class="skills-comparison">
                                <SkillColumn
                                    title="Matching Skills"
                                    css_class="match"
                                    list=result.matching
                                />
                                <SkillColumn
                                    title="Skills to Develop"
                                    css_class="missing"
                                    list=result.missing
                                />
                            </div>
                            <div class="explanation">
                                <h4>"AI Analysis"</h4>
                                <p>{result.explanation}</p>
                            </div>
                        </div>
                    }
                })
            }}
        </section>
    }
}

/// A zero-skill column shows its placeholder line, never an empty list.
#[component]
fn SkillColumn(
    title: &'static str,
    css_class: &'static str,
    list: SkillListView,
) -> impl IntoView {
    view! {
        <div class="skills-column">
            <h4>{title}</h4>
            {match list.placeholder {
                Some(placeholder) => {
                    view! { <p class="skills-empty">{placeholder}</p> }.into_any()
                }
                None => {
                    view! {
                        <div class="skills-list">
                            {list
                                .tags
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <span class=format!(
                                            "skill-tag {css_class}",
                                        )>{skill}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
