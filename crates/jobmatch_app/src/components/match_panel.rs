use leptos::prelude::*;

use jobmatch_core::{AppState, AppViewModel, ArtifactId, Msg};

use crate::app::dispatch;

/// Resume dropdown plus the find-matches button. The dropdown reflects
/// the snapshot taken at the last successful process submission.
#[component]
pub fn MatchPanel(state: RwSignal<AppState>, view: Memo<AppViewModel>) -> impl IntoView {
    let on_select = move |ev: web_sys::Event| {
        dispatch(state, Msg::ResumeSelected(parse_selection(&event_target_value(&ev))));
    };

    view! {
        <section class="match-section">
            <h2>"Find Matches"</h2>
            <select
                class="resume-select"
                prop:value=move || {
                    view.get()
                        .selected_resume
                        .map(|id| id.to_string())
                        .unwrap_or_default()
                }
                on:change=on_select
            >
                <For
                    each=move || view.get().resume_dropdown
                    key=|option| option.id
                    children=move |option| {
                        let value = option.id.map(|id| id.to_string()).unwrap_or_default();
                        view! { <option value=value>{option.label}</option> }
                    }
                />
            </select>
            <button
                class="btn btn-secondary"
                disabled=move || !view.get().matches_button.enabled
                on:click=move |_| dispatch(state, Msg::MatchesClicked)
            >
                {move || view.get().matches_button.label}
            </button>
        </section>
    }
}

/// The placeholder option has an empty value; everything else is an id.
fn parse_selection(value: &str) -> Option<ArtifactId> {
    value.parse::<ArtifactId>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_selection;

    #[test]
    fn placeholder_value_maps_to_no_selection() {
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("not-a-number"), None);
        assert_eq!(parse_selection("7"), Some(7));
    }
}
