use leptos::prelude::*;

use jobmatch_core::{AppState, ArtifactListView, Msg};

use crate::app::dispatch;

/// One artifact collection as a list: a placeholder line when empty,
/// otherwise one row per artifact with its remove control.
#[component]
pub fn ArtifactList(state: RwSignal<AppState>, list: Memo<ArtifactListView>) -> impl IntoView {
    view! {
        <div class="file-list">
            <Show when=move || list.get().placeholder.is_some()>
                <p class="file-list-empty">
                    {move || list.get().placeholder.unwrap_or_default()}
                </p>
            </Show>
            <For
                each=move || list.get().rows
                key=|row| row.id
                children=move |row| {
                    let id = row.id;
                    let kind = row.kind;
                    view! {
                        <div class="file-item">
                            <span class="file-name">{row.label}</span>
                            <button
                                class="remove-btn"
                                on:click=move |_| {
                                    dispatch(state, Msg::ArtifactRemoved { id, kind })
                                }
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
