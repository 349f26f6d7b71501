//! Root component and message dispatch.

use leptos::prelude::*;

use jobmatch_core::{update, AppState, AppViewModel, Msg};

use crate::components::{
    banner::HealthBanner, catalog::CatalogPanel, header::Header, match_panel::MatchPanel,
    results::ResultsPanel, upload_panel::UploadPanel,
};
use crate::effects;

/// Applies a message to the state signal and runs any resulting effects.
///
/// Effect completions re-enter through this same function, which is what
/// serializes submissions: the completion message is the only thing that
/// moves a button out of Submitting.
pub fn dispatch(state: RwSignal<AppState>, msg: Msg) {
    let (next, pending) = update(state.get_untracked(), msg);
    state.set(next);
    effects::run(state, pending);
}

/// Main application component: one state signal for the page session,
/// one derived view model everything renders from.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::new());
    let view: Memo<AppViewModel> = Memo::new(move |_| state.get().view());

    // Startup liveness probe.
    dispatch(state, Msg::AppStarted);

    view! {
        <div class="container">
            <Header />
            <HealthBanner view=view />
            <UploadPanel state=state view=view />
            <MatchPanel state=state view=view />
            <ResultsPanel view=view />
            <CatalogPanel />
        </div>
    }
}
