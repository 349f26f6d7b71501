use leptos::prelude::*;

use jobmatch_core::AppViewModel;

/// Connectivity banner raised when the startup health probe fails.
#[component]
pub fn HealthBanner(view: Memo<AppViewModel>) -> impl IntoView {
    view! {
        <Show when=move || view.get().banner.is_some()>
            <div class="banner banner-error">
                {move || view.get().banner.unwrap_or_default()}
            </div>
        </Show>
    }
}
