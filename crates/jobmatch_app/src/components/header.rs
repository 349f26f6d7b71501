use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Smart Resume & Job Matcher"</h1>
            <p class="tagline">
                "Upload resumes, paste a job description, and see how well they align."
            </p>
        </header>
    }
}
