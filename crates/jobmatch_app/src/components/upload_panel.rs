use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlInputElement;

use jobmatch_core::{AppState, AppViewModel, IncomingFile, Msg};

use crate::app::dispatch;
use crate::components::artifact_list::ArtifactList;

/// Upload surface: resume file input, job-description file input and
/// textarea, the two artifact lists, and the process button.
#[component]
pub fn UploadPanel(state: RwSignal<AppState>, view: Memo<AppViewModel>) -> impl IntoView {
    let resume_list = Memo::new(move |_| view.get().resumes);
    let job_list = Memo::new(move |_| view.get().jobs);

    let on_resume_files = move |ev: web_sys::Event| {
        if let Some(input) = input_element(&ev) {
            queue_file_reads(state, input, Msg::ResumesAdded);
        }
    };
    let on_job_files = move |ev: web_sys::Event| {
        if let Some(input) = input_element(&ev) {
            queue_file_reads(state, input, Msg::JobFilesAdded);
        }
    };

    view! {
        <section class="upload-section">
            <div class="upload-column">
                <h2>"Resumes"</h2>
                <input
                    type="file"
                    multiple
                    accept=".pdf,.doc,.docx,.txt"
                    on:change=on_resume_files
                />
                <ArtifactList state=state list=resume_list />
            </div>
            <div class="upload-column">
                <h2>"Job Descriptions"</h2>
                <input
                    type="file"
                    multiple
                    accept=".pdf,.doc,.docx,.txt"
                    on:change=on_job_files
                />
                <textarea
                    class="job-text-input"
                    placeholder="...or paste the job description here"
                    prop:value=move || view.get().job_text_input
                    on:input=move |ev| {
                        dispatch(state, Msg::JobTextChanged(event_target_value(&ev)))
                    }
                ></textarea>
                <ArtifactList state=state list=job_list />
            </div>
            <button
                class="btn btn-primary"
                disabled=move || !view.get().process_button.enabled
                on:click=move |_| dispatch(state, Msg::ProcessClicked)
            >
                {move || view.get().process_button.label}
            </button>
        </section>
    }
}

fn input_element(ev: &web_sys::Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// Reads every picked file into memory, then hands the batch to the store
/// in one message. The input is cleared so picking the same file again
/// still fires a change event.
fn queue_file_reads(
    state: RwSignal<AppState>,
    input: HtmlInputElement,
    into_msg: fn(Vec<IncomingFile>) -> Msg,
) {
    let Some(files) = input.files() else {
        return;
    };
    let mut picked = Vec::new();
    for index in 0..files.length() {
        if let Some(file) = files.get(index) {
            picked.push(file);
        }
    }
    input.set_value("");

    spawn_local(async move {
        let mut incoming = Vec::new();
        for file in picked {
            match read_file_bytes(&file).await {
                Ok(bytes) => incoming.push(IncomingFile {
                    name: file.name(),
                    bytes,
                }),
                Err(err) => log::warn!("could not read {}: {err:?}", file.name()),
            }
        }
        if !incoming.is_empty() {
            dispatch(state, into_msg(incoming));
        }
    });
}

async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, wasm_bindgen::JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
