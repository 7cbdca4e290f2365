use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::transport::Document,
    error::Error,
    service::application::{apply, outcome_text, DEFAULT_MESSAGE, DEFAULT_PORTFOLIO_URL},
    store::Services,
    util::prompt,
};

/// Reads the first selected file of a file input
async fn read_selected_file(evt: &FormEvent) -> Option<Document> {
    let file = evt.files().into_iter().next()?;

    match file.read_bytes().await {
        Ok(bytes) => Some(Document {
            file_name: file.name(),
            content_type: file.content_type(),
            bytes: bytes.to_vec(),
        }),
        Err(err) => {
            tracing::error!("Failed to read selected file {}: {}", file.name(), err);
            None
        }
    }
}

/// Application form nested in each project card
#[component]
pub fn ApplicationComposer(project_id: String) -> Element {
    let services = use_context::<Services>();

    let mut message = use_signal(|| DEFAULT_MESSAGE.to_string());
    let mut portfolio_url = use_signal(|| DEFAULT_PORTFOLIO_URL.to_string());
    let mut document = use_signal(|| None::<Document>);
    let mut status = use_signal(|| None::<&'static str>);

    let submit = move |_| {
        let services = services.clone();
        let project_id = project_id.clone();

        async move {
            let result = apply(
                &services.api,
                &services.session,
                &project_id,
                &message(),
                &portfolio_url(),
                document(),
            )
            .await;

            match &result {
                Err(Error::PreconditionError(err)) => prompt(&err.to_string()),
                _ => status.set(Some(outcome_text(&result))),
            }
        }
    };

    rsx!(
        div { class: "mt-3 border-t border-base-300 pt-3",
            h5 { class: "font-medium mb-2",
                "Apply to collaborate"
            }
            div { class: "grid gap-2",
                input {
                    class: "input input-sm w-full",
                    placeholder: "Personal message",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                input {
                    class: "input input-sm w-full",
                    placeholder: "Portfolio URL",
                    value: "{portfolio_url}",
                    oninput: move |evt| portfolio_url.set(evt.value()),
                }
                input {
                    class: "file-input file-input-sm w-full",
                    r#type: "file",
                    onchange: move |evt: FormEvent| async move {
                        document.set(read_selected_file(&evt).await);
                    },
                }
                button { class: "btn btn-primary btn-sm flex gap-2",
                    onclick: submit,
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaPaperPlane
                    }
                    p { "Send request" }
                }
                if let Some(status) = status() {
                    p { class: "text-sm opacity-70", "{status}" }
                }
            }
        }
    )
}
