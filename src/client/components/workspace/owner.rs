use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaDownload, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        error::Error,
        service::owner::{load_applicants, set_status, Decision},
        store::Services,
        util::prompt,
    },
    model::application::{ApplicationRequestDto, ApplicationStatus},
};

/// Owner review of the applicants to one project
#[component]
pub fn OwnerConsole() -> Element {
    let services = use_context::<Services>();

    let mut project_id = use_signal(String::new);
    let mut applicants = use_signal(Vec::<ApplicationRequestDto>::new);
    let status = use_signal(|| None::<&'static str>);

    let load = move |_| {
        let services = services.clone();

        async move {
            match load_applicants(&services.api, &services.session, &project_id()).await {
                Ok(Some(list)) => applicants.set(list),
                Ok(None) => (),
                Err(Error::PreconditionError(err)) => prompt(&err.to_string()),
                Err(err) => tracing::warn!("Failed to load applicants: {}", err),
            }
        }
    };

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h3 { class: "card-title",
                    "Owner review"
                }
                input {
                    class: "input w-full",
                    placeholder: "Your project ID",
                    value: "{project_id}",
                    oninput: move |evt| project_id.set(evt.value()),
                }
                div { class: "flex items-center gap-2 mt-2",
                    button { class: "btn",
                        onclick: load,
                        "Load applicants"
                    }
                    if let Some(status) = status() {
                        span { class: "opacity-70", "{status}" }
                    }
                }
                div { class: "flex flex-col gap-3 mt-4",
                    for applicant in applicants.read().iter() {
                        ApplicantRow {
                            key: "{applicant.id}",
                            applicant: applicant.clone(),
                            project_id,
                            applicants,
                            status,
                        }
                    }
                }
            }
        }
    )
}

fn status_badge(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "badge badge-ghost",
        ApplicationStatus::Accepted => "badge badge-success",
        ApplicationStatus::Rejected => "badge badge-error",
    }
}

#[component]
fn ApplicantRow(
    applicant: ApplicationRequestDto,
    project_id: Signal<String>,
    mut applicants: Signal<Vec<ApplicationRequestDto>>,
    mut status: Signal<Option<&'static str>>,
) -> Element {
    let services = use_context::<Services>();

    let document_url = match services.api.document_url(&applicant.id) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::error!("{}", err);
            None
        }
    };

    let applicant_id = applicant.id.clone();
    let decide = move |decision: Decision| {
        let services = services.clone();
        let request_id = applicant_id.clone();

        async move {
            let change = set_status(
                &services.api,
                &services.session,
                &project_id(),
                &request_id,
                decision,
            )
            .await;

            status.set(Some(change.status_text()));
            match change.applicants {
                Ok(Some(list)) => applicants.set(list),
                Ok(None) => (),
                Err(err) => tracing::warn!("Failed to reload applicants: {}", err),
            }
        }
    };
    let accept = decide.clone();
    let reject = decide;

    rsx!(
        div { class: "p-3 border border-base-300 rounded flex flex-col gap-1",
            div { class: "flex justify-between items-center gap-2",
                p { class: "text-sm", "Message: {applicant.message}" }
                span { class: status_badge(applicant.status), {applicant.status.as_str()} }
            }
            a { class: "link link-primary text-sm",
                href: "{applicant.portfolio_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Visit portfolio"
            }
            div { class: "flex flex-wrap gap-2 mt-2",
                if let Some(url) = document_url {
                    a { class: "btn btn-sm flex gap-2",
                        href: "{url}",
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaDownload
                        }
                        "Download document"
                    }
                }
                button { class: "btn btn-sm btn-success flex gap-2",
                    onclick: move |_| accept(Decision::Accept),
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaCheck
                    }
                    "Accept"
                }
                button { class: "btn btn-sm btn-error flex gap-2",
                    onclick: move |_| reject(Decision::Reject),
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaXmark
                    }
                    "Reject"
                }
            }
        }
    )
}
