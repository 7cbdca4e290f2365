use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBookmark;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::workspace::ApplicationComposer,
        error::Error,
        service::project::{distinct, save},
        store::Services,
        util::{format_relative_time, prompt},
    },
    model::project::{ProjectDto, Visibility},
};

#[component]
pub fn ProjectCard(project: ProjectDto) -> Element {
    let services = use_context::<Services>();
    let mut saved = use_signal(|| false);

    let project_id = project.id.clone();
    let save_project = move |_| {
        let services = services.clone();
        let project_id = project_id.clone();

        async move {
            match save(&services.api, &services.session, &project_id).await {
                Ok(()) => saved.set(true),
                Err(Error::PreconditionError(err)) => prompt(&err.to_string()),
                Err(err) => tracing::warn!(project_id = %project_id, "Failed to save project: {}", err),
            }
        }
    };

    let skills = project.skills_required.join(", ");
    let tags = distinct(&project.tags);
    let posted = project
        .created_at
        .map(|created_at| format_relative_time(&created_at, &Utc::now().naive_utc()));

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-start justify-between gap-2",
                    h4 { class: "card-title",
                        "{project.title}"
                    }
                    if project.visibility == Visibility::Private {
                        span { class: "badge badge-ghost", "Private" }
                    }
                }
                p { class: "text-sm opacity-70",
                    "{project.description}"
                }
                if !project.duration.is_empty() {
                    p { class: "text-xs opacity-70", "Duration: {project.duration}" }
                }
                if let Some(posted) = posted {
                    p { class: "text-xs opacity-50", "Posted {posted}" }
                }
                if !skills.is_empty() {
                    p { class: "text-xs", "Skills: {skills}" }
                }
                div { class: "flex flex-wrap gap-2 my-2",
                    for tag in tags {
                        span { key: "{tag}", class: "badge badge-primary badge-outline", "{tag}" }
                    }
                }
                ApplicationComposer { project_id: project.id.clone() }
                div { class: "card-actions mt-3",
                    button { class: "btn btn-sm flex gap-2",
                        onclick: save_project,
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaBookmark
                        }
                        if saved() { "Saved" } else { "Save" }
                    }
                }
            }
        }
    )
}
