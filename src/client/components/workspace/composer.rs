use dioxus::prelude::*;

use crate::{
    client::{
        error::Error,
        service::project::{publish, ProjectDraft},
        store::Services,
        util::prompt,
    },
    model::project::{ProjectDto, Visibility},
};

/// Form publishing a new project posting
#[component]
pub fn ProjectComposer(on_created: EventHandler<ProjectDto>) -> Element {
    let services = use_context::<Services>();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut duration = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut visibility = use_signal(Visibility::default);
    let mut loading = use_signal(|| false);
    let mut outcome = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();

        async move {
            loading.set(true);
            outcome.set(None);

            let draft = ProjectDraft {
                title: title(),
                description: description(),
                skills: skills(),
                duration: duration(),
                tags: tags(),
                visibility: visibility(),
            };
            let result = publish(&services.api, &services.session, &draft).await;

            loading.set(false);
            match result {
                Ok(project) => {
                    outcome.set(Some(format!("Published \"{}\"", project.title)));
                    on_created.call(project);
                }
                Err(Error::PreconditionError(err)) => prompt(&err.to_string()),
                Err(err) => outcome.set(Some(err.user_message("Failed to publish project"))),
            }
        }
    };

    rsx!(
        form { class: "card bg-base-200 shadow-sm",
            onsubmit: submit,
            div { class: "card-body flex flex-col gap-3",
                h3 { class: "card-title",
                    "Create a project"
                }
                input {
                    class: "input w-full",
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    class: "textarea w-full",
                    placeholder: "Description",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                input {
                    class: "input w-full",
                    placeholder: "Skills (comma separated)",
                    value: "{skills}",
                    oninput: move |evt| skills.set(evt.value()),
                }
                input {
                    class: "input w-full",
                    placeholder: "Duration",
                    value: "{duration}",
                    oninput: move |evt| duration.set(evt.value()),
                }
                input {
                    class: "input w-full",
                    placeholder: "Tags (comma separated)",
                    value: "{tags}",
                    oninput: move |evt| tags.set(evt.value()),
                }
                div { class: "flex gap-3",
                    label { class: "flex items-center gap-2",
                        input {
                            class: "radio radio-sm",
                            r#type: "radio",
                            name: "visibility",
                            checked: visibility() == Visibility::Public,
                            onchange: move |_| visibility.set(Visibility::Public),
                        }
                        "Public"
                    }
                    label { class: "flex items-center gap-2",
                        input {
                            class: "radio radio-sm",
                            r#type: "radio",
                            name: "visibility",
                            checked: visibility() == Visibility::Private,
                            onchange: move |_| visibility.set(Visibility::Private),
                        }
                        "Private"
                    }
                }
                button { class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Publishing…" } else { "Publish project" }
                }
                if let Some(outcome) = outcome() {
                    p { class: "text-sm opacity-70", "{outcome}" }
                }
            }
        }
    )
}
