use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::client::{
    components::workspace::ProjectCard,
    service::explorer::{search, ProjectFeed},
    store::Services,
};

/// Issues a search and applies its result only if no newer search was issued meanwhile
pub fn run_search(services: Services, mut feed: Signal<ProjectFeed>, query: String) {
    let ticket = feed.write().begin();

    spawn(async move {
        let result = search(&services.api, &query).await;
        feed.write().complete(ticket, result);
    });
}

#[component]
pub fn Explorer(feed: Signal<ProjectFeed>, mut query: Signal<String>) -> Element {
    let services = use_context::<Services>();

    // List everything once on mount
    use_effect({
        let services = services.clone();
        move || run_search(services.clone(), feed, String::new())
    });

    let feed_state = feed.read();

    rsx!(
        div { class: "flex flex-col gap-4",
            form { class: "flex gap-2",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    run_search(services.clone(), feed, query());
                },
                input {
                    class: "input flex-1",
                    placeholder: "Search projects",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button { class: "btn flex gap-2",
                    r#type: "submit",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaMagnifyingGlass
                    }
                    p { "Search" }
                }
            }
            if feed_state.loading {
                p { class: "opacity-70", "Connecting creators…" }
            }
            if let Some(err) = &feed_state.error {
                p { class: "text-error text-sm", "{err}" }
            }
            div { class: "grid md:grid-cols-2 gap-4",
                for project in feed_state.projects.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                    }
                }
            }
        }
    )
}
