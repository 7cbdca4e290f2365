pub mod apply;
pub mod card;
pub mod composer;
pub mod explorer;
pub mod owner;

pub use apply::ApplicationComposer;
pub use card::ProjectCard;
pub use composer::ProjectComposer;
pub use explorer::Explorer;
pub use owner::OwnerConsole;

use dioxus::prelude::*;

use crate::client::{
    components::workspace::explorer::run_search,
    service::explorer::ProjectFeed,
    store::Services,
};

/// Signed in view: composer and owner console beside the explorer
#[component]
pub fn Workspace() -> Element {
    let services = use_context::<Services>();
    let feed = use_signal(ProjectFeed::default);
    let query = use_signal(String::new);

    rsx!(
        div { class: "w-full max-w-[1440px] grid lg:grid-cols-3 gap-6",
            div { class: "lg:col-span-1 flex flex-col gap-6",
                ProjectComposer {
                    on_created: move |_| run_search(services.clone(), feed, query()),
                }
                OwnerConsole {}
            }
            div { class: "lg:col-span-2",
                Explorer { feed, query }
            }
        }
    )
}
