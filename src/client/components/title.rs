use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn CollabLabTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl font-semibold",
                    "CollabLab"
                }
                p { class: "text-xs",
                    "v0.1.0"
                }
            }
        }
    )
}
