use dioxus::prelude::*;

#[component]
pub fn Landing() -> Element {
    rsx!(
        div { class: "flex flex-col gap-4",
            h1 { class: "text-4xl font-bold",
                "CollabLab"
            }
            p { class: "opacity-70",
                "Connect creators and collaborators. Minimal, secure, and fast."
            }
            ul { class: "flex flex-col gap-2 text-sm opacity-80",
                li { "• Create and manage project posts" }
                li { "• Explore projects, search and filter" }
                li { "• Apply with message, portfolio URL, and a document" }
                li { "• Owner dashboard to review, accept, reject, and download files" }
            }
        }
    )
}
