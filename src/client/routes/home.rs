use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{
        auth::{AuthPanel, Landing},
        workspace::Workspace,
        Page,
    },
    service::auth::AuthState,
    store::SessionState,
};

/// Auth gate: sign in while no credential is held, the workspace otherwise
#[component]
pub fn Home() -> Element {
    let session_store = use_context::<Store<SessionState>>();

    let auth_state = session_store.read().auth_state();

    rsx!(
        Title { "CollabLab" }
        Meta {
            name: "description",
            content: "Connect creators and collaborators on projects."
        }
        Page { class: "flex flex-col items-center",
            if auth_state == AuthState::Authenticated {
                Workspace {}
            } else {
                div { class: "w-full max-w-5xl grid lg:grid-cols-2 gap-8 items-start pt-6",
                    Landing {}
                    AuthPanel {}
                }
            }
        }
    )
}
