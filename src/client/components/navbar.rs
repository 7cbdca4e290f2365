use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::CollabLabTitleButton,
    router::Route,
    service::auth::{sign_out, AuthState, SIGN_OUT_FAILED},
    store::{Services, SessionState},
    util::prompt,
};

#[component]
pub fn Navbar() -> Element {
    let services = use_context::<Services>();
    let mut session_store = use_context::<Store<SessionState>>();

    let authenticated = session_store.read().auth_state() == AuthState::Authenticated;

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                CollabLabTitleButton {}
            }
            div {
                class: "navbar-end",
                if authenticated {
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: move |_| match sign_out(&services.session) {
                            Ok(()) => session_store.write().credential = None,
                            Err(err) => {
                                tracing::error!("{}", err);
                                prompt(SIGN_OUT_FAILED);
                            }
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        p { "Sign out" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
