use dioxus::prelude::*;

use crate::client::{
    config::Config,
    router::Route,
    store::{Services, SessionState},
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = try_use_context::<Config>().unwrap_or_default();
    let services = use_context_provider(|| Services::new(&config));

    let session_store = use_store(|| SessionState {
        credential: services.session.read(),
    });
    use_context_provider(|| session_store);

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
