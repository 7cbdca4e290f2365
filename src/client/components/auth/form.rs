use dioxus::prelude::*;

use crate::client::{
    service::auth::{authenticate, AuthForm, AuthMode},
    store::{Services, SessionState},
};

/// Sign in / sign up card shown while signed out
#[component]
pub fn AuthPanel() -> Element {
    let services = use_context::<Services>();
    let mut session_store = use_context::<Store<SessionState>>();

    let mut mode = use_signal(AuthMode::default);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();

        async move {
            loading.set(true);
            error.set(None);

            let form = AuthForm {
                name: name(),
                email: email(),
                password: password(),
            };
            let result = authenticate(&services.api, &services.session, mode(), &form).await;

            loading.set(false);
            match result {
                Ok(credential) => session_store.write().credential = Some(credential),
                Err(err) => error.set(Some(err.user_message("Auth failed"))),
            }
        }
    };

    rsx!(
        div { class: "card bg-base-200 shadow-sm w-full max-w-md",
            div { class: "card-body",
                h2 { class: "card-title text-2xl",
                    {mode().title()}
                }
                form { class: "flex flex-col gap-3",
                    onsubmit: submit,
                    if mode() == AuthMode::SignUp {
                        input {
                            class: "input w-full",
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(err) = error() {
                        p { class: "text-error text-sm", "{err}" }
                    }
                    button {
                        class: "btn btn-primary w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Connecting…" } else { {mode().submit_label()} }
                    }
                }
                p { class: "text-sm opacity-70",
                    if mode() == AuthMode::SignIn { "No account? " } else { "Have an account? " }
                    button {
                        class: "link",
                        r#type: "button",
                        onclick: move |_| {
                            error.set(None);
                            mode.set(mode().toggle());
                        },
                        if mode() == AuthMode::SignIn { "Create one" } else { "Sign in" }
                    }
                }
            }
        }
    )
}
