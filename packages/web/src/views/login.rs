//! Login page: email and password form for dashboard admins.

use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let registration = use_resource(|| async move { api::registration_open().await });

    // Already signed in: go straight to the dashboard
    use_effect(move || {
        if !auth().loading && auth().user.is_some() {
            nav.replace(Route::Analytics {});
        }
    });

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error.set(None);
        submitting.set(true);

        match api::login_password(email(), password()).await {
            Ok(admin) => {
                auth.set(AuthState {
                    user: Some(admin),
                    loading: false,
                });
                nav.replace(Route::Analytics {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        submitting.set(false);
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: onsubmit,

                h1 { "Backoffice" }
                p { class: "login-subtitle", "Sign in to manage users." }

                if let Some(msg) = error() {
                    p { class: "login-error", "{msg}" }
                }

                label {
                    r#for: "email",
                    "Email"
                }
                input {
                    id: "email",
                    r#type: "email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }

                label {
                    r#for: "password",
                    "Password"
                }
                input {
                    id: "password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }

                if matches!(&*registration.read(), Some(Ok(true))) {
                    p {
                        class: "login-subtitle",
                        "No account yet? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
