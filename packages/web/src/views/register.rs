//! Registration page for the first dashboard admins. Only usable while the
//! server has `auth.allow_registration` turned on.

use api::auth::MIN_PASSWORD_LEN;
use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::Route;

/// Client-side checks run before calling `api::register`.
fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let open = use_resource(|| async move { api::registration_open().await });

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if !auth().loading && auth().user.is_some() {
            nav.replace(Route::Analytics {});
        }
    });

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error.set(None);

        if let Err(msg) = validate(&name(), &email(), &password(), &confirm_password()) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        match api::register(email(), password(), name()).await {
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

    let allowed = matches!(&*open.read(), Some(Ok(true)));

    rsx! {
        div {
            class: "login-container",

            if !allowed {
                div {
                    class: "login-card",
                    h1 { "Create Account" }
                    p {
                        class: "login-subtitle",
                        "Registration is closed. Ask an existing admin for an account."
                    }
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            } else {
                form {
                    class: "login-card",
                    onsubmit: onsubmit,

                    h1 { "Create Account" }
                    p { class: "login-subtitle", "Add a Backoffice admin." }

                    if let Some(msg) = error() {
                        p { class: "login-error", "{msg}" }
                    }

                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "username",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "new-password",
                        placeholder: "At least {MIN_PASSWORD_LEN} characters",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }

                    label { r#for: "confirm-password", "Confirm password" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: "{confirm_password}",
                        oninput: move |e| confirm_password.set(e.value()),
                    }

                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Sign up" }
                    }

                    p {
                        class: "login-subtitle",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
