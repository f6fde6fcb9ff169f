// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sign-in page. The only route reachable without a session.

use dioxus::prelude::*;

use fimdash_client::{RouteDecision, RouteKind};
use fimdash_core::error::FimError;
use fimdash_core::human_errors::humanize_error;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::{AppState, Notice};

/// What to tell the operator when sign-in fails. Rejected credentials get
/// one fixed line so the form does not reveal which half was wrong.
fn login_failure_text(err: &FimError) -> String {
    match err.status() {
        Some(400 | 401 | 403) => "Username or password is incorrect.".to_string(),
        _ => humanize_error(err).banner(),
    }
}

#[component]
pub fn Login() -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let session = svc.session();
    use_hook(move || {
        if session.decide(RouteKind::Login) == RouteDecision::RedirectToHome {
            nav.replace(Route::Analytics {});
        }
    });

    let submit = {
        let session = svc.session();
        move |evt: FormEvent| {
            evt.prevent_default();
            if busy() {
                return;
            }
            let session = session.clone();
            let user = username.read().trim().to_string();
            let pass = password.read().clone();
            if user.is_empty() || pass.is_empty() {
                error.set(Some("Enter both username and password.".into()));
                return;
            }
            error.set(None);
            busy.set(true);
            spawn(async move {
                match session.login(&user, &pass).await {
                    Ok(()) => {
                        tracing::info!(user = %user, "signed in");
                        state.write().notice = Some(Notice::success("Signed in."));
                        nav.replace(Route::Analytics {});
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "sign-in failed");
                        error.set(Some(login_failure_text(&e)));
                    }
                }
                busy.set(false);
            });
        }
    };

    let password_type = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };
    let submit_label = if busy() { "Signing in..." } else { "Sign in" };

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f2f2f7; font-family: system-ui, -apple-system, sans-serif;",
            form {
                style: "width: 100%; max-width: 380px; padding: 28px 32px; border-radius: 12px; background: white; box-shadow: 0 2px 12px rgba(0,0,0,0.08);",
                onsubmit: submit,
                h1 { style: "text-align: center; font-size: 22px; margin: 0 0 24px;", "FIM Dashboard" }

                label { style: "display: block; font-size: 13px; color: #555; margin-bottom: 4px;", "Username" }
                input {
                    r#type: "text",
                    autocomplete: "off",
                    style: "width: 100%; box-sizing: border-box; padding: 8px 12px; margin-bottom: 16px; border: 1px solid #ccc; border-radius: 6px;",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }

                label { style: "display: block; font-size: 13px; color: #555; margin-bottom: 4px;", "Password" }
                div { style: "display: flex; gap: 6px; margin-bottom: 20px;",
                    input {
                        r#type: password_type,
                        autocomplete: "off",
                        style: "flex: 1; padding: 8px 12px; border: 1px solid #ccc; border-radius: 6px;",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        style: "padding: 0 10px; border: 1px solid #ccc; border-radius: 6px; background: white; cursor: pointer; font-size: 12px;",
                        onclick: move |_| {
                            let shown = show_password();
                            show_password.set(!shown);
                        },
                        "{toggle_label}"
                    }
                }

                if let Some(message) = error() {
                    p { style: "color: #ff3b30; font-size: 13px; margin: 0 0 14px;", "{message}" }
                }

                button {
                    r#type: "submit",
                    disabled: busy(),
                    style: "width: 100%; padding: 10px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px; cursor: pointer;",
                    "{submit_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_credentials_get_a_fixed_message() {
        let err = FimError::Api {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(login_failure_text(&err), "Username or password is incorrect.");
    }

    #[test]
    fn other_failures_explain_themselves() {
        let err = FimError::Timeout { secs: 15 };
        let text = login_failure_text(&err);
        assert!(text.contains("15 seconds"));
    }
}
