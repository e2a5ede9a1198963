use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    Route,
    config::{API_URL_ENV, AppSettings},
    storage::{Storage, get_storage},
};

/// Endpoint configuration page.
///
/// The advisor API base URL has no default: it is supplied here or via
/// the environment. Saving persists the value and updates the shared
/// settings context so the chat page picks it up immediately.
#[component]
pub fn Settings() -> Element {
    let mut api_base = use_signal(|| "".to_string());
    let mut saved = use_signal(|| false);

    let settings = use_resource(move || async move {
        // Prefer what the app is currently running with (which may be
        // the env override), fall back to the stored file.
        let current = consume_context::<Signal<Option<AppSettings>>>()
            .read()
            .clone();
        let stored = match get_storage().await {
            Ok(st) => st.load_settings().await.unwrap_or_else(|e| {
                warn!("Could not load settings: {e:?}");
                None
            }),
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                None
            }
        };
        let s = current
            .or(stored)
            .unwrap_or_else(|| AppSettings { api_base: "".into() });
        api_base.set(s.api_base.clone());
        s
    });

    let save_settings = move |_: Event<MouseData>| async move {
        let s = AppSettings {
            api_base: api_base.cloned().trim().to_string(),
        };
        match get_storage().await {
            Ok(st) => {
                if let Err(e) = st.save_settings(&s).await {
                    warn!("Could not save settings: {e:?}");
                }
            }
            Err(e) => {
                warn!("Could not get storage: {e:?}");
            }
        }
        let mut settings_ctx = consume_context::<Signal<Option<AppSettings>>>();
        settings_ctx.set(Some(s));
        saved.set(true);
    };

    if settings().is_none() {
        return rsx! { "Loading..." };
    }

    rsx! {
        div { class: "app-container",
            div { class: "grid-background" }
            div { class: "main-content",
                div { class: "settings-panel",
                    div { class: "section-header",
                        span { class: "section-icon", "◆" }
                        span { class: "section-title", "SETTINGS" }
                        div { class: "section-line" }
                    }
                    label { class: "settings-label", "API ENDPOINT" }
                    input {
                        class: "cyber-input",
                        r#type: "text",
                        placeholder: "https://your-api-gateway.example.com/prod",
                        value: "{api_base}",
                        oninput: move |e: Event<FormData>| {
                            api_base.set(e.value());
                            saved.set(false);
                        },
                    }
                    span { class: "settings-hint",
                        "The {API_URL_ENV} environment variable overrides this value at startup."
                    }
                    div { class: "button-row",
                        button { class: "cyber-button", onclick: save_settings,
                            span { class: "button-content", "SAVE" }
                        }
                        if saved() {
                            span { class: "settings-saved", "SAVED" }
                        }
                    }
                    Link { class: "settings-back", to: Route::Home {}, "← BACK TO CONSOLE" }
                }
            }
        }
    }
}
