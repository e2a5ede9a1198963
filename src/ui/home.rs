//! Main chat page.
//!
//! Collects a free-text query, POSTs it to the configured advisor API,
//! and renders whatever JSON comes back. The request lifecycle lives in
//! [`ChatSession`]; this component wires it to signals and owns the
//! purely cosmetic bits (glitching title, status bar, particles).

use std::time::Duration;

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    Route,
    api::AdvisorClient,
    chat::{ChatSession, connection_error},
    config::AppSettings,
    ui::chat_input::ChatInput,
};

const LOGO: Asset = asset!("/assets/logo.svg");
const EMPTY_ICON: Asset = asset!("/assets/empty.svg");

#[component]
pub fn Home() -> Element {
    let settings_ctx = consume_context::<Signal<Option<AppSettings>>>();
    let mut session = use_signal(ChatSession::new);

    // Client follows the configured base URL.
    let client = use_resource(move || async move {
        let settings = settings_ctx.read().clone();
        settings
            .filter(|s| s.is_configured())
            .map(|s| AdvisorClient::new(s.api_base))
    });

    // Glitch effect on title: on for 200ms every 3s. Cosmetic only.
    let mut glitch = use_signal(|| false);
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(3)).await;
            glitch.set(true);
            tokio::time::sleep(Duration::from_millis(200)).await;
            glitch.set(false);
        }
    });

    // One request cycle. begin_submission refuses empty drafts and
    // overlapping sends; the error arm maps to the fixed payload so
    // complete_submission runs on every path and pending cannot leak.
    let send = move |_: ()| async move {
        let Some(Some(client)) = client() else { return };
        let Some(msg) = session.write().begin_submission() else {
            return;
        };
        let payload = client.chat(&msg).await.unwrap_or_else(|e| {
            warn!("Advisor request failed: {e:?}");
            connection_error()
        });
        session.write().complete_submission(payload);
    };

    let snapshot = session.read().clone();
    let pending = snapshot.is_pending();
    let draft = snapshot.draft().to_string();
    let response_text = snapshot
        .response()
        .map(|r| serde_json::to_string_pretty(r).unwrap_or_else(|_| r.to_string()));
    let has_response = response_text.is_some();

    let configured = settings_ctx
        .read()
        .as_ref()
        .is_some_and(|s| s.is_configured());
    let disabled = !configured || pending;

    let title_class = if glitch() { "title glitch" } else { "title" };
    let live_class = if has_response {
        "live-indicator active"
    } else {
        "live-indicator"
    };

    let response_body = if pending {
        rsx! {
            div { class: "loading-animation",
                div { class: "loading-bar" }
                div { class: "loading-bar" }
                div { class: "loading-bar" }
                span { class: "loading-text", "ANALYZING QUERY..." }
            }
        }
    } else if let Some(text) = response_text {
        rsx! {
            pre { class: "response-text", "{text}" }
        }
    } else {
        rsx! {
            div { class: "empty-state",
                img { class: "empty-icon", src: EMPTY_ICON }
                p { "WAITING FOR INPUT..." }
                span { class: "empty-subtitle",
                    "Enter a query to receive AI-powered financial insights"
                }
            }
        }
    };

    rsx! {
        div { class: "app-container",
            // Animated background grid
            div { class: "grid-background" }

            // Floating particles (placement and timing live in the stylesheet)
            div { class: "particles",
                for i in 0..20 {
                    div { class: "particle", key: "{i}" }
                }
            }

            div { class: "main-content",
                header { class: "header",
                    div { class: "logo-container",
                        img { class: "logo-icon", src: LOGO }
                        h1 {
                            class: "{title_class}",
                            "data-text": "FINANCIAL ADVISOR",
                            "FINANCIAL ADVISOR"
                        }
                    }
                    div { class: "status-bar",
                        div { class: "status-item",
                            span { class: "status-dot online" }
                            span { "SYSTEM ONLINE" }
                        }
                        div { class: "status-item",
                            span { class: "status-label", "VERSION" }
                            span { class: "status-value", "2.0.47" }
                        }
                        div { class: "status-item",
                            span { class: "status-label", "LATENCY" }
                            span { class: "status-value", "12ms" }
                        }
                        Link { class: "status-item", to: Route::Settings {}, "CONFIG" }
                    }
                }

                if !configured {
                    div { class: "config-warning",
                        "NO API ENDPOINT CONFIGURED — "
                        Link { to: Route::Settings {}, "OPEN SETTINGS" }
                    }
                }

                div { class: "chat-container",
                    div { class: "input-section",
                        div { class: "section-header",
                            span { class: "section-icon", "◆" }
                            span { class: "section-title", "QUERY INPUT" }
                            div { class: "section-line" }
                        }
                        ChatInput {
                            value: draft,
                            disabled,
                            pending,
                            on_input: Callback::new(move |s: String| {
                                session.write().update_draft(s);
                            }),
                            on_send: Callback::new(send),
                        }
                    }

                    div { class: "response-section",
                        div { class: "section-header",
                            span { class: "section-icon", "◇" }
                            span { class: "section-title", "AI RESPONSE" }
                            div { class: "section-line" }
                            div { class: "{live_class}",
                                span { class: "live-dot" }
                                if has_response {
                                    "DATA RECEIVED"
                                } else {
                                    "AWAITING INPUT"
                                }
                            }
                        }
                        div { class: "response-wrapper",
                            div { class: "response-content", {response_body} }
                            div { class: "response-scanline" }
                        }
                    }
                }

                footer { class: "footer",

                    // div { class: "stat-box",
                    //     span { class: "stat-value", "256" }
                    //     span { class: "stat-label", "BIT ENCRYPTION" }
                    // }

                    div { class: "stat-box",
                        span { class: "stat-value", "99.9%" }
                        span { class: "stat-label", "UPTIME" }
                    }
                    div { class: "stat-box",
                        span { class: "stat-value", "∞" }
                        span { class: "stat-label", "QUERIES" }
                    }
                    div { class: "stat-box",
                        span { class: "stat-value", "AI" }
                        span { class: "stat-label", "POWERED" }
                    }
                }
            }
        }
    }
}
