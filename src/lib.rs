use dioxus::{logger::tracing::warn, prelude::*};

pub mod api;
pub mod chat;
pub mod config;
mod storage;
mod ui;

use config::AppSettings;
use ui::home::Home;
use ui::settings::Settings;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // Settings shared across routes. The env override wins; otherwise
    // whatever was last saved from the settings page.
    let mut settings_ctx = use_context_provider(|| Signal::new(None::<AppSettings>));
    let init = use_resource(move || async move {
        let settings = match config::from_env() {
            Some(s) => Some(s),
            None => match storage::get_storage().await {
                Ok(st) => {
                    use storage::Storage;
                    st.load_settings().await.unwrap_or_else(|e| {
                        warn!("Could not load settings: {e:?}");
                        None
                    })
                }
                Err(e) => {
                    warn!("Could not get storage: {e:?}");
                    None
                }
            },
        };
        settings_ctx.set(settings);
        anyhow::Ok(())
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings { },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
