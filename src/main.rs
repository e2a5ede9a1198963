use dioxus::{logger::tracing::Level, prelude::*};

use finadvisor::App;

fn main() {
    dioxus::logger::init(Level::WARN).unwrap();
    LaunchBuilder::new().launch(App)
}
