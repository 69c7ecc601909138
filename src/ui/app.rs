use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::DeputadosPage;
use crate::ui::context::DeputadosProvider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        DeputadosProvider {
            DeputadosPage {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Deputados")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(900, 700))
}
