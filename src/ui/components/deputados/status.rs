use crate::ui::context::DeputadosContext;
use dioxus::prelude::*;

/// Loading indicator, shown exactly while a search is outstanding.
/// Failures are log-only and never rendered here.
#[component]
pub fn DeputadosStatus() -> Element {
    let ctx = use_context::<DeputadosContext>();
    let loading = ctx.search.read().loading;

    rsx! {
        if loading {
            div { class: "loading",
                p { "Carregando deputados..." }
            }
        }
    }
}
