use super::item::DeputadoItem;
use crate::ui::context::DeputadosContext;
use dioxus::prelude::*;

/// Result list: hidden while loading, fixed message when empty, one row
/// per deputy keyed by id otherwise.
#[component]
pub fn DeputadosList() -> Element {
    let ctx = use_context::<DeputadosContext>();
    let state = ctx.search.read().clone();

    if state.loading {
        return rsx! {
            div {}
        };
    }

    if state.deputados.is_empty() {
        return rsx! {
            p { class: "no-results", "Nenhum deputado encontrado" }
        };
    }

    rsx! {
        ul { class: "deputados-list",
            for deputado in state.deputados.iter() {
                DeputadoItem {
                    key: "{deputado.id}",
                    deputado: deputado.clone(),
                }
            }
        }
    }
}
