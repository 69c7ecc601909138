use super::form::DeputadosForm;
use super::list::DeputadosList;
use super::status::DeputadosStatus;
use dioxus::prelude::*;

/// The deputies search screen: filter form, loading status, result list.
#[component]
pub fn DeputadosPage() -> Element {
    rsx! {
        div { class: "container",
            h1 { class: "title", "Filtrar Deputados" }

            DeputadosForm {}
            DeputadosStatus {}
            DeputadosList {}
        }
    }
}
