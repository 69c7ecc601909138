use crate::ui::context::DeputadosContext;
use dioxus::prelude::*;

/// Filter form with name, state (UF) and party fields. Submitting reads
/// whatever is in the fields at that moment; typing alone never searches.
#[component]
pub fn DeputadosForm() -> Element {
    let ctx = use_context::<DeputadosContext>();
    let mut nome = ctx.nome;
    let mut sigla_uf = ctx.sigla_uf;
    let mut sigla_partido = ctx.sigla_partido;

    let submit_on_enter = {
        let ctx = ctx.clone();
        move |event: KeyboardEvent| {
            if event.key() == Key::Enter {
                ctx.submit_search();
            }
        }
    };

    rsx! {
        div { class: "search-form",
            input {
                class: "search-input",
                placeholder: "Nome",
                value: "{nome.read()}",
                oninput: move |event: FormEvent| {
                    nome.set(event.value());
                },
                onkeydown: submit_on_enter.clone(),
            }
            input {
                class: "search-input",
                placeholder: "Sigla do estado (UF)",
                value: "{sigla_uf.read()}",
                oninput: move |event: FormEvent| {
                    sigla_uf.set(event.value());
                },
                onkeydown: submit_on_enter.clone(),
            }
            input {
                class: "search-input",
                placeholder: "Sigla do partido",
                value: "{sigla_partido.read()}",
                oninput: move |event: FormEvent| {
                    sigla_partido.set(event.value());
                },
                onkeydown: submit_on_enter.clone(),
            }
            button {
                class: "search-button",
                onclick: move |_| ctx.submit_search(),
                "Filtrar"
            }
        }
    }
}
