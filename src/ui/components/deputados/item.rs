use crate::camara::Deputado;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct DeputadoItemProps {
    pub deputado: Deputado,
}

/// One row of the result list: photo, name, email and "party - state".
#[component]
pub fn DeputadoItem(props: DeputadoItemProps) -> Element {
    let deputado = &props.deputado;

    rsx! {
        li { class: "deputado-item",
            img {
                class: "deputado-photo",
                src: "{deputado.url_foto}",
                alt: "Foto de {deputado.nome}",
            }
            div { class: "deputado-info",
                p { class: "deputado-nome", "{deputado.nome}" }
                if let Some(ref email) = deputado.email {
                    p { class: "deputado-email", "{email}" }
                }
                p { "{deputado.sigla_partido} - {deputado.sigla_uf}" }
            }
        }
    }
}
