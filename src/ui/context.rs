use crate::camara::{CamaraClient, FilterCriteria};
use crate::config::Config;
use crate::search::SearchState;
use dioxus::prelude::*;
use tracing::warn;

/// Screen-wide state: one signal per filter field, the search state and
/// the API client.
#[derive(Clone)]
pub struct DeputadosContext {
    pub nome: Signal<String>,
    pub sigla_uf: Signal<String>,
    pub sigla_partido: Signal<String>,
    pub search: Signal<SearchState>,
    client: CamaraClient,
}

impl DeputadosContext {
    /// Snapshot the filter fields and run a search with them. Typing into
    /// the fields never triggers this; only the explicit submit does.
    pub fn submit_search(&self) {
        let criteria = FilterCriteria {
            nome: self.nome.read().clone(),
            sigla_uf: self.sigla_uf.read().clone(),
            sigla_partido: self.sigla_partido.read().clone(),
        };
        self.run_search(criteria);
    }

    /// Issue one request for the given criteria. A submit while another
    /// request is outstanding starts a second request; the request id
    /// recorded by `start_search` decides which response is applied.
    pub fn run_search(&self, criteria: FilterCriteria) {
        let client = self.client.clone();
        let mut search = self.search;
        let request = search.write().start_search();

        spawn(async move {
            match client.search_deputados(&criteria).await {
                Ok(deputados) => {
                    search.write().search_succeeded(request, deputados);
                }
                Err(e) => {
                    // Failures stay log-only; the previous results remain
                    warn!("deputados search failed: {}", e);
                    search.write().search_failed(request);
                }
            }
        });
    }
}

/// Provider component that makes the context available to the screen and
/// fires the mount-time search with empty filters.
#[component]
pub fn DeputadosProvider(children: Element) -> Element {
    let client = use_hook(|| CamaraClient::with_base_url(Config::load().api_base_url));

    let ctx = DeputadosContext {
        nome: use_signal(|| String::new()),
        sigla_uf: use_signal(|| String::new()),
        sigla_partido: use_signal(|| String::new()),
        search: use_signal(|| SearchState::new()),
        client,
    };

    use_context_provider({
        let ctx = ctx.clone();
        move || ctx.clone()
    });

    use_effect({
        let ctx = ctx.clone();
        move || {
            ctx.run_search(FilterCriteria::default());
        }
    });

    rsx! {
        {children}
    }
}
