//! End-to-end tests for the deputados search: query construction on the
//! wire, response decoding, and the fetch lifecycle through `SearchState`.

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::{Arc, Mutex};

use deputados::camara::{CamaraClient, CamaraError, FilterCriteria};
use deputados::search::SearchState;

/// Stub API bound to an ephemeral port. Returns the given status and body
/// for every `/deputados` request and records the raw query strings it
/// receives.
async fn spawn_stub_api(
    status: StatusCode,
    body: serde_json::Value,
) -> (String, Arc<Mutex<Vec<String>>>) {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let recorded = queries.clone();

    let app = Router::new().route(
        "/deputados",
        get(move |RawQuery(query): RawQuery| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().unwrap().push(query.unwrap_or_default());
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), queries)
}

fn deputados_fixture() -> serde_json::Value {
    serde_json::json!({
        "dados": [
            {
                "id": 1,
                "nome": "Ana Lima",
                "email": "dep.analima@camara.leg.br",
                "siglaPartido": "PT",
                "siglaUf": "SP",
                "urlFoto": "https://www.camara.leg.br/internet/deputado/bandep/1.jpg"
            },
            {
                "id": 2,
                "nome": "Bruno Costa",
                "email": null,
                "siglaPartido": "MDB",
                "siglaUf": "RJ",
                "urlFoto": "https://www.camara.leg.br/internet/deputado/bandep/2.jpg"
            }
        ]
    })
}

#[tokio::test]
async fn empty_criteria_send_only_fixed_parameters() {
    let (base_url, queries) =
        spawn_stub_api(StatusCode::OK, serde_json::json!({ "dados": [] })).await;
    let client = CamaraClient::with_base_url(base_url);

    client
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(queries.lock().unwrap().as_slice(), ["ordem=asc&itens=25"]);
}

#[tokio::test]
async fn single_filter_is_forwarded_before_fixed_parameters() {
    let (base_url, queries) =
        spawn_stub_api(StatusCode::OK, serde_json::json!({ "dados": [] })).await;
    let client = CamaraClient::with_base_url(base_url);

    let criteria = FilterCriteria {
        nome: "silva".to_string(),
        ..Default::default()
    };
    client.search_deputados(&criteria).await.unwrap();

    assert_eq!(
        queries.lock().unwrap().as_slice(),
        ["nome=silva&ordem=asc&itens=25"]
    );
}

#[tokio::test]
async fn successful_search_returns_deputados_in_response_order() {
    let (base_url, _) = spawn_stub_api(StatusCode::OK, deputados_fixture()).await;
    let client = CamaraClient::with_base_url(base_url);

    let deputados = client
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(
        deputados.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(deputados[0].nome, "Ana Lima");
    assert_eq!(deputados[0].email.as_deref(), Some("dep.analima@camara.leg.br"));
    assert_eq!(deputados[1].email, None);
    assert_eq!(deputados[1].sigla_partido, "MDB");
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let (base_url, _) =
        spawn_stub_api(StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({})).await;
    let client = CamaraClient::with_base_url(base_url);

    let err = client
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap_err();

    match err {
        CamaraError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, _) =
        spawn_stub_api(StatusCode::OK, serde_json::json!({ "resultados": [] })).await;
    let client = CamaraClient::with_base_url(base_url);

    let err = client
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CamaraError::Decode(_)));
}

#[tokio::test]
async fn mount_flow_loads_then_renders_results() {
    // Mount: loading with no results, automatic search with empty filters
    let mut state = SearchState::new();
    assert!(state.loading);
    assert!(state.deputados.is_empty());

    let (base_url, queries) = spawn_stub_api(StatusCode::OK, deputados_fixture()).await;
    let client = CamaraClient::with_base_url(base_url);

    let request = state.start_search();
    let deputados = client
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap();
    state.search_succeeded(request, deputados);

    assert_eq!(queries.lock().unwrap().as_slice(), ["ordem=asc&itens=25"]);
    assert!(!state.loading);
    assert_eq!(
        state.deputados.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[tokio::test]
async fn failed_fetch_keeps_previous_results() {
    let (base_url, _) = spawn_stub_api(StatusCode::OK, deputados_fixture()).await;
    let client = CamaraClient::with_base_url(base_url);

    let mut state = SearchState::new();
    let request = state.start_search();
    let deputados = client
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap();
    state.search_succeeded(request, deputados);

    // Second search against a dead endpoint fails; the stale results stay
    let broken = CamaraClient::with_base_url("http://127.0.0.1:1");
    let request = state.start_search();
    let err = broken
        .search_deputados(&FilterCriteria::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CamaraError::Request(_)));
    state.search_failed(request);

    assert!(!state.loading);
    assert_eq!(state.deputados.len(), 2);
    assert_eq!(state.deputados[0].id, 1);
}

#[tokio::test]
async fn repeated_search_with_same_criteria_is_idempotent() {
    let (base_url, _) = spawn_stub_api(StatusCode::OK, deputados_fixture()).await;
    let client = CamaraClient::with_base_url(base_url);

    let criteria = FilterCriteria {
        sigla_uf: "SP".to_string(),
        ..Default::default()
    };
    let first = client.search_deputados(&criteria).await.unwrap();
    let second = client.search_deputados(&criteria).await.unwrap();

    assert_eq!(first, second);
}
