//! Partial-failure isolation of the synchronizer: one broken endpoint must
//! never block the other five collections, and a full outage must degrade
//! to a report, never a panic.

mod common;

use aurum_store::EntityKind;
use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn one_failed_fetch_leaves_exactly_that_collection_stale() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_activity_sink(&server).await;
    mount_collections(
        &server,
        json!([cliente_json(1, "Joalheria Central")]),
        json!([oportunidade_json(12, "Coleção de inverno", "PROPOSTA", 1)]),
        json!([pedido_json(9, 12, "PENDENTE")]),
        json!([produto_json(5, "Anel Solitário")]),
        json!([funcionario_json(2, "Ana")]),
        json!([log_json(1, "Login realizado")]),
    )
    .await;

    let (client, _dir) = client_against(&server).await;
    sign_in(&client).await;
    assert_eq!(client.store().products().len().await, 1);

    // second round: every collection grew, but /produtos is now broken
    server.reset().await;
    mount_collections(
        &server,
        json!([
            cliente_json(1, "Joalheria Central"),
            cliente_json(2, "Ouro & Prata")
        ]),
        json!([
            oportunidade_json(12, "Coleção de inverno", "PROPOSTA", 1),
            oportunidade_json(13, "Coleção de verão", "PROSPECCAO", 2)
        ]),
        json!([
            pedido_json(9, 12, "PENDENTE"),
            pedido_json(10, 13, "CONFIRMADO")
        ]),
        json!([]),
        json!([funcionario_json(2, "Ana"), funcionario_json(3, "Bruno")]),
        json!([log_json(1, "Login realizado"), log_json(2, "Pedido criado")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/produtos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("erro interno"))
        .with_priority(1)
        .mount(&server)
        .await;

    let report = client.refresh().await;

    assert!(!report.all_ok());
    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, EntityKind::Products);
    assert!(report.succeeded(EntityKind::Customers));

    // the broken collection kept its previous value; the rest moved on
    assert_eq!(client.store().products().len().await, 1);
    assert_eq!(client.store().customers().len().await, 2);
    assert_eq!(client.store().opportunities().len().await, 2);
    assert_eq!(client.store().orders().len().await, 2);
    assert_eq!(client.store().employees().len().await, 2);
    assert_eq!(client.store().logs().len().await, 2);
}

#[tokio::test]
async fn full_outage_degrades_to_a_report_and_keeps_previous_data() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_activity_sink(&server).await;
    mount_collections(
        &server,
        json!([cliente_json(1, "Joalheria Central")]),
        json!([]),
        json!([]),
        json!([]),
        json!([]),
        json!([]),
    )
    .await;

    let (client, _dir) = client_against(&server).await;
    sign_in(&client).await;

    // nothing mounted anymore: every fetch now comes back 404
    server.reset().await;
    let report = client.refresh().await;

    assert_eq!(report.failures().len(), 6);
    assert!(!report.auth_expired());
    assert_eq!(client.store().customers().len().await, 1);
    // stale data retained, session untouched
    assert!(client.session().is_logged_in());
}

#[tokio::test]
async fn malformed_rows_fail_only_their_own_collection() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_activity_sink(&server).await;
    mount_collections(
        &server,
        json!([cliente_json(1, "Joalheria Central")]),
        // opportunity without a customer: a contract violation
        json!([{
            "idOportunidade": 12,
            "nomeOportunidade": "Coleção de inverno",
            "valorEstimado": 1500.0,
            "estagioFunil": "PROPOSTA",
            "dataDeFechamentoEstimada": "2025-09-30"
        }]),
        json!([]),
        json!([]),
        json!([]),
        json!([]),
    )
    .await;

    let (client, _dir) = client_against(&server).await;
    sign_in(&client).await;

    assert_eq!(client.store().customers().len().await, 1);
    assert!(client.store().opportunities().is_empty().await);
}
