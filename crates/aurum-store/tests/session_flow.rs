//! Session lifecycle against a mock backend: login, logout, restore, and
//! the guarantee that the token vault and collections always move together.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_success_persists_token_and_triggers_refresh() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_activity_sink(&server).await;

    // collections only answer authenticated requests: populated collections
    // below therefore prove both the automatic refresh and the bearer header
    for (route, rows) in [
        ("/clientes", json!([cliente_json(1, "Joalheria Central")])),
        ("/oportunidades", json!([])),
        ("/pedidos", json!([])),
        ("/produtos", json!([produto_json(5, "Anel Solitário")])),
        ("/funcionarios", json!([])),
        ("/logs", json!([])),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&server)
            .await;
    }

    let (client, dir) = client_against(&server).await;
    assert!(client.session().login(USER, SECRET).await);

    assert!(client.session().is_logged_in());
    assert_eq!(client.session().current_user().await.as_deref(), Some(USER));
    assert_eq!(std::fs::read_to_string(token_path(&dir)).unwrap(), TOKEN);
    assert_eq!(client.store().customers().len().await, 1);
    assert_eq!(client.store().products().len().await, 1);
}

#[tokio::test]
async fn login_with_bad_credentials_changes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (client, dir) = client_against(&server).await;
    assert!(!client.session().login(USER, "wrong").await);

    assert!(!client.session().is_logged_in());
    assert!(client.session().current_user().await.is_none());
    assert!(!token_path(&dir).exists());
    assert!(client.store().customers().is_empty().await);
}

#[tokio::test]
async fn logout_clears_collections_and_token_then_relogin_repopulates() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_activity_sink(&server).await;
    mount_collections(
        &server,
        json!([cliente_json(1, "Joalheria Central")]),
        json!([oportunidade_json(12, "Coleção de inverno", "PROPOSTA", 1)]),
        json!([]),
        json!([produto_json(5, "Anel Solitário")]),
        json!([funcionario_json(2, "Ana")]),
        json!([log_json(1, "Login realizado")]),
    )
    .await;

    let (client, dir) = client_against(&server).await;
    sign_in(&client).await;
    assert_eq!(client.store().customers().len().await, 1);

    client.session().logout().await;

    assert!(!client.session().is_logged_in());
    assert!(!token_path(&dir).exists());
    assert!(client.store().customers().is_empty().await);
    assert!(client.store().opportunities().is_empty().await);
    assert!(client.store().orders().is_empty().await);
    assert!(client.store().products().is_empty().await);
    assert!(client.store().employees().is_empty().await);
    assert!(client.store().logs().is_empty().await);

    // logging back in rebuilds everything from the backend
    sign_in(&client).await;
    assert!(client.session().is_logged_in());
    assert_eq!(client.store().customers().len().await, 1);
    assert_eq!(client.store().employees().len().await, 1);
}

#[tokio::test]
async fn restore_adopts_persisted_token_on_startup() {
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

    let (client, dir) = client_against(&server).await;
    sign_in(&client).await;

    // a second client over the same data dir: the next app start
    let config = aurum_store::ClientConfig::new(server.uri(), dir.path());
    let next_start = aurum_store::CrmClient::new(config).unwrap();
    assert!(!next_start.session().is_logged_in());

    assert!(next_start.session().restore().await);
    assert!(next_start.session().is_logged_in());
    assert_eq!(next_start.store().customers().len().await, 1);
}

#[tokio::test]
async fn restore_without_persisted_token_stays_logged_out() {
    let server = MockServer::start().await;
    let (client, _dir) = client_against(&server).await;

    assert!(!client.session().restore().await);
    assert!(!client.session().is_logged_in());
}
