//! Shared fixtures for the integration suite: a wiremock backend, JSON
//! fixtures matching the backend's wire shapes, and an isolated data dir
//! per client so token vaults never collide.

#![allow(dead_code)]

use std::path::PathBuf;

use aurum_store::{ClientConfig, CrmClient};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "abc123";
pub const USER: &str = "user@test.com";
pub const SECRET: &str = "secret";

/// Builds a client wired against the mock backend, with its own data dir.
pub async fn client_against(server: &MockServer) -> (CrmClient, TempDir) {
    init_tracing();
    let dir = tempfile::tempdir().expect("temp data dir");
    let config = ClientConfig::new(server.uri(), dir.path());
    let client = CrmClient::new(config).expect("client construction");
    (client, dir)
}

/// Run tests with `RUST_LOG=debug` to watch the refresh/mutation flow.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Path of the persisted token inside a client's data dir.
pub fn token_path(dir: &TempDir) -> PathBuf {
    dir.path().join(aurum_store::token::TOKEN_FILE)
}

// =============================================================================
// Wire Fixtures
// =============================================================================

pub fn cliente_json(id: i64, name: &str) -> Value {
    json!({
        "idCliente": id,
        "cnpj": "12.345.678/0001-90",
        "nomeDoComercio": name,
        "email": format!("contato{}@exemplo.com", id)
    })
}

pub fn produto_json(id: i64, name: &str) -> Value {
    json!({
        "idProduto": id,
        "nome": name,
        "descricao": "Ouro 18k",
        "tipo": 1,
        "tamanho": 16.0,
        "valor": 899.9,
        "quantidadeEstoque": 4,
        "Material": "Ouro"
    })
}

pub fn oportunidade_json(id: i64, name: &str, stage: &str, customer_id: i64) -> Value {
    json!({
        "idOportunidade": id,
        "nomeOportunidade": name,
        "valorEstimado": 1500.0,
        "estagioFunil": stage,
        "dataDeFechamentoEstimada": "2025-09-30",
        "cliente": cliente_json(customer_id, "Joalheria Central")
    })
}

pub fn pedido_json(id: i64, opportunity_id: i64, status: &str) -> Value {
    json!({
        "idPedido": id,
        "data": "2025-08-06",
        "valorTotal": 3000.0,
        "status": status,
        "oportunidade": oportunidade_json(opportunity_id, "Venda direta", "FECHADA", 3)
    })
}

pub fn funcionario_json(id: i64, name: &str) -> Value {
    json!({
        "idFuncionario": id,
        "nome": name,
        "cpf": "123.456.789-00",
        "cargo": "Vendas",
        "email": format!("func{}@aurum.com", id)
    })
}

pub fn log_json(id: i64, title: &str) -> Value {
    json!({
        "idLog": id,
        "titulo": title,
        "tipoDeAtividade": 4,
        "assunto": title,
        "descricao": "entrada de auditoria",
        "data": "2025-08-06T10:00:00"
    })
}

// =============================================================================
// Mock Mounting
// =============================================================================

/// `POST /auth/login` succeeding with the canonical test token.
pub async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": TOKEN })))
        .mount(server)
        .await;
}

/// `POST /logs` accepting audit entries (gateway records them best-effort).
pub async fn mount_activity_sink(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(log_json(99, "Atividade")))
        .mount(server)
        .await;
}

/// One list endpoint returning the given rows.
pub async fn mount_collection(server: &MockServer, route: &str, rows: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

/// All six list endpoints at once.
pub async fn mount_collections(
    server: &MockServer,
    customers: Value,
    opportunities: Value,
    orders: Value,
    products: Value,
    employees: Value,
    logs: Value,
) {
    mount_collection(server, "/clientes", customers).await;
    mount_collection(server, "/oportunidades", opportunities).await;
    mount_collection(server, "/pedidos", orders).await;
    mount_collection(server, "/produtos", products).await;
    mount_collection(server, "/funcionarios", employees).await;
    mount_collection(server, "/logs", logs).await;
}

/// All six list endpoints, empty.
pub async fn mount_empty_collections(server: &MockServer) {
    mount_collections(
        server,
        json!([]),
        json!([]),
        json!([]),
        json!([]),
        json!([]),
        json!([]),
    )
    .await;
}

/// Logs the canonical test user in and asserts it worked.
pub async fn sign_in(client: &CrmClient) {
    assert!(
        client.session().login(USER, SECRET).await,
        "test login should succeed"
    );
}
