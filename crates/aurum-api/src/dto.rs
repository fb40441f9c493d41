//! # Wire DTOs & Normalization
//!
//! The one and only place where the backend's field names exist.
//!
//! ## Why a DTO Layer?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Normalization Boundary                              │
//! │                                                                         │
//! │  Backend JSON                 THIS MODULE               Domain records  │
//! │  ────────────                 ───────────               ──────────────  │
//! │                                                                         │
//! │  { "idCliente": 3,       ──►  ClienteDto           ──►  Customer        │
//! │    "nomeDoComercio": …,       (Deserialize only)        (English names, │
//! │    "usuario": { … } }                                    flattened)     │
//! │                                                                         │
//! │  Customer                ──►  ClientePayload       ──►  { "cnpj": …,    │
//! │  (domain record)              (Serialize only)           "nomeDoComercio│
//! │                                                          ": … }         │
//! │                                                                         │
//! │  Nested references go out as { "id<Entity>": n } sub-objects.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inbound DTOs only derive `Deserialize`; outbound payloads only derive
//! `Serialize`. There is exactly one normalization conversion per entity —
//! nothing above this layer branches on wire field names, and monetary
//! floats are converted to centavos here and nowhere else.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use aurum_core::{
    AccessLevel, ActivityKind, ActivityLog, Contact, Customer, Employee, FunnelStage, Money,
    Opportunity, Order, OrderItem, OrderStatus, PostalAddress, Product, ProductCategory,
    UserAccount,
};

use crate::error::ApiError;

// =============================================================================
// Auth
// =============================================================================

/// Credentials for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginDto {
    pub email: String,
    pub senha: String,
}

/// Body of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// =============================================================================
// Inbound DTOs (backend → client)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContatoDto {
    #[serde(default)]
    pub id_contato: Option<i64>,
    pub rua: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    #[serde(default)]
    pub complemento: Option<String>,
    pub numero_casa: String,
    pub telefone: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioDto {
    #[serde(default)]
    pub id_usuario: Option<i64>,
    pub email: String,
    pub nivel_acesso: AccessLevel,
    #[serde(default)]
    pub contato: Option<ContatoDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteDto {
    #[serde(default)]
    pub id_cliente: Option<i64>,
    pub cnpj: String,
    pub nome_do_comercio: String,
    pub email: String,
    #[serde(default)]
    pub usuario: Option<UsuarioDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuncionarioDto {
    #[serde(default)]
    pub id_funcionario: Option<i64>,
    pub nome: String,
    pub cpf: String,
    pub cargo: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OportunidadeDto {
    #[serde(default)]
    pub id_oportunidade: Option<i64>,
    pub nome_oportunidade: String,
    pub valor_estimado: f64,
    pub estagio_funil: FunnelStage,
    pub data_de_fechamento_estimada: NaiveDate,
    #[serde(default)]
    pub cliente: Option<ClienteDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoDto {
    #[serde(default)]
    pub id_produto: Option<i64>,
    pub nome: String,
    pub descricao: String,
    pub tipo: i32,
    pub tamanho: f64,
    pub valor: f64,
    pub quantidade_estoque: i64,
    // the backend serializes this one field with a capital M
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(default)]
    pub pedra: Option<String>,
}

/// Composite line-item key as the backend nests it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIdDto {
    #[serde(default)]
    pub id_pedido: Option<i64>,
    pub id_produto: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoPedidoDto {
    #[serde(default)]
    pub id: Option<ItemIdDto>,
    #[serde(default)]
    pub produto: Option<ProdutoDto>,
    pub quantidade: i64,
    #[serde(default)]
    pub pedra: Option<String>,
    pub tamanho: String,
    pub valor: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedidoDto {
    #[serde(default)]
    pub id_pedido: Option<i64>,
    pub data: NaiveDate,
    pub valor_total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub oportunidade: Option<OportunidadeDto>,
    #[serde(default)]
    pub itens: Vec<ProdutoPedidoDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDto {
    #[serde(default)]
    pub id_log: Option<i64>,
    pub titulo: String,
    pub tipo_de_atividade: i32,
    pub assunto: String,
    pub descricao: String,
    pub data: NaiveDateTime,
    #[serde(default)]
    pub usuario: Option<UsuarioDto>,
}

// =============================================================================
// Normalization (inbound DTO → canonical record)
// =============================================================================

impl From<ContatoDto> for Contact {
    fn from(dto: ContatoDto) -> Self {
        Contact {
            id: dto.id_contato,
            address: PostalAddress {
                street: dto.rua,
                number: dto.numero_casa,
                district: dto.bairro,
                city: dto.cidade,
                state: dto.estado,
                postal_code: dto.cep,
                complement: dto.complemento,
            },
            phone: dto.telefone,
            email: dto.email,
        }
    }
}

impl From<UsuarioDto> for UserAccount {
    fn from(dto: UsuarioDto) -> Self {
        UserAccount {
            id: dto.id_usuario,
            email: dto.email,
            access_level: dto.nivel_acesso,
            contact: dto.contato.map(Contact::from),
        }
    }
}

impl From<ClienteDto> for Customer {
    fn from(dto: ClienteDto) -> Self {
        // phone and address live on the nested account's contact; flatten
        // them so nothing downstream digs through the nesting
        let contact = dto.usuario.and_then(|u| u.contato);
        let (phone, address) = match contact {
            Some(c) => {
                let c = Contact::from(c);
                (Some(c.phone), Some(c.address))
            }
            None => (None, None),
        };

        Customer {
            id: dto.id_cliente,
            name: dto.nome_do_comercio,
            tax_id: dto.cnpj,
            email: dto.email,
            phone,
            address,
        }
    }
}

impl From<FuncionarioDto> for Employee {
    fn from(dto: FuncionarioDto) -> Self {
        Employee {
            id: dto.id_funcionario,
            name: dto.nome,
            tax_id: dto.cpf,
            role: dto.cargo,
            email: dto.email,
        }
    }
}

impl TryFrom<OportunidadeDto> for Opportunity {
    type Error = ApiError;

    fn try_from(dto: OportunidadeDto) -> Result<Self, ApiError> {
        let customer_id = dto
            .cliente
            .and_then(|c| c.id_cliente)
            .ok_or_else(|| ApiError::Decode("oportunidade sem cliente associado".into()))?;

        Ok(Opportunity {
            id: dto.id_oportunidade,
            name: dto.nome_oportunidade,
            estimated_value: Money::from_reais(dto.valor_estimado),
            stage: dto.estagio_funil,
            expected_close: dto.data_de_fechamento_estimada,
            customer_id,
        })
    }
}

impl TryFrom<ProdutoDto> for Product {
    type Error = ApiError;

    fn try_from(dto: ProdutoDto) -> Result<Self, ApiError> {
        let category = ProductCategory::from_code(dto.tipo)
            .ok_or_else(|| ApiError::Decode(format!("tipo de produto desconhecido: {}", dto.tipo)))?;

        Ok(Product {
            id: dto.id_produto,
            name: dto.nome,
            description: dto.descricao,
            category,
            size: dto.tamanho,
            material: dto.material,
            stone: dto.pedra,
            unit_value: Money::from_reais(dto.valor),
            stock: dto.quantidade_estoque,
        })
    }
}

impl TryFrom<ProdutoPedidoDto> for OrderItem {
    type Error = ApiError;

    fn try_from(dto: ProdutoPedidoDto) -> Result<Self, ApiError> {
        // the product reference may arrive expanded or as the composite key
        let product_id = dto
            .produto
            .as_ref()
            .and_then(|p| p.id_produto)
            .or_else(|| dto.id.as_ref().map(|k| k.id_produto))
            .ok_or_else(|| ApiError::Decode("item de pedido sem produto associado".into()))?;

        Ok(OrderItem {
            product_id,
            quantity: dto.quantidade,
            size: dto.tamanho,
            stone: dto.pedra,
            unit_value: Money::from_reais(dto.valor),
        })
    }
}

impl TryFrom<PedidoDto> for Order {
    type Error = ApiError;

    fn try_from(dto: PedidoDto) -> Result<Self, ApiError> {
        let opportunity_id = dto
            .oportunidade
            .and_then(|o| o.id_oportunidade)
            .ok_or_else(|| ApiError::Decode("pedido sem oportunidade associada".into()))?;

        let items = dto
            .itens
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order {
            id: dto.id_pedido,
            date: dto.data,
            total: Money::from_reais(dto.valor_total),
            status: dto.status,
            opportunity_id,
            items,
        })
    }
}

impl From<LogDto> for ActivityLog {
    fn from(dto: LogDto) -> Self {
        ActivityLog {
            id: dto.id_log,
            title: dto.titulo,
            kind: ActivityKind::from_code(dto.tipo_de_atividade),
            subject: dto.assunto,
            description: dto.descricao,
            recorded_at: dto.data,
            user_email: dto.usuario.map(|u| u.email),
        }
    }
}

// =============================================================================
// Outbound Payloads (client → backend)
// =============================================================================
// Create/update always send the full entity; related entities go out as
// `{ "id<Entity>": n }` sub-objects.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRef {
    pub id_cliente: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OportunidadeRef {
    pub id_oportunidade: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoRef {
    pub id_produto: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioRef {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    pub cnpj: String,
    pub nome_do_comercio: String,
    pub email: String,
}

impl From<&Customer> for ClientePayload {
    fn from(customer: &Customer) -> Self {
        ClientePayload {
            cnpj: customer.tax_id.clone(),
            nome_do_comercio: customer.name.clone(),
            email: customer.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuncionarioPayload {
    pub nome: String,
    pub cpf: String,
    pub cargo: String,
    pub email: String,
}

impl From<&Employee> for FuncionarioPayload {
    fn from(employee: &Employee) -> Self {
        FuncionarioPayload {
            nome: employee.name.clone(),
            cpf: employee.tax_id.clone(),
            cargo: employee.role.clone(),
            email: employee.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OportunidadePayload {
    pub nome_oportunidade: String,
    pub valor_estimado: f64,
    pub estagio_funil: FunnelStage,
    pub data_de_fechamento_estimada: NaiveDate,
    pub cliente: ClienteRef,
}

impl From<&Opportunity> for OportunidadePayload {
    fn from(opportunity: &Opportunity) -> Self {
        OportunidadePayload {
            nome_oportunidade: opportunity.name.clone(),
            valor_estimado: opportunity.estimated_value.to_reais(),
            estagio_funil: opportunity.stage,
            data_de_fechamento_estimada: opportunity.expected_close,
            cliente: ClienteRef {
                id_cliente: opportunity.customer_id,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoPayload {
    pub nome: String,
    pub descricao: String,
    pub tipo: i32,
    pub tamanho: f64,
    pub valor: f64,
    pub quantidade_estoque: i64,
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedra: Option<String>,
}

impl From<&Product> for ProdutoPayload {
    fn from(product: &Product) -> Self {
        ProdutoPayload {
            nome: product.name.clone(),
            descricao: product.description.clone(),
            tipo: product.category.code(),
            tamanho: product.size,
            valor: product.unit_value.to_reais(),
            quantidade_estoque: product.stock,
            material: product.material.clone(),
            pedra: product.stone.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub produto: ProdutoRef,
    pub quantidade: i64,
    pub tamanho: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedra: Option<String>,
    pub valor: f64,
}

impl From<&OrderItem> for ItemPayload {
    fn from(item: &OrderItem) -> Self {
        ItemPayload {
            produto: ProdutoRef {
                id_produto: item.product_id,
            },
            quantidade: item.quantity,
            tamanho: item.size.clone(),
            pedra: item.stone.clone(),
            valor: item.unit_value.to_reais(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedidoPayload {
    pub data: NaiveDate,
    pub valor_total: f64,
    pub status: OrderStatus,
    pub oportunidade: OportunidadeRef,
    pub itens: Vec<ItemPayload>,
}

impl From<&Order> for PedidoPayload {
    fn from(order: &Order) -> Self {
        PedidoPayload {
            data: order.date,
            valor_total: order.total.to_reais(),
            status: order.status,
            oportunidade: OportunidadeRef {
                id_oportunidade: order.opportunity_id,
            },
            itens: order.items.iter().map(ItemPayload::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPayload {
    pub titulo: String,
    pub tipo_de_atividade: i32,
    pub assunto: String,
    pub descricao: String,
    pub data: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<UsuarioRef>,
}

impl From<&ActivityLog> for LogPayload {
    fn from(log: &ActivityLog) -> Self {
        LogPayload {
            titulo: log.title.clone(),
            tipo_de_atividade: log.kind.code(),
            assunto: log.subject.clone(),
            descricao: log.description.clone(),
            data: log.recorded_at,
            usuario: log.user_email.clone().map(|email| UsuarioRef { email }),
        }
    }
}

/// Account creation body for `POST /usuarios`.
///
/// The password only exists here: domain records never carry secrets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioPayload {
    pub email: String,
    pub senha: String,
    pub nivel_acesso: AccessLevel,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cliente_normalization_flattens_account() {
        let dto: ClienteDto = serde_json::from_value(json!({
            "idCliente": 3,
            "cnpj": "12.345.678/0001-90",
            "nomeDoComercio": "Joalheria Central",
            "email": "contato@central.com",
            "usuario": {
                "idUsuario": 8,
                "email": "contato@central.com",
                "nivelAcesso": "PADRAO",
                "contato": {
                    "rua": "Rua das Flores",
                    "bairro": "Centro",
                    "cidade": "São Paulo",
                    "estado": "SP",
                    "cep": "01000-000",
                    "numeroCasa": "120",
                    "telefone": "(11) 99999-0000",
                    "email": "contato@central.com"
                }
            }
        }))
        .unwrap();

        let customer = Customer::from(dto);
        assert_eq!(customer.id, Some(3));
        assert_eq!(customer.name, "Joalheria Central");
        assert_eq!(customer.tax_id, "12.345.678/0001-90");
        assert_eq!(customer.phone.as_deref(), Some("(11) 99999-0000"));
        assert_eq!(customer.address.unwrap().city, "São Paulo");
    }

    #[test]
    fn test_oportunidade_normalization_extracts_flat_reference() {
        let dto: OportunidadeDto = serde_json::from_value(json!({
            "idOportunidade": 12,
            "nomeOportunidade": "Coleção de inverno",
            "valorEstimado": 15000.5,
            "estagioFunil": "NEGOCIACAO",
            "dataDeFechamentoEstimada": "2025-08-01",
            "cliente": { "idCliente": 3, "cnpj": "x", "nomeDoComercio": "x", "email": "x" }
        }))
        .unwrap();

        let opportunity = Opportunity::try_from(dto).unwrap();
        assert_eq!(opportunity.customer_id, 3);
        assert_eq!(opportunity.estimated_value, Money::from_cents(1_500_050));
        assert_eq!(opportunity.stage, FunnelStage::Negotiation);
    }

    #[test]
    fn test_oportunidade_without_cliente_is_a_contract_violation() {
        let dto: OportunidadeDto = serde_json::from_value(json!({
            "idOportunidade": 12,
            "nomeOportunidade": "x",
            "valorEstimado": 1.0,
            "estagioFunil": "PROPOSTA",
            "dataDeFechamentoEstimada": "2025-08-01"
        }))
        .unwrap();

        assert!(matches!(Opportunity::try_from(dto), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_produto_normalization_reads_capitalized_material() {
        let dto: ProdutoDto = serde_json::from_value(json!({
            "idProduto": 5,
            "nome": "Anel Solitário",
            "descricao": "Ouro 18k",
            "tipo": 1,
            "tamanho": 16.0,
            "valor": 899.9,
            "quantidadeEstoque": 4,
            "Material": "Ouro",
            "pedra": "Diamante"
        }))
        .unwrap();

        let product = Product::try_from(dto).unwrap();
        assert_eq!(product.category, ProductCategory::Ring);
        assert_eq!(product.material, "Ouro");
        assert_eq!(product.unit_value, Money::from_cents(89_990));
        assert_eq!(product.stone.as_deref(), Some("Diamante"));
    }

    #[test]
    fn test_pedido_normalization_resolves_items_via_composite_key() {
        let dto: PedidoDto = serde_json::from_value(json!({
            "idPedido": 9,
            "data": "2025-06-10",
            "valorTotal": 1799.8,
            "status": "CONFIRMADO",
            "oportunidade": {
                "idOportunidade": 12,
                "nomeOportunidade": "x",
                "valorEstimado": 1.0,
                "estagioFunil": "FECHADA",
                "dataDeFechamentoEstimada": "2025-06-10"
            },
            "itens": [
                {
                    "id": { "idPedido": 9, "idProduto": 5 },
                    "quantidade": 2,
                    "tamanho": "16",
                    "valor": 899.9
                }
            ]
        }))
        .unwrap();

        let order = Order::try_from(dto).unwrap();
        assert_eq!(order.opportunity_id, 12);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, 5);
        assert_eq!(order.computed_total(), Money::from_cents(179_980));
    }

    #[test]
    fn test_log_normalization_keeps_unknown_kind() {
        let dto: LogDto = serde_json::from_value(json!({
            "idLog": 1,
            "titulo": "Login realizado",
            "tipoDeAtividade": 42,
            "assunto": "Login realizado",
            "descricao": "Usuário entrou no sistema",
            "data": "2025-06-10T14:30:00",
            "usuario": { "email": "ana@aurum.com", "nivelAcesso": "GERENTE" }
        }))
        .unwrap();

        let log = ActivityLog::from(dto);
        assert_eq!(log.kind, ActivityKind::Other);
        assert_eq!(log.user_email.as_deref(), Some("ana@aurum.com"));
    }

    #[test]
    fn test_oportunidade_payload_nests_cliente_reference() {
        let opportunity = Opportunity {
            id: None,
            name: "Venda direta".into(),
            estimated_value: Money::from_cents(250_000),
            stage: FunnelStage::Closed,
            expected_close: NaiveDate::from_ymd_opt(2025, 8, 6).unwrap(),
            customer_id: 3,
        };

        let value = serde_json::to_value(OportunidadePayload::from(&opportunity)).unwrap();
        assert_eq!(
            value,
            json!({
                "nomeOportunidade": "Venda direta",
                "valorEstimado": 2500.0,
                "estagioFunil": "FECHADA",
                "dataDeFechamentoEstimada": "2025-08-06",
                "cliente": { "idCliente": 3 }
            })
        );
    }

    #[test]
    fn test_pedido_payload_nests_references() {
        let order = Order {
            id: None,
            date: NaiveDate::from_ymd_opt(2025, 8, 6).unwrap(),
            total: Money::from_cents(179_980),
            status: OrderStatus::Pending,
            opportunity_id: 12,
            items: vec![OrderItem {
                product_id: 5,
                quantity: 2,
                size: "16".into(),
                stone: None,
                unit_value: Money::from_cents(89_990),
            }],
        };

        let value = serde_json::to_value(PedidoPayload::from(&order)).unwrap();
        assert_eq!(value["oportunidade"], json!({ "idOportunidade": 12 }));
        assert_eq!(value["itens"][0]["produto"], json!({ "idProduto": 5 }));
        assert_eq!(value["valorTotal"], json!(1799.8));
        // no stone chosen: the field stays off the wire
        assert!(value["itens"][0].get("pedra").is_none());
    }

    #[test]
    fn test_produto_payload_writes_capitalized_material() {
        let product = Product {
            id: None,
            name: "Colar Elo".into(),
            description: "Prata 925".into(),
            category: ProductCategory::Necklace,
            size: 45.0,
            material: "Prata".into(),
            stone: None,
            unit_value: Money::from_cents(35_000),
            stock: 10,
        };

        let value = serde_json::to_value(ProdutoPayload::from(&product)).unwrap();
        assert_eq!(value["Material"], json!("Prata"));
        assert_eq!(value["tipo"], json!(2));
    }
}
