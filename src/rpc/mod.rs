//! Remote-procedure surface: message patterns, wire packets and dispatch.

pub mod error;
pub mod transport;

pub use error::*;
pub use transport::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::catalog::CatalogService;
use crate::domain::{CreateProduct, Pagination, UpdateProduct};

pub const CREATE_PRODUCT: &str = "createProduct";
pub const FIND_ALL_PRODUCTS: &str = "findAllProducts";
pub const FIND_ONE_PRODUCT: &str = "findOneProduct";
pub const UPDATE_PRODUCT: &str = "updateProduct";
pub const REMOVE_PRODUCT: &str = "removeProduct";

const ENCODE_FAILURE_REPLY: &str = r#"{"err":{"status":500,"message":"Failed to encode reply"},"isDisposed":true}"#;

/// Payload addressing a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: u64,
}

/// Payload of `updateProduct`: the target id plus the requested changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCommand {
    pub id: u64,
    #[serde(default)]
    pub changes: UpdateProduct,
}

/// A decoded catalog call.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcRequest {
    Create(CreateProduct),
    FindAll(Pagination),
    FindOne(ProductRef),
    Update(UpdateCommand),
    Remove(ProductRef),
}

impl RpcRequest {
    /// Decodes the payload registered under `pattern`.
    pub fn decode(pattern: &str, data: Value) -> Result<Self, RpcError> {
        let request = match pattern {
            CREATE_PRODUCT => RpcRequest::Create(payload(data)?),
            FIND_ALL_PRODUCTS if data.is_null() => RpcRequest::FindAll(Pagination::default()),
            FIND_ALL_PRODUCTS => RpcRequest::FindAll(payload(data)?),
            FIND_ONE_PRODUCT => RpcRequest::FindOne(payload(data)?),
            UPDATE_PRODUCT => RpcRequest::Update(payload(data)?),
            REMOVE_PRODUCT => RpcRequest::Remove(payload(data)?),
            _ => return Err(RpcError::no_handler()),
        };
        Ok(request)
    }
}

fn payload<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, RpcError> {
    serde_json::from_value(data).map_err(|e| RpcError::bad_request(format!("Invalid payload: {e}")))
}

/// Incoming wire packet.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestPacket {
    #[serde(default)]
    pub id: Option<String>,
    pub pattern: String,
    #[serde(default)]
    pub data: Value,
}

/// Outgoing wire packet. Exactly one of `response` and `err` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPacket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RpcError>,
    pub is_disposed: bool,
}

impl ReplyPacket {
    fn new(id: Option<String>, outcome: Result<Value, RpcError>) -> Self {
        let (response, err) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self { id, response, err, is_disposed: true }
    }
}

/// Runs one decoded call against the catalog.
#[instrument(skip(service))]
pub async fn dispatch(service: &CatalogService, request: RpcRequest) -> Result<Value, RpcError> {
    let value = match request {
        RpcRequest::Create(payload) => to_value(service.create(payload).await?)?,
        RpcRequest::FindAll(pagination) => to_value(service.find_all(pagination).await?)?,
        RpcRequest::FindOne(ProductRef { id }) => to_value(service.find_one(id).await?)?,
        RpcRequest::Update(UpdateCommand { id, changes }) => to_value(service.update(id, changes).await?)?,
        RpcRequest::Remove(ProductRef { id }) => to_value(service.remove(id).await?)?,
    };
    Ok(value)
}

fn to_value<T: Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::internal(e.to_string()))
}

/// Handles one raw packet and returns the encoded reply.
pub async fn handle_packet(service: &CatalogService, raw: &str) -> String {
    let reply = match serde_json::from_str::<RequestPacket>(raw) {
        Ok(packet) => {
            debug!(pattern = %packet.pattern, "Received packet");
            let outcome = match RpcRequest::decode(&packet.pattern, packet.data) {
                Ok(request) => dispatch(service, request).await,
                Err(error) => Err(error),
            };
            if let Err(error) = &outcome {
                warn!(pattern = %packet.pattern, status = error.status, reason = %error.message, "Call failed");
            }
            ReplyPacket::new(packet.id, outcome)
        }
        Err(e) => {
            warn!(error = %e, "Malformed packet");
            ReplyPacket::new(None, Err(RpcError::bad_request(format!("Malformed packet: {e}"))))
        }
    };

    serde_json::to_string(&reply).unwrap_or_else(|e| {
        error!(error = %e, "Failed to encode reply");
        ENCODE_FAILURE_REPLY.to_string()
    })
}
