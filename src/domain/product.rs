use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// `available` is the soft-delete flag: records are never purged, only
/// withdrawn from every read path once it turns `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new product.
///
/// Identifier and availability are system-assigned and refused on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// Partial update as received from callers.
///
/// Callers may echo the identifier back; it is never part of the change set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Store-level change set for a product. Has no identifier field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl ProductChanges {
    /// The soft-delete change: flips `available` off and nothing else.
    pub fn withdraw() -> Self {
        Self { available: Some(false), ..Self::default() }
    }
}

impl From<UpdateProduct> for ProductChanges {
    fn from(update: UpdateProduct) -> Self {
        let UpdateProduct { id: _, name, price } = update;
        Self { name, price, available: None }
    }
}
