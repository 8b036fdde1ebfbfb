//! Product record store: entity hooks, query filters and actor construction.

pub mod entity;
pub mod filter;

pub use filter::*;

use crate::actor_framework::{ResourceActor, ResourceClient};
use crate::domain::Product;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates the product store actor and the client used to reach it.
///
/// Identifiers start at 1 and are never reused.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

    ResourceActor::new(buffer_size, next_product_id)
}
