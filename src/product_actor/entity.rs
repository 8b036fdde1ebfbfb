use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{CreateProduct, Product, ProductChanges};
use super::filter::ProductFilter;

fn check_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be blank".to_string());
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price must be a non-negative number, got {price}"));
    }
    Ok(())
}

impl Entity for Product {
    type Id = u64;
    type CreatePayload = CreateProduct;
    type Patch = ProductChanges;
    type Filter = ProductFilter;

    fn id(&self) -> &u64 { &self.id }

    /// Builds a new, available product. Timestamps are taken from the store clock.
    fn from_create(id: u64, payload: CreateProduct) -> Result<Self, String> {
        check_name(&payload.name)?;
        check_price(payload.price)?;

        let now = Utc::now();
        Ok(Self {
            id,
            name: payload.name,
            price: payload.price,
            available: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.id.map_or(true, |id| id == self.id)
            && filter.available.map_or(true, |available| available == self.available)
    }

    fn on_update(&mut self, patch: ProductChanges) -> Result<(), String> {
        if let Some(name) = patch.name {
            check_name(&name)?;
            self.name = name;
        }
        if let Some(price) = patch.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
