use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::catalog::CatalogError;
use crate::domain::{CreateProduct, Page, PageMeta, Pagination, Product, ProductChanges, UpdateProduct};
use crate::product_actor::ProductFilter;

/// Catalog operations over the product record store.
///
/// Holds no state of its own: every call is a fresh round trip to the store,
/// so clones can serve requests concurrently. Reads only ever see products
/// matching [`ProductFilter::visible`].
#[derive(Clone)]
pub struct CatalogService {
    store: ResourceClient<Product>,
}

impl CatalogService {
    pub fn new(store: ResourceClient<Product>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, payload), fields(product_name = %payload.name))]
    pub async fn create(&self, payload: CreateProduct) -> Result<Product, CatalogError> {
        let product = self.store.create(payload).await?;
        info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Lists one page of available products.
    ///
    /// Count and query run as two independent reads under the same predicate;
    /// a page past the end is empty rather than an error.
    #[instrument(skip(self), fields(page = pagination.page, limit = pagination.limit))]
    pub async fn find_all(&self, pagination: Pagination) -> Result<Page<Product>, CatalogError> {
        pagination.validate().map_err(|reason| {
            warn!(%reason, "Rejected pagination");
            CatalogError::InvalidPagination(reason)
        })?;

        let total = self.store.count(ProductFilter::visible()).await?;
        let last_page = pagination.last_page(total);
        let data = self
            .store
            .find_many(ProductFilter::visible(), pagination.skip(), pagination.take())
            .await?;

        debug!(total, last_page, returned = data.len(), "Listed products");
        Ok(Page {
            data,
            meta: PageMeta { page: pagination.page, total, last_page },
        })
    }

    /// Soft-deleted and unknown products are indistinguishable here.
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn find_one(&self, id: u64) -> Result<Product, CatalogError> {
        match self.store.find_first(ProductFilter::visible_by_id(id)).await? {
            Some(product) => Ok(product),
            None => {
                debug!("Product not found");
                Err(CatalogError::NotFound { id })
            }
        }
    }

    /// Applies a partial update to the product at `id`.
    ///
    /// Any identifier inside `update` is discarded. No availability filter is
    /// applied, so withdrawn products can still be corrected.
    #[instrument(skip(self, update), fields(product_id = id))]
    pub async fn update(&self, id: u64, update: UpdateProduct) -> Result<Product, CatalogError> {
        if let Some(supplied) = update.id {
            debug!(supplied_id = supplied, "Discarding identifier from update payload");
        }

        let product = self
            .store
            .update(ProductFilter::by_id(id), ProductChanges::from(update))
            .await
            .map_err(|e| CatalogError::from_store(e, id))?;

        info!("Product updated");
        Ok(product)
    }

    /// Soft delete: withdraws a currently visible product.
    ///
    /// A second call for the same id fails with `NotFound`.
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn remove(&self, id: u64) -> Result<Product, CatalogError> {
        let product = self
            .store
            .update(ProductFilter::visible_by_id(id), ProductChanges::withdraw())
            .await
            .map_err(|e| CatalogError::from_store(e, id))?;

        info!("Product withdrawn");
        Ok(product)
    }
}
