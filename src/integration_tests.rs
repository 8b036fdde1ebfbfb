#[cfg(test)]
mod tests {
    use crate::app_system::CatalogSystem;
    use crate::catalog::{CatalogError, CatalogService};
    use crate::domain::{CreateProduct, Pagination, UpdateProduct};
    use crate::rpc::{self, ReplyPacket};
    use serde_json::json;

    async fn seed(catalog: &CatalogService, count: usize) -> Vec<u64> {
        let mut ids = Vec::with_capacity(count);
        for n in 1..=count {
            let payload = CreateProduct { name: format!("Product {n}"), price: n as f64 };
            ids.push(catalog.create(payload).await.unwrap().id);
        }
        ids
    }

    fn ids(products: &[crate::domain::Product]) -> Vec<u64> {
        products.iter().map(|product| product.id).collect()
    }

    #[tokio::test]
    async fn test_remove_scenario() {
        let system = CatalogSystem::start(16);
        let catalog = system.catalog.clone();

        let created = catalog.create(CreateProduct { name: "A".into(), price: 5.0 }).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(created.available);

        let removed = catalog.remove(1).await.unwrap();
        assert_eq!(removed.id, 1);
        assert!(!removed.available);

        assert_eq!(catalog.find_one(1).await, Err(CatalogError::NotFound { id: 1 }));
        assert_eq!(catalog.remove(1).await, Err(CatalogError::NotFound { id: 1 }));

        drop(catalog);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_first_page_of_five() {
        let system = CatalogSystem::start(16);
        seed(&system.catalog, 5).await;

        let page = system.catalog.find_all(Pagination::new(1, 2)).await.unwrap();
        assert_eq!(ids(&page.data), vec![1, 2]);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total, 5);
        assert_eq!(page.meta.last_page, 3);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_overflow_page_is_empty() {
        let system = CatalogSystem::start(16);
        seed(&system.catalog, 3).await;

        let page = system.catalog.find_all(Pagination::new(2, 10)).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.last_page, 1);
        assert_eq!(page.meta.total, 3);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_pages_cover_visible_products_exactly_once() {
        let system = CatalogSystem::start(16);
        let catalog = &system.catalog;
        seed(catalog, 11).await;
        for id in [2, 5, 6, 11] {
            catalog.remove(id).await.unwrap();
        }

        for limit in 1..=8 {
            let first = catalog.find_all(Pagination::new(1, limit)).await.unwrap();
            assert_eq!(first.meta.total, 7);

            let mut seen = Vec::new();
            for page in 1..=first.meta.last_page {
                let page = u32::try_from(page).unwrap();
                let listed = catalog.find_all(Pagination::new(page, limit)).await.unwrap();
                assert!(listed.data.len() <= limit as usize);
                assert!(listed.data.iter().all(|product| product.available));
                seen.extend(ids(&listed.data));
            }
            assert_eq!(seen, vec![1, 3, 4, 7, 8, 9, 10], "limit {limit}");
        }

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_keeps_identifier() {
        let system = CatalogSystem::start(16);
        seed(&system.catalog, 2).await;

        let update = UpdateProduct { id: Some(2), name: Some("X".into()), price: None };
        let updated = system.catalog.update(1, update).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "X");

        assert_eq!(system.catalog.find_one(1).await.unwrap().name, "X");
        assert_eq!(system.catalog.find_one(2).await.unwrap().name, "Product 2");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_reaches_withdrawn_products_but_not_unknown_ones() {
        let system = CatalogSystem::start(16);
        seed(&system.catalog, 1).await;
        system.catalog.remove(1).await.unwrap();

        let update = UpdateProduct { price: Some(99.0), ..Default::default() };
        let corrected = system.catalog.update(1, update).await.unwrap();
        assert_eq!(corrected.price, 99.0);
        assert!(!corrected.available);
        assert_eq!(system.catalog.find_one(1).await, Err(CatalogError::NotFound { id: 1 }));

        let missing = system.catalog.update(40, UpdateProduct::default()).await;
        assert_eq!(missing, Err(CatalogError::NotFound { id: 40 }));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_store_constraint_violation_is_not_mapped() {
        let system = CatalogSystem::start(16);

        let result = system.catalog.create(CreateProduct { name: "Broken".into(), price: -2.0 }).await;
        assert!(matches!(result, Err(CatalogError::Store(_))));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_serve_round_trip_over_packets() {
        let system = CatalogSystem::start(16);

        let input = [
            json!({ "id": "1", "pattern": "createProduct", "data": { "name": "Mouse", "price": 19.5 } }),
            json!({ "id": "2", "pattern": "createProduct", "data": { "name": "Pad", "price": 4.0 } }),
            json!({ "id": "3", "pattern": "removeProduct", "data": { "id": 1 } }),
            json!({ "id": "4", "pattern": "findAllProducts" }),
            json!({ "id": "5", "pattern": "findOneProduct", "data": { "id": 1 } }),
            json!({ "id": "6", "pattern": "updateProduct", "data": { "id": 2, "changes": { "id": 9, "name": "Desk pad" } } }),
            json!({ "id": "7", "pattern": "findAllProducts", "data": { "page": 0, "limit": 5 } }),
            json!({ "id": "8", "pattern": "shipProduct", "data": {} }),
        ]
        .iter()
        .map(|packet| packet.to_string())
        .collect::<Vec<_>>()
        .join("\n")
            + "\nnot json\n";

        let mut output = Vec::new();
        let handled = rpc::serve(system.catalog.clone(), input.as_bytes(), &mut output, std::future::pending())
            .await
            .unwrap();
        assert_eq!(handled, 9);

        let replies: Vec<ReplyPacket> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        let created = replies[0].response.as_ref().unwrap();
        assert_eq!(created["id"], 1);
        assert_eq!(created["available"], true);

        assert_eq!(replies[2].response.as_ref().unwrap()["available"], false);

        let listing = replies[3].response.as_ref().unwrap();
        assert_eq!(listing["meta"], json!({ "page": 1, "totalPages": 1, "lastPage": 1 }));
        assert_eq!(listing["data"][0]["id"], 2);

        let not_found = replies[4].err.as_ref().unwrap();
        assert_eq!(not_found.status, 404);
        assert_eq!(not_found.message, "Product with id #1 not found");
        assert_eq!(replies[4].id.as_deref(), Some("5"));

        let updated = replies[5].response.as_ref().unwrap();
        assert_eq!(updated["id"], 2);
        assert_eq!(updated["name"], "Desk pad");

        assert_eq!(replies[6].err.as_ref().unwrap().status, 400);
        assert_eq!(replies[7].err.as_ref().unwrap().status, 400);
        assert_eq!(replies[8].err.as_ref().unwrap().status, 400);
        assert!(replies.iter().all(|reply| reply.is_disposed));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown_signal() {
        let system = CatalogSystem::start(4);
        let (reader, _writer) = tokio::io::duplex(64);

        let handled = rpc::serve(
            system.catalog.clone(),
            tokio::io::BufReader::new(reader),
            tokio::io::sink(),
            async {},
        )
        .await
        .unwrap();
        assert_eq!(handled, 0);

        system.shutdown().await.unwrap();
    }
}
