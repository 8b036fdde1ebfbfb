//! # Mock Framework
//!
//! Utilities for testing store consumers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_update`] or [`expect_count`] to assert behavior
//! and answer each request with whatever outcome the test needs.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

pub type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test owns instead of a running `ResourceActor`,
/// so store failures (closed actor, rejected records) can be simulated deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindMany request
pub async fn expect_find_many<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Filter, usize, usize, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindMany { filter, skip, take, respond_to }) => Some((filter, skip, take, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindFirst request
pub async fn expect_find_first<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Filter, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindFirst { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Filter, T::Patch, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { filter, patch, respond_to }) => Some((filter, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Count request
pub async fn expect_count<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Filter, Responder<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Count { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateProduct, Product};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move {
            let payload = CreateProduct { name: "Keyboard".to_string(), price: 49.9 };
            client.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Keyboard");
        responder.send(Err(FrameworkError::Rejected("duplicate name".to_string()))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Err(FrameworkError::Rejected("duplicate name".to_string())));
    }
}
