use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Filters)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifiers are ordered; the store hands records back in ascending id order.
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Filter: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    /// Whether this record satisfies a query filter
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
}

/// Closed set of outcomes a store request can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    /// A conditional update matched zero records.
    #[error("No record matched the update filter")]
    RecordNotFound,
    /// An entity hook refused the data.
    #[error("Record rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    FindMany {
        filter: T::Filter,
        skip: usize,
        take: usize,
        respond_to: Response<Vec<T>>,
    },
    FindFirst {
        filter: T::Filter,
        respond_to: Response<Option<T>>,
    },
    Update {
        filter: T::Filter,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Count {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Serves requests until every client handle has been dropped.
    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Record store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::FindMany { filter, skip, take, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_find_many(&filter, skip, take)));
                }
                ResourceRequest::FindFirst { filter, respond_to } => {
                    let item = self.store.values().find(|item| item.matches(&filter)).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { filter, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(&filter, patch));
                }
                ResourceRequest::Count { filter, respond_to } => {
                    let count = self.store.values().filter(|item| item.matches(&filter)).count();
                    let _ = respond_to.send(Ok(count));
                }
            }
        }
        info!(records = self.store.len(), "Record store stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(id.clone(), item.clone());
        debug!(id = %id, "Record created");
        Ok(item)
    }

    fn handle_find_many(&self, filter: &T::Filter, skip: usize, take: usize) -> Vec<T> {
        self.store
            .values()
            .filter(|item| item.matches(filter))
            .skip(skip)
            .take(take)
            .cloned()
            .collect()
    }

    fn handle_update(&mut self, filter: &T::Filter, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(current) = self.store.values_mut().find(|item| item.matches(filter)) else {
            debug!(?filter, "Update matched no record");
            return Err(FrameworkError::RecordNotFound);
        };

        // Patch a copy so a rejected patch leaves the stored record as it was.
        let mut updated = current.clone();
        if let Err(reason) = updated.on_update(patch) {
            warn!(id = %current.id(), %reason, "Update rejected");
            return Err(FrameworkError::Rejected(reason));
        }
        *current = updated.clone();
        debug!(id = %updated.id(), "Record updated");
        Ok(updated)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn find_many(&self, filter: T::Filter, skip: usize, take: usize) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindMany { filter, skip, take, respond_to }).await
    }

    pub async fn find_first(&self, filter: T::Filter) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindFirst { filter, respond_to }).await
    }

    pub async fn update(&self, filter: T::Filter, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { filter, patch, respond_to }).await
    }

    pub async fn count(&self, filter: T::Filter) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Count { filter, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
