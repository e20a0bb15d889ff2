//! # Core Actor Framework
//!
//! This module defines the generic building blocks every shared piece of kitchen
//! state is built on.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that every actor-owned state type implements.
//! - [`ResourceActor`]: The generic actor that owns one entity and serves its requests.
//! - [`ResourceClient`]: The generic, cloneable client for talking to an actor.
//! - [`FrameworkError`]: Transport failures (actor gone, reply dropped).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state owned by a [`ResourceActor`] must implement.
///
/// # Architecture Note
/// The entity is the only place the state lives. The actor hands it one request at
/// a time, so the entity never needs a `Mutex`: mutual exclusion comes from the
/// sequential message loop.
///
/// Requests carry their own reply channel ([`Response`]). An entity is free to
/// answer immediately or to park the reply and answer later. Parking is how a
/// resource pool makes an acquirer wait without blocking the whole actor.
#[async_trait]
pub trait ActorEntity: Send + 'static {
    /// The message enum this entity understands.
    type Request: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Short human-readable name used as the `actor` field in logs.
    fn label(&self) -> String;

    /// Called once before the first request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) {}

    /// Handle a single request.
    async fn handle(&mut self, request: Self::Request, ctx: &Self::Context);

    /// Called once after every client has been dropped.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one entity.
///
/// This struct is the "Server" half of the actor. It owns the entity and the
/// receiver end of the channel, and runs until every [`ResourceClient`] is gone.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<T::Request>,
    entity: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` around `entity` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(entity: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let actor = self.entity.label();
        self.entity.on_start(&context).await;
        info!(%actor, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            debug!(%actor, ?request, "Request");
            self.entity.handle(request, &context).await;
        }

        self.entity.on_stop(&context).await;
        info!(%actor, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap. Every order task gets its own clone.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<T::Request>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<T::Request>) -> Self {
        Self { sender }
    }

    /// Sends a request built around a fresh reply channel and waits for the answer.
    ///
    /// The wait lasts as long as the entity keeps the reply parked.
    pub async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> T::Request,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("counter would go negative")]
    struct Underflow;

    struct Counter {
        value: i64,
    }

    #[derive(Debug)]
    enum CounterRequest {
        Add {
            delta: i64,
            respond_to: Response<i64>,
        },
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Request = CounterRequest;
        type Context = ();

        fn label(&self) -> String {
            "counter".to_string()
        }

        async fn handle(&mut self, request: CounterRequest, _ctx: &()) {
            match request {
                CounterRequest::Add { delta, respond_to } => {
                    if self.value + delta < 0 {
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(Underflow))));
                        return;
                    }
                    self.value += delta;
                    let _ = respond_to.send(Ok(self.value));
                }
            }
        }
    }

    #[tokio::test]
    async fn test_requests_are_served_in_order() {
        let (actor, client) = ResourceActor::new(Counter { value: 0 }, 4);
        tokio::spawn(actor.run(()));

        let first = client
            .request(|respond_to| CounterRequest::Add { delta: 3, respond_to })
            .await
            .unwrap();
        let second = client
            .request(|respond_to| CounterRequest::Add { delta: 4, respond_to })
            .await
            .unwrap();
        assert_eq!((first, second), (3, 7));

        let err = client
            .request(|respond_to| CounterRequest::Add { delta: -10, respond_to })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
    }

    #[tokio::test]
    async fn test_request_to_stopped_actor_fails() {
        let (actor, client) = ResourceActor::new(Counter { value: 0 }, 4);
        drop(actor);

        let err = client
            .request(|respond_to| CounterRequest::Add { delta: 1, respond_to })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn test_run_returns_when_clients_drop() {
        let (actor, client) = ResourceActor::new(Counter { value: 0 }, 4);
        let handle = tokio::spawn(actor.run(()));
        drop(client);
        handle.await.unwrap();
    }
}
