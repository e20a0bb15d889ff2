use crate::framework::{ActorEntity, FrameworkError, ResourceClient, Response};
use async_trait::async_trait;

/// Trait for actor-specific clients to share the request/reply plumbing.
///
/// Implementors only say where their generic client lives and how transport failures
/// map onto their own error type; [`ActorClient::call`] does the rest.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The actor-specific error type.
    type Error: From<String> + Send;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send a request and wait for its reply.
    async fn call<R, F>(&self, build: F) -> Result<R, Self::Error>
    where
        R: Send + 'static,
        F: FnOnce(Response<R>) -> T::Request + Send + 'static,
    {
        self.inner().request(build).await.map_err(Self::map_error)
    }
}

/// Recovers a typed entity error from a [`FrameworkError`], falling back to a message.
pub fn downcast_entity_error<E>(e: FrameworkError) -> E
where
    E: std::error::Error + From<String> + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(typed) => *typed,
            Err(other) => E::from(other.to_string()),
        },
        other => E::from(other.to_string()),
    }
}
