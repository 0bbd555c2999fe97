//! Secret provider port and dynamic-dispatch wrapper.
//!
//! Follows the blanket-impl pattern:
//! 1. `SecretProvider` uses native async fn in traits (not object safe)
//! 2. `SecretProviderDyn` is the object-safe mirror with boxed futures
//! 3. A blanket impl bridges every `SecretProvider` to `SecretProviderDyn`

pub mod service;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use medchat_types::error::SecretError;

/// Trait for read-only secret sources (environment, secrets file).
pub trait SecretProvider: Send + Sync {
    /// Short source name shown in diagnostics (e.g., "env").
    fn name(&self) -> &str;

    /// Retrieve a secret value by key. `None` if this source does not have it.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, SecretError>> + Send;
}

/// Object-safe version of [`SecretProvider`] with boxed futures.
pub trait SecretProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>>;
}

impl<T: SecretProvider> SecretProviderDyn for T {
    fn name(&self) -> &str {
        SecretProvider::name(self)
    }

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }
}

/// Shared, type-erased secret provider used in resolution chains.
pub type DynSecretProvider = Arc<dyn SecretProviderDyn>;
