mod error;
mod firebase;
#[cfg(test)]
mod memory;

pub use error::StorageError;
pub use firebase::FirebaseStore;
#[cfg(test)]
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::service::{ActivationRecord, StoredActivation};

/// Root path all activation records live under.
pub const ACTIVATION_ROOT: &str = "activation_codes";

/// Key-value view over `user_id -> activation record`. Writes overwrite, reads return
/// `None` when nothing is stored under the key.
#[async_trait]
pub trait ActivationStore: Send + Sync + 'static {
    async fn set(&self, user_id: &str, record: &ActivationRecord) -> Result<(), StorageError>;
    async fn get(&self, user_id: &str) -> Result<Option<StoredActivation>, StorageError>;
}
