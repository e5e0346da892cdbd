mod code;
mod model;

pub use code::{generate_activation_code, ACTIVATION_CODE_LEN};
pub use model::{ActivationRecord, Plan, StoredActivation, UnknownPlan};

use std::sync::Arc;

use crate::storage::{ActivationStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    MissingPlan,
    InvalidPlan(String),
    Issued(ActivationRecord),
}

/// A code found for a user. The plan stays a raw string since the store may hold
/// records written by other tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    pub code: String,
    pub plan: Option<String>,
}

#[derive(Clone)]
pub struct ActivationService {
    store: Arc<dyn ActivationStore>,
}

impl ActivationService {
    pub fn new(store: Arc<dyn ActivationStore>) -> Self {
        Self { store }
    }

    /// Issues a fresh code for `user_id` from the `/confirm` arguments. Payment is
    /// taken on trust. Only the first argument is considered.
    pub async fn confirm(&self, user_id: &str, args: &str) -> Result<ConfirmOutcome, StorageError> {
        let Some(raw_plan) = args.split_whitespace().next() else {
            return Ok(ConfirmOutcome::MissingPlan);
        };

        let plan = match raw_plan.parse::<Plan>() {
            Ok(plan) => plan,
            Err(UnknownPlan(raw)) => return Ok(ConfirmOutcome::InvalidPlan(raw)),
        };

        let record = ActivationRecord {
            code: generate_activation_code(),
            plan,
        };

        self.store.set(user_id, &record).await?;
        info!("Issued activation code for user {} on plan {}", user_id, plan);

        Ok(ConfirmOutcome::Issued(record))
    }

    pub async fn lookup(&self, user_id: &str) -> Result<Option<IssuedCode>, StorageError> {
        let stored = self.store.get(user_id).await?;

        Ok(stored.and_then(|stored| {
            stored.code.map(|code| IssuedCode {
                code,
                plan: stored.plan,
            })
        }))
    }
}
