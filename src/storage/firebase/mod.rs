mod auth;

use auth::ServiceAccountAuth;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::config::FirebaseConfig;
use crate::service::{ActivationRecord, StoredActivation};

use super::{ActivationStore, StorageError, ACTIVATION_ROOT};

/// Activation records in a Firebase Realtime Database, over its REST API.
pub struct FirebaseStore {
    client: Client,
    database_url: Url,
    auth: ServiceAccountAuth,
}

impl FirebaseStore {
    pub fn new(config: &FirebaseConfig, client: Client) -> Result<Self, StorageError> {
        info!("Initializing FirebaseStore at {}", config.database_url);
        let auth = ServiceAccountAuth::new(config.credentials.clone(), client.clone())?;

        Ok(Self {
            client,
            database_url: config.database_url.clone(),
            auth,
        })
    }
}

#[async_trait]
impl ActivationStore for FirebaseStore {
    async fn set(&self, user_id: &str, record: &ActivationRecord) -> Result<(), StorageError> {
        let url = record_url(&self.database_url, user_id)?;
        let token = self.auth.access_token().await?;

        debug!("PUT {}", url.path());
        let response = self
            .client
            .put(url)
            .query(&[("print", "silent")])
            .bearer_auth(token)
            .json(record)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<StoredActivation>, StorageError> {
        let url = record_url(&self.database_url, user_id)?;
        let token = self.auth.access_token().await?;

        debug!("GET {}", url.path());
        let response = self.client.get(url).bearer_auth(token).send().await?;
        let body = ensure_success(response).await?.text().await?;

        parse_record(&body)
    }
}

fn record_url(base: &Url, user_id: &str) -> Result<Url, StorageError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| StorageError::Url(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .push(ACTIVATION_ROOT)
        .push(&format!("{user_id}.json"));
    Ok(url)
}

fn parse_record(body: &str) -> Result<Option<StoredActivation>, StorageError> {
    match serde_json::from_str::<serde_json::Value>(body)? {
        serde_json::Value::Null => Ok(None),
        value => Ok(Some(StoredActivation::from_value(value))),
    }
}

async fn ensure_success(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StorageError::Status { status, body })
}
