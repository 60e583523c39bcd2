/*!
 * Hosted record service.
 *
 * Trait seam for the remote translation-history table plus a PostgREST-style
 * client (the hosted deployment exposes a `translations` table through a
 * `rest/v1` endpoint with apikey authentication).
 */

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::history::models::TranslationRecord;

/// Hosted datastore keyed by user id with server-side creation ordering
#[async_trait]
pub trait RemoteRecordService: Send + Sync {
    /// Insert one record
    async fn insert(&self, record: &TranslationRecord) -> Result<(), StoreError>;

    /// Query a user's records, newest first, capped at `limit`
    async fn query(&self, user_id: &str, limit: usize)
    -> Result<Vec<TranslationRecord>, StoreError>;
}

/// Wire shape of the hosted table's rows
#[derive(Debug, Serialize, Deserialize)]
struct WireRecord {
    user_id: String,
    original_text: String,
    translated_text: String,
    from_language: String,
    to_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_data: Option<String>,
    created_at: String,
}

impl WireRecord {
    fn from_record(record: &TranslationRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            original_text: record.original_text.clone(),
            translated_text: record.translated_text.clone(),
            from_language: record.source_language.clone(),
            to_language: record.target_language.clone(),
            image_data: record.image_data.clone(),
            created_at: record.created_at.clone(),
        }
    }

    fn into_record(self) -> TranslationRecord {
        TranslationRecord {
            // The hosted table keeps its own primary key; give the row a
            // fresh client-side handle
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            original_text: self.original_text,
            translated_text: self.translated_text,
            source_language: self.from_language,
            target_language: self.to_language,
            image_data: self.image_data,
            created_at: self.created_at,
        }
    }
}

/// PostgREST-style client for the hosted record table
pub struct RestRecordService {
    /// HTTP client for API requests
    client: Client,
    /// Project base URL
    base_url: Url,
    /// Public API key
    api_key: String,
    /// Table name
    table: String,
}

impl RestRecordService {
    /// Create a new client for the given project URL, key, and table
    pub fn new(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| StoreError::RequestFailed(format!("Invalid store URL: {}", e)))?;

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url,
            api_key: api_key.into(),
            table: table.into(),
        })
    }

    /// Build the REST URL for the record table
    fn table_url(&self) -> Result<Url, StoreError> {
        self.base_url
            .join(&format!("rest/v1/{}", self.table))
            .map_err(|e| StoreError::RequestFailed(format!("Invalid table URL: {}", e)))
    }
}

#[async_trait]
impl RemoteRecordService for RestRecordService {
    async fn insert(&self, record: &TranslationRecord) -> Result<(), StoreError> {
        let url = self.table_url()?;
        let payload = vec![WireRecord::from_record(record)];

        debug!("Inserting history record for user {}", record.user_id);

        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(format!("Insert request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Record store insert error ({}): {}", status, error_text);
            return Err(StoreError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        Ok(())
    }

    async fn query(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<TranslationRecord>, StoreError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("user_id", &format!("eq.{}", user_id))
            .append_pair("order", "created_at.desc")
            .append_pair("limit", &limit.to_string());

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(format!("Query request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Record store query error ({}): {}", status, error_text);
            return Err(StoreError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let rows = response
            .json::<Vec<WireRecord>>()
            .await
            .map_err(|e| StoreError::ParseError(format!("Invalid store response: {}", e)))?;

        Ok(rows.into_iter().map(WireRecord::into_record).collect())
    }
}
