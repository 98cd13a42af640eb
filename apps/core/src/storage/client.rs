//! HTTP client for the key-value service.
//!
//! The wrapper the UI shell uses to reach the persistence collaborator.
//! The brain and puzzle components never touch this; retries and network
//! failure policy belong to the shell, not here.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::{EmergencyContact, EmergencySettings};

/// Client for the key-value HTTP service.
#[derive(Debug, Clone)]
pub struct KvClient {
    base_url: String,
    http: reqwest::Client,
}

impl KvClient {
    /// Create a client pointed at a server base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Check that the service is reachable.
    pub async fn health(&self) -> Result<(), AppError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "Health check failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Store any JSON value under a key.
    pub async fn set(&self, key: &str, value: &Value) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/kv/set", self.base_url))
            .json(&json!({ "key": key, "value": value }))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Get the value under a key. `None` when the key is absent.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let response = self
            .http
            .get(format!("{}/kv/get/{}", self.base_url, key))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload: Value = Self::ensure_success(response).await?.json().await?;
        Ok(Some(payload["value"].clone()))
    }

    /// Get multiple keys at once. Absent keys are missing from the map.
    pub async fn get_multiple(&self, keys: &[String]) -> Result<HashMap<String, Value>, AppError> {
        let response = self
            .http
            .post(format!("{}/kv/get-multiple", self.base_url))
            .json(&json!({ "keys": keys }))
            .send()
            .await?;
        let payload: Value = Self::ensure_success(response).await?.json().await?;
        Ok(serde_json::from_value(payload["results"].clone())?)
    }

    /// Get all keys with a prefix (useful for user-scoped data).
    pub async fn get_by_prefix(&self, prefix: &str) -> Result<HashMap<String, Value>, AppError> {
        let response = self
            .http
            .get(format!("{}/kv/prefix/{}", self.base_url, prefix))
            .send()
            .await?;
        let payload: Value = Self::ensure_success(response).await?.json().await?;
        Ok(serde_json::from_value(payload["results"].clone())?)
    }

    /// Save an emergency contact for a user; returns the stored contact with
    /// its server-assigned id and timestamp.
    pub async fn save_emergency_contact(
        &self,
        user_id: &str,
        contact: &EmergencyContact,
    ) -> Result<EmergencyContact, AppError> {
        let response = self
            .http
            .post(format!("{}/emergency-contacts", self.base_url))
            .json(&json!({ "user_id": user_id, "contact": contact }))
            .send()
            .await?;
        let payload: Value = Self::ensure_success(response).await?.json().await?;
        Ok(serde_json::from_value(payload["contact"].clone())?)
    }

    /// Get a user's emergency contacts.
    pub async fn get_emergency_contacts(
        &self,
        user_id: &str,
    ) -> Result<Vec<EmergencyContact>, AppError> {
        let response = self
            .http
            .get(format!("{}/emergency-contacts/{}", self.base_url, user_id))
            .send()
            .await?;
        let payload: Value = Self::ensure_success(response).await?.json().await?;
        Ok(serde_json::from_value(payload["contacts"].clone())?)
    }

    /// Save a user's emergency settings.
    pub async fn save_emergency_settings(
        &self,
        user_id: &str,
        settings: &EmergencySettings,
    ) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/emergency-settings", self.base_url))
            .json(&json!({ "user_id": user_id, "settings": settings }))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Internal(format!(
            "API error ({}): {}",
            status, body
        )))
    }
}
