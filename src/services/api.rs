use crate::domain::models::{Explanation, Prediction, RandomUser, Reason, UserStats};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("undecodable response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed payload from {path}: {detail}")]
    Payload { path: String, detail: String },
}

/// Blocking client for the four prediction-service endpoints. No retries,
/// no caching; every call is a fresh round trip.
pub struct ApiClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        resp.json().map_err(|source| {
            // A timeout while reading the body is a transport failure, not
            // a decode failure.
            if source.is_timeout() {
                ApiError::Transport {
                    path: path.to_string(),
                    source,
                }
            } else {
                ApiError::Decode {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }

    pub fn prediction(&self, user_id: &str) -> Result<Prediction, ApiError> {
        self.get_json(&format!("/predict/{}", user_id))
    }

    pub fn explanation(&self, user_id: &str) -> Result<Vec<Reason>, ApiError> {
        let exp: Explanation = self.get_json(&format!("/explain/{}", user_id))?;
        Ok(exp.reasons)
    }

    pub fn user_stats(&self, user_id: &str) -> Result<UserStats, ApiError> {
        self.get_json(&format!("/user-stats/{}", user_id))
    }

    /// Ids are opaque strings everywhere downstream; a numeric id from the
    /// service is stringified before reuse as a path segment.
    pub fn random_user_id(&self) -> Result<String, ApiError> {
        let path = "/users/random";
        let payload: RandomUser = self.get_json(path)?;
        match payload.user_id {
            serde_json::Value::String(id) => Ok(id),
            serde_json::Value::Number(id) => Ok(id.to_string()),
            other => Err(ApiError::Payload {
                path: path.to_string(),
                detail: format!("user_id is neither string nor number: {}", other),
            }),
        }
    }
}
