//! HTTP client wrapper for voting backend communication.

use crate::config::BackendConfig;
use crate::format::Format;
use axum::http::{StatusCode, header};
use bytes::Bytes;
use eyre::{Result, bail};
use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Reasons an outbound call could not complete.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("encode error: {0}")]
    Encode(#[from] sonic_rs::Error),
}

/// A completed HTTP exchange with the backend, whatever its status.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// A wrapper around a pooled `reqwest::Client` bound to one backend base address.
///
/// The client is cheaply cloneable and safe to share across tasks.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    format: Format,
}

impl BackendClient {
    /// Builds a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Fails if the base address is not an absolute `http`/`https` URL or the
    /// underlying client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let url = Url::parse(&config.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("unsupported backend scheme: {}", url.scheme());
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').into(),
            format: Format::Json,
        })
    }

    /// Returns the base address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a backend path onto the base address, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends `payload` as the body of a `POST` to `path`.
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<BackendReply, BackendError> {
        let body = self.format.serialize(payload)?.into_owned();
        let request = self
            .http
            .post(self.endpoint(path))
            .header(header::CONTENT_TYPE, self.format.content_type())
            .body(body);
        Self::complete(request).await
    }

    /// Sends a `GET` to `path` with `query` URL-encoded as parameters.
    pub async fn get<Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<BackendReply, BackendError> {
        let request = self.http.get(self.endpoint(path)).query(query);
        Self::complete(request).await
    }

    async fn complete(request: reqwest::RequestBuilder) -> Result<BackendReply, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(BackendReply { status, body })
    }
}
