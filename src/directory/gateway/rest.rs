//! `reqwest`-backed implementation of [`UserDirectory`].

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::UserDirectory;
use super::error_mapping::{map_decode_error, map_http_error, map_transport_error};
use super::http_utils::extract_directory_message;
use crate::directory::error::DirectoryError;
use crate::directory::locator::{ApiToken, DirectoryLocator};
use crate::directory::models::{
    AccessKind, ApiBlockList, ApiEntry, ApiWorker, BlockList, BlockListEntry, BlockListId,
    DeletedEntry, EntryDraft, EntryId, Worker,
};

/// Body sent when creating the requester's block list.
#[derive(Debug, Serialize)]
struct BlockListDraft {
    #[serde(rename = "type")]
    kind: AccessKind,
    is_global: bool,
}

const BLOCK_LIST_DRAFT: BlockListDraft = BlockListDraft {
    kind: AccessKind::Deny,
    is_global: true,
};

/// Directory gateway speaking the platform's REST API.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    locator: DirectoryLocator,
}

impl HttpUserDirectory {
    /// Creates a gateway from a preconfigured client.
    #[must_use]
    pub const fn new(client: Client, locator: DirectoryLocator) -> Self {
        Self { client, locator }
    }

    /// Builds an authenticated client for the given token.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Configuration` when the token is not a valid
    /// header value or the HTTP client cannot be constructed.
    pub fn for_token(
        token: &ApiToken,
        locator: DirectoryLocator,
        timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.value()))
            .map_err(|error| DirectoryError::Configuration {
                message: format!("API token is not a valid header value: {error}"),
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|error| DirectoryError::Configuration {
                message: format!("failed to configure directory HTTP client: {error}"),
            })?;
        Ok(Self::new(client, locator))
    }

    /// Locator used to derive endpoints.
    #[must_use]
    pub const fn locator(&self) -> &DirectoryLocator {
        &self.locator
    }

    async fn send(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<Response, DirectoryError> {
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        tracing::debug!(operation, %status, "directory responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = map_http_error(operation, status, extract_directory_message(&body));
        tracing::debug!(operation, %status, "directory request failed: {error}");
        Err(error)
    }

    async fn read_json(operation: &str, response: Response) -> Result<Value, DirectoryError> {
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|error| map_decode_error(operation, &error))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, DirectoryError> {
        let response = self.send(operation, request).await?;
        let value = Self::read_json(operation, response).await?;
        serde_json::from_value(value).map_err(|error| map_decode_error(operation, &error))
    }
}

/// Interprets a group payload, treating `null` and id-less objects as absent.
fn block_list_from_value(
    operation: &str,
    value: Value,
) -> Result<Option<BlockList>, DirectoryError> {
    let has_id = value.get("id").is_some_and(|id| !id.is_null());
    if !has_id {
        return Ok(None);
    }

    serde_json::from_value::<ApiBlockList>(value)
        .map(|list| Some(list.into()))
        .map_err(|error| map_decode_error(operation, &error))
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn search_workers(&self, query: &str) -> Result<Vec<Worker>, DirectoryError> {
        let url = self.locator.worker_search_url(query)?;
        tracing::debug!(%url, "searching workers");
        let workers: Vec<ApiWorker> = self
            .fetch("search workers", self.client.get(url))
            .await?;
        Ok(workers.into_iter().map(Worker::from).collect())
    }

    async fn create_block_list(&self) -> Result<BlockList, DirectoryError> {
        const OPERATION: &str = "create block list";
        let url = self.locator.access_groups_url()?;
        tracing::debug!(%url, "creating block list");

        let response = self
            .send(OPERATION, self.client.post(url).json(&BLOCK_LIST_DRAFT))
            .await?;
        let value = Self::read_json(OPERATION, response).await?;
        if let Some(created) = block_list_from_value(OPERATION, value)? {
            return Ok(created);
        }

        // The directory acknowledges creation without returning the group.
        self.retrieve_block_list()
            .await?
            .ok_or_else(|| DirectoryError::Api {
                message: "create block list succeeded but no block list was returned".to_owned(),
            })
    }

    async fn retrieve_block_list(&self) -> Result<Option<BlockList>, DirectoryError> {
        const OPERATION: &str = "retrieve block list";
        let url = self.locator.global_group_url(AccessKind::Deny)?;
        tracing::debug!(%url, "retrieving block list");

        let response = self.send(OPERATION, self.client.get(url)).await?;
        let value = Self::read_json(OPERATION, response).await?;
        block_list_from_value(OPERATION, value)
    }

    async fn list_entries(
        &self,
        block_list: &BlockListId,
    ) -> Result<Vec<BlockListEntry>, DirectoryError> {
        let url = self.locator.entries_by_group_url(block_list)?;
        tracing::debug!(%url, "listing block list entries");
        let entries: Vec<ApiEntry> = self
            .fetch("list entries", self.client.get(url))
            .await?;
        Ok(entries.into_iter().map(BlockListEntry::from).collect())
    }

    async fn create_entry(&self, draft: &EntryDraft) -> Result<BlockListEntry, DirectoryError> {
        let url = self.locator.entries_url()?;
        tracing::debug!(%url, group = %draft.group, worker = %draft.worker, "creating entry");
        let entry: ApiEntry = self
            .fetch("create entry", self.client.post(url).json(draft))
            .await?;
        Ok(entry.into())
    }

    async fn delete_entry(&self, entry: &EntryId) -> Result<DeletedEntry, DirectoryError> {
        const OPERATION: &str = "delete entry";
        let url = self.locator.entry_url(entry)?;
        tracing::debug!(%url, "deleting entry");

        let response = self.send(OPERATION, self.client.delete(url)).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(DeletedEntry { pk: entry.clone() });
        }
        let value = Self::read_json(OPERATION, response).await?;
        serde_json::from_value(value).map_err(|error| map_decode_error(OPERATION, &error))
    }
}
