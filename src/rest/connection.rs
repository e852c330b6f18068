/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{
    API_ENDPOINT, ApiParams, Creds, PhotosGetSizesResponse, PhotosSearchResponse, Request,
};
use bytes::Bytes;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

pub const PHOTOS_SEARCH: &str = "flickr.photos.search";
pub const PHOTOS_GET_SIZES: &str = "flickr.photos.getSizes";

/// Directly communicates with the API.
///
/// Holds the credentials and the HTTP client. The client is either provided up front or
/// created on first use and then reused by every call. A clone made after first use
/// shares the same connection pool.
#[derive(Clone)]
pub struct Connection {
    creds: Creds,
    endpoint: String,
    https_client: OnceLock<reqwest::Client>,
}

impl Connection {
    /// Creates a connection that will build its own client on first use
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            endpoint: API_ENDPOINT.into(),
            https_client: OnceLock::new(),
        }
    }

    /// Creates a connection using a preconfigured client (timeouts, proxies, etc.)
    pub fn with_http_client(creds: Creds, https_client: reqwest::Client) -> Self {
        Self {
            creds,
            endpoint: API_ENDPOINT.into(),
            https_client: OnceLock::from(https_client),
        }
    }

    /// Sends requests to another REST endpoint instead of [`API_ENDPOINT`]
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn creds(&self) -> &Creds {
        &self.creds
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn https_client(&self) -> &reqwest::Client {
        self.https_client.get_or_init(|| {
            debug!("Creating HTTP client");
            reqwest::Client::new()
        })
    }

    /// Performs the GET for the request and returns the raw body.
    ///
    /// The HTTP status is not checked, Flickr reports failures in the body.
    pub async fn execute(&self, request: &Request) -> Result<Bytes, FlickrError> {
        if request.api_key().is_empty() || request.method().is_empty() {
            return Err(FlickrError::InvalidRequest(
                "Need both API key and method".into(),
            ));
        }

        let req_url = request.url(&self.endpoint)?;
        debug!("Calling {}", request.method());
        let resp = self.https_client().get(req_url).send().await?;
        debug!("{} responded with {}", request.method(), resp.status());

        let body = resp.bytes().await?;
        trace!("{} body is {} bytes", request.method(), body.len());
        Ok(body)
    }

    /// Signs, executes and decodes a call to any API method.
    ///
    /// `T` is the shape of the `<rsp>` element for that method.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> Result<T, FlickrError> {
        let request = Request::new(&self.creds.api_key, method, params)
            .signed(&self.creds.api_secret);
        trace!("{} signed over {} arguments", method, params.len());
        let body = self.execute(&request).await?;
        Ok(quick_xml::de::from_reader(&body[..])?)
    }

    /// Searches photos. See `flickr.photos.search` for the accepted arguments.
    pub async fn photos_search(
        &self,
        params: &ApiParams<'_>,
    ) -> Result<PhotosSearchResponse, FlickrError> {
        self.call::<PhotosSearchResponse>(PHOTOS_SEARCH, params)
            .await?
            .checked()
    }

    /// Lists the available sizes for the photo given in `photo_id`
    pub async fn photos_get_sizes(
        &self,
        params: &ApiParams<'_>,
    ) -> Result<PhotosGetSizesResponse, FlickrError> {
        self.call::<PhotosGetSizesResponse>(PHOTOS_GET_SIZES, params)
            .await?
            .checked()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("creds", &self.creds)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
