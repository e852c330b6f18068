/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::signer::{self, API_KEY, API_SIG, METHOD};
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use std::collections::BTreeMap;

// Root Flickr REST endpoint
pub const API_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

/// This can be search filters as well as other parameters the specific API method expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// API key and shared secret issued by Flickr.
///
/// The secret is never sent, it is only used to sign requests.
#[derive(Default, Clone)]
pub struct Creds {
    pub(crate) api_key: String,
    pub(crate) api_secret: String,
}

impl Creds {
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("api_secret", &"xxx")
            .finish()
    }
}

/// A single call to a Flickr API method.
///
/// `api_key` and `method` are kept apart from the method arguments and only merged in
/// when signing and when the URL is built.
#[derive(Debug, Clone)]
pub struct Request {
    api_key: String,
    method: String,
    params: BTreeMap<String, String>,
}

impl Request {
    pub fn new(api_key: &str, method: &str, params: &ApiParams<'_>) -> Self {
        Self {
            api_key: api_key.into(),
            method: method.into(),
            params: params
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The method arguments, including `api_sig` once signed
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// The `api_sig` value if this request has been signed
    pub fn signature(&self) -> Option<&str> {
        self.params.get(API_SIG).map(String::as_str)
    }

    /// Returns this request with `api_sig` set for the current arguments.
    ///
    /// Signing an already signed request replaces the old signature.
    pub fn signed(mut self, secret: &str) -> Self {
        let sig = signer::sign(&self.params, &self.method, &self.api_key, secret);
        self.params.insert(API_SIG.into(), sig);
        self
    }

    /// Every pair that goes on the wire. Caller supplied `api_key`/`method` arguments
    /// are replaced by the request's own values.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .filter(|(name, _)| name.as_str() != API_KEY && name.as_str() != METHOD)
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .chain([
                (API_KEY, self.api_key.as_str()),
                (METHOD, self.method.as_str()),
            ])
            .collect()
    }

    /// Full GET url for this request against the provided endpoint
    pub fn url(&self, endpoint: &str) -> Result<url::Url, FlickrError> {
        Ok(url::Url::parse_with_params(endpoint, self.query_pairs())?)
    }
}

/// Common error codes per the Flickr API site.
///
/// Codes below 95 are method specific and are not listed here.
#[derive(Debug, PartialEq, Eq, Clone, Copy, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// The `<err>` element of a `stat="fail"` response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiFailure {
    #[serde(rename = "@code")]
    pub code: u32,

    #[serde(default, rename = "@msg")]
    pub message: String,
}

impl ApiFailure {
    /// Maps the code onto one of the common error codes, `None` for method specific codes
    pub fn error_code(&self) -> Option<ApiErrorCodes> {
        ApiErrorCodes::try_from(self.code).ok()
    }
}
