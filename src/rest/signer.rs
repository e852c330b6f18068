/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Flickr request signing.
//!
//! The signature is the lowercase hex MD5 digest of the API secret followed by every
//! `name` + `value` pair of the request, sorted by name. `api_key` and `method` are part
//! of the signed set. Pairs with an empty value are left out of the digest even though
//! they are still sent.
//!
//! See [Flickr Auth Docs](https://www.flickr.com/services/api/auth.howto.web.html)
use std::collections::BTreeMap;

pub const API_SIG: &str = "api_sig";
pub const API_KEY: &str = "api_key";
pub const METHOD: &str = "method";

/// Computes the `api_sig` value for the provided parameters.
///
/// Any `api_sig` already in `params` is ignored, and `api_key`/`method` entries are
/// replaced by the provided values. `params` itself is left untouched.
pub fn sign(params: &BTreeMap<String, String>, method: &str, api_key: &str, secret: &str) -> String {
    let digest = md5::compute(canonical_string(params, method, api_key, secret));
    format!("{:x}", digest)
}

// Builds the string that gets hashed. BTreeMap keeps names in byte-wise order.
fn canonical_string(
    params: &BTreeMap<String, String>,
    method: &str,
    api_key: &str,
    secret: &str,
) -> String {
    let mut signed: BTreeMap<&str, &str> = params
        .iter()
        .filter(|(name, _)| name.as_str() != API_SIG)
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    signed.insert(API_KEY, api_key);
    signed.insert(METHOD, method);

    signed
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .fold(String::from(secret), |mut s, (name, value)| {
            s.push_str(name);
            s.push_str(value);
            s
        })
}
