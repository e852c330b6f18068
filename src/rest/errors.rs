/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request network error")]
    Transport(#[from] reqwest::Error),

    #[error("Response could not be decoded: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}
