/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{from_flag, from_status};
use crate::rest::{ApiFailure, ResponseStatus};
use serde::Deserialize;

/// Expected response from a `flickr.photos.getSizes` request.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getSizes.html)
#[derive(Deserialize, Debug)]
pub struct PhotosGetSizesResponse {
    #[serde(rename = "@stat", deserialize_with = "from_status")]
    pub status: ResponseStatus,

    #[serde(default, rename = "sizes")]
    pub sizes: Option<Sizes>,

    #[serde(default, rename = "err")]
    pub failure: Option<ApiFailure>,
}

impl PhotosGetSizesResponse {
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        self.failure.as_ref()
    }

    // An ok stat without a <sizes> element is not a sizes response
    pub(crate) fn checked(self) -> Result<Self, FlickrError> {
        if self.is_ok() && self.sizes.is_none() {
            return Err(FlickrError::Decode(serde::de::Error::custom(
                "stat is ok but <sizes> is missing",
            )));
        }
        Ok(self)
    }
}

/// Available sizes of a photo along with what the owner allows
#[derive(Deserialize, Debug)]
pub struct Sizes {
    #[serde(rename = "@canblog", deserialize_with = "from_flag")]
    pub can_blog: bool,

    #[serde(rename = "@canprint", deserialize_with = "from_flag")]
    pub can_print: bool,

    #[serde(rename = "@candownload", deserialize_with = "from_flag")]
    pub can_download: bool,

    #[serde(default, rename = "size")]
    pub sizes: Vec<Size>,
}

impl Sizes {
    /// Size with the most pixels
    pub fn largest(&self) -> Option<&Size> {
        self.sizes
            .iter()
            .max_by_key(|s| u64::from(s.width) * u64::from(s.height))
    }

    /// Looks up a size by its label, e.g. "Medium 640"
    pub fn by_label(&self, label: &str) -> Option<&Size> {
        self.sizes.iter().find(|s| s.label == label)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Size {
    #[serde(rename = "@label")]
    pub label: String,

    #[serde(rename = "@width")]
    pub width: u32,

    #[serde(rename = "@height")]
    pub height: u32,

    /// Direct url of the image file
    #[serde(rename = "@source")]
    pub source: String,

    /// Url of the web page showing this size
    #[serde(rename = "@url")]
    pub url: String,

    #[serde(rename = "@media")]
    pub media: String,
}
