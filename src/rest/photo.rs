/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{from_flag, from_status};
use crate::rest::{ApiFailure, PhotoSizeSuffix, ResponseStatus};
use serde::Deserialize;

/// Expected response from a `flickr.photos.search` request.
///
/// A `stat="fail"` response still decodes; `photos` is then `None` and `failure` holds
/// the `<err>` element.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.search.html)
#[derive(Deserialize, Debug)]
pub struct PhotosSearchResponse {
    #[serde(rename = "@stat", deserialize_with = "from_status")]
    pub status: ResponseStatus,

    #[serde(default, rename = "photos")]
    pub photos: Option<Photos>,

    #[serde(default, rename = "err")]
    pub failure: Option<ApiFailure>,
}

impl PhotosSearchResponse {
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        self.failure.as_ref()
    }

    // An ok stat without a <photos> element is not a photos response
    pub(crate) fn checked(self) -> Result<Self, FlickrError> {
        if self.is_ok() && self.photos.is_none() {
            return Err(FlickrError::Decode(serde::de::Error::custom(
                "stat is ok but <photos> is missing",
            )));
        }
        Ok(self)
    }
}

/// One page of search results
#[derive(Deserialize, Debug)]
pub struct Photos {
    #[serde(rename = "@page")]
    pub page: u32,

    #[serde(rename = "@pages")]
    pub pages: u32,

    #[serde(rename = "@perpage")]
    pub per_page: u32,

    #[serde(rename = "@total")]
    pub total: u64,

    #[serde(default, rename = "photo")]
    pub photos: Vec<Photo>,
}

/// A single search hit.
///
/// `secret`, `server` and `farm` are what the static image URLs are built from.
#[derive(Deserialize, Debug, Clone)]
pub struct Photo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@owner")]
    pub owner: String,

    #[serde(rename = "@secret")]
    pub secret: String,

    #[serde(rename = "@server")]
    pub server: u32,

    #[serde(rename = "@farm")]
    pub farm: u32,

    #[serde(default, rename = "@title")]
    pub title: String,

    #[serde(rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(rename = "@isfriend", deserialize_with = "from_flag")]
    pub is_friend: bool,

    #[serde(rename = "@isfamily", deserialize_with = "from_flag")]
    pub is_family: bool,
}

impl Photo {
    /// Direct jpg url for the requested size
    pub fn source_url(&self, size: PhotoSizeSuffix) -> String {
        match size.suffix() {
            Some(suffix) => format!(
                "https://farm{}.staticflickr.com/{}/{}_{}_{}.jpg",
                self.farm, self.server, self.id, self.secret, suffix
            ),
            None => format!(
                "https://farm{}.staticflickr.com/{}/{}_{}.jpg",
                self.farm, self.server, self.id, self.secret
            ),
        }
    }

    /// Url of the photo's page on flickr.com
    pub fn page_url(&self) -> String {
        format!("https://www.flickr.com/photos/{}/{}", self.owner, self.id)
    }
}
