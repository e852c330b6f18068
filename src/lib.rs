/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This Flickr library was created for working with the Flickr REST API.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Photo search (`flickr.photos.search`)
//! - Photo sizes and source URLs (`flickr.photos.getSizes`)
//! - Request signing (`api_sig`)
//! - Lower level interface for handling the raw communication
//!
//! *Flickr signs requests with an MD5 digest of the sorted parameters prefixed by the
//! API secret. This library handles the request signing. Getting OAuth tokens for
//! user authenticated calls is left up to the consumer of this library*
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`rest::Connection::call`] and [`rest::Connection::execute`] methods are a way to
//! make request/responses in a more direct way*
//!
//! *A response with `stat="fail"` is not turned into an error. Check
//! `is_ok()`/`failure()` on the returned response.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr::rest::{Connection, Creds, PhotoSizeSuffix};
//!
//! async fn print_cat_photos(api_key: &str, api_secret: &str) -> anyhow::Result<()> {
//!     let connection = Connection::new(Creds::new(api_key, api_secret));
//!
//!     let results = connection
//!         .photos_search(&[("tags", "cat"), ("per_page", "10")])
//!         .await?;
//!     if let Some(failure) = results.failure() {
//!         anyhow::bail!("search failed: {} {}", failure.code, failure.message);
//!     }
//!
//!     for photo in results.photos.iter().flat_map(|p| p.photos.iter()) {
//!         println!("{}: {}", photo.title, photo.source_url(PhotoSizeSuffix::Medium));
//!
//!         let sizes = connection
//!             .photos_get_sizes(&[("photo_id", photo.id.as_str())])
//!             .await?;
//!         if let Some(largest) = sizes.sizes.as_ref().and_then(|s| s.largest()) {
//!             println!("    largest: {}x{} {}", largest.width, largest.height, largest.source);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;
