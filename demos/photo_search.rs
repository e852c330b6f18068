/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::{Result, bail};
use dotenvy::dotenv;
use flickr::rest::{Connection, Creds, Photo, PhotoSizeSuffix};
use std::time::Duration;

// Searches for the given text and returns the first page of hits.
async fn search(connection: &Connection, text: &str) -> Result<Vec<Photo>> {
    let results = connection
        .photos_search(&[("text", text), ("per_page", "5"), ("safe_search", "1")])
        .await?;

    // Flickr reports failures in the body so this has to be checked here.
    if let Some(failure) = results.failure() {
        bail!("Search failed with code {}: {}", failure.code, failure.message);
    }

    let Some(photos) = results.photos else {
        bail!("Search returned no photos element");
    };
    println!(
        "Page {} of {} ({} photos in total)",
        photos.page, photos.pages, photos.total
    );
    Ok(photos.photos)
}

// Lists the sizes that can be fetched for a photo.
async fn print_sizes(connection: &Connection, photo: &Photo) -> Result<()> {
    let resp = connection
        .photos_get_sizes(&[("photo_id", photo.id.as_str())])
        .await?;
    if let Some(failure) = resp.failure() {
        bail!("getSizes failed with code {}: {}", failure.code, failure.message);
    }

    if let Some(sizes) = resp.sizes {
        println!("  downloadable: {}", sizes.can_download);
        for size in &sizes.sizes {
            println!("  {:<12} {:>5}x{:<5} {}", size.label, size.width, size.height, size.source);
        }
    }
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The API key/secret is obtained from your Flickr account (App Garden).
    let creds = Creds::new(
        &std::env::var("FLICKR_API_KEY")?,
        &std::env::var("FLICKR_API_SECRET")?,
    );
    let text = std::env::args().nth(1).unwrap_or_else(|| "lighthouse".into());

    // Timeouts are the caller's job, so provide a configured client.
    let https_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let connection = Connection::with_http_client(creds, https_client);

    let photos = search(&connection, &text).await?;
    for photo in &photos {
        println!("{} by {}: {}", photo.title, photo.owner, photo.page_url());
        println!("  {}", photo.source_url(PhotoSizeSuffix::Medium));
    }

    if let Some(first) = photos.first() {
        println!("Sizes for {}:", first.id);
        print_sizes(&connection, first).await?;
    }
    Ok(())
}
