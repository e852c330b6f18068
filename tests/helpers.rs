/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use axum::Router;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::routing::get;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) type CapturedQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Local stand-in for the REST endpoint that always answers with the same body
#[allow(dead_code)]
pub(crate) struct MockFlickr {
    pub endpoint: String,
    pub queries: CapturedQueries,
}

#[allow(dead_code)]
pub(crate) async fn mock_flickr(status: StatusCode, body: &'static str) -> MockFlickr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let queries: CapturedQueries = Arc::new(Mutex::new(Vec::new()));
    let captured = queries.clone();
    let app = Router::new().route(
        "/services/rest/",
        get(move |Query(query): Query<HashMap<String, String>>| {
            let captured = captured.clone();
            async move {
                captured.lock().unwrap().push(query);
                (status, [(header::CONTENT_TYPE, "text/xml; charset=utf-8")], body)
            }
        }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockFlickr {
        endpoint: format!("http://{addr}/services/rest/"),
        queries,
    }
}

/// Endpoint on a port nothing listens on
#[allow(dead_code)]
pub(crate) async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/services/rest/")
}

#[allow(dead_code)]
pub(crate) fn get_creds_from_env() -> anyhow::Result<flickr::rest::Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    Ok(flickr::rest::Creds::new(&api_key, &api_secret))
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) const SEARCH_OK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
<photos page="1" pages="1" perpage="2" total="2">
	<photo id="53012" owner="12037949754@N01" secret="3f2e1d" server="65535" farm="66" title="Cat on a mat" ispublic="1" isfriend="0" isfamily="0" />
	<photo id="53011" owner="35468159852@N01" secret="9a8b7c" server="65535" farm="66" title="Dog in fog" ispublic="0" isfriend="1" isfamily="0" />
</photos>
</rsp>"#;

#[allow(dead_code)]
pub(crate) const SIZES_OK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
<sizes canblog="0" canprint="0" candownload="1">
	<size label="Thumbnail" width="100" height="75" source="https://live.staticflickr.com/65535/53012_3f2e1d_t.jpg" url="https://www.flickr.com/photos/12037949754@N01/53012/sizes/t/" media="photo" />
	<size label="Large" width="1024" height="768" source="https://live.staticflickr.com/65535/53012_3f2e1d_b.jpg" url="https://www.flickr.com/photos/12037949754@N01/53012/sizes/l/" media="photo" />
</sizes>
</rsp>"#;

#[allow(dead_code)]
pub(crate) const INVALID_KEY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="fail">
	<err code="100" msg="Invalid API Key (Key has invalid format)" />
</rsp>"#;

#[allow(dead_code)]
pub(crate) const MALFORMED: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
<photos page="1" pages="1" perpage="2" total="2">
	<photo id="53012" owner="12037949754@N01" secret="3f2e1d"#;

#[allow(dead_code)]
pub(crate) const BAD_GATEWAY: &str = r#"<html>
<head><title>502 Bad Gateway</title></head>
<body>
<center><h1>502 Bad Gateway</h1></center>
</body>
</html>"#;
