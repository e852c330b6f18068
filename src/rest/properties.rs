/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{EnumString, IntoStaticStr};

/// Value of the `stat` attribute on the `<rsp>` root
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum ResponseStatus {
    #[strum(serialize = "ok")]
    Ok,
    #[strum(serialize = "fail")]
    Fail,
    Unknown,
}

/// Size variants addressable directly from a photo's farm/server/secret.
///
/// The static string is the letter appended to the file name; medium has none.
///
/// See [Flickr URL Docs](https://www.flickr.com/services/api/misc.urls.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum PhotoSizeSuffix {
    /// 75x75 crop
    #[strum(serialize = "s")]
    Square,
    /// 150x150 crop
    #[strum(serialize = "q")]
    LargeSquare,
    /// 100 on longest side
    #[strum(serialize = "t")]
    Thumbnail,
    /// 240 on longest side
    #[strum(serialize = "m")]
    Small,
    /// 320 on longest side
    #[strum(serialize = "n")]
    Small320,
    /// 500 on longest side
    #[strum(serialize = "")]
    Medium,
    /// 640 on longest side
    #[strum(serialize = "z")]
    Medium640,
    /// 800 on longest side
    #[strum(serialize = "c")]
    Medium800,
    /// 1024 on longest side
    #[strum(serialize = "b")]
    Large,
}

impl PhotoSizeSuffix {
    /// Letter appended to the file name, `None` for the default (medium) size
    pub fn suffix(&self) -> Option<&'static str> {
        let suffix: &'static str = self.into();
        (!suffix.is_empty()).then_some(suffix)
    }
}
