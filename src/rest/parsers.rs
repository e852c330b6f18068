/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::ResponseStatus;
use serde::de::Error;
use serde::Deserialize;
use std::str::FromStr;

// Parses the stat attribute
pub fn from_status<'de, D>(deserializer: D) -> Result<ResponseStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    ResponseStatus::from_str(&s).or(Ok(ResponseStatus::Unknown))
}

// Parses "1"/"0" flag attributes, along with the t/f/true/false spellings
pub fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    match s.as_str() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(D::Error::custom(format!("invalid flag value `{other}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Flagged {
        #[serde(rename = "@stat", deserialize_with = "from_status")]
        status: ResponseStatus,

        #[serde(rename = "@on", deserialize_with = "from_flag")]
        on: bool,
    }

    fn parse(xml: &str) -> Result<Flagged, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    #[test]
    fn flags() {
        assert!(parse(r#"<x stat="ok" on="1"/>"#).unwrap().on);
        assert!(!parse(r#"<x stat="ok" on="0"/>"#).unwrap().on);
        assert!(parse(r#"<x stat="ok" on="yes"/>"#).is_err());
        assert!(parse(r#"<x stat="ok" on=""/>"#).is_err());
        assert!(parse(r#"<x stat="ok" on="tRUE"/>"#).is_err());
    }

    #[test]
    fn flag_spellings() {
        for on in ["1", "t", "T", "true", "TRUE", "True"] {
            let xml = format!(r#"<x stat="ok" on="{on}"/>"#);
            assert!(parse(&xml).unwrap().on, "{on}");
        }
        for off in ["0", "f", "F", "false", "FALSE", "False"] {
            let xml = format!(r#"<x stat="ok" on="{off}"/>"#);
            assert!(!parse(&xml).unwrap().on, "{off}");
        }
    }

    #[test]
    fn statuses() {
        assert_eq!(parse(r#"<x stat="ok" on="1"/>"#).unwrap().status, ResponseStatus::Ok);
        assert_eq!(parse(r#"<x stat="fail" on="1"/>"#).unwrap().status, ResponseStatus::Fail);
        assert_eq!(
            parse(r#"<x stat="maybe" on="1"/>"#).unwrap().status,
            ResponseStatus::Unknown
        );
    }
}
