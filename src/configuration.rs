// Copyright (C) 2017 Hove and/or its affiliates.
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, version 3.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more
// details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>
//! Configuration of the agency whose services are resolved.

use crate::Result;
use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs::File;
use std::path;
use tracing::info;

/// The transit agency operating the services.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Agency {
    /// Identifier of the agency
    #[serde(rename = "agency_id")]
    pub id: String,
    /// Name of the agency
    #[serde(rename = "agency_name")]
    pub name: String,
    /// Time zone in which the days of the calendars are expressed
    #[serde(rename = "agency_timezone")]
    pub timezone: Tz,
}

impl Default for Agency {
    fn default() -> Self {
        Agency {
            id: "default_agency_id".to_string(),
            name: "Default agency".to_string(),
            timezone: chrono_tz::UTC,
        }
    }
}

/// Configuration of the service resolution.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Configuration {
    /// Agency whose calendars are used
    pub agency: Agency,
}

impl Configuration {
    /// Time zone of the agency.
    pub fn timezone(&self) -> Tz {
        self.agency.timezone
    }
}

/// Read a JSON configuration file describing the agency.
///
/// Below is an example of this file
/// ```text
/// {
///     "agency": {
///         "agency_id": "sfmta",
///         "agency_name": "San Francisco Municipal Transportation Agency",
///         "agency_timezone": "America/Los_Angeles"
///     }
/// }
/// ```
///
/// Without a file, the default agency, in UTC, is used.
pub fn read_config<P: AsRef<path::Path>>(config_path: Option<P>) -> Result<Configuration> {
    let config_path = match config_path {
        Some(config_path) => config_path,
        None => return Ok(Configuration::default()),
    };
    let config_path = config_path.as_ref();
    info!("Reading agency configuration from {:?}", config_path);
    let json_config_file =
        File::open(config_path).with_context(|| format!("Error reading {:?}", config_path))?;
    let config: Configuration = serde_json::from_reader(json_config_file)
        .with_context(|| format!("Error parsing {:?}", config_path))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_configuration() {
        let config = read_config(None::<&str>).unwrap();
        assert_eq!(Configuration::default(), config);
        assert_eq!(chrono_tz::UTC, config.timezone());
    }

    #[test]
    fn agency_timezone() {
        let file = config_file(
            r#"{
                "agency": {
                    "agency_id": "sfmta",
                    "agency_name": "SFMTA",
                    "agency_timezone": "America/Los_Angeles"
                }
            }"#,
        );
        let config = read_config(Some(file.path())).unwrap();
        assert_eq!("sfmta", config.agency.id);
        assert_eq!(chrono_tz::America::Los_Angeles, config.timezone());
    }

    #[test]
    fn unknown_timezone() {
        let file = config_file(
            r#"{
                "agency": {
                    "agency_id": "a",
                    "agency_name": "A",
                    "agency_timezone": "Mars/Olympus_Mons"
                }
            }"#,
        );
        let error = read_config(Some(file.path())).unwrap_err();
        assert!(error.to_string().starts_with("Error parsing"));
    }

    #[test]
    fn missing_file() {
        let error = read_config(Some("/does/not/exist.json")).unwrap_err();
        assert!(error.to_string().starts_with("Error reading"));
    }
}
