//! Where the catalog document lives: a local file or an HTTP(S) URL.

use std::{fmt, path::PathBuf, str::FromStr};

use reqwest::Url;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(Url),
}

impl FromStr for CatalogSource {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_source(input, "empty location"));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| AppError::invalid_source(input, e.to_string()))?;
            return Ok(Self::Http(url));
        }

        if lower.contains("://") {
            return Err(AppError::invalid_source(
                input,
                "only file paths and http(s) URLs are supported",
            ));
        }

        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_file() {
        let source: CatalogSource = "static/data/servers.json".parse().unwrap();
        assert_eq!(
            source,
            CatalogSource::File(PathBuf::from("static/data/servers.json"))
        );
        assert_eq!(source.to_string(), "static/data/servers.json");
    }

    #[test]
    fn test_urls_are_http() {
        let source: CatalogSource = "https://example.org/static/data/servers.json".parse().unwrap();
        assert!(matches!(source, CatalogSource::Http(ref url) if url.host_str() == Some("example.org")));

        let source: CatalogSource = "HTTP://localhost:5000/servers.json".parse().unwrap();
        assert!(matches!(source, CatalogSource::Http(_)));
    }

    #[test]
    fn test_rejected_locations() {
        assert!("".parse::<CatalogSource>().is_err());
        assert!("   ".parse::<CatalogSource>().is_err());
        assert!("ftp://example.org/servers.json".parse::<CatalogSource>().is_err());
        assert!("https://".parse::<CatalogSource>().is_err());
    }
}
