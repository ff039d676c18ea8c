use url::Url;

use crate::{FailureKind, RequestError};

/// Path of the analysis endpoint relative to the base address.
pub const ANALYSIS_PATH: &str = "generate-seo";

/// Validates an http(s) base address and makes sure it ends with `/`.
pub fn normalize_base_address(raw: &str) -> Result<String, RequestError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RequestError::new(
            FailureKind::InvalidUrl,
            format!("unsupported scheme {}", parsed.scheme()),
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(RequestError::new(
            FailureKind::InvalidUrl,
            "base address must not carry a query or fragment",
        ));
    }
    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

pub fn analysis_endpoint(base_address: &str) -> Result<Url, RequestError> {
    let base = normalize_base_address(base_address)?;
    Url::parse(&base)
        .and_then(|base| base.join(ANALYSIS_PATH))
        .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_trailing_slash() {
        assert_eq!(
            normalize_base_address("http://127.0.0.1:5000").unwrap(),
            "http://127.0.0.1:5000/"
        );
        assert_eq!(
            normalize_base_address("https://seo.example.com/api").unwrap(),
            "https://seo.example.com/api/"
        );
    }

    #[test]
    fn rejects_non_http_and_garbage() {
        assert_eq!(
            normalize_base_address("ftp://host/").unwrap_err().kind,
            FailureKind::InvalidUrl
        );
        assert_eq!(
            normalize_base_address("not a url").unwrap_err().kind,
            FailureKind::InvalidUrl
        );
        assert_eq!(
            normalize_base_address("http://host/?q=1").unwrap_err().kind,
            FailureKind::InvalidUrl
        );
    }

    #[test]
    fn endpoint_joins_below_base_path() {
        assert_eq!(
            analysis_endpoint("http://127.0.0.1:5000/").unwrap().as_str(),
            "http://127.0.0.1:5000/generate-seo"
        );
        assert_eq!(
            analysis_endpoint("https://seo.example.com/api").unwrap().as_str(),
            "https://seo.example.com/api/generate-seo"
        );
    }
}
