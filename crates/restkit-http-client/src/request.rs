//! Pure request-assembly helpers
//!
//! URL joining and header/query injection are stateless functions taking the
//! request-in-progress and the parameter mappings as explicit inputs.

use std::collections::HashMap;

use url::Url;

use crate::error::Error;

/// Join the base host and path into an absolute URL.
///
/// The URL is `{host}/{path}` by plain concatenation with a separating slash;
/// duplicate or missing slashes are not normalized, so a malformed path fails
/// here rather than at dispatch.
pub(crate) fn join_url(host: &str, path: &str) -> Result<Url, Error> {
    Ok(Url::parse(&format!("{host}/{path}"))?)
}

/// Append each query pair to the URL's query string.
///
/// Pairs are appended, never replaced: a key already present in the URL keeps
/// its existing entries and gains the new one. `None` is identical to an
/// empty mapping.
pub(crate) fn apply_query(url: &mut Url, query: Option<&HashMap<String, String>>) {
    for (key, value) in query.into_iter().flatten() {
        url.query_pairs_mut().append_pair(key, value);
    }
}

/// Append each header pair to the request.
///
/// Repeated keys accumulate rather than overwrite. `None` is identical to an
/// empty mapping. No header is injected implicitly; `Content-Type` in
/// particular is only sent when present in `headers`.
pub(crate) fn apply_headers(
    builder: reqwest::RequestBuilder,
    headers: Option<&HashMap<String, String>>,
) -> reqwest::RequestBuilder {
    headers
        .into_iter()
        .flatten()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        let url = join_url("http://example.com", "users/42").expect("Valid URL");
        assert_eq!(url.as_str(), "http://example.com/users/42");
    }

    #[test]
    fn test_join_url_empty_path() {
        let url = join_url("http://example.com", "").expect("Valid URL");
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_join_url_keeps_slashes() {
        // No normalization: a leading slash in the path doubles up.
        let url = join_url("http://example.com", "/users").expect("Valid URL");
        assert_eq!(url.path(), "//users");
    }

    #[test]
    fn test_join_url_without_scheme_fails() {
        let result = join_url("example.com", "users");
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn test_apply_query_none_is_noop() {
        let mut url = Url::parse("http://example.com/items").expect("Valid URL");
        apply_query(&mut url, None);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_apply_query_empty_is_noop() {
        let mut url = Url::parse("http://example.com/items").expect("Valid URL");
        apply_query(&mut url, Some(&HashMap::new()));
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_apply_query_adds_pairs() {
        let mut url = Url::parse("http://example.com/items").expect("Valid URL");
        let query = HashMap::from([
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]);
        apply_query(&mut url, Some(&query));

        let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.get("page").map(String::as_str), Some("2"));
        assert_eq!(pairs.get("limit").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_apply_query_accumulates_existing_keys() {
        let mut url = Url::parse("http://example.com/items?page=1").expect("Valid URL");
        let query = HashMap::from([("page".to_string(), "2".to_string())]);
        apply_query(&mut url, Some(&query));

        let pages: Vec<String> = url
            .query_pairs()
            .filter(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(pages, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_apply_headers_adds_pairs() {
        let client = reqwest::Client::new();
        let headers = HashMap::from([("x-api-key".to_string(), "secret".to_string())]);
        let request = apply_headers(client.get("http://example.com/"), Some(&headers))
            .build()
            .expect("Request should build");

        assert_eq!(
            request
                .headers()
                .get("x-api-key")
                .and_then(|value| value.to_str().ok()),
            Some("secret")
        );
    }

    #[test]
    fn test_apply_headers_accumulates_repeated_keys() {
        let client = reqwest::Client::new();
        let headers = HashMap::from([("x-trace".to_string(), "a".to_string())]);
        let builder = apply_headers(client.get("http://example.com/"), Some(&headers));
        let request = apply_headers(builder, Some(&headers))
            .build()
            .expect("Request should build");

        assert_eq!(request.headers().get_all("x-trace").iter().count(), 2);
    }

    #[test]
    fn test_apply_headers_none_is_noop() {
        let client = reqwest::Client::new();
        let bare = client
            .get("http://example.com/")
            .build()
            .expect("Request should build");
        let request = apply_headers(client.get("http://example.com/"), None)
            .build()
            .expect("Request should build");

        assert_eq!(bare.headers(), request.headers());
    }
}
