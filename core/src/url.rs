// Base URL handling and query string encoding

/// Configured prefix prepended to every API path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    /// Create a base from a raw configured value.
    ///
    /// A single trailing slash is stripped. An empty value means
    /// same-origin requests.
    pub fn new(raw: impl Into<String>) -> Self {
        let mut base: String = raw.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    pub fn is_same_origin(&self) -> bool {
        self.base.is_empty()
    }

    /// Join the base with `path`, with exactly one slash in between
    ///
    /// # Arguments
    /// * `path` - API path, with or without a leading slash
    pub fn full(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

/// Append `query` to `path` as an encoded query string.
///
/// Returns `path` unchanged when there are no pairs.
pub fn with_query(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    format!("{}?{}", path, encode_query(query))
}

/// Percent-encode key/value pairs into `k1=v1&k2=v2`
pub fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
