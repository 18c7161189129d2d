// Core data models for the wellbeing dashboard

use serde::{Deserialize, Serialize};

/// HTTP method used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file selected by the user for upload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileUpload {
    /// Raw file contents
    pub bytes: Vec<u8>,

    /// Original file name, if the source carried one
    pub name: Option<String>,

    /// MIME type reported by the source (e.g. "audio/wav")
    pub mime_type: Option<String>,
}

impl FileUpload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            name: None,
            mime_type: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// File name to send in the multipart part. Empty names count as missing.
    pub fn file_name_or(&self, default: &str) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default.to_string(),
        }
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart {
        /// Form field name
        field: String,
        /// File carried by the field
        file: FileUpload,
        /// File name placed in the part's content disposition
        file_name: String,
    },
}

/// Options handed to the request layer together with a URL
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            headers: Vec::new(),
            body: RequestBody::None,
        }
    }
}

/// Description of one API call, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    /// Query pairs, in the order they are sent
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            query: Vec::new(),
            body: RequestBody::None,
        }
    }

    pub fn post(path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            query: Vec::new(),
            body,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Path plus the encoded query string, if any
    pub fn target(&self) -> String {
        crate::url::with_query(&self.path, &self.query)
    }

    /// Split into the request layer's options
    pub fn options(&self) -> RequestOptions {
        let headers = match self.body {
            RequestBody::Json(_) => vec![(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )],
            _ => Vec::new(),
        };

        RequestOptions {
            method: self.method,
            headers,
            body: self.body.clone(),
        }
    }
}

/// Paging options for the disease search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub limit: u32,
    pub offset: u32,
}

impl SearchOptions {
    pub const DEFAULT_LIMIT: u32 = 30;

    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Options for the following page
    pub fn next_page(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    /// Options for the previous page, clamped at zero
    pub fn previous_page(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_sub(self.limit),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Search response envelope
///
/// Only built locally for the empty query; server responses are returned
/// untouched as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub items: Vec<serde_json::Value>,
    pub total: u64,
    pub count: u64,
    pub limit: u32,
    pub offset: u32,
}

impl SearchResults {
    pub fn empty(options: SearchOptions) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            count: 0,
            limit: options.limit,
            offset: options.offset,
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Aggregated metrics exposed under /api/metrics/{name}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    SleepDistribution,
    StressDistribution,
    DietVsHappiness,
    ScreenVsStress,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::SleepDistribution,
        MetricKind::StressDistribution,
        MetricKind::DietVsHappiness,
        MetricKind::ScreenVsStress,
    ];

    /// Path segment used by the backend
    pub fn slug(&self) -> &'static str {
        match self {
            MetricKind::SleepDistribution => "sleep_distribution",
            MetricKind::StressDistribution => "stress_distribution",
            MetricKind::DietVsHappiness => "diet_vs_happiness",
            MetricKind::ScreenVsStress => "screen_vs_stress",
        }
    }

    /// Heading shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::SleepDistribution => "睡眠時間の分布",
            MetricKind::StressDistribution => "ストレスレベルの分布",
            MetricKind::DietVsHappiness => "食生活と幸福度",
            MetricKind::ScreenVsStress => "スクリーン時間とストレス",
        }
    }
}

/// Pass-through query parameters for metrics endpoints.
///
/// The backend has not fixed its filters yet, so pairs are sent as given,
/// in insertion order.
pub type MetricsQuery = Vec<(String, String)>;
