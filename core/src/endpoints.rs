// Endpoint table: each API operation as a request descriptor

use crate::models::{
    FileUpload, MetricKind, MetricsQuery, RequestBody, RequestDescriptor, SearchOptions,
    SearchResults,
};

/// Default number of flip cards requested
pub const DEFAULT_FLIP_CARD_LIMIT: u32 = 12;

/// Multipart field carrying uploaded files
pub const UPLOAD_FIELD: &str = "file";

/// Fallback file name for speech uploads
pub const DEFAULT_AUDIO_FILE_NAME: &str = "audio.wav";

/// Fallback file name for spreadsheet uploads
pub const DEFAULT_XLSX_FILE_NAME: &str = "data.xlsx";

/// How a disease search is answered
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPlan {
    /// Blank query: answered locally, no request is made
    Local(SearchResults),
    /// Non-blank query: sent to the backend
    Remote(RequestDescriptor),
}

/// GET /health
pub fn health() -> RequestDescriptor {
    RequestDescriptor::get("/health")
}

/// GET /api/tips/random, with `mood` only when present and non-empty
pub fn random_tip(mood: Option<&str>) -> RequestDescriptor {
    let descriptor = RequestDescriptor::get("/api/tips/random");
    match mood {
        Some(mood) if !mood.is_empty() => descriptor.query("mood", mood),
        _ => descriptor,
    }
}

/// GET /api/flip-cards?limit=
pub fn flip_cards(limit: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/api/flip-cards")
        .query("limit", limit.unwrap_or(DEFAULT_FLIP_CARD_LIMIT))
}

fn coordinates(path: &str, lat: f64, lon: f64) -> RequestDescriptor {
    RequestDescriptor::get(path).query("lat", lat).query("lon", lon)
}

/// GET /api/open-meteo?lat=&lon=
pub fn open_meteo(lat: f64, lon: f64) -> RequestDescriptor {
    coordinates("/api/open-meteo", lat, lon)
}

/// GET /api/air-quality?lat=&lon=
pub fn air_quality(lat: f64, lon: f64) -> RequestDescriptor {
    coordinates("/api/air-quality", lat, lon)
}

/// GET /api/daylight?lat=&lon=
pub fn daylight(lat: f64, lon: f64) -> RequestDescriptor {
    coordinates("/api/daylight", lat, lon)
}

fn upload(path: &str, file: FileUpload, default_name: &str) -> RequestDescriptor {
    let file_name = file.file_name_or(default_name);
    RequestDescriptor::post(
        path,
        RequestBody::Multipart {
            field: UPLOAD_FIELD.to_string(),
            file,
            file_name,
        },
    )
}

/// POST /api/speech/analyze (multipart)
pub fn speech_analyze(file: FileUpload) -> RequestDescriptor {
    upload("/api/speech/analyze", file, DEFAULT_AUDIO_FILE_NAME)
}

/// POST /api/ai/predict-json
pub fn ai_predict_json(payload: serde_json::Value) -> RequestDescriptor {
    RequestDescriptor::post("/api/ai/predict-json", RequestBody::Json(payload))
}

/// POST /api/ai/predict-xlsx (multipart)
pub fn ai_predict_xlsx(file: FileUpload) -> RequestDescriptor {
    upload("/api/ai/predict-xlsx", file, DEFAULT_XLSX_FILE_NAME)
}

/// GET /api/search-disease?q=&limit=&offset=
///
/// A query that is blank after trimming is answered locally with an empty
/// result carrying the requested paging.
pub fn search_health_impact(query: &str, options: SearchOptions) -> SearchPlan {
    let q = query.trim();
    if q.is_empty() {
        return SearchPlan::Local(SearchResults::empty(options));
    }

    SearchPlan::Remote(
        RequestDescriptor::get("/api/search-disease")
            .query("q", q)
            .query("limit", options.limit)
            .query("offset", options.offset),
    )
}

/// GET /api/metrics/{name}, with every entry of `params` passed through
pub fn metrics(kind: MetricKind, params: &MetricsQuery) -> RequestDescriptor {
    params.iter().fold(
        RequestDescriptor::get(format!("/api/metrics/{}", kind.slug())),
        |descriptor, (key, value)| descriptor.query(key.as_str(), value),
    )
}
