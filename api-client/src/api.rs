// Named API operations

use crate::errors::ApiError;
use crate::http_client::HttpClient;
use serde::Serialize;
use serde_json::Value;
use wellbeing_core::{
    endpoints, ApiBase, ApiConfig, FileUpload, MetricKind, MetricsQuery, RequestDescriptor,
    SearchOptions, SearchPlan,
};

/// Façade over the backend API
///
/// Every operation builds its request from the endpoint table, joins it with
/// the configured base URL and delegates to [`HttpClient::request`].
#[derive(Debug, Clone)]
pub struct Api {
    base: ApiBase,
    http: HttpClient,
}

impl Api {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_http_client(config, HttpClient::new())
    }

    pub fn with_http_client(config: &ApiConfig, http: HttpClient) -> Self {
        let base = config.api_base();
        if base.is_same_origin() {
            tracing::warn!("no API base URL configured, requests need an absolute origin");
        }
        Self { base, http }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Send a request descriptor relative to the base URL
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let url = self.base.full(&descriptor.target());
        self.http.request(&url, descriptor.options()).await
    }

    // ---------- health ----------

    pub async fn health(&self) -> Result<Value, ApiError> {
        self.execute(endpoints::health()).await
    }

    // ---------- tips ----------

    /// Random tip, optionally filtered by mood
    pub async fn random_tip(&self, mood: Option<&str>) -> Result<Value, ApiError> {
        self.execute(endpoints::random_tip(mood)).await
    }

    // ---------- flip cards ----------

    /// Flip cards; `None` requests the default of 12
    pub async fn flip_cards(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        self.execute(endpoints::flip_cards(limit)).await
    }

    // ---------- open data ----------

    pub async fn open_meteo(&self, lat: f64, lon: f64) -> Result<Value, ApiError> {
        self.execute(endpoints::open_meteo(lat, lon)).await
    }

    pub async fn air_quality(&self, lat: f64, lon: f64) -> Result<Value, ApiError> {
        self.execute(endpoints::air_quality(lat, lon)).await
    }

    pub async fn daylight(&self, lat: f64, lon: f64) -> Result<Value, ApiError> {
        self.execute(endpoints::daylight(lat, lon)).await
    }

    // ---------- speech ----------

    /// Upload a recording; unnamed files are sent as "audio.wav"
    pub async fn speech_analyze(&self, file: FileUpload) -> Result<Value, ApiError> {
        self.execute(endpoints::speech_analyze(file)).await
    }

    // ---------- AI predict ----------

    /// Send records as JSON
    ///
    /// # Arguments
    /// * `records` - Any serializable payload, passed to the backend as is
    pub async fn ai_predict_json<T>(&self, records: &T) -> Result<Value, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(records).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(endpoints::ai_predict_json(payload)).await
    }

    /// Upload a spreadsheet; unnamed files are sent as "data.xlsx"
    pub async fn ai_predict_xlsx(&self, file: FileUpload) -> Result<Value, ApiError> {
        self.execute(endpoints::ai_predict_xlsx(file)).await
    }

    // ---------- search ----------

    /// Disease search
    ///
    /// A blank query resolves to an empty result without touching the
    /// network.
    pub async fn search_health_impact(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Value, ApiError> {
        match endpoints::search_health_impact(query, options) {
            SearchPlan::Local(results) => results
                .to_value()
                .map_err(|e| ApiError::Encode(e.to_string())),
            SearchPlan::Remote(descriptor) => self.execute(descriptor).await,
        }
    }

    // ---------- metrics ----------

    pub async fn metrics(&self, kind: MetricKind, params: &MetricsQuery) -> Result<Value, ApiError> {
        self.execute(endpoints::metrics(kind, params)).await
    }

    pub async fn sleep_distribution(&self, params: &MetricsQuery) -> Result<Value, ApiError> {
        self.metrics(MetricKind::SleepDistribution, params).await
    }

    pub async fn stress_distribution(&self, params: &MetricsQuery) -> Result<Value, ApiError> {
        self.metrics(MetricKind::StressDistribution, params).await
    }

    pub async fn diet_vs_happiness(&self, params: &MetricsQuery) -> Result<Value, ApiError> {
        self.metrics(MetricKind::DietVsHappiness, params).await
    }

    pub async fn screen_vs_stress(&self, params: &MetricsQuery) -> Result<Value, ApiError> {
        self.metrics(MetricKind::ScreenVsStress, params).await
    }
}
