// API client errors

/// API client error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Server answered with a non-success status.
    ///
    /// Displays as the raw response body, which usually carries the
    /// backend's own message.
    #[error("{body}")]
    Http { status: u16, body: String },

    /// The request could not be sent or the response could not be read
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// The success response was not valid JSON
    #[error("レスポンスの解析に失敗しました: {0}")]
    Decode(String),

    /// The request payload could not be encoded
    #[error("リクエストの作成に失敗しました: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // ApiError::Display トレイトのテスト
    // ========================================

    #[test]
    fn test_http_error_displays_raw_body() {
        // レスポンス本文がそのままメッセージになる
        let error = ApiError::Http {
            status: 404,
            body: "not found".to_string(),
        };

        assert_eq!(error.to_string(), "not found");
        assert_eq!(error.status(), Some(404));
        assert!(error.is_client_error());
    }

    #[test]
    fn test_http_error_keeps_json_body_uninterpreted() {
        let body = r#"{"detail":"mood must be one of calm, happy"}"#;
        let error = ApiError::Http {
            status: 422,
            body: body.to_string(),
        };

        assert_eq!(error.to_string(), body);
    }

    #[test]
    fn test_network_error_display() {
        let error = ApiError::Network("接続が拒否されました".to_string());

        assert_eq!(error.to_string(), "ネットワークエラー: 接続が拒否されました");
        assert_eq!(error.status(), None);
        assert!(!error.is_client_error());
    }
}
