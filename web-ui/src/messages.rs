// User-facing messages for API and UI errors

use crate::errors::UiError;
use wellbeing_api_client::ApiError;

/// Message level for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Message shown in the message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
        }
    }
}

/// Pull `detail` / `error` / `message` out of a JSON error body
fn backend_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Get user-friendly message from an API error
pub fn message_from_error(error: &ApiError) -> Message {
    match error {
        ApiError::Http { status, body } => {
            let text = backend_detail(body).unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("サーバーがエラーを返しました (HTTP {})", status)
                } else {
                    body.clone()
                }
            });
            if (400..500).contains(status) {
                Message::warning(text)
            } else {
                Message::error(text)
            }
        }
        ApiError::Network(_) => Message::error(
            "サーバーが応答していません。時間をおいて再度接続を試すか管理者に問い合わせてください",
        ),
        ApiError::Decode(_) => {
            Message::error("レスポンスの解析に失敗しました。管理者へお問い合わせください")
        }
        ApiError::Encode(_) => Message::warning("送信するデータを作成できませんでした"),
    }
}

/// Get user-friendly message from a UI error
pub fn message_from_ui_error(error: &UiError) -> Message {
    match error {
        UiError::InvalidInput(_) => Message::warning(error.to_string()),
        UiError::FileRead(_) | UiError::Browser(_) => Message::error(error.to_string()),
    }
}

/// Get CSS class for message level
pub fn get_message_class(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "message-text",
        MessageLevel::Warning => "message-text warning",
        MessageLevel::Error => "message-text error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_body_is_shown_as_is() {
        let message = message_from_error(&ApiError::Http {
            status: 404,
            body: "not found".to_string(),
        });
        assert_eq!(message, Message::warning("not found"));
    }

    #[test]
    fn test_json_detail_is_extracted() {
        let message = message_from_error(&ApiError::Http {
            status: 500,
            body: r#"{"detail":"model not loaded"}"#.to_string(),
        });
        assert_eq!(message, Message::error("model not loaded"));
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let message = message_from_error(&ApiError::Http {
            status: 502,
            body: String::new(),
        });
        assert_eq!(message.text, "サーバーがエラーを返しました (HTTP 502)");
        assert_eq!(message.level, MessageLevel::Error);
    }

    #[test]
    fn test_network_error_message() {
        let message = message_from_error(&ApiError::Network("refused".to_string()));
        assert!(message.text.contains("サーバーが応答していません"));
        assert_eq!(get_message_class(message.level), "message-text error");
    }

    #[test]
    fn test_invalid_input_is_warning() {
        let message = message_from_ui_error(&UiError::InvalidInput("緯度".to_string()));
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(message.text, "入力エラー: 緯度");
    }
}
