// Web UI error types

/// Web UI specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Selected file could not be read
    FileRead(String),
    /// A browser API call failed
    Browser(String),
    /// User input could not be used as entered
    InvalidInput(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::FileRead(msg) => write!(f, "ファイルの読み込みに失敗しました: {}", msg),
            UiError::Browser(msg) => write!(f, "ブラウザエラー: {}", msg),
            UiError::InvalidInput(msg) => write!(f, "入力エラー: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        UiError::Browser(format!("{:?}", value))
    }
}
