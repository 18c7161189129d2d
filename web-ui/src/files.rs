// Reading user-selected files

use crate::errors::UiError;
use wasm_bindgen_futures::JsFuture;
use wellbeing_core::FileUpload;
use yew::prelude::*;

/// First file of the `<input type="file">` that fired `event`
pub fn selected_file(event: &Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = event.target_unchecked_into();
    input.files().and_then(|files| files.get(0))
}

/// Read a browser file into an upload
///
/// Empty names and MIME types are treated as missing so the API client
/// applies its defaults.
pub async fn read_file(file: &web_sys::File) -> Result<FileUpload, UiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UiError::FileRead(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let mut upload = FileUpload::new(bytes);
    let name = file.name();
    if !name.is_empty() {
        upload = upload.with_name(name);
    }
    let mime_type = file.type_();
    if !mime_type.is_empty() {
        upload = upload.with_mime_type(mime_type);
    }

    tracing::debug!(size = upload.bytes.len(), "file read");
    Ok(upload)
}
