//! Delivers exported bytes to the user: a save dialog on native, a browser
//! download on the web.

use crate::error::ExportResult;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::ExportError;
use crate::export::ExportFormat;

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(data: &[u8], file_name: &str, format: ExportFormat) -> ExportResult<()> {
    let dialog = rfd::FileDialog::new()
        .set_title("Export Whiteboard")
        .set_file_name(file_name)
        .add_filter(format.label(), &[format.extension()]);

    let Some(path) = dialog.save_file() else {
        log::debug!("export cancelled");
        return Ok(());
    };
    std::fs::write(&path, data).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("exported {} bytes to {:?}", data.len(), path);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn save_file(data: &[u8], file_name: &str, format: ExportFormat) -> ExportResult<()> {
    web::download_binary_file(file_name, data, format.mime_type())
        .map_err(|e| crate::error::ExportError::Download(format!("{e:?}")))?;
    log::info!("downloaded {} ({} bytes)", file_name, data.len());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};

    pub fn download_binary_file(file_name: &str, data: &[u8], mime_type: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let bytes = js_sys::Uint8Array::from(data);
        let parts = js_sys::Array::new();
        parts.push(&bytes);

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url)
    }
}
