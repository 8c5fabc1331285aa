//! Saving decoded document bytes.
//!
//! In the browser the bytes become a `Blob` URL clicked through a temporary
//! anchor. On native builds they are written to the download directory.

use std::time::Duration;

use api::documents::PDF_MIME;

/// How long a blob URL outlives the click that starts its download.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) const REVOKE_DELAY: Duration = Duration::from_secs(2);

#[cfg(target_arch = "wasm32")]
pub fn save_file(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(PDF_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    dioxus::prelude::spawn(async move {
        crate::storage::sleep(REVOKE_DELAY).await;
        let _ = web_sys::Url::revoke_object_url(&url);
    });
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|e| e.to_string())?;
    tracing::info!("Saved {} ({} bytes, {})", path.display(), bytes.len(), PDF_MIME);
    Ok(())
}
