use shared::ApiError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hand `contents` to the browser as a CSV file download.
///
/// Builds a Blob object URL and clicks a detached anchor; the URL is
/// revoked immediately after the click.
pub fn download_csv(filename: &str, contents: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ApiError::Browser("no document".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| ApiError::Browser("failed to build blob".to_string()))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| ApiError::Browser("failed to create object URL".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| ApiError::Browser("failed to create anchor".to_string()))?
        .dyn_into()
        .map_err(|_| ApiError::Browser("anchor is not an anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
