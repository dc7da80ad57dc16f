//! Client-side file download: wrap bytes in a Blob and click a temporary
//! anchor.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Save `bytes` under `filename` with the given MIME type
pub fn save_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&array.buffer());

    let props = BlobPropertyBag::new();
    props.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&blob_parts, &props)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create URL: {:?}", e))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("{:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

/// Invoice file name: `{customer}_{start}_{end}.pdf`, spaces in the
/// customer name replaced with underscores.
pub fn invoice_filename(customer_name: &str, start_date: &str, end_date: &str) -> String {
    format!(
        "{}_{}_{}.pdf",
        customer_name.replace(' ', "_"),
        start_date,
        end_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_filename_replaces_spaces() {
        assert_eq!(
            invoice_filename("Ana Maria Silva", "2026-01-01", "2026-01-31"),
            "Ana_Maria_Silva_2026-01-01_2026-01-31.pdf"
        );
    }
}
