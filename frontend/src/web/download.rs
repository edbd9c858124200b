//! 文件下载
//!
//! 通过临时 `<a download>` 元素触发浏览器保存文件。

use gloo_timers::callback::Timeout;
use localaudit::flows::export::PdfExport;
use localaudit_shared::CONTENT_TYPE_PDF;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 下载开始后保留对象 URL 的时间
const REVOKE_DELAY_MS: u32 = 60_000;

pub fn save(export: &PdfExport) -> Result<(), JsValue> {
    match export {
        PdfExport::Blob { filename, bytes } => save_bytes(filename, bytes),
        PdfExport::Direct { url, filename } => click_link(url, filename),
    }
}

fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = BlobPropertyBag::new();
    options.set_type(CONTENT_TYPE_PDF);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let object_url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_link(&object_url, filename);
    // 立即撤销会让部分浏览器取消下载
    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&object_url) {
            tracing::warn!(error = ?e, "failed to revoke object url");
        }
    })
    .forget();
    clicked
}

fn click_link(href: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("无法获取 document 对象"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("无法获取 body 元素"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(href);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
