//! Form submission over `fetch`.

use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// POST the form's fields to `url` and report whether the service accepted
/// them (the `success` flag in its JSON reply).
pub async fn post_form(url: &str, form: &web::HtmlFormElement) -> Result<bool> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let data = web::FormData::new_with_form(form)
        .map_err(|e| anyhow!("form data: {e:?}"))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);

    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| anyhow!("fetch failed: {e:?}"))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("not a response: {e:?}"))?;

    let json = JsFuture::from(resp.json().map_err(|e| anyhow!("body: {e:?}"))?)
        .await
        .map_err(|e| anyhow!("json parse: {e:?}"))?;
    let success = js_sys::Reflect::get(&json, &"success".into())
        .map_err(|e| anyhow!("reply shape: {e:?}"))?;
    Ok(success.as_bool().unwrap_or(false))
}
