use anyhow::anyhow;
use pointcloud_core::{Bitmap, IMAGE_HEIGHT, IMAGE_WIDTH};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url}: {e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("fetch {url}: not a Response: {e:?}"))?;
    if !response.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", response.status());
    }
    let body = response
        .array_buffer()
        .map_err(|e| anyhow!("fetch {url}: {e:?}"))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("fetch {url}: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&body).to_vec())
}

/// Fetch and decode the logo, falling back to the built-in shield. The
/// result is always drawn onto the fixed sampling canvas.
pub async fn load_logo(url: &str) -> Bitmap {
    let fetched = match fetch_bytes(url).await {
        Ok(bytes) => Bitmap::decode(&bytes).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };
    let logo = match fetched {
        Ok(bitmap) => {
            log::info!("[logo] {} {}x{}", url, bitmap.width(), bitmap.height());
            bitmap
        }
        Err(e) => {
            log::warn!("[logo] {e:#}; using built-in shield");
            Bitmap::shield(IMAGE_WIDTH, IMAGE_HEIGHT)
        }
    };
    logo.onto_canvas(IMAGE_WIDTH, IMAGE_HEIGHT)
}
