use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;

// --- Fetch Card Image, Create Texture ---
//
// One attempt per URL, no retries. A failure means the card renders without a
// texture; the slider keeps running either way.
pub fn load_texture_from_url(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    url: &str,
) -> Result<Texture2D> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("failed to fetch image {url}"))?
        .error_for_status()
        .with_context(|| format!("image server rejected {url}"))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("failed to read image bytes from {url}"))?
        .to_vec();

    // The image service serves JPEG; the extension hint is all raylib needs
    // to decode from memory.
    let image = Image::load_image_from_mem(".jpg", &bytes)
        .map_err(|e| anyhow!("failed to decode image {url}: {e}"))?;

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {url}: {e}"))?;

    Ok(texture)
}
