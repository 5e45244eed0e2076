//! Local copies of generated images: naming, decoding, and format conversion.

use std::path::{Path, PathBuf};

use base64::Engine;
use image::ImageFormat;

use crate::error::WallError;

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // no leading hyphen

    for ch in input.chars() {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "wallpaper".to_string()
    } else {
        result
    }
}

/// Last component of a path reported by the service, which may use either
/// Windows or Unix separators.
#[must_use]
pub fn remote_file_name(image_path: &str) -> Option<&str> {
    image_path.rsplit(['\\', '/']).find(|part| !part.is_empty())
}

/// Resolve where to write the local copy.
///
/// A `save` argument naming an existing directory gets the remote file name
/// (or a name derived from the prompt) appended.
#[must_use]
pub fn resolve_save_path(save: &str, image_path: &str, prompt: &str) -> PathBuf {
    let target = PathBuf::from(save);
    if !target.is_dir() {
        return target;
    }
    let name = remote_file_name(image_path)
        .map_or_else(|| format!("{}.png", sanitize_for_filename(prompt, 50)), str::to_string);
    target.join(name)
}

/// Decode base64 image content as returned by the service.
///
/// # Errors
///
/// Returns an error if the content is empty or not valid base64.
pub fn decode_image_content(content: &str) -> Result<Vec<u8>, WallError> {
    let payload = content.trim();
    // data URLs carry the base64 payload after the first comma
    let payload = match payload.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, data)| data),
        None => payload,
    };
    if payload.is_empty() {
        return Err(WallError::ImageDecode("Service returned no image content".into()));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| WallError::ImageDecode(format!("Failed to decode base64: {e}")))
}

/// Save decoded image bytes, converting when the output extension names a
/// different format than the bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be written or format conversion fails.
pub fn save_image(data: &[u8], output_path: &Path) -> Result<(), WallError> {
    let source = image::guess_format(data).ok();
    let target = ImageFormat::from_path(output_path).ok();

    match (source, target) {
        (Some(src), Some(dst)) if src != dst => convert_and_save(data, src, dst, output_path),
        _ => std::fs::write(output_path, data).map_err(WallError::Io),
    }
}

fn convert_and_save(
    data: &[u8],
    source: ImageFormat,
    target: ImageFormat,
    output_path: &Path,
) -> Result<(), WallError> {
    tracing::debug!(?source, ?target, "converting image");
    let img = image::load_from_memory_with_format(data, source)
        .map_err(|e| WallError::ImageDecode(format!("Failed to decode image: {e}")))?;

    // JPEG has no alpha channel.
    let img = if target == ImageFormat::Jpeg {
        image::DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        img
    };

    img.save_with_format(output_path, target)
        .map_err(|e| WallError::ImageDecode(format!("Failed to save as {target:?}: {e}")))
}
