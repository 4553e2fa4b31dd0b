use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::{
    foundation::error::{WireframeError, WireframeResult},
    render::frame::Frame,
};

/// Encode `frame` as an RGB8 PNG in memory.
pub fn encode_png(frame: &Frame) -> WireframeResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 3;
    if frame.rgb8.len() != expected {
        return Err(WireframeError::encode(format!(
            "frame holds {} bytes, expected {expected} for {}x{} RGB",
            frame.rgb8.len(),
            frame.width,
            frame.height
        )));
    }

    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &frame.rgb8,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| WireframeError::encode(format!("png encoding failed: {e}")))?;
    Ok(out)
}

/// Encode `frame` and replace `path` with it.
///
/// Bytes go to a hidden sibling first and are renamed over `path` once complete, so a failed
/// run never leaves a truncated PNG behind. The parent directory must already exist.
pub fn write_png(path: &Path, frame: &Frame) -> WireframeResult<()> {
    let bytes = encode_png(frame)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(WireframeError::encode(format!(
            "output directory '{}' does not exist",
            parent.display()
        )));
    }

    let tmp = temp_sibling(path)?;
    let written = std::fs::write(&tmp, &bytes)
        .with_context(|| format!("write png '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path).with_context(|| {
                format!("move '{}' to '{}'", tmp.display(), path.display())
            })
        });
    if let Err(err) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(WireframeError::encode(format!("{err:#}")));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "png written");
    Ok(())
}

fn temp_sibling(path: &Path) -> WireframeResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| {
            WireframeError::encode(format!("output path '{}' has no file name", path.display()))
        })?
        .to_string_lossy();
    Ok(path.with_file_name(format!(".{name}.{}.tmp", std::process::id())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
