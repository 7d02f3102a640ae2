use std::path::Path;

/// Decoded sprite pixels plus the metadata the renderer needs.
#[derive(Debug, Clone)]
pub struct SpriteImage {
    /// Tightly-packed RGBA8 rows.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Channel count of the source image before RGBA conversion.
    pub channels: u8,
}

pub fn load_sprite_from_path(path: &Path) -> Result<SpriteImage, String> {
    let image = image::open(path)
        .map_err(|e| format!("Failed to decode sprite {}: {e}", path.display()))?;
    let channels = image.color().channel_count();
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(SpriteImage {
        pixels: rgba.into_raw(),
        width,
        height,
        channels,
    })
}
