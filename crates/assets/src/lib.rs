//! Startup asset loading.
//!
//! The game loads a single decorative image when it starts. Textures are
//! decoded to tightly packed RGBA8 here; uploading them is the render
//! backend's job. A missing or broken asset is never fatal: callers use
//! [`load_texture_or_warn`] and draw without it.

use std::path::{Path, PathBuf};

/// File name of the backdrop logo inside the asset directory.
pub const LOGO_FILE: &str = "Raylib_logo.png";

/// Default asset directory, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "./resources";

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{path} has no pixels")]
    Empty { path: PathBuf },
}

/// Decoded image, RGBA8, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Bytes per row of `pixels`.
    pub fn stride(&self) -> u32 {
        self.width * 4
    }
}

/// Where the game looks for its assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn logo(&self) -> PathBuf {
        self.root.join(LOGO_FILE)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR)
    }
}

/// Read and decode an image file.
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureData, AssetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.into_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(AssetError::Empty {
            path: path.to_path_buf(),
        });
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::info!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "texture loaded"
    );
    Ok(TextureData {
        name,
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Like [`load_texture`], but logs a warning and returns `None` on failure.
pub fn load_texture_or_warn(path: impl AsRef<Path>) -> Option<TextureData> {
    match load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            tracing::warn!("{e}; continuing without it");
            None
        }
    }
}

pub fn crate_info() -> &'static str {
    "dothack-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([x as u8, y as u8, 7, 255])
        });
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn loads_png_as_rgba8() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "logo.png", 4, 2);

        let tex = load_texture(&path).unwrap();
        assert_eq!(tex.name, "logo");
        assert_eq!((tex.width, tex.height), (4, 2));
        assert_eq!(tex.pixels.len(), 4 * 2 * 4);
        assert_eq!(tex.stride(), 16);
        // Pixel (3, 1) is the last one.
        assert_eq!(&tex.pixels[28..32], &[3, 1, 7, 255]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_texture(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_texture(&path),
            Err(AssetError::Decode { .. })
        ));
    }

    #[test]
    fn or_warn_swallows_failures() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_texture_or_warn(dir.path().join("missing.png")).is_none());

        let path = write_png(dir.path(), "ok.png", 1, 1);
        assert!(load_texture_or_warn(path).is_some());
    }

    #[test]
    fn logo_path_joins_root() {
        let paths = AssetPaths::new("/tmp/assets");
        assert_eq!(paths.logo(), PathBuf::from("/tmp/assets/Raylib_logo.png"));
        assert_eq!(AssetPaths::default().root(), Path::new("./resources"));
    }
}
