//! PNG export of a rendered mockup.
//!
//! Rendering itself happens in the UI layer; it hands over an RGBA
//! [`RenderSurface`] at CSS pixel size. Exporting upscales it with
//! nearest-neighbour sampling so text stays crisp, then encodes a PNG.
//! Nothing here reads or writes the conversation.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose;
use base64::Engine as _;
use chatmock_timeline::ChatSkin;
use chrono::{Local, NaiveDateTime};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::config::{DEFAULT_EXPORT_SCALE, MAX_EXPORT_SCALE};
use crate::error::{ClientError, Result};
use crate::events::{ExportFinishedPayload, EVENT_EXPORT_FINISHED};
use crate::state::Session;

/// Raw RGBA pixels of one rendered mockup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RenderSurface {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                ClientError::Export(format!("surface {width}x{height} is too large"))
            })?;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(ClientError::Export(format!(
                "surface {width}x{height} needs {expected} bytes, got {}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Empty canvas in the skin's size and background colour.
    pub fn blank(skin: ChatSkin) -> Self {
        let (width, height) = skin.canvas_size();
        let [r, g, b] = skin.background();
        let image = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
        Self {
            width,
            height,
            rgba: image.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Turns a rendered surface into file bytes.
#[allow(async_fn_in_trait)]
pub trait Exporter {
    async fn export(&self, surface: &RenderSurface) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngExporter {
    scale: u32,
}

impl PngExporter {
    /// Scale is clamped to 1..=8.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.clamp(1, MAX_EXPORT_SCALE),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_SCALE)
    }
}

impl Exporter for PngExporter {
    async fn export(&self, surface: &RenderSurface) -> Result<Vec<u8>> {
        let surface = surface.clone();
        let scale = self.scale;
        tokio::task::spawn_blocking(move || encode_png(surface, scale))
            .await
            .map_err(|e| ClientError::Export(format!("encoder task failed: {e}")))?
    }
}

fn encode_png(surface: RenderSurface, scale: u32) -> Result<Vec<u8>> {
    let (width, height) = (surface.width, surface.height);
    let image = RgbaImage::from_raw(width, height, surface.rgba)
        .ok_or_else(|| ClientError::Export("pixel buffer does not match surface size".into()))?;

    let image = if scale > 1 {
        let (w, h) = width
            .checked_mul(scale)
            .zip(height.checked_mul(scale))
            .ok_or_else(|| ClientError::Export("scaled size overflows".into()))?;
        imageops::resize(&image, w, h, FilterType::Nearest)
    } else {
        image
    };

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ClientError::Export(e.to_string()))?;

    debug!(width = image.width(), height = image.height(), bytes = bytes.len(), "PNG encoded");
    Ok(bytes)
}

/// `data:image/png;base64,...` for inline previews.
pub fn to_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(png))
}

/// `{skin}-chat-{YYYYMMDD}-{HHMMSS}.png`
pub fn export_file_name(skin: ChatSkin, at: NaiveDateTime) -> String {
    format!("{}-chat-{}.png", skin.slug(), at.format("%Y%m%d-%H%M%S"))
}

/// Export `surface` and write it into `dir`, named after the current skin
/// and local time. Returns the written path.
pub async fn export_to_dir(
    session: &Session,
    exporter: &impl Exporter,
    surface: &RenderSurface,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let bytes = exporter.export(surface).await?;

    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(export_file_name(session.skin(), Local::now().naive_local()));
    tokio::fs::write(&path, &bytes).await?;

    info!(path = %path.display(), bytes = bytes.len(), "Mockup exported");
    session.emit(
        EVENT_EXPORT_FINISHED,
        ExportFinishedPayload {
            path: path.display().to_string(),
            bytes: bytes.len(),
        },
    );
    Ok(path)
}

/// [`export_to_dir`] with the configured scale and directory.
pub async fn export_png(session: &Session, surface: &RenderSurface) -> Result<PathBuf> {
    let exporter = PngExporter::new(session.config.export_scale);
    export_to_dir(session, &exporter, surface, &session.config.export_dir).await
}
