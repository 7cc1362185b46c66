//! CHR graphics banks rendered as tile sheets
//!
//! CHR tiles are 8x8 pixels at 2 bits per pixel, stored as two 8-byte bit
//! planes. Banks render as one or two square tile sections laid side by
//! side: 8x8 tiles for 1KB and 2KB banks, 16x16 tiles for 4KB and 8KB banks.

use crate::bank::{BankView, MEMBLOCK_1KB, MEMBLOCK_2KB, MEMBLOCK_4KB, MEMBLOCK_8KB};
use crate::cart::Cart;
use crate::error::{DisError, InspectError};
use log::{debug, info, warn};
use std::fmt::Write;
use std::fs;
use std::path::Path;

pub const CHR_TILE_DIM: u32 = 8;
pub const CHR_TILE_STRIDE: usize = 16;
/// Largest accepted pixel scale
pub const SCALE_GUARD: u32 = 20;

/// Four shades of gray, darkest first
const PALETTE: [u8; 4] = [0x00, 0x67, 0xb6, 0xff];

/// Renders a graphics bank into an encoded image payload
pub trait AssetRenderer: Send + Sync {
    fn render_bank(&self, bank: &BankView<'_>, scale: u32) -> Result<Vec<u8>, DisError>;
}

/// Tile layout for one bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSheet {
    /// Tiles per section edge
    pub tiles_dim: u32,
    pub sections: u32,
}

impl TileSheet {
    pub fn measure(bank_size: usize) -> Result<Self, DisError> {
        let (tiles_dim, sections) = match bank_size {
            MEMBLOCK_1KB => (8, 1),
            MEMBLOCK_2KB => (8, 2),
            MEMBLOCK_4KB => (16, 1),
            MEMBLOCK_8KB => (16, 2),
            _ => return Err(DisError::ChrSize),
        };
        Ok(TileSheet { tiles_dim, sections })
    }

    /// Pixel width and height at the given scale
    pub fn dimensions(&self, scale: u32) -> (u32, u32) {
        let section_px = self.tiles_dim * CHR_TILE_DIM;
        (section_px * self.sections * scale, section_px * scale)
    }
}

fn check_scale(scale: u32) -> Result<(), DisError> {
    if scale == 0 || scale > SCALE_GUARD {
        return Err(DisError::ChrScale);
    }
    Ok(())
}

/// Grayscale PNG renderer for CHR banks
#[derive(Debug, Default, Clone, Copy)]
pub struct ChrSheetRenderer;

impl ChrSheetRenderer {
    /// Palette-mapped 8-bit pixels, row-major from the top-left
    pub fn pixels(bank: &BankView<'_>, scale: u32) -> Result<(u32, u32, Vec<u8>), DisError> {
        check_scale(scale)?;
        let sheet = TileSheet::measure(bank.size())?;
        let (width, height) = sheet.dimensions(scale);
        let section_px = sheet.tiles_dim * CHR_TILE_DIM;
        let mem = bank.bytes();

        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            let sheet_y = y / scale;
            let tile_y = sheet_y / CHR_TILE_DIM;
            let pixel_y = (sheet_y % CHR_TILE_DIM) as usize;
            for x in 0..width {
                let sheet_x = x / scale;
                let section = sheet_x / section_px;
                let tile_x = (sheet_x % section_px) / CHR_TILE_DIM;
                let bit = 7 - (sheet_x % CHR_TILE_DIM);

                let tile = tile_x
                    + tile_y * sheet.tiles_dim
                    + section * sheet.tiles_dim * sheet.tiles_dim;
                let row = tile as usize * CHR_TILE_STRIDE + pixel_y;
                let plane0 = mem[row];
                let plane1 = mem[row + CHR_TILE_DIM as usize];
                let color = (((plane1 >> bit) & 1) << 1) | ((plane0 >> bit) & 1);
                pixels.push(PALETTE[color as usize]);
            }
        }
        Ok((width, height, pixels))
    }
}

impl AssetRenderer for ChrSheetRenderer {
    fn render_bank(&self, bank: &BankView<'_>, scale: u32) -> Result<Vec<u8>, DisError> {
        let (width, height, pixels) = Self::pixels(bank, scale)?;

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(|e| {
            warn!("png header write failed: {}", e);
            DisError::Io
        })?;
        writer.write_image_data(&pixels).map_err(|e| {
            warn!("png data write failed: {}", e);
            DisError::Io
        })?;
        writer.finish().map_err(|_| DisError::Io)?;

        debug!(
            "rendered chr bank {} at {}x: {}x{} px, {} bytes",
            bank.ord(),
            scale,
            width,
            height,
            out.len()
        );
        Ok(out)
    }
}

/// A decoded 8-bit grayscale image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Why a sheet could not be produced
#[derive(Debug, Clone, PartialEq)]
pub enum SheetFailure {
    Renderer(InspectError),
    InvalidImage(String),
}

impl SheetFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            SheetFailure::Renderer(_) => "renderer failed",
            SheetFailure::InvalidImage(_) => "decoded image invalid",
        }
    }
}

impl From<SheetFailure> for InspectError {
    fn from(failure: SheetFailure) -> Self {
        match failure {
            SheetFailure::Renderer(err) => err,
            SheetFailure::InvalidImage(msg) => InspectError::Payload(msg),
        }
    }
}

/// Decode and validate a renderer payload
pub fn decode_image(bytes: &[u8]) -> Result<Image, SheetFailure> {
    if bytes.is_empty() {
        return Err(SheetFailure::InvalidImage("empty image payload".to_string()));
    }

    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder
        .read_info()
        .map_err(|e| SheetFailure::InvalidImage(format!("bad image header: {}", e)))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| SheetFailure::InvalidImage(format!("bad image data: {}", e)))?;

    if frame.color_type != png::ColorType::Grayscale || frame.bit_depth != png::BitDepth::Eight {
        return Err(SheetFailure::InvalidImage(format!(
            "unsupported pixel format {:?}/{:?}",
            frame.color_type, frame.bit_depth
        )));
    }
    if frame.width == 0 || frame.height == 0 {
        return Err(SheetFailure::InvalidImage("zero-sized image".to_string()));
    }
    let expected = (frame.width * frame.height) as usize;
    if frame.buffer_size() < expected || buf.len() < expected {
        return Err(SheetFailure::InvalidImage(format!(
            "image buffer too small: {} < {}",
            frame.buffer_size(),
            expected
        )));
    }
    buf.truncate(expected);

    Ok(Image {
        width: frame.width,
        height: frame.height,
        pixels: buf,
    })
}

/// Render one bank and decode the result into a displayable image
pub fn render_sheet(
    renderer: &dyn AssetRenderer,
    bank: &BankView<'_>,
    scale: u32,
) -> Result<Image, SheetFailure> {
    let payload = renderer
        .render_bank(bank, scale)
        .map_err(|e| SheetFailure::Renderer(InspectError::wrap_dis(e)))?;
    decode_image(&payload)
}

/// Write every CHR bank of `cart` to `folder` and return the export report
pub fn export_chr_sheets(
    cart: &Cart,
    renderer: &dyn AssetRenderer,
    scale: u32,
    folder: &Path,
    prefix: &str,
) -> Result<String, InspectError> {
    check_scale(scale).map_err(InspectError::wrap_dis)?;
    if cart.chr_banks() == 0 {
        return Err(InspectError::wrap_dis(DisError::ChrRom));
    }
    let prefix = if prefix.is_empty() { "chr" } else { prefix };

    let mut report = String::new();
    for bank in (0..cart.chr_banks()).filter_map(|i| cart.chr_bank(i)) {
        let sheet = TileSheet::measure(bank.size()).map_err(InspectError::wrap_dis)?;
        let payload = renderer
            .render_bank(&bank, scale)
            .map_err(InspectError::wrap_dis)?;
        let filename = format!("{}{:03}.png", prefix, bank.ord());
        fs::write(folder.join(&filename), &payload)?;

        let _ = write!(
            report,
            "Block {} ({}KB), {} x {} tiles ({} section{})",
            bank.ord(),
            bank.size_kb(),
            sheet.tiles_dim,
            sheet.tiles_dim,
            sheet.sections,
            if sheet.sections == 1 { "" } else { "s" }
        );
        if scale > 1 {
            let _ = write!(report, " ({}x scale)", scale);
        }
        let _ = writeln!(report, ": {}", filename);
    }

    info!(
        "exported {} chr sheets to {}",
        cart.chr_banks(),
        folder.display()
    );
    Ok(report)
}

#[cfg(test)]
#[path = "chr_tests.rs"]
mod tests;
