//! Off-screen drawing surface.
//!
//! A surface is a fixed-size pixel buffer that the source image is drawn onto,
//! scaled to fill it. JPEG surfaces are opaque RGB on a white background; PNG
//! surfaces keep the alpha channel.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use thiserror::Error;

use crate::decode::{FilterType, SourceImage};
use crate::encode::EncodeError;

/// Largest surface area accepted.
///
/// Scaling needs the output plus an f32 intermediate alive at once, so this
/// stays well under what a 32-bit address space can hold twice over.
pub const MAX_SURFACE_PIXELS: u64 = 8_192 * 8_192;

/// Bytes per pixel of the resampler's f32 RGBA intermediate pass.
const INTERMEDIATE_PIXEL_BYTES: u64 = 16;

/// Errors raised while drawing or encoding the export surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Width or height is zero.
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The requested surface is larger than any drawing surface we hand out.
    #[error("Surface of {width}x{height} exceeds the {max} pixel limit")]
    SurfaceTooLarge { width: u32, height: u32, max: u64 },

    /// Memory for the surface could not be reserved.
    #[error("Could not allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },

    /// Encoding the finished surface failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A drawn surface, ready for encoding.
#[derive(Debug, Clone)]
pub enum Surface {
    /// Opaque surface, source composited over white.
    Opaque(RgbImage),
    /// Surface with the source alpha kept.
    Transparent(RgbaImage),
}

impl Surface {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Surface::Opaque(img) => img.dimensions(),
            Surface::Transparent(img) => img.dimensions(),
        }
    }
}

/// Peak bytes held while scaling a `source_width`-wide image to
/// `width` x `height` with `channels` bytes per output pixel.
///
/// `imageops::resize` first samples vertically into a `source_width` x
/// `height` f32 RGBA buffer, then horizontally into the output.
fn scaling_bytes(width: u32, height: u32, channels: u64, source_width: u32) -> Option<u64> {
    let output = (width as u64).checked_mul(height as u64)?.checked_mul(channels)?;
    let intermediate = (source_width as u64)
        .checked_mul(height as u64)?
        .checked_mul(INTERMEDIATE_PIXEL_BYTES)?;
    output.checked_add(intermediate)
}

/// Check that a `width` x `height` surface can be drawn from `source_width`.
///
/// Reserves, then releases, room for everything scaling allocates, so an
/// allocator refusal is reported here instead of aborting inside the resize.
fn reserve(width: u32, height: u32, channels: u64, source_width: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let pixels = width as u64 * height as u64;
    if pixels > MAX_SURFACE_PIXELS {
        return Err(RenderError::SurfaceTooLarge {
            width,
            height,
            max: MAX_SURFACE_PIXELS,
        });
    }

    let len = scaling_bytes(width, height, channels, source_width)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or(RenderError::SurfaceAllocation { width, height })?;
    let mut headroom: Vec<u8> = Vec::new();
    headroom
        .try_reserve_exact(len)
        .map_err(|_| RenderError::SurfaceAllocation { width, height })?;
    Ok(())
}

/// Composite an RGBA pixel over opaque white.
#[inline]
fn over_white(px: &Rgba<u8>) -> Rgb<u8> {
    let [r, g, b, a] = px.0;
    let a = a as u32;
    let blend = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
    Rgb([blend(r), blend(g), blend(b)])
}

#[inline]
fn premultiply(px: &mut Rgba<u8>) {
    let a = px.0[3] as u32;
    for c in &mut px.0[..3] {
        *c = ((*c as u32 * a + 127) / 255) as u8;
    }
}

#[inline]
fn unpremultiply(px: &mut Rgba<u8>) {
    let a = px.0[3] as u32;
    if a == 0 {
        px.0 = [0, 0, 0, 0];
        return;
    }
    for c in &mut px.0[..3] {
        *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
    }
}

/// Fill a `width` x `height` surface with white and draw `source` over it.
///
/// Flattening onto white before scaling gives the same result as filling the
/// surface white and drawing the scaled source on top, because the
/// resampling weights sum to one.
pub fn draw_opaque(
    source: &SourceImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Surface, RenderError> {
    reserve(width, height, 3, source.width())?;

    let rgba = source.to_rgba_image();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in flattened.pixels_mut().zip(rgba.pixels()) {
        *dst = over_white(src);
    }

    if flattened.dimensions() == (width, height) {
        return Ok(Surface::Opaque(flattened));
    }

    let scaled = image::imageops::resize(&flattened, width, height, filter.to_image_filter());
    Ok(Surface::Opaque(scaled))
}

/// Draw `source` scaled onto a transparent `width` x `height` surface.
///
/// Scaling runs on premultiplied alpha, so the colour of fully transparent
/// pixels never bleeds into visible edges.
pub fn draw_transparent(
    source: &SourceImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Surface, RenderError> {
    reserve(width, height, 4, source.width())?;

    let mut premultiplied = source.to_rgba_image();
    if premultiplied.dimensions() == (width, height) {
        return Ok(Surface::Transparent(premultiplied));
    }

    premultiplied.pixels_mut().for_each(premultiply);
    let mut scaled =
        image::imageops::resize(&premultiplied, width, height, filter.to_image_filter());
    scaled.pixels_mut().for_each(unpremultiply);

    Ok(Surface::Transparent(scaled))
}
