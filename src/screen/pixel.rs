//! Single-pixel sampling from a device context.
//!
//! The device context is the only resource this crate acquires; it is
//! scoped to one call and released on every exit path via a drop guard.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(windows)]
use super::ScreenPoint;

#[cfg(windows)]
use windows::Win32::Foundation::HWND;
#[cfg(windows)]
use windows::Win32::Graphics::Gdi::{GetDC, GetPixel, HDC, ReleaseDC};

/// A color sample, one byte per channel.
///
/// `GetPixel` is not documented to return meaningful alpha; the `a` field
/// holds whatever bits the OS placed in the top byte and is not forced to
/// `0xFF`. On a failed sample the OS returns `CLR_INVALID` (all bits set),
/// which unpacks to all-255 channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a raw `COLORREF` value (`0xAABBGGRR` byte order).
    pub const fn from_colorref(raw: u32) -> Self {
        Self {
            r: (raw & 0x0000_00FF) as u8,
            g: ((raw & 0x0000_FF00) >> 8) as u8,
            b: ((raw & 0x00FF_0000) >> 16) as u8,
            a: ((raw & 0xFF00_0000) >> 24) as u8,
        }
    }
}

impl fmt::Display for PixelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(R: {}, G: {}, B: {}, A: {})", self.r, self.g, self.b, self.a)
    }
}

/// Samples one pixel from the whole screen.
#[cfg(windows)]
pub fn pixel_color_at(point: ScreenPoint) -> PixelColor {
    window_pixel_color(None, point)
}

/// Samples one pixel from `window`'s device surface, or from the whole
/// screen when `window` is `None`.
///
/// The device context is released unconditionally before returning, even
/// when the sample itself fails. A failed `GetDC` yields the zero color.
#[cfg(windows)]
pub fn window_pixel_color(window: Option<HWND>, point: ScreenPoint) -> PixelColor {
    struct DcGuard {
        window: Option<HWND>,
        hdc: HDC,
    }

    impl Drop for DcGuard {
        fn drop(&mut self) {
            unsafe {
                ReleaseDC(self.window, self.hdc);
            }
        }
    }

    let hdc = unsafe { GetDC(window) };
    if hdc.0.is_null() {
        tracing::warn!(?window, "GetDC failed, reporting zero color");
        return PixelColor::default();
    }
    let guard = DcGuard { window, hdc };

    let raw = unsafe { GetPixel(guard.hdc, point.x, point.y) };
    PixelColor::from_colorref(raw.0)
}
