//! Screen-facing primitives: cursor position, pixel sampling, window lookup.

pub mod cursor;
pub mod pixel;
#[cfg(windows)]
pub mod window;

pub use cursor::ScreenPoint;
pub use pixel::PixelColor;

#[cfg(windows)]
pub use cursor::{cursor_position, set_cursor_position};
#[cfg(windows)]
pub use pixel::{pixel_color_at, window_pixel_color};
#[cfg(windows)]
pub use window::find_window_by_caption;
