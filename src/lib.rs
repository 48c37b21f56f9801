//! Low-level Windows input-simulation primitives.
//!
//! This crate is a thin binding layer over `user32`/`gdi32`/`kernel32`:
//! - Cursor control: read and move the absolute screen cursor position
//! - Pixel sampling: read one pixel from a window's (or the screen's)
//!   device context
//! - Synthetic input: batch keyboard/mouse events into a single `SendInput`
//!   call, with an optional blocking hold between press and release
//! - Clipboard: read the current Unicode text payload
//!
//! Every operation is a stateless pass-through to a single OS call. Expected
//! native failures degrade to a safe default (`(0, 0)` cursor, zero color,
//! empty string) instead of propagating errors; the only failure signal
//! surfaced to callers is the accepted-event count returned by `SendInput`.
//!
//! The data model (points, colors, input records, key and flag catalogues)
//! is platform-independent; functions that actually touch the OS are only
//! compiled on Windows.

pub mod clipboard;
pub mod input;
pub mod screen;

pub use clipboard::ClipboardFormat;
#[cfg(windows)]
pub use clipboard::get_clipboard_text;

pub use input::{InputRecord, KeyEventFlags, MouseEventFlags, VirtualKey};
#[cfg(windows)]
pub use input::{send_input, send_keys, send_mouse_event, send_unicode_text};

pub use screen::{PixelColor, ScreenPoint};
#[cfg(windows)]
pub use screen::{
    cursor_position, find_window_by_caption, pixel_color_at, set_cursor_position,
    window_pixel_color,
};
