//! Top-level window lookup by caption.

use anyhow::{Context, Result};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::FindWindowW;
use windows::core::{HSTRING, PCWSTR};

/// Finds a top-level window whose title matches `caption` exactly.
///
/// The window class is left unspecified so the match is on the caption
/// alone. Returns an error when no such window exists.
pub fn find_window_by_caption(caption: &str) -> Result<HWND> {
    let title = HSTRING::from(caption);
    let hwnd = unsafe { FindWindowW(PCWSTR::null(), &title) }
        .with_context(|| format!("no window titled \"{caption}\""))?;
    Ok(hwnd)
}
