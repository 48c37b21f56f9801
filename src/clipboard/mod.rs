//! Clipboard access: the standard format catalogue and a text reader.

#[cfg(windows)]
use windows::Win32::Foundation::HGLOBAL;
#[cfg(windows)]
use windows::Win32::System::DataExchange::{
    CloseClipboard, GetClipboardData, OpenClipboard,
};
#[cfg(windows)]
use windows::Win32::System::Memory::{GlobalLock, GlobalUnlock};

/// Standard clipboard format identifiers, values per the OS ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ClipboardFormat {
    Text = 1,
    Bitmap = 2,
    MetafilePict = 3,
    Sylk = 4,
    Dif = 5,
    Tiff = 6,
    OemText = 7,
    Dib = 8,
    Palette = 9,
    PenData = 10,
    Riff = 11,
    Wave = 12,
    UnicodeText = 13,
    EnhMetafile = 14,
    HDrop = 15,
    Locale = 16,
    DibV5 = 17,
    OwnerDisplay = 0x80,
    DspText = 0x81,
    DspBitmap = 0x82,
    DspMetafilePict = 0x83,
    DspEnhMetafile = 0x8E,
    PrivateFirst = 0x200,
    PrivateLast = 0x2FF,
    GdiObjFirst = 0x300,
    GdiObjLast = 0x3FF,
}

impl ClipboardFormat {
    /// The OS numeric format identifier.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Resolves a numeric identifier back to a standard format.
    pub const fn from_id(id: u32) -> Option<Self> {
        Some(match id {
            1 => Self::Text,
            2 => Self::Bitmap,
            3 => Self::MetafilePict,
            4 => Self::Sylk,
            5 => Self::Dif,
            6 => Self::Tiff,
            7 => Self::OemText,
            8 => Self::Dib,
            9 => Self::Palette,
            10 => Self::PenData,
            11 => Self::Riff,
            12 => Self::Wave,
            13 => Self::UnicodeText,
            14 => Self::EnhMetafile,
            15 => Self::HDrop,
            16 => Self::Locale,
            17 => Self::DibV5,
            0x80 => Self::OwnerDisplay,
            0x81 => Self::DspText,
            0x82 => Self::DspBitmap,
            0x83 => Self::DspMetafilePict,
            0x8E => Self::DspEnhMetafile,
            0x200 => Self::PrivateFirst,
            0x2FF => Self::PrivateLast,
            0x300 => Self::GdiObjFirst,
            0x3FF => Self::GdiObjLast,
            _ => return None,
        })
    }
}

/// Reads the clipboard's Unicode text payload.
///
/// The clipboard is opened exclusively and closed unconditionally via a
/// drop guard. A busy clipboard fails immediately (the OS call does not
/// block and we do not retry); that case, a missing text payload, and a
/// null data pointer all return an empty string.
#[cfg(windows)]
pub fn get_clipboard_text() -> String {
    struct ClipboardGuard;

    impl Drop for ClipboardGuard {
        fn drop(&mut self) {
            unsafe {
                let _ = CloseClipboard();
            }
        }
    }

    if let Err(err) = unsafe { OpenClipboard(None) } {
        tracing::warn!(%err, "OpenClipboard failed, reporting empty text");
        return String::new();
    }
    let _guard = ClipboardGuard;

    let Ok(handle) = (unsafe { GetClipboardData(ClipboardFormat::UnicodeText.id()) }) else {
        return String::new();
    };
    if handle.is_invalid() {
        return String::new();
    }

    let hglobal = HGLOBAL(handle.0);
    let data = unsafe { GlobalLock(hglobal) } as *const u16;
    if data.is_null() {
        return String::new();
    }

    // The payload is a NUL-terminated UTF-16 string.
    let mut len = 0;
    while unsafe { *data.add(len) } != 0 {
        len += 1;
    }
    let text = String::from_utf16_lossy(unsafe { std::slice::from_raw_parts(data, len) });

    // The final unlock reports an error by design; nothing to act on.
    let _ = unsafe { GlobalUnlock(hglobal) };
    text
}
