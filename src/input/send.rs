//! Batched submission to the OS input queue via `SendInput`.
//!
//! Each batch crosses the native boundary in a single call; the OS decides
//! actual delivery order within the batch. A return of 0 means the OS
//! rejected the whole batch (input injection can be blocked by policy); a
//! short count is surfaced to the caller, never raised as an error.

use std::time::Duration;

use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBD_EVENT_FLAGS, KEYBDINPUT,
    MOUSE_EVENT_FLAGS, MOUSEINPUT, SendInput, VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::GetMessageExtraInfo;

use super::flags::MouseEventFlags;
use super::keys::VirtualKey;
use super::record::{InputRecord, press_hold_release};
use crate::screen::cursor::cursor_position;

/// Converts a record to the native `INPUT` union, stamping it with the
/// platform's extra-info token. The token is fetched per record per
/// submission as the call contract asks; it carries no payload for us.
fn to_native(record: &InputRecord) -> INPUT {
    let extra_info = unsafe { GetMessageExtraInfo() }.0 as usize;
    match *record {
        InputRecord::Keyboard { virtual_key, scan_code, flags } => INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(virtual_key),
                    wScan: scan_code,
                    dwFlags: KEYBD_EVENT_FLAGS(flags.bits()),
                    time: 0,
                    dwExtraInfo: extra_info,
                },
            },
        },
        InputRecord::Mouse { dx, dy, data, flags } => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    mouseData: data,
                    dwFlags: MOUSE_EVENT_FLAGS(flags.bits()),
                    time: 0,
                    dwExtraInfo: extra_info,
                },
            },
        },
    }
}

/// Submits one batch of records in a single `SendInput` call and returns
/// the number of events the OS accepted.
pub fn send_input(records: &[InputRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let inputs: Vec<INPUT> = records.iter().map(to_native).collect();
    unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) }
}

/// Presses every key in `keys` as one batch, holds them for `hold`
/// (blocking the calling thread), then releases them as a second batch.
///
/// Returns the release submission's accepted count; 0 means the OS fully
/// rejected the batch. An empty key set performs no OS call and returns 0.
pub fn send_keys(keys: &[VirtualKey], hold: Duration) -> u32 {
    let mut records: Vec<InputRecord> =
        keys.iter().map(|&key| InputRecord::key_down(key)).collect();
    press_hold_release(&mut records, hold, send_input)
}

/// Types `text` by sending each UTF-16 code unit as a character event,
/// with the same two-phase press/hold/release protocol as [`send_keys`].
///
/// Character events bypass the keyboard layout entirely, so any text the
/// target can render is deliverable.
pub fn send_unicode_text(text: &str, hold: Duration) -> u32 {
    let mut records: Vec<InputRecord> =
        text.encode_utf16().map(InputRecord::unicode_down).collect();
    press_hold_release(&mut records, hold, send_input)
}

/// Emits one mouse event carrying the given flags at the current cursor
/// position.
pub fn send_mouse_event(flags: MouseEventFlags) -> u32 {
    let position = cursor_position();
    send_input(&[InputRecord::mouse(position.x, position.y, 0, flags)])
}
