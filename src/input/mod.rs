//! Synthetic input: key and flag catalogues, input records, and batched
//! submission to the OS input queue.

pub mod flags;
pub mod keys;
pub mod record;
#[cfg(windows)]
pub mod send;

pub use flags::{KeyEventFlags, MouseEventFlags};
pub use keys::VirtualKey;
pub use record::InputRecord;

#[cfg(windows)]
pub use send::{send_input, send_keys, send_mouse_event, send_unicode_text};
