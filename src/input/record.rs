//! Input records and the two-phase press/hold/release sequencing core.
//!
//! A record is one synthetic event as submitted to the OS input queue. The
//! native `INPUT` union is only produced at the submission boundary (see
//! `send`); here the record is an ordinary tagged variant.

use std::thread;
use std::time::Duration;

use super::flags::{KeyEventFlags, MouseEventFlags};
use super::keys::VirtualKey;

/// One synthetic input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRecord {
    Keyboard {
        virtual_key: u16,
        /// Hardware scan code, or a raw UTF-16 code unit when the UNICODE
        /// flag is set.
        scan_code: u16,
        flags: KeyEventFlags,
    },
    Mouse {
        dx: i32,
        dy: i32,
        /// Wheel movement or X-button selector, depending on the flags.
        data: i32,
        flags: MouseEventFlags,
    },
}

impl InputRecord {
    /// A key-down record for a virtual key.
    pub fn key_down(key: VirtualKey) -> Self {
        Self::Keyboard {
            virtual_key: key.code(),
            scan_code: 0,
            flags: KeyEventFlags::empty(),
        }
    }

    /// A key-down record carrying a raw UTF-16 code unit. The OS will
    /// synthesize that exact character regardless of keyboard layout, so
    /// the virtual key must stay zero.
    pub fn unicode_down(unit: u16) -> Self {
        Self::Keyboard {
            virtual_key: 0,
            scan_code: unit,
            flags: KeyEventFlags::UNICODE,
        }
    }

    /// A mouse record with explicit coordinates, data, and flags.
    pub fn mouse(dx: i32, dy: i32, data: i32, flags: MouseEventFlags) -> Self {
        Self::Mouse { dx, dy, data, flags }
    }

    /// Re-tags this record with release semantics: key records gain the
    /// KEY_UP flag (keeping UNICODE intact for character records), mouse
    /// records swap each button-down bit for its button-up counterpart.
    pub fn release(&mut self) {
        match self {
            Self::Keyboard { flags, .. } => flags.insert(KeyEventFlags::KEY_UP),
            Self::Mouse { flags, .. } => *flags = flags.to_release(),
        }
    }
}

/// Press/hold/release over one record batch.
///
/// Submits the batch once with press semantics, blocks the calling thread
/// for `hold` (no cancellation), re-tags every record in place with release
/// semantics, and submits again. Returns the release submission's accepted
/// count; an empty batch returns 0 without invoking `submit` at all.
pub(crate) fn press_hold_release<S>(
    records: &mut [InputRecord],
    hold: Duration,
    mut submit: S,
) -> u32
where
    S: FnMut(&[InputRecord]) -> u32,
{
    if records.is_empty() {
        return 0;
    }

    let pressed = submit(records);
    tracing::debug!(batch = records.len(), accepted = pressed, "press batch submitted");

    if !hold.is_zero() {
        thread::sleep(hold);
    }

    for record in records.iter_mut() {
        record.release();
    }
    let released = submit(records);
    tracing::debug!(batch = records.len(), accepted = released, "release batch submitted");
    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_key_down_record_shape() {
        let record = InputRecord::key_down(VirtualKey::A);
        assert_eq!(
            record,
            InputRecord::Keyboard {
                virtual_key: 0x41,
                scan_code: 0,
                flags: KeyEventFlags::empty(),
            }
        );
    }

    #[test]
    fn test_unicode_record_keeps_virtual_key_zero() {
        let mut record = InputRecord::unicode_down('é' as u16);
        let InputRecord::Keyboard { virtual_key, scan_code, flags } = record else {
            panic!("expected keyboard record");
        };
        assert_eq!(virtual_key, 0);
        assert_eq!(scan_code, 0xE9);
        assert_eq!(flags, KeyEventFlags::UNICODE);

        // Releasing a character record keeps the UNICODE tag.
        record.release();
        let InputRecord::Keyboard { flags, .. } = record else {
            panic!("expected keyboard record");
        };
        assert_eq!(flags, KeyEventFlags::UNICODE | KeyEventFlags::KEY_UP);
    }

    #[test]
    fn test_release_retags_key_record() {
        let mut record = InputRecord::key_down(VirtualKey::RETURN);
        record.release();
        assert_eq!(
            record,
            InputRecord::Keyboard {
                virtual_key: 0x0D,
                scan_code: 0,
                flags: KeyEventFlags::KEY_UP,
            }
        );
    }

    #[test]
    fn test_release_retags_mouse_record() {
        let mut record = InputRecord::mouse(5, 7, 0, MouseEventFlags::LEFT_DOWN);
        record.release();
        assert_eq!(record, InputRecord::mouse(5, 7, 0, MouseEventFlags::LEFT_UP));
    }

    #[test]
    fn test_empty_batch_never_touches_the_sink() {
        let mut submissions = 0;
        let accepted = press_hold_release(&mut [], Duration::from_millis(50), |_| {
            submissions += 1;
            1
        });
        assert_eq!(accepted, 0);
        assert_eq!(submissions, 0);
    }

    #[test]
    fn test_two_submissions_press_then_release() {
        let mut records = vec![
            InputRecord::key_down(VirtualKey::CONTROL),
            InputRecord::key_down(VirtualKey::C),
        ];
        let mut phases: Vec<Vec<InputRecord>> = Vec::new();
        let accepted = press_hold_release(&mut records, Duration::ZERO, |batch| {
            phases.push(batch.to_vec());
            batch.len() as u32
        });

        assert_eq!(accepted, 2);
        assert_eq!(phases.len(), 2);
        for record in &phases[0] {
            let InputRecord::Keyboard { flags, .. } = record else {
                panic!("expected keyboard record");
            };
            assert!(!flags.contains(KeyEventFlags::KEY_UP));
        }
        for record in &phases[1] {
            let InputRecord::Keyboard { flags, .. } = record else {
                panic!("expected keyboard record");
            };
            assert!(flags.contains(KeyEventFlags::KEY_UP));
        }
    }

    #[test]
    fn test_hold_blocks_between_submissions() {
        let mut records = vec![InputRecord::key_down(VirtualKey::A)];
        let mut stamps = Vec::new();
        press_hold_release(&mut records, Duration::from_millis(100), |_| {
            stamps.push(Instant::now());
            1
        });
        assert_eq!(stamps.len(), 2);
        assert!(stamps[1] - stamps[0] >= Duration::from_millis(100));
    }

    #[test]
    fn test_release_count_is_what_the_sink_reported() {
        let mut records = vec![InputRecord::key_down(VirtualKey::A)];
        let mut phase = 0;
        let accepted = press_hold_release(&mut records, Duration::ZERO, |_| {
            phase += 1;
            // Press accepted, release fully rejected.
            if phase == 1 { 1 } else { 0 }
        });
        assert_eq!(accepted, 0);
    }
}
