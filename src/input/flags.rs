//! Event flag catalogues for keyboard and mouse input records.
//!
//! Bit values reproduce the Win32 KEYEVENTF_* and MOUSEEVENTF_* layouts
//! verbatim; they cross the native boundary unchanged.

use bitflags::bitflags;

bitflags! {
    /// Keyboard event flags (`KEYBDINPUT.dwFlags`).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct KeyEventFlags: u32 {
        /// The scan code is an extended key prefixed with 0xE0.
        const EXTENDED_KEY = 0x0001;
        /// The key is being released; absent means pressed.
        const KEY_UP = 0x0002;
        /// The scan-code field carries a raw UTF-16 code unit and the
        /// virtual key must be zero.
        const UNICODE = 0x0004;
        /// The scan-code field identifies the key; the virtual key is ignored.
        const SCAN_CODE = 0x0008;
    }
}

bitflags! {
    /// Mouse event flags (`MOUSEINPUT.dwFlags`).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct MouseEventFlags: u32 {
        const MOVE = 0x0001;
        const LEFT_DOWN = 0x0002;
        const LEFT_UP = 0x0004;
        const RIGHT_DOWN = 0x0008;
        const RIGHT_UP = 0x0010;
        const MIDDLE_DOWN = 0x0020;
        const MIDDLE_UP = 0x0040;
        /// An X button press; which one is carried in the data field.
        const X_DOWN = 0x0080;
        const X_UP = 0x0100;
        /// Vertical wheel; the data field holds the movement, 120 per detent.
        const WHEEL = 0x0800;
        const H_WHEEL = 0x1000;
        const MOVE_NO_COALESCE = 0x2000;
        /// Map coordinates to the whole virtual desktop; requires ABSOLUTE.
        const VIRTUAL_DESK = 0x4000;
        /// Treat dx/dy as absolute coordinates instead of relative motion.
        const ABSOLUTE = 0x8000;
    }
}

impl MouseEventFlags {
    /// Rewrites every button-down bit to its matching button-up bit,
    /// leaving movement and wheel bits untouched.
    pub fn to_release(self) -> Self {
        let mut flags = self
            - (Self::LEFT_DOWN | Self::RIGHT_DOWN | Self::MIDDLE_DOWN | Self::X_DOWN);
        if self.contains(Self::LEFT_DOWN) {
            flags |= Self::LEFT_UP;
        }
        if self.contains(Self::RIGHT_DOWN) {
            flags |= Self::RIGHT_UP;
        }
        if self.contains(Self::MIDDLE_DOWN) {
            flags |= Self::MIDDLE_UP;
        }
        if self.contains(Self::X_DOWN) {
            flags |= Self::X_UP;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_flag_bits_match_abi() {
        assert_eq!(KeyEventFlags::EXTENDED_KEY.bits(), 0x0001);
        assert_eq!(KeyEventFlags::KEY_UP.bits(), 0x0002);
        assert_eq!(KeyEventFlags::UNICODE.bits(), 0x0004);
        assert_eq!(KeyEventFlags::SCAN_CODE.bits(), 0x0008);
    }

    #[test]
    fn test_mouse_flag_bits_match_abi() {
        assert_eq!(MouseEventFlags::MOVE.bits(), 0x0001);
        assert_eq!(MouseEventFlags::LEFT_DOWN.bits(), 0x0002);
        assert_eq!(MouseEventFlags::LEFT_UP.bits(), 0x0004);
        assert_eq!(MouseEventFlags::RIGHT_DOWN.bits(), 0x0008);
        assert_eq!(MouseEventFlags::RIGHT_UP.bits(), 0x0010);
        assert_eq!(MouseEventFlags::MIDDLE_DOWN.bits(), 0x0020);
        assert_eq!(MouseEventFlags::MIDDLE_UP.bits(), 0x0040);
        assert_eq!(MouseEventFlags::X_DOWN.bits(), 0x0080);
        assert_eq!(MouseEventFlags::X_UP.bits(), 0x0100);
        assert_eq!(MouseEventFlags::WHEEL.bits(), 0x0800);
        assert_eq!(MouseEventFlags::H_WHEEL.bits(), 0x1000);
        assert_eq!(MouseEventFlags::MOVE_NO_COALESCE.bits(), 0x2000);
        assert_eq!(MouseEventFlags::VIRTUAL_DESK.bits(), 0x4000);
        assert_eq!(MouseEventFlags::ABSOLUTE.bits(), 0x8000);
    }

    #[test]
    fn test_release_swaps_down_bits_for_up_bits() {
        let down = MouseEventFlags::LEFT_DOWN | MouseEventFlags::MIDDLE_DOWN;
        let up = down.to_release();
        assert_eq!(up, MouseEventFlags::LEFT_UP | MouseEventFlags::MIDDLE_UP);
    }

    #[test]
    fn test_release_keeps_motion_bits() {
        let down = MouseEventFlags::MOVE | MouseEventFlags::ABSOLUTE | MouseEventFlags::X_DOWN;
        let up = down.to_release();
        assert_eq!(
            up,
            MouseEventFlags::MOVE | MouseEventFlags::ABSOLUTE | MouseEventFlags::X_UP
        );
    }
}
