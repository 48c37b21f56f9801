//! The virtual-key catalogue and the hardware scan-code table.
//!
//! Numeric values reproduce the OS's official assignments verbatim. The
//! table contains intentional aliases (Kana/Hangul share 0x15, Hanja/Kanji
//! share 0x19), so the catalogue is a newtype with associated constants
//! rather than an enum; a single name table backs both lookup directions,
//! with the first entry winning for an aliased code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An OS-defined symbolic identifier for a key, independent of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualKey(pub u16);

macro_rules! virtual_keys {
    ($($(#[$meta:meta])* $name:ident = $value:literal;)*) => {
        impl VirtualKey {
            $( $(#[$meta])* pub const $name: Self = Self($value); )*
        }

        /// Every catalogued key, in OS numeric order. Aliased codes appear
        /// once per symbol; the first entry is the canonical name.
        pub const VIRTUAL_KEY_NAMES: &[(u16, &str)] = &[
            $( ($value, stringify!($name)), )*
        ];
    };
}

virtual_keys! {
    /// Left mouse button
    LBUTTON = 0x01;
    /// Right mouse button
    RBUTTON = 0x02;
    /// Control-break processing
    CANCEL = 0x03;
    /// Middle mouse button
    MBUTTON = 0x04;
    /// X1 mouse button
    XBUTTON1 = 0x05;
    /// X2 mouse button
    XBUTTON2 = 0x06;
    /// BACKSPACE key
    BACK = 0x08;
    TAB = 0x09;
    CLEAR = 0x0C;
    /// ENTER key
    RETURN = 0x0D;
    SHIFT = 0x10;
    /// CTRL key
    CONTROL = 0x11;
    /// ALT key
    MENU = 0x12;
    PAUSE = 0x13;
    /// CAPS LOCK key
    CAPITAL = 0x14;
    /// IME Kana mode
    KANA = 0x15;
    /// IME Hangul mode (aliases KANA)
    HANGUL = 0x15;
    IME_ON = 0x16;
    /// IME Junja mode
    JUNJA = 0x17;
    /// IME final mode
    FINAL = 0x18;
    /// IME Hanja mode
    HANJA = 0x19;
    /// IME Kanji mode (aliases HANJA)
    KANJI = 0x19;
    IME_OFF = 0x1A;
    ESCAPE = 0x1B;
    /// IME convert
    CONVERT = 0x1C;
    /// IME nonconvert
    NONCONVERT = 0x1D;
    /// IME accept
    ACCEPT = 0x1E;
    /// IME mode change request
    MODECHANGE = 0x1F;
    SPACE = 0x20;
    /// PAGE UP key
    PRIOR = 0x21;
    /// PAGE DOWN key
    NEXT = 0x22;
    END = 0x23;
    HOME = 0x24;
    LEFT = 0x25;
    UP = 0x26;
    RIGHT = 0x27;
    DOWN = 0x28;
    SELECT = 0x29;
    PRINT = 0x2A;
    EXECUTE = 0x2B;
    /// PRINT SCREEN key
    SNAPSHOT = 0x2C;
    INSERT = 0x2D;
    DELETE = 0x2E;
    HELP = 0x2F;
    KEY_0 = 0x30;
    KEY_1 = 0x31;
    KEY_2 = 0x32;
    KEY_3 = 0x33;
    KEY_4 = 0x34;
    KEY_5 = 0x35;
    KEY_6 = 0x36;
    KEY_7 = 0x37;
    KEY_8 = 0x38;
    KEY_9 = 0x39;
    A = 0x41;
    B = 0x42;
    C = 0x43;
    D = 0x44;
    E = 0x45;
    F = 0x46;
    G = 0x47;
    H = 0x48;
    I = 0x49;
    J = 0x4A;
    K = 0x4B;
    L = 0x4C;
    M = 0x4D;
    N = 0x4E;
    O = 0x4F;
    P = 0x50;
    Q = 0x51;
    R = 0x52;
    S = 0x53;
    T = 0x54;
    U = 0x55;
    V = 0x56;
    W = 0x57;
    X = 0x58;
    Y = 0x59;
    Z = 0x5A;
    /// Left Windows key
    LWIN = 0x5B;
    /// Right Windows key
    RWIN = 0x5C;
    /// Applications key
    APPS = 0x5D;
    /// Computer Sleep key
    SLEEP = 0x5F;
    NUMPAD0 = 0x60;
    NUMPAD1 = 0x61;
    NUMPAD2 = 0x62;
    NUMPAD3 = 0x63;
    NUMPAD4 = 0x64;
    NUMPAD5 = 0x65;
    NUMPAD6 = 0x66;
    NUMPAD7 = 0x67;
    NUMPAD8 = 0x68;
    NUMPAD9 = 0x69;
    MULTIPLY = 0x6A;
    ADD = 0x6B;
    SEPARATOR = 0x6C;
    SUBTRACT = 0x6D;
    DECIMAL = 0x6E;
    DIVIDE = 0x6F;
    F1 = 0x70;
    F2 = 0x71;
    F3 = 0x72;
    F4 = 0x73;
    F5 = 0x74;
    F6 = 0x75;
    F7 = 0x76;
    F8 = 0x77;
    F9 = 0x78;
    F10 = 0x79;
    F11 = 0x7A;
    F12 = 0x7B;
    F13 = 0x7C;
    F14 = 0x7D;
    F15 = 0x7E;
    F16 = 0x7F;
    F17 = 0x80;
    F18 = 0x81;
    F19 = 0x82;
    F20 = 0x83;
    F21 = 0x84;
    F22 = 0x85;
    F23 = 0x86;
    F24 = 0x87;
    NUMLOCK = 0x90;
    /// SCROLL LOCK key
    SCROLL = 0x91;
    LSHIFT = 0xA0;
    RSHIFT = 0xA1;
    LCONTROL = 0xA2;
    RCONTROL = 0xA3;
    /// Left ALT key
    LMENU = 0xA4;
    /// Right ALT key
    RMENU = 0xA5;
    BROWSER_BACK = 0xA6;
    BROWSER_FORWARD = 0xA7;
    BROWSER_REFRESH = 0xA8;
    BROWSER_STOP = 0xA9;
    BROWSER_SEARCH = 0xAA;
    BROWSER_FAVORITES = 0xAB;
    BROWSER_HOME = 0xAC;
    VOLUME_MUTE = 0xAD;
    VOLUME_DOWN = 0xAE;
    VOLUME_UP = 0xAF;
    MEDIA_NEXT_TRACK = 0xB0;
    MEDIA_PREV_TRACK = 0xB1;
    MEDIA_STOP = 0xB2;
    MEDIA_PLAY_PAUSE = 0xB3;
    LAUNCH_MAIL = 0xB4;
    LAUNCH_MEDIA_SELECT = 0xB5;
    LAUNCH_APP1 = 0xB6;
    LAUNCH_APP2 = 0xB7;
    /// Varies by keyboard; `;:` on the US layout
    OEM_1 = 0xBA;
    /// The `+` key on any layout
    OEM_PLUS = 0xBB;
    /// The `,` key on any layout
    OEM_COMMA = 0xBC;
    /// The `-` key on any layout
    OEM_MINUS = 0xBD;
    /// The `.` key on any layout
    OEM_PERIOD = 0xBE;
    /// Varies by keyboard; `/?` on the US layout
    OEM_2 = 0xBF;
    /// Varies by keyboard; `` `~ `` on the US layout
    OEM_3 = 0xC0;
    /// Varies by keyboard; `[{` on the US layout
    OEM_4 = 0xDB;
    /// Varies by keyboard; `\|` on the US layout
    OEM_5 = 0xDC;
    /// Varies by keyboard; `]}` on the US layout
    OEM_6 = 0xDD;
    /// Varies by keyboard; `'"` on the US layout
    OEM_7 = 0xDE;
    OEM_8 = 0xDF;
    /// `<>` on the US layout, `\|` on the non-US 102-key layout
    OEM_102 = 0xE2;
    /// IME PROCESS key
    PROCESSKEY = 0xE5;
    /// Carrier for Unicode code units sent as keystrokes
    PACKET = 0xE7;
    ATTN = 0xF6;
    CRSEL = 0xF7;
    EXSEL = 0xF8;
    /// Erase EOF key
    EREOF = 0xF9;
    PLAY = 0xFA;
    ZOOM = 0xFB;
    /// Reserved
    NONAME = 0xFC;
    PA1 = 0xFD;
    OEM_CLEAR = 0xFE;
}

impl VirtualKey {
    /// The OS numeric code.
    pub const fn code(self) -> u16 {
        self.0
    }

    /// The canonical symbolic name, or `None` for an uncatalogued code.
    ///
    /// For aliased codes this is the first symbol in the table.
    pub fn name(self) -> Option<&'static str> {
        VIRTUAL_KEY_NAMES
            .iter()
            .find(|&&(code, _)| code == self.0)
            .map(|&(_, name)| name)
    }

    /// Resolves a symbolic name (alias names included) back to its key.
    pub fn from_name(name: &str) -> Option<Self> {
        VIRTUAL_KEY_NAMES
            .iter()
            .find(|&&(_, candidate)| candidate == name)
            .map(|&(code, _)| Self(code))
    }

    /// The US-layout set-1 hardware scan code for this key, or 0 when the
    /// key has no fixed physical position.
    pub const fn scan_code(self) -> u16 {
        match self.0 {
            0x03 => 70,  // CANCEL
            0x08 => 14,  // BACK
            0x09 => 15,  // TAB
            0x0C => 76,  // CLEAR
            0x0D => 28,  // RETURN
            0x10 => 42,  // SHIFT
            0x11 => 29,  // CONTROL
            0x12 => 56,  // MENU
            0x14 => 58,  // CAPITAL
            0x1B => 1,   // ESCAPE
            0x20 => 57,  // SPACE
            0x21 => 73,  // PRIOR
            0x22 => 81,  // NEXT
            0x23 => 79,  // END
            0x24 => 71,  // HOME
            0x25 => 75,  // LEFT
            0x26 => 72,  // UP
            0x27 => 77,  // RIGHT
            0x28 => 80,  // DOWN
            0x2C => 84,  // SNAPSHOT
            0x2D => 82,  // INSERT
            0x2E => 83,  // DELETE
            0x2F => 99,  // HELP
            0x30 => 11,  // KEY_0
            0x31 => 2,   // KEY_1
            0x32 => 3,   // KEY_2
            0x33 => 4,   // KEY_3
            0x34 => 5,   // KEY_4
            0x35 => 6,   // KEY_5
            0x36 => 7,   // KEY_6
            0x37 => 8,   // KEY_7
            0x38 => 9,   // KEY_8
            0x39 => 10,  // KEY_9
            0x41 => 30,  // A
            0x42 => 48,  // B
            0x43 => 46,  // C
            0x44 => 32,  // D
            0x45 => 18,  // E
            0x46 => 33,  // F
            0x47 => 34,  // G
            0x48 => 35,  // H
            0x49 => 23,  // I
            0x4A => 36,  // J
            0x4B => 37,  // K
            0x4C => 38,  // L
            0x4D => 50,  // M
            0x4E => 49,  // N
            0x4F => 24,  // O
            0x50 => 25,  // P
            0x51 => 16,  // Q
            0x52 => 19,  // R
            0x53 => 31,  // S
            0x54 => 20,  // T
            0x55 => 22,  // U
            0x56 => 47,  // V
            0x57 => 17,  // W
            0x58 => 45,  // X
            0x59 => 21,  // Y
            0x5A => 44,  // Z
            0x5B => 91,  // LWIN
            0x5C => 92,  // RWIN
            0x5D => 93,  // APPS
            0x5F => 95,  // SLEEP
            0x60 => 82,  // NUMPAD0
            0x61 => 79,  // NUMPAD1
            0x62 => 80,  // NUMPAD2
            0x63 => 81,  // NUMPAD3
            0x64 => 75,  // NUMPAD4
            0x65 => 76,  // NUMPAD5
            0x66 => 77,  // NUMPAD6
            0x67 => 71,  // NUMPAD7
            0x68 => 72,  // NUMPAD8
            0x69 => 73,  // NUMPAD9
            0x6A => 55,  // MULTIPLY
            0x6B => 78,  // ADD
            0x6D => 74,  // SUBTRACT
            0x6E => 83,  // DECIMAL
            0x6F => 53,  // DIVIDE
            0x70 => 59,  // F1
            0x71 => 60,  // F2
            0x72 => 61,  // F3
            0x73 => 62,  // F4
            0x74 => 63,  // F5
            0x75 => 64,  // F6
            0x76 => 65,  // F7
            0x77 => 66,  // F8
            0x78 => 67,  // F9
            0x79 => 68,  // F10
            0x7A => 87,  // F11
            0x7B => 88,  // F12
            0x7C => 100, // F13
            0x7D => 101, // F14
            0x7E => 102, // F15
            0x7F => 103, // F16
            0x80 => 104, // F17
            0x81 => 105, // F18
            0x82 => 106, // F19
            0x83 => 107, // F20
            0x84 => 108, // F21
            0x85 => 109, // F22
            0x86 => 110, // F23
            0x87 => 118, // F24
            0x90 => 69,  // NUMLOCK
            0x91 => 70,  // SCROLL
            0xA0 => 42,  // LSHIFT
            0xA1 => 54,  // RSHIFT
            0xA2 => 29,  // LCONTROL
            0xA3 => 29,  // RCONTROL
            0xA4 => 56,  // LMENU
            0xA5 => 56,  // RMENU
            0xA6 => 106, // BROWSER_BACK
            0xA7 => 105, // BROWSER_FORWARD
            0xA8 => 103, // BROWSER_REFRESH
            0xA9 => 104, // BROWSER_STOP
            0xAA => 101, // BROWSER_SEARCH
            0xAB => 102, // BROWSER_FAVORITES
            0xAC => 50,  // BROWSER_HOME
            0xAD => 32,  // VOLUME_MUTE
            0xAE => 46,  // VOLUME_DOWN
            0xAF => 48,  // VOLUME_UP
            0xB0 => 25,  // MEDIA_NEXT_TRACK
            0xB1 => 16,  // MEDIA_PREV_TRACK
            0xB2 => 36,  // MEDIA_STOP
            0xB3 => 34,  // MEDIA_PLAY_PAUSE
            0xB4 => 108, // LAUNCH_MAIL
            0xB5 => 109, // LAUNCH_MEDIA_SELECT
            0xB6 => 107, // LAUNCH_APP1
            0xB7 => 33,  // LAUNCH_APP2
            0xBA => 39,  // OEM_1
            0xBB => 13,  // OEM_PLUS
            0xBC => 51,  // OEM_COMMA
            0xBD => 12,  // OEM_MINUS
            0xBE => 52,  // OEM_PERIOD
            0xBF => 53,  // OEM_2
            0xC0 => 41,  // OEM_3
            0xDB => 26,  // OEM_4
            0xDC => 43,  // OEM_5
            0xDD => 27,  // OEM_6
            0xDE => 40,  // OEM_7
            0xE2 => 86,  // OEM_102
            0xF9 => 93,  // EREOF
            0xFB => 98,  // ZOOM
            _ => 0,
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_spot_check_official_codes() {
        assert_eq!(VirtualKey::RETURN.code(), 0x0D);
        assert_eq!(VirtualKey::SPACE.code(), 0x20);
        assert_eq!(VirtualKey::A.code(), 0x41);
        assert_eq!(VirtualKey::KEY_9.code(), 0x39);
        assert_eq!(VirtualKey::F24.code(), 0x87);
        assert_eq!(VirtualKey::LSHIFT.code(), 0xA0);
        assert_eq!(VirtualKey::OEM_CLEAR.code(), 0xFE);
    }

    #[test]
    fn test_every_name_resolves_to_its_code() {
        for &(code, name) in VIRTUAL_KEY_NAMES {
            let key = VirtualKey::from_name(name).expect(name);
            assert_eq!(key.code(), code, "{name}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for &(_, name) in VIRTUAL_KEY_NAMES {
            assert!(seen.insert(name), "duplicate symbol {name}");
        }
    }

    #[test]
    fn test_only_known_aliases_share_a_code() {
        let mut by_code: Vec<(u16, &str)> = VIRTUAL_KEY_NAMES.to_vec();
        by_code.sort_by_key(|&(code, _)| code);
        for window in by_code.windows(2) {
            let (a, b) = (window[0], window[1]);
            if a.0 == b.0 {
                let pair = (a.1, b.1);
                assert!(
                    pair == ("KANA", "HANGUL") || pair == ("HANJA", "KANJI"),
                    "unexpected alias {pair:?}"
                );
            }
        }
    }

    #[test]
    fn test_aliased_code_names_the_first_symbol() {
        assert_eq!(VirtualKey::HANGUL.name(), Some("KANA"));
        assert_eq!(VirtualKey::KANJI.name(), Some("HANJA"));
        assert_eq!(VirtualKey::from_name("HANGUL"), Some(VirtualKey::KANA));
    }

    #[test]
    fn test_uncatalogued_code_has_no_name() {
        assert_eq!(VirtualKey(0x07).name(), None);
        assert_eq!(format!("{}", VirtualKey(0x07)), "0x07");
    }

    #[test]
    fn test_scan_codes_for_typing_keys() {
        assert_eq!(VirtualKey::A.scan_code(), 30);
        assert_eq!(VirtualKey::ESCAPE.scan_code(), 1);
        assert_eq!(VirtualKey::RETURN.scan_code(), 28);
        assert_eq!(VirtualKey::F1.scan_code(), 59);
        assert_eq!(VirtualKey::SPACE.scan_code(), 57);
    }

    #[test]
    fn test_keys_without_physical_position_scan_to_zero() {
        assert_eq!(VirtualKey::LBUTTON.scan_code(), 0);
        assert_eq!(VirtualKey::PAUSE.scan_code(), 0);
        assert_eq!(VirtualKey::PACKET.scan_code(), 0);
    }

    #[test]
    fn test_modifier_scan_codes_share_generic_position() {
        assert_eq!(VirtualKey::SHIFT.scan_code(), VirtualKey::LSHIFT.scan_code());
        assert_eq!(
            VirtualKey::CONTROL.scan_code(),
            VirtualKey::LCONTROL.scan_code()
        );
        assert_eq!(VirtualKey::MENU.scan_code(), VirtualKey::LMENU.scan_code());
    }
}
