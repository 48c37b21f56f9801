//! Absolute cursor position: read via `GetCursorPos`, move via `SetCursorPos`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(windows)]
use windows::Win32::Foundation::POINT;
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, SetCursorPos};

/// A point in absolute screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(X: {}, Y: {})", self.x, self.y)
    }
}

/// Returns the current cursor position.
///
/// If the query fails, returns `(0, 0)` rather than garbage or an error.
#[cfg(windows)]
pub fn cursor_position() -> ScreenPoint {
    let mut point = POINT::default();
    if let Err(err) = unsafe { GetCursorPos(&mut point) } {
        tracing::warn!(%err, "GetCursorPos failed, reporting (0, 0)");
        return ScreenPoint::new(0, 0);
    }
    ScreenPoint::new(point.x, point.y)
}

/// Asks the OS to move the cursor to `point`.
///
/// Fire-and-forget: a refused move is logged but never surfaced, matching
/// the underlying call's semantics.
#[cfg(windows)]
pub fn set_cursor_position(point: ScreenPoint) {
    if let Err(err) = unsafe { SetCursorPos(point.x, point.y) } {
        tracing::warn!(%err, %point, "SetCursorPos failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality_by_value() {
        assert_eq!(ScreenPoint::new(10, -3), ScreenPoint::new(10, -3));
        assert_ne!(ScreenPoint::new(10, -3), ScreenPoint::new(-3, 10));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(format!("{}", ScreenPoint::new(640, 480)), "(X: 640, Y: 480)");
    }

    #[test]
    fn test_point_serde_round_trip() {
        let point = ScreenPoint::new(1920, 1080);
        let json = serde_json::to_string(&point).expect("serialize");
        let back: ScreenPoint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, back);
    }
}
