/// Input: keyboard keys the controller reacts to, as a bitfield.

use bitflags::bitflags;
use winit::keyboard::{KeyCode, PhysicalKey};

bitflags! {
    /// Controller keys currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlKeys: u32 {
        const PAN_LEFT   = 1 << 0;
        const PAN_RIGHT  = 1 << 1;
        const PAN_UP     = 1 << 2;
        const PAN_DOWN   = 1 << 3;
        const ZOOM_IN    = 1 << 4;
        const ZOOM_OUT   = 1 << 5;
        /// A: free camera
        const MODE_UNBOUND = 1 << 6;
        /// S: whole world region
        const MODE_TOTAL   = 1 << 7;
        /// D: coarse grid cells
        const MODE_COARSE  = 1 << 8;
        /// F: fine grid cells
        const MODE_FINE    = 1 << 9;

        const PAN  = Self::PAN_LEFT.bits() | Self::PAN_RIGHT.bits()
                   | Self::PAN_UP.bits() | Self::PAN_DOWN.bits();
        const ZOOM = Self::ZOOM_IN.bits() | Self::ZOOM_OUT.bits();
        const MODE = Self::MODE_UNBOUND.bits() | Self::MODE_TOTAL.bits()
                   | Self::MODE_COARSE.bits() | Self::MODE_FINE.bits();
    }
}

impl ControlKeys {
    /// Map a physical key to its control, if the controller uses it.
    pub fn from_physical_key(key: PhysicalKey) -> Option<Self> {
        match key {
            PhysicalKey::Code(code) => Self::from_key_code(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let control = match code {
            KeyCode::ArrowLeft => Self::PAN_LEFT,
            KeyCode::ArrowRight => Self::PAN_RIGHT,
            KeyCode::ArrowUp => Self::PAN_UP,
            KeyCode::ArrowDown => Self::PAN_DOWN,
            KeyCode::PageUp => Self::ZOOM_IN,
            KeyCode::PageDown => Self::ZOOM_OUT,
            KeyCode::KeyA => Self::MODE_UNBOUND,
            KeyCode::KeyS => Self::MODE_TOTAL,
            KeyCode::KeyD => Self::MODE_COARSE,
            KeyCode::KeyF => Self::MODE_FINE,
            _ => return None,
        };
        Some(control)
    }
}
