//! Last-pressed-key latch with transition tracking.

/// One key on the 16-key pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Key {
    K0 = 0x0,
    K1 = 0x1,
    K2 = 0x2,
    K3 = 0x3,
    K4 = 0x4,
    K5 = 0x5,
    K6 = 0x6,
    K7 = 0x7,
    K8 = 0x8,
    K9 = 0x9,
    KA = 0xA,
    KB = 0xB,
    KC = 0xC,
    KD = 0xD,
    KE = 0xE,
    KF = 0xF,
}

impl Key {
    /// Ordered list of all pad keys.
    pub const ALL: [Self; 16] = [
        Self::K0,
        Self::K1,
        Self::K2,
        Self::K3,
        Self::K4,
        Self::K5,
        Self::K6,
        Self::K7,
        Self::K8,
        Self::K9,
        Self::KA,
        Self::KB,
        Self::KC,
        Self::KD,
        Self::KE,
        Self::KF,
    ];

    /// Decodes a 4-bit key code.
    #[must_use]
    pub const fn from_u4(code: u8) -> Option<Self> {
        if code <= 0xF {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// The key's 4-bit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Tracks the most recently reported key press.
///
/// The latch keeps the current and previous key codes plus a transition flag
/// raised whenever a newly reported key differs from the previous one. The
/// flag drives both the conditional key skips and the blocking wait
/// instruction, and is cleared once per step by the host so the wait cannot
/// re-trigger on a stale press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLatch {
    current: Key,
    previous: Key,
    transition: bool,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatch {
    /// Creates a latch with both key slots on `K0` and no transition.
    ///
    /// A first press of `K0` therefore does not register a transition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Key::K0,
            previous: Key::K0,
            transition: false,
        }
    }

    /// Registers a key press reported by the host.
    pub const fn register_key_press(&mut self, key: Key) {
        self.previous = self.current;
        self.current = key;
        if self.current as u8 != self.previous as u8 {
            self.transition = true;
        }
    }

    /// The currently latched key.
    #[must_use]
    pub const fn current(&self) -> Key {
        self.current
    }

    /// Whether `code` names the currently latched key.
    ///
    /// Register values above `0xF` never match.
    #[must_use]
    pub const fn is_latched(&self, code: u8) -> bool {
        self.current.code() == code
    }

    /// Whether a key transition occurred since the last clear.
    #[must_use]
    pub const fn has_transition(&self) -> bool {
        self.transition
    }

    /// Clears the transition flag; the host calls this once per step.
    pub const fn clear_transition(&mut self) {
        self.transition = false;
    }
}
