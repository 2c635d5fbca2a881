use core::{
    fmt::Write as _,
    sync::atomic::{AtomicBool, Ordering},
};

use log::info;

use crate::config::SMARTWAKE_VERSION;

pub type AttrText = heapless::String<8>;

/// Text-attribute control surface: the enable switch and the version string.
pub struct ControlSwitch {
    enabled: AtomicBool,
}

impl ControlSwitch {
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            info!("smartwake: switch enabled={}", enabled);
        }
    }

    /// Reads the switch as `"0\n"` or `"1\n"`.
    pub fn show(&self) -> AttrText {
        let mut out = AttrText::new();
        let _ = writeln!(&mut out, "{}", u8::from(self.is_enabled()));
        out
    }

    /// Accepts exactly `b"0\n"` or `b"1\n"`; anything else is ignored.
    /// Always reports the whole buffer as consumed.
    pub fn store(&self, buf: &[u8]) -> usize {
        match buf {
            [b'0', b'\n'] => self.set_enabled(false),
            [b'1', b'\n'] => self.set_enabled(true),
            _ => {}
        }
        buf.len()
    }

    pub fn show_version(&self) -> AttrText {
        let mut out = AttrText::new();
        let _ = writeln!(&mut out, "{}", SMARTWAKE_VERSION);
        out
    }

    /// The version attribute is read-only; writes are swallowed.
    pub fn store_version(&self, buf: &[u8]) -> usize {
        buf.len()
    }
}
