use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel, mutex::Mutex};
use embassy_time::{Duration, Timer};
use log::debug;

use crate::types::GestureKey;

/// Outbound seam: whatever turns a resolved gesture into a key event.
pub trait KeySink {
    fn report(&mut self, key: GestureKey, pressed: bool);
}

/// Serializes key presses. A request made while another press is pending or
/// in flight is dropped; the in-flight press always wins.
pub struct ActionDispatcher {
    requests: Channel<CriticalSectionRawMutex, GestureKey, 1>,
    key_lock: Mutex<CriticalSectionRawMutex, ()>,
    hold: Duration,
}

impl ActionDispatcher {
    pub const fn new(hold: Duration) -> Self {
        Self {
            requests: Channel::new(),
            key_lock: Mutex::new(()),
            hold,
        }
    }

    /// Never blocks. Returns `false` when the request was dropped.
    pub fn request(&self, key: GestureKey) -> bool {
        if self.key_lock.try_lock().is_err() {
            debug!("smartwake: drop key={} reason=in_flight", key.as_str());
            return false;
        }
        if self.requests.try_send(key).is_err() {
            debug!("smartwake: drop key={} reason=pending", key.as_str());
            return false;
        }
        true
    }

    /// Worker loop: press, hold, release, hold, one request at a time.
    pub async fn run<S: KeySink>(&self, sink: &mut S) {
        loop {
            let key = self.requests.receive().await;
            let Ok(_in_flight) = self.key_lock.try_lock() else {
                continue;
            };

            sink.report(key, true);
            Timer::after(self.hold).await;
            sink.report(key, false);
            Timer::after(self.hold).await;

            // A request from another context can land between `receive` and
            // `try_lock` and pass both checks in `request`; drop it here.
            while self.requests.try_receive().is_ok() {}
        }
    }
}
