use core::sync::atomic::{AtomicBool, Ordering};

use embassy_futures::join::join;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use embassy_time::Duration;
use log::{debug, error};

use crate::{
    config::{SMARTWAKE_KEY_HOLD_MS, STROKE_INPUT_QUEUE_DEPTH},
    control::ControlSwitch,
    dispatch::{ActionDispatcher, KeySink},
    stroke::StrokeController,
    types::{InputEvent, StrokeInput},
};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmartwakeError {
    WorkersAlreadyClaimed,
}

impl SmartwakeError {
    pub fn as_str(self) -> &'static str {
        match self {
            SmartwakeError::WorkersAlreadyClaimed => "workers_already_claimed",
        }
    }
}

/// Recognizer front end, meant to live in a `static`.
///
/// `input_event` is the non-blocking entry point for the touch transport.
/// Events are only accepted while the display is off, the switch is on, and
/// the workers have been claimed.
pub struct Smartwake {
    control: ControlSwitch,
    display_off: AtomicBool,
    input_overflow: AtomicBool,
    workers_claimed: AtomicBool,
    inputs: Channel<CriticalSectionRawMutex, StrokeInput, STROKE_INPUT_QUEUE_DEPTH>,
    dispatcher: ActionDispatcher,
}

impl Smartwake {
    pub const fn new(enabled: bool) -> Self {
        Self {
            control: ControlSwitch::new(enabled),
            display_off: AtomicBool::new(false),
            input_overflow: AtomicBool::new(false),
            workers_claimed: AtomicBool::new(false),
            inputs: Channel::new(),
            dispatcher: ActionDispatcher::new(Duration::from_millis(SMARTWAKE_KEY_HOLD_MS)),
        }
    }

    pub fn control(&self) -> &ControlSwitch {
        &self.control
    }

    pub fn is_display_off(&self) -> bool {
        self.display_off.load(Ordering::Relaxed)
    }

    /// A stroke never spans a display transition: any change drops queued
    /// input and resets the stroke in progress.
    pub fn set_display_off(&self, display_off: bool) {
        let previous = self.display_off.swap(display_off, Ordering::Relaxed);
        if previous == display_off {
            return;
        }
        debug!("smartwake: display_off={}", display_off);
        if self.workers_claimed.load(Ordering::Acquire) {
            self.request_stroke_reset();
        }
    }

    pub fn input_event(&self, event: InputEvent) {
        if !self.is_display_off() || !self.control.is_enabled() {
            return;
        }
        if !self.workers_claimed.load(Ordering::Acquire) {
            return;
        }

        // After a dropped event the stroke is incomplete; reset before resuming.
        if self.input_overflow.load(Ordering::Relaxed) {
            if self.inputs.try_send(StrokeInput::Reset).is_err() {
                return;
            }
            self.input_overflow.store(false, Ordering::Relaxed);
        }
        if self.inputs.try_send(StrokeInput::Event(event)).is_err() {
            self.input_overflow.store(true, Ordering::Relaxed);
            debug!("smartwake: input queue full; dropped {:?}", event);
        }
    }

    /// Hands out the worker half. Succeeds once.
    pub fn workers(&self) -> Result<SmartwakeWorkers<'_>, SmartwakeError> {
        if self.workers_claimed.swap(true, Ordering::AcqRel) {
            let err = SmartwakeError::WorkersAlreadyClaimed;
            error!("smartwake: workers unavailable err={}", err.as_str());
            return Err(err);
        }
        Ok(SmartwakeWorkers { smartwake: self })
    }

    fn request_stroke_reset(&self) {
        while self.inputs.try_receive().is_ok() {}
        self.input_overflow.store(false, Ordering::Relaxed);
        let _ = self.inputs.try_send(StrokeInput::Reset);
    }
}

/// The asynchronous half: stroke tracking and key dispatch.
pub struct SmartwakeWorkers<'a> {
    smartwake: &'a Smartwake,
}

impl SmartwakeWorkers<'_> {
    pub async fn run<S: KeySink>(self, sink: &mut S) {
        let dispatcher = &self.smartwake.dispatcher;
        join(self.stroke_loop(), dispatcher.run(sink)).await;
    }

    async fn stroke_loop(&self) {
        let mut controller = StrokeController::new();
        loop {
            match self.smartwake.inputs.receive().await {
                StrokeInput::Reset => controller.reset(),
                StrokeInput::Event(event) => {
                    if let Some(key) = controller.handle(event) {
                        let _ = self.smartwake.dispatcher.request(key);
                    }
                }
            }
        }
    }
}
