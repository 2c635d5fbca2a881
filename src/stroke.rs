use statig::blocking::IntoStateMachineExt as _;

use crate::types::{GestureKey, InputEvent};

mod buffer;
mod classify;
mod hsm;
mod octant;
mod swipe;
#[cfg(test)]
mod tests;

pub use buffer::{BufferFull, GestureBuffer, GestureEntry};
pub use classify::{classify_shape, is_c, is_e, is_loop, is_m};
pub use octant::{corner_fill, quantize, Octant};
pub use swipe::classify_swipe;

use hsm::StrokeHsm;

#[derive(Clone, Copy, Debug)]
enum StrokeHsmEvent {
    Input(InputEvent),
    Reset,
}

#[derive(Clone, Copy, Debug, Default)]
struct DispatchContext {
    action: Option<GestureKey>,
}

impl DispatchContext {
    fn emit(&mut self, key: GestureKey) {
        if self.action.is_none() {
            self.action = Some(key);
        }
    }
}

/// Single-contact stroke tracker.
///
/// Feed it raw input events in delivery order; it returns the action resolved
/// by that event, if any. At most one action is returned per stroke.
pub struct StrokeController {
    machine: statig::blocking::StateMachine<StrokeHsm>,
}

impl Default for StrokeController {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeController {
    pub fn new() -> Self {
        Self {
            machine: StrokeHsm::new().state_machine(),
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<GestureKey> {
        self.dispatch(StrokeHsmEvent::Input(event))
    }

    /// Drops the stroke in progress without classifying it.
    pub fn reset(&mut self) {
        let _ = self.dispatch(StrokeHsmEvent::Reset);
    }

    pub fn is_tracking(&self) -> bool {
        self.machine.inner().is_tracking()
    }

    /// `false` once this stroke has produced its action.
    pub fn is_armed(&self) -> bool {
        self.machine.inner().is_armed()
    }

    pub fn buffer(&self) -> &GestureBuffer {
        self.machine.inner().buffer()
    }

    fn dispatch(&mut self, event: StrokeHsmEvent) -> Option<GestureKey> {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        context.action
    }
}
