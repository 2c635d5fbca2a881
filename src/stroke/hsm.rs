use super::*;
use statig::prelude::*;

mod core;

use self::core::{ResetReason, Routed};

use crate::types::TouchPoint;

pub(super) struct StrokeHsm {
    active_contact_id: Option<i32>,
    pending_x: Option<i32>,
    pending_y: Option<i32>,
    start_point: Option<TouchPoint>,
    previous_point: TouchPoint,
    end_point: TouchPoint,
    current_octant: Option<Octant>,
    only_gesture_mode: bool,
    armed: bool,
    buffer: GestureBuffer,
}

#[state_machine(initial = "State::idle()")]
impl StrokeHsm {
    #[state(superstate = "contact")]
    fn idle(&mut self, context: &mut DispatchContext, event: &StrokeHsmEvent) -> Outcome<State> {
        let _ = context;
        let StrokeHsmEvent::Input(input) = event else {
            return Super;
        };
        match self.route(*input) {
            Routed::Pending => Handled,
            Routed::Sample(point) => {
                self.begin_stroke(point);
                Transition(State::tracking())
            }
            // Nothing recorded yet; a lift only clears the contact id.
            Routed::Lift => {
                self.reset(ResetReason::Lift);
                Handled
            }
            Routed::Abort(reason) => {
                self.reset(reason);
                Handled
            }
        }
    }

    #[state(superstate = "contact")]
    fn tracking(
        &mut self,
        context: &mut DispatchContext,
        event: &StrokeHsmEvent,
    ) -> Outcome<State> {
        let StrokeHsmEvent::Input(input) = event else {
            return Super;
        };
        match self.route(*input) {
            Routed::Pending => Handled,
            Routed::Sample(point) => match self.track_sample(context, point) {
                Ok(()) => Handled,
                Err(BufferFull) => {
                    self.reset(ResetReason::BufferFull);
                    Transition(State::idle())
                }
            },
            Routed::Lift => {
                self.finish_stroke(context);
                self.reset(ResetReason::Lift);
                Transition(State::idle())
            }
            Routed::Abort(reason) => {
                self.reset(reason);
                Transition(State::idle())
            }
        }
    }

    #[superstate]
    fn contact(&mut self, context: &mut DispatchContext, event: &StrokeHsmEvent) -> Outcome<State> {
        let _ = context;
        match event {
            StrokeHsmEvent::Reset => {
                self.reset(ResetReason::External);
                Transition(State::idle())
            }
            StrokeHsmEvent::Input(_) => Handled,
        }
    }
}
