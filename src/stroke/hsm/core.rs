use super::*;

use ::core::fmt::Write as _;

use log::debug;

use crate::types::TRACKING_ID_LIFTED;

/// What one input event amounts to once the X/Y halves are paired up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Routed {
    Pending,
    Sample(TouchPoint),
    Lift,
    Abort(ResetReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ResetReason {
    Lift,
    ContactChanged,
    SlotChange,
    BufferFull,
    External,
}

impl ResetReason {
    pub(super) fn as_str(self) -> &'static str {
        match self {
            ResetReason::Lift => "lift",
            ResetReason::ContactChanged => "contact_changed",
            ResetReason::SlotChange => "slot_change",
            ResetReason::BufferFull => "buffer_full",
            ResetReason::External => "external",
        }
    }
}

impl StrokeHsm {
    pub(crate) fn new() -> Self {
        Self {
            active_contact_id: None,
            pending_x: None,
            pending_y: None,
            start_point: None,
            previous_point: TouchPoint::default(),
            end_point: TouchPoint::default(),
            current_octant: None,
            only_gesture_mode: false,
            armed: true,
            buffer: GestureBuffer::new(),
        }
    }

    pub(in crate::stroke) fn is_tracking(&self) -> bool {
        self.start_point.is_some()
    }

    pub(in crate::stroke) fn is_armed(&self) -> bool {
        self.armed
    }

    pub(in crate::stroke) fn buffer(&self) -> &GestureBuffer {
        &self.buffer
    }

    /// Pairs coordinate halves into samples and maps contact bookkeeping
    /// events onto lift/abort.
    pub(super) fn route(&mut self, input: InputEvent) -> Routed {
        match input {
            InputEvent::PositionX(x) => {
                self.pending_x = Some(x);
                self.take_sample()
            }
            InputEvent::PositionY(y) => {
                self.pending_y = Some(y);
                self.take_sample()
            }
            InputEvent::TrackingId(TRACKING_ID_LIFTED) | InputEvent::Lift => Routed::Lift,
            InputEvent::TrackingId(id) => match self.active_contact_id {
                None => {
                    self.active_contact_id = Some(id);
                    Routed::Pending
                }
                Some(active) if active == id => Routed::Pending,
                Some(_) => Routed::Abort(ResetReason::ContactChanged),
            },
            InputEvent::SlotChange => Routed::Abort(ResetReason::SlotChange),
        }
    }

    fn take_sample(&mut self) -> Routed {
        match (self.pending_x, self.pending_y) {
            (Some(x), Some(y)) => {
                self.pending_x = None;
                self.pending_y = None;
                Routed::Sample(TouchPoint::new(x, y))
            }
            _ => Routed::Pending,
        }
    }

    pub(super) fn begin_stroke(&mut self, point: TouchPoint) {
        self.start_point = Some(point);
        self.previous_point = point;
        self.end_point = point;
    }

    pub(super) fn track_sample(
        &mut self,
        context: &mut DispatchContext,
        point: TouchPoint,
    ) -> Result<(), BufferFull> {
        let Some(start) = self.start_point else {
            self.begin_stroke(point);
            return Ok(());
        };
        self.end_point = point;

        let octant = quantize(self.previous_point, point);
        self.previous_point = point;

        if let Some(octant) = octant.filter(|octant| self.current_octant != Some(*octant)) {
            let mut run: heapless::Vec<Octant, 3> = heapless::Vec::new();
            if let Some(old) = self.current_octant {
                // Second distinct direction: this is a shape, not a swipe.
                self.only_gesture_mode = true;
                for fill in corner_fill(old, octant) {
                    let _ = run.push(fill);
                }
            }
            let _ = run.push(octant);

            if let Err(err) = self.buffer.push_run(&run, point) {
                debug!(
                    "smartwake: buffer full len={} run={}",
                    self.buffer.len(),
                    run.len()
                );
                return Err(err);
            }
            self.current_octant = Some(octant);
        }

        if let Some(key) = classify_swipe(start, point, self.only_gesture_mode) {
            self.fire(context, key);
        }
        Ok(())
    }

    pub(super) fn finish_stroke(&mut self, context: &mut DispatchContext) {
        let Some(start) = self.start_point else {
            return;
        };
        let key = classify_shape(&self.buffer, start, self.end_point);
        debug!(
            "smartwake: stroke end octants={} sum={} key={}",
            self.octant_trail().as_str(),
            self.buffer.octant_sum(),
            key.map_or("none", GestureKey::as_str)
        );
        if let Some(key) = key {
            self.fire(context, key);
        }
    }

    /// One-shot latch: only the first resolved key of a stroke is emitted.
    pub(super) fn fire(&mut self, context: &mut DispatchContext, key: GestureKey) {
        if !self.armed {
            return;
        }
        self.armed = false;
        debug!("smartwake: fire key={} code={}", key.as_str(), key.code());
        context.emit(key);
    }

    pub(super) fn reset(&mut self, reason: ResetReason) {
        if self.is_tracking() {
            debug!(
                "smartwake: reset reason={} octants={} armed={}",
                reason.as_str(),
                self.buffer.len(),
                self.armed
            );
        }
        *self = Self::new();
    }

    fn octant_trail(&self) -> heapless::String<64> {
        let mut trail = heapless::String::new();
        for (i, octant) in self.buffer.octants().enumerate() {
            let sep = if i == 0 { "" } else { "," };
            let _ = write!(&mut trail, "{}{}", sep, octant.label());
        }
        trail
    }
}
