use crate::{config::MAX_GESTURES, types::TouchPoint};

use super::octant::Octant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureEntry {
    pub octant: Octant,
    /// Touch position when the octant was recorded.
    pub point: TouchPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferFull;

/// Octants recorded for one stroke, in drawing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureBuffer {
    entries: heapless::Vec<GestureEntry, MAX_GESTURES>,
}

impl GestureBuffer {
    pub const fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
        }
    }

    /// Appends a whole run (corner fill plus the new octant) at `point`.
    ///
    /// The run is all-or-nothing: if it does not fit, nothing is written.
    pub fn push_run(&mut self, run: &[Octant], point: TouchPoint) -> Result<(), BufferFull> {
        if self.entries.len() + run.len() > MAX_GESTURES {
            return Err(BufferFull);
        }
        for &octant in run {
            self.entries
                .push(GestureEntry { octant, point })
                .map_err(|_| BufferFull)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GestureEntry] {
        &self.entries
    }

    pub fn octants(&self) -> impl Iterator<Item = Octant> + '_ {
        self.entries.iter().map(|entry| entry.octant)
    }

    pub fn octant_sum(&self) -> u32 {
        self.octants().map(|octant| u32::from(octant.bits())).sum()
    }
}
