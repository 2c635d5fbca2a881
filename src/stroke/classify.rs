use crate::{
    config::{LOOP_OVERSHOOT_MAX, SHAPE_MIN_SEPARATION},
    types::{GestureKey, TouchPoint},
};

use super::{
    buffer::{GestureBuffer, GestureEntry},
    octant::{is_clockwise_step, is_counterclockwise_step, Octant},
};

const fn sum(octants: &[Octant]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < octants.len() {
        total += octants[i].bits() as u32;
        i += 1;
    }
    total
}

/// Sum of every compass bit: one full turn.
const FULL_CIRCLE: u32 = sum(&Octant::ALL);

// Full or near-full circle drawn as an `e`: (octant count, octant sum).
const E_CHECKPOINTS: [(usize, u32); 3] = [
    (9, FULL_CIRCLE + Octant::E.bits() as u32),
    (8, FULL_CIRCLE),
    (7, FULL_CIRCLE - Octant::E.bits() as u32),
];

// Running-sum values that close the first valley of an M.
const M_VALLEY_SUMS: [u32; 2] = [199, 195];
// Running sum after the trailing leg's E step; the scan returns to the zig-zag phase.
const M_TRAILING_RESUME_SUM: u32 = 328;
// (running sum, pair index) pairs at which an M is complete. Empirical.
const M_CHECKPOINTS: [(u32, usize); 8] = [
    (398, 9),
    (394, 8),
    (334, 8),
    (330, 7),
    (529, 12),
    (525, 11),
    (465, 11),
    (461, 10),
];

// Valid left-opening arcs: left, left-down, down, right-down[, right].
const C_ARCS: [u32; 4] = [
    sum(&[Octant::W, Octant::SW, Octant::S, Octant::SE, Octant::E]),
    sum(&[Octant::SW, Octant::S, Octant::SE, Octant::E]),
    sum(&[Octant::W, Octant::SW, Octant::S, Octant::SE]),
    sum(&[Octant::SW, Octant::S, Octant::SE]),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    Unknown,
    Counterclockwise,
    Clockwise,
}

fn bits(octant: Octant) -> u32 {
    u32::from(octant.bits())
}

fn is_separated(start: TouchPoint, end: TouchPoint) -> bool {
    end.x.saturating_sub(start.x).saturating_abs() > SHAPE_MIN_SEPARATION
        && end.y.saturating_sub(start.y).saturating_abs() > SHAPE_MIN_SEPARATION
}

/// Runs the shape matchers in priority order; the first match wins.
pub fn classify_shape(
    buffer: &GestureBuffer,
    start: TouchPoint,
    end: TouchPoint,
) -> Option<GestureKey> {
    let entries = buffer.entries();
    let count = entries.len();

    if count > 8 && is_loop(entries, end) {
        return Some(GestureKey::O);
    }
    if count > 6 {
        if !is_separated(start, end) {
            return None;
        }
        if is_e(count, buffer.octant_sum()) {
            return Some(GestureKey::E);
        }
        if is_m(entries) {
            return Some(GestureKey::M);
        }
        return None;
    }
    if is_c(entries) {
        return Some(GestureKey::C);
    }
    None
}

/// Closed loop with one consistent rotation sense.
///
/// The first turn locks the rotation; turns against it are skipped. Matches
/// once the traversed octants add up to a full circle, unless the stroke ends
/// well below the loop's lowest recorded point.
pub fn is_loop(entries: &[GestureEntry], end: TouchPoint) -> bool {
    let mut rotation = Rotation::Unknown;
    let mut total = 0u32;
    // Screen Y grows downward, so the lowest point has the largest y.
    let mut lowest_y = 0i32;

    for (i, pair) in entries.windows(2).enumerate() {
        let (from, to) = (pair[0].octant, pair[1].octant);
        let step = if is_counterclockwise_step(from, to) && rotation != Rotation::Clockwise {
            Some(Rotation::Counterclockwise)
        } else if is_clockwise_step(from, to) && rotation != Rotation::Counterclockwise {
            Some(Rotation::Clockwise)
        } else {
            None
        };
        if let Some(step) = step {
            rotation = step;
            total += bits(from);
            lowest_y = lowest_y.max(entries[i].point.y);
        }

        if total == FULL_CIRCLE && end.y < lowest_y.saturating_add(LOOP_OVERSHOOT_MAX) {
            return true;
        }
        if total > FULL_CIRCLE {
            return false;
        }
    }
    false
}

pub fn is_e(count: usize, octant_sum: u32) -> bool {
    E_CHECKPOINTS.contains(&(count, octant_sum))
}

/// Two-phase M scanner: a zig-zag up to the valley, then the trailing leg.
pub fn is_m(entries: &[GestureEntry]) -> bool {
    let count = entries.len();
    let mut total = 0u32;
    let mut trailing_leg = false;
    let mut i = 0usize;

    while i + 1 < count {
        let (from, to) = (entries[i].octant, entries[i + 1].octant);

        if !trailing_leg && (is_clockwise_step(from, to) || (from == Octant::S && to == Octant::N))
        {
            total += bits(from);
            if i + 2 == count {
                total += bits(to);
                i += 1;
            }
        } else if !trailing_leg
            && from == Octant::S
            && to == Octant::SE
            && M_VALLEY_SUMS.contains(&(total + bits(Octant::S)))
        {
            total += bits(from);
            trailing_leg = true;
        } else if trailing_leg
            && ((from == Octant::SE && to == Octant::E) || (from == Octant::E && to == Octant::NE))
        {
            total += bits(from);
            if total == M_TRAILING_RESUME_SUM && from == Octant::E {
                trailing_leg = false;
            }
        }

        if M_CHECKPOINTS.contains(&(total, i)) {
            return true;
        }
        i += 1;
    }
    false
}

/// Counterclockwise arc opening to the right, tracked from the first octant
/// past NW.
pub fn is_c(entries: &[GestureEntry]) -> bool {
    let mut tracking = false;
    let mut total = 0u32;

    for pair in entries.windows(2) {
        let (from, to) = (pair[0].octant, pair[1].octant);
        if from.bits() > Octant::NW.bits() {
            tracking = true;
        }
        if tracking && is_counterclockwise_step(from, to) {
            total += bits(from);
        }
    }
    C_ARCS.contains(&total)
}
