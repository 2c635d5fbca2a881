use crate::{config::MIN_DELTA, types::TouchPoint};

/// Compass octant of instantaneous motion, Y up.
///
/// Each octant is a distinct bit so the shape matchers can reason about
/// neighbors arithmetically: the counterclockwise neighbor is the value
/// doubled, wrapping from `SE` (128) back to `E` (1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Octant {
    E = 1,
    NE = 2,
    N = 4,
    NW = 8,
    W = 16,
    SW = 32,
    S = 64,
    SE = 128,
}

impl Octant {
    pub const ALL: [Octant; 8] = [
        Octant::E,
        Octant::NE,
        Octant::N,
        Octant::NW,
        Octant::W,
        Octant::SW,
        Octant::S,
        Octant::SE,
    ];

    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|octant| octant.bits() == bits)
    }

    fn index(self) -> u32 {
        self.bits().trailing_zeros()
    }

    pub fn counterclockwise(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 8]
    }

    pub fn clockwise(self) -> Self {
        Self::ALL[(self.index() as usize + 7) % 8]
    }

    /// 45 degree steps needed to turn counterclockwise from `self` to `to`.
    pub fn counterclockwise_steps_to(self, to: Octant) -> u32 {
        (to.index() + 8 - self.index()) % 8
    }

    pub fn label(self) -> &'static str {
        match self {
            Octant::E => "E",
            Octant::NE => "NE",
            Octant::N => "N",
            Octant::NW => "NW",
            Octant::W => "W",
            Octant::SW => "SW",
            Octant::S => "S",
            Octant::SE => "SE",
        }
    }
}

pub(crate) fn is_counterclockwise_step(from: Octant, to: Octant) -> bool {
    from.counterclockwise() == to
}

pub(crate) fn is_clockwise_step(from: Octant, to: Octant) -> bool {
    from.clockwise() == to
}

/// Quantizes the motion between two consecutive samples.
///
/// Returns `None` when the motion is too small to classify; callers keep the
/// previous octant in that case.
pub fn quantize(prev: TouchPoint, cur: TouchPoint) -> Option<Octant> {
    let dx = cur.x.saturating_sub(prev.x);
    // Screen Y grows downward.
    let dy = prev.y.saturating_sub(cur.y);
    let abs_dx = dx.saturating_abs();
    let abs_dy = dy.saturating_abs();

    let diagonal = abs_dy < abs_dx.saturating_mul(2) && abs_dy.saturating_mul(2) > abs_dx;
    let dist_sq = dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy));

    if diagonal && dist_sq > MIN_DELTA * MIN_DELTA {
        Some(match (dx > 0, dy > 0) {
            (true, true) => Octant::NE,
            (true, false) => Octant::SE,
            (false, true) => Octant::NW,
            (false, false) => Octant::SW,
        })
    } else if abs_dx > abs_dy && abs_dx > MIN_DELTA {
        Some(if dx > 0 { Octant::E } else { Octant::W })
    } else if abs_dy > MIN_DELTA {
        Some(if dy > 0 { Octant::N } else { Octant::S })
    } else {
        None
    }
}

/// Intermediate octants for a turn from `old` to `new`, in traversal order.
///
/// A 90 degree turn gets its halfway point, a 135 degree turn gets the points
/// at 45 and 90 degrees. Smaller turns and reversals get nothing.
pub fn corner_fill(old: Octant, new: Octant) -> heapless::Vec<Octant, 2> {
    let mut fill = heapless::Vec::new();
    let ccw_steps = old.counterclockwise_steps_to(new);
    let mut step = old;
    match ccw_steps {
        2 | 3 => {
            for _ in 1..ccw_steps {
                step = step.counterclockwise();
                let _ = fill.push(step);
            }
        }
        5 | 6 => {
            for _ in 1..(8 - ccw_steps) {
                step = step.clockwise();
                let _ = fill.push(step);
            }
        }
        _ => {}
    }
    fill
}
