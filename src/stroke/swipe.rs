use crate::{
    config::{SMARTWAKE_X_DISTANCE, SMARTWAKE_Y_DISTANCE},
    types::{GestureKey, TouchPoint},
};

/// Straight-line swipe from `start` to `current`, checked on every sample.
///
/// Suppressed once the stroke has turned into a shape. The horizontal axis is
/// checked first; direction comes from the sign of the displacement.
pub fn classify_swipe(
    start: TouchPoint,
    current: TouchPoint,
    only_gesture_mode: bool,
) -> Option<GestureKey> {
    if only_gesture_mode {
        return None;
    }

    let dx = current.x.saturating_sub(start.x);
    let dy = current.y.saturating_sub(start.y);

    if dx.saturating_abs() >= SMARTWAKE_X_DISTANCE {
        if dx > 0 {
            Some(GestureKey::Right)
        } else {
            Some(GestureKey::Left)
        }
    } else if dy.saturating_abs() >= SMARTWAKE_Y_DISTANCE {
        // Screen Y grows downward.
        if dy > 0 {
            Some(GestureKey::Down)
        } else {
            Some(GestureKey::Up)
        }
    } else {
        None
    }
}
