use log::{info, warn};

pub const SMARTWAKE_VERSION: &str = "1.0";
pub const SMARTWAKE_DEFAULT_ENABLED: bool = true;
pub const SMARTWAKE_KEY_HOLD_MS: u64 = 60;

pub const SMARTWAKE_X_DISTANCE: i32 = 450;
pub const SMARTWAKE_Y_DISTANCE: i32 = 800;
pub const MIN_DELTA: i32 = 5;

/// Max octants a single stroke can record.
pub const MAX_GESTURES: usize = 15;
/// Start/end separation required on both axes for M and E.
pub const SHAPE_MIN_SEPARATION: i32 = 40;
/// A loop whose end drops further than this below its lowest point reads as an `e`.
pub const LOOP_OVERSHOOT_MAX: i32 = 50;

// Samples arrive in bursts of three events per report; keep a few reports of slack
// so a slow worker does not make the input path drop a lift.
pub const STROKE_INPUT_QUEUE_DEPTH: usize = 32;

/// Parses the `smartwake=` startup parameter.
pub fn parse_boot_switch(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

pub fn boot_switch_or_default(value: &str) -> bool {
    match parse_boot_switch(value) {
        Some(enabled) => {
            info!("smartwake: boot switch value={} enabled={}", value, enabled);
            enabled
        }
        None => {
            warn!(
                "smartwake: boot switch invalid value='{}' default={}",
                value, SMARTWAKE_DEFAULT_ENABLED
            );
            SMARTWAKE_DEFAULT_ENABLED
        }
    }
}
