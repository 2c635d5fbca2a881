#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One multi-touch report from the touch transport, in delivery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    PositionX(i32),
    PositionY(i32),
    /// Contact tracking id; `-1` marks the tracked contact as lifted.
    TrackingId(i32),
    SlotChange,
    Lift,
}

pub(crate) const TRACKING_ID_LIFTED: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StrokeInput {
    Event(InputEvent),
    Reset,
}

/// Symbolic action resolved for one stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum GestureKey {
    Right = 106,
    Left = 105,
    Up = 103,
    Down = 108,
    O = 24,
    M = 50,
    E = 18,
    C = 46,
}

impl GestureKey {
    /// Every key the recognizer can emit, for capability registration.
    pub const ALL: [GestureKey; 8] = [
        GestureKey::Right,
        GestureKey::Left,
        GestureKey::Up,
        GestureKey::Down,
        GestureKey::O,
        GestureKey::M,
        GestureKey::E,
        GestureKey::C,
    ];

    /// Linux input key code.
    pub const fn code(self) -> u16 {
        self as u16
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GestureKey::Right => "right",
            GestureKey::Left => "left",
            GestureKey::Up => "up",
            GestureKey::Down => "down",
            GestureKey::O => "o",
            GestureKey::M => "m",
            GestureKey::E => "e",
            GestureKey::C => "c",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        GestureKey::ALL
            .into_iter()
            .find(|key| label.eq_ignore_ascii_case(key.as_str()))
    }
}
