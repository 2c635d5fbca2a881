//! Display-off stroke recognizer.
//!
//! Turns one continuous touch stroke into at most one key press: straight
//! swipes map to the arrow keys, drawn `o`, `m`, `e` and `c` shapes map to
//! the matching letter keys.
//!
//! The integrator keeps a [`Smartwake`] in a `static`, forwards touch events
//! to [`Smartwake::input_event`] from the input path, toggles
//! [`Smartwake::set_display_off`], and spawns [`SmartwakeWorkers::run`] once
//! with a [`KeySink`] that injects the key events.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod dispatch;
pub mod runtime;
pub mod stroke;
pub mod types;

pub use control::ControlSwitch;
pub use dispatch::{ActionDispatcher, KeySink};
pub use runtime::{Smartwake, SmartwakeError, SmartwakeWorkers};
pub use stroke::{Octant, StrokeController};
pub use types::{GestureKey, InputEvent, TouchPoint};
