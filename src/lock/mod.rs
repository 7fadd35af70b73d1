//! Gesture recognition core
//!
//! All unlock logic lives here. This module must stay pure:
//! - Positions are plain `Vec2`s in the widget's logical space
//! - No rendering or platform dependencies
//! - Deterministic: the same pointer stream always yields the same outcome

pub mod gesture;
pub mod layout;
pub mod state;

pub use gesture::{pointer_down, pointer_move, pointer_up, resize};
pub use layout::{GridPoint, Layout};
pub use state::{GesturePhase, LockEvent, LockState, Validation};
