mod keyboard;
mod mapping;

pub use keyboard::{keyboard_controls_system, mouse_yoke_system};
pub use mapping::{apply_keys, apply_mouse, HeldKeys};
