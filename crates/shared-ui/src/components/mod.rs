// Standalone components (no primitives)
pub mod card;
pub mod input;

// Primitive wrappers
pub mod alert_dialog;
pub mod label;

pub use alert_dialog::*;
pub use card::*;
pub use input::*;
pub use label::*;
