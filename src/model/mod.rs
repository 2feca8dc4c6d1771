pub mod cursor;
pub mod role;

pub use cursor::{CursorHandle, CursorImage, ScalingFactor};
pub use role::{CursorRole, StandardShape};
