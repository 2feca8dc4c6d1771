use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use crate::error::{CursorError, Result};

/// Opaque cursor token handed out by the windowing library, or the address
/// of a native wrapper record. Never null.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CursorHandle(NonNull<c_void>);

impl CursorHandle {
    pub fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for CursorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CursorHandle({:p})", self.0)
    }
}

/// Pixels handed to the windowing library's custom cursor factory.
///
/// `pixels` is row-major RGBA, 4 bytes per pixel. The hotspot is expressed
/// in the pixel space of this image, i.e. already scaled for `@2x` art.
#[derive(Debug, Clone)]
pub struct CursorImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub hotspot: (u32, u32),
}

/// Display scale (physical pixels per logical pixel).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScalingFactor(f32);

impl ScalingFactor {
    pub const STANDARD: ScalingFactor = ScalingFactor(1.0);

    pub fn new(scale: f32) -> Result<Self> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self(scale))
        } else {
            Err(CursorError::InvalidScale(scale))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for ScalingFactor {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle_rejected() {
        assert!(CursorHandle::from_raw(std::ptr::null_mut()).is_none());

        let mut slot = 0u8;
        let handle = CursorHandle::from_raw(&mut slot as *mut u8 as *mut c_void).unwrap();
        assert_eq!(handle.as_ptr() as *mut u8, &mut slot as *mut u8);
    }

    #[test]
    fn test_scaling_factor_validation() {
        assert_eq!(ScalingFactor::new(1.5).unwrap().get(), 1.5);
        assert!(matches!(ScalingFactor::new(0.0), Err(CursorError::InvalidScale(_))));
        assert!(ScalingFactor::new(-2.0).is_err());
        assert!(ScalingFactor::new(f32::NAN).is_err());
        assert!(ScalingFactor::new(f32::INFINITY).is_err());
        assert_eq!(ScalingFactor::default(), ScalingFactor::STANDARD);
    }
}
