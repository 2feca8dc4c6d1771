use super::{NativeCursorSource, NativeHandle};
use crate::error::Result;
use crate::model::CursorRole;
use crate::platform::Platform;

/// Used where no native cursor is worth fetching (X11/Wayland desktops, or
/// a platform whose backend is not compiled in). Every role keeps its
/// standard cursor.
#[derive(Debug, Clone, Copy)]
pub struct GenericCursorSource {
    platform: Platform,
}

impl GenericCursorSource {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl NativeCursorSource for GenericCursorSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn load(&self, _role: CursorRole) -> Result<Option<NativeHandle>> {
        Ok(None)
    }
}
