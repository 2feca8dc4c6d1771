// Native drag and copy cursors from AppKit

use objc2::msg_send;
use objc2::runtime::{AnyClass, AnyObject, Sel};

use super::{NativeCursorSource, NativeHandle};
use crate::error::{CursorError, Result};
use crate::model::CursorRole;
use crate::platform::Platform;

#[link(name = "AppKit", kind = "framework")]
unsafe extern "C" {}

const CLOSED_HAND_CURSOR: &str = "closedHandCursor";
const DRAG_COPY_CURSOR: &str = "dragCopyCursor";

#[derive(Debug, Default, Clone, Copy)]
pub struct MacCursorSource;

impl MacCursorSource {
    pub fn new() -> Self {
        Self
    }

    /// Calls the `NSCursor` class method `name`. The cursors returned are
    /// AppKit singletons and are never released.
    fn named_cursor(&self, role: CursorRole, name: &str) -> Result<NativeHandle> {
        let unavailable = |reason: String| CursorError::NativeUnavailable { role, reason };

        let class = AnyClass::get("NSCursor")
            .ok_or_else(|| unavailable("NSCursor class not found".to_string()))?;
        let sel = Sel::register(name);

        // SAFETY: both are NSObject class methods taking and returning
        // plain values.
        let responds: bool = unsafe { msg_send![class, respondsToSelector: sel] };
        if !responds {
            return Err(unavailable(format!("NSCursor has no `{}`", name)));
        }
        // SAFETY: `respondsToSelector:` confirmed `sel` is a class method of
        // NSCursor, and the cursor accessors take no arguments and return an
        // object pointer, which is what `performSelector:` expects.
        let cursor: *mut AnyObject = unsafe { msg_send![class, performSelector: sel] };

        if cursor.is_null() {
            return Err(unavailable(format!("+[NSCursor {}] returned nil", name)));
        }
        Ok(NativeHandle::MacOs(cursor.cast()))
    }
}

impl NativeCursorSource for MacCursorSource {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn load(&self, role: CursorRole) -> Result<Option<NativeHandle>> {
        match role {
            CursorRole::Drag => self.named_cursor(role, CLOSED_HAND_CURSOR).map(Some),
            CursorRole::Copy => self.named_cursor(role, DRAG_COPY_CURSOR).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selector_is_unavailable() {
        let err = MacCursorSource::new()
            .named_cursor(CursorRole::Drag, "noSuchCursorSelector")
            .unwrap_err();
        assert!(matches!(err, CursorError::NativeUnavailable { role: CursorRole::Drag, .. }));
    }

    #[test]
    fn test_move_keeps_standard_cursor() {
        assert!(MacCursorSource::new().load(CursorRole::Move).unwrap().is_none());
    }
}
