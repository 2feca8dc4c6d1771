// Native drag, copy and move cursors on Windows

use windows::Win32::Foundation::{HINSTANCE, HMODULE};
use windows::Win32::System::LibraryLoader::LoadLibraryW;
use windows::Win32::UI::WindowsAndMessaging::{
    IMAGE_CURSOR, LR_DEFAULTSIZE, LR_SHARED, LoadCursorW, LoadImageW,
};
use windows::core::{PCWSTR, w};

use super::{NativeCursorSource, NativeHandle};
use crate::error::{CursorError, Result};
use crate::model::CursorRole;
use crate::platform::Platform;

// Cursor resources inside ole32.dll, the ones OLE drag and drop shows.
const OLE_DRAG_CURSOR: u16 = 2;
const OLE_COPY_CURSOR: u16 = 3;

// OCR_SIZEALL
const SYSTEM_SIZE_ALL_CURSOR: u16 = 32646;

fn int_resource(id: u16) -> PCWSTR {
    PCWSTR(id as usize as *const u16)
}

pub struct WindowsCursorSource {
    // ole32 stays loaded for the life of the process; the cursors loaded
    // from it are only valid while it is.
    ole32: std::result::Result<HMODULE, String>,
}

impl WindowsCursorSource {
    pub fn new() -> Self {
        // SAFETY: plain library load by name.
        let ole32 = unsafe { LoadLibraryW(w!("ole32.dll")) }.map_err(|e| e.to_string());
        if let Err(e) = &ole32 {
            log::warn!("could not load ole32.dll: {}", e);
        }
        Self { ole32 }
    }

    fn ole_cursor(&self, role: CursorRole, id: u16) -> Result<NativeHandle> {
        let module = self
            .ole32
            .as_ref()
            .map_err(|reason| CursorError::NativeUnavailable {
                role,
                reason: format!("ole32.dll not loaded: {}", reason),
            })?;

        // SAFETY: `module` is a loaded module and `id` an integer resource.
        let cursor = unsafe { LoadCursorW(HINSTANCE(module.0), int_resource(id)) }.map_err(|e| {
            CursorError::NativeUnavailable {
                role,
                reason: format!("LoadCursorW({}) failed: {}", id, e),
            }
        })?;

        Ok(NativeHandle::Windows(cursor.0))
    }

    fn system_cursor(&self, role: CursorRole, id: u16) -> Result<NativeHandle> {
        // SAFETY: shared system cursors are owned by the OS and never freed.
        let cursor = unsafe {
            LoadImageW(
                HINSTANCE::default(),
                int_resource(id),
                IMAGE_CURSOR,
                0,
                0,
                LR_SHARED | LR_DEFAULTSIZE,
            )
        }
        .map_err(|e| CursorError::NativeUnavailable {
            role,
            reason: format!("LoadImageW({}) failed: {}", id, e),
        })?;

        Ok(NativeHandle::Windows(cursor.0))
    }
}

impl Default for WindowsCursorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeCursorSource for WindowsCursorSource {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn load(&self, role: CursorRole) -> Result<Option<NativeHandle>> {
        match role {
            CursorRole::Drag => self.ole_cursor(role, OLE_DRAG_CURSOR).map(Some),
            CursorRole::Copy => self.ole_cursor(role, OLE_COPY_CURSOR).map(Some),
            CursorRole::Move => self.system_cursor(role, SYSTEM_SIZE_ALL_CURSOR).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_drag_copy_move() {
        let source = WindowsCursorSource::new();
        for role in CursorRole::ALL {
            let native = source.load(role);
            match role {
                CursorRole::Drag | CursorRole::Copy | CursorRole::Move => {
                    assert!(matches!(native, Ok(Some(NativeHandle::Windows(p))) if !p.is_null()));
                }
                _ => assert!(matches!(native, Ok(None))),
            }
        }
    }
}
