// Seam to the windowing library's cursor API

use crate::model::{CursorHandle, CursorImage, StandardShape};

/// Cursor constructors of the windowing library (e.g. GLFW's
/// `glfwCreateStandardCursor` / `glfwCreateCursor`).
///
/// Both calls are expected to succeed once the windowing library is
/// initialized. Handles they return live until the library terminates.
pub trait CursorFactory {
    fn create_standard_cursor(&mut self, shape: StandardShape) -> CursorHandle;

    fn create_custom_cursor(&mut self, image: &CursorImage) -> CursorHandle;
}

impl<F: CursorFactory + ?Sized> CursorFactory for &mut F {
    fn create_standard_cursor(&mut self, shape: StandardShape) -> CursorHandle {
        (**self).create_standard_cursor(shape)
    }

    fn create_custom_cursor(&mut self, image: &CursorImage) -> CursorHandle {
        (**self).create_custom_cursor(image)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::ffi::c_void;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Created {
        Standard(StandardShape),
        Custom {
            width: u32,
            height: u32,
            hotspot: (u32, u32),
        },
    }

    /// Hands out a fresh non-null handle per call and records what was asked.
    #[derive(Default)]
    pub(crate) struct RecordingFactory {
        slots: Vec<Box<u64>>,
        pub(crate) created: Vec<(CursorHandle, Created)>,
    }

    impl RecordingFactory {
        fn next_handle(&mut self) -> CursorHandle {
            let mut slot = Box::new(self.slots.len() as u64);
            let ptr = &mut *slot as *mut u64 as *mut c_void;
            self.slots.push(slot);
            CursorHandle::from_raw(ptr).unwrap()
        }

        pub(crate) fn lookup(&self, handle: CursorHandle) -> Option<&Created> {
            self.created
                .iter()
                .find(|(h, _)| *h == handle)
                .map(|(_, c)| c)
        }
    }

    impl CursorFactory for RecordingFactory {
        fn create_standard_cursor(&mut self, shape: StandardShape) -> CursorHandle {
            let handle = self.next_handle();
            self.created.push((handle, Created::Standard(shape)));
            handle
        }

        fn create_custom_cursor(&mut self, image: &CursorImage) -> CursorHandle {
            assert_eq!(
                image.pixels.len(),
                (image.width * image.height * 4) as usize,
                "custom cursor pixels must be RGBA"
            );
            let handle = self.next_handle();
            self.created.push((
                handle,
                Created::Custom {
                    width: image.width,
                    height: image.height,
                    hotspot: image.hotspot,
                },
            ));
            handle
        }
    }
}
