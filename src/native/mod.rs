//! OS-native cursors and the wrapper records that let the windowing library
//! treat them like its own cursor objects.
//!
//! The windowing library dereferences a cursor handle as a struct whose first
//! slot is a pointer it owns and whose second slot is the platform cursor
//! (`HCURSOR`, `NSCursor*` or an X11 `Cursor` XID). A native cursor is
//! handed over by allocating such a record with the first slot zeroed.

mod generic;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(windows)]
mod win32;

use std::ffi::c_void;
use std::ptr::NonNull;

use crate::error::{CursorError, Result};
use crate::model::{CursorHandle, CursorRole};
use crate::platform::Platform;

pub use generic::GenericCursorSource;
#[cfg(target_os = "macos")]
pub use macos::MacCursorSource;
#[cfg(windows)]
pub use win32::WindowsCursorSource;

/// A cursor owned by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeHandle {
    Windows(*mut c_void),
    MacOs(*mut c_void),
    X11(u32),
}

impl NativeHandle {
    fn is_null(self) -> bool {
        match self {
            NativeHandle::Windows(ptr) | NativeHandle::MacOs(ptr) => ptr.is_null(),
            NativeHandle::X11(xid) => xid == 0,
        }
    }
}

/// Layout shared with the windowing library's cursor struct. `placeholder`
/// belongs to the library and must stay zero.
///
/// Packed to 4 bytes so an X11 record is one pointer plus the 32-bit XID with
/// no tail padding. Fields may sit at addresses that are only 4-aligned; read
/// them by value or with `read_unaligned`, never through a reference.
#[repr(C, packed(4))]
pub struct NativeCursorRecord<H> {
    placeholder: *mut c_void,
    handle: H,
}

impl<H: Copy> NativeCursorRecord<H> {
    fn new(handle: H) -> Self {
        Self {
            placeholder: std::ptr::null_mut(),
            handle,
        }
    }

    pub fn handle(&self) -> H {
        self.handle
    }
}

/// `HCURSOR` and `NSCursor*` records: two pointer-sized slots.
pub type PointerCursorRecord = NativeCursorRecord<*mut c_void>;

/// X11 records: the XID is 32 bits whatever the pointer width.
pub type X11CursorRecord = NativeCursorRecord<u32>;

#[derive(Debug)]
enum WrappedCursor {
    Windows(NonNull<PointerCursorRecord>),
    MacOs(NonNull<PointerCursorRecord>),
    X11(NonNull<X11CursorRecord>),
}

impl WrappedCursor {
    fn address(&self) -> *mut c_void {
        match self {
            WrappedCursor::Windows(p) | WrappedCursor::MacOs(p) => p.as_ptr().cast(),
            WrappedCursor::X11(p) => p.as_ptr().cast(),
        }
    }

    // SAFETY: caller guarantees the record has not been freed.
    unsafe fn native(&self) -> NativeHandle {
        unsafe {
            match self {
                WrappedCursor::Windows(p) => NativeHandle::Windows(p.as_ref().handle()),
                WrappedCursor::MacOs(p) => NativeHandle::MacOs(p.as_ref().handle()),
                WrappedCursor::X11(p) => NativeHandle::X11(p.as_ref().handle()),
            }
        }
    }

    // SAFETY: caller guarantees the record is freed at most once.
    unsafe fn free(self) {
        unsafe {
            match self {
                WrappedCursor::Windows(p) | WrappedCursor::MacOs(p) => {
                    drop(Box::from_raw(p.as_ptr()))
                }
                WrappedCursor::X11(p) => drop(Box::from_raw(p.as_ptr())),
            }
        }
    }
}

/// Owns every wrapper record handed to the windowing library. Records stay
/// at a fixed address until the arena is cleared or dropped, so the arena
/// must outlive any use of the handles it returned.
#[derive(Debug, Default)]
pub struct NativeCursorArena {
    records: Vec<WrappedCursor>,
}

impl NativeCursorArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a native cursor and returns the record address as a handle.
    pub fn wrap(&mut self, native: NativeHandle) -> Result<CursorHandle> {
        if native.is_null() {
            return Err(CursorError::NullNativeHandle);
        }

        let wrapped = match native {
            NativeHandle::Windows(ptr) => WrappedCursor::Windows(leak(NativeCursorRecord::new(ptr))),
            NativeHandle::MacOs(ptr) => WrappedCursor::MacOs(leak(NativeCursorRecord::new(ptr))),
            NativeHandle::X11(xid) => WrappedCursor::X11(leak(NativeCursorRecord::new(xid))),
        };

        let address = wrapped.address();
        self.records.push(wrapped);
        CursorHandle::from_raw(address).ok_or(CursorError::NullNativeHandle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, handle: CursorHandle) -> bool {
        self.records.iter().any(|r| r.address() == handle.as_ptr())
    }

    /// Reads the first pointer-sized slot of the record behind `handle`.
    /// `None` if the handle was not produced by this arena.
    pub fn placeholder_of(&self, handle: CursorHandle) -> Option<usize> {
        if !self.contains(handle) {
            return None;
        }
        // SAFETY: the handle points at a live record owned by this arena and
        // every record starts with a pointer-sized field, possibly 4-aligned.
        Some(unsafe { handle.as_ptr().cast::<usize>().read_unaligned() })
    }

    /// The native cursor stored in the record behind `handle`.
    pub fn native_of(&self, handle: CursorHandle) -> Option<NativeHandle> {
        self.records
            .iter()
            .find(|r| r.address() == handle.as_ptr())
            // SAFETY: records are live until `clear` or drop.
            .map(|r| unsafe { r.native() })
    }

    /// Frees every record and returns how many were freed. Handles
    /// previously returned become dangling.
    pub fn clear(&mut self) -> usize {
        let mut freed = 0;
        for record in self.records.drain(..) {
            // SAFETY: each pointer came from `Box::leak` and is removed from
            // the arena before being freed.
            unsafe { record.free() }
            freed += 1;
        }
        freed
    }
}

impl Drop for NativeCursorArena {
    fn drop(&mut self) {
        self.clear();
    }
}

fn leak<T>(value: T) -> NonNull<T> {
    NonNull::from(Box::leak(Box::new(value)))
}

/// Per-platform lookup of native cursors, picked once at startup.
pub trait NativeCursorSource {
    fn platform(&self) -> Platform;

    /// The native cursor for `role`, or `None` when the platform has no
    /// better cursor than the standard one.
    fn load(&self, role: CursorRole) -> Result<Option<NativeHandle>>;
}

/// The native source for `platform`. Platforms whose backend is not compiled
/// into this build get the generic source.
pub fn source_for(platform: Platform) -> Box<dyn NativeCursorSource> {
    match platform {
        #[cfg(windows)]
        Platform::Windows => Box::new(WindowsCursorSource::new()),
        #[cfg(target_os = "macos")]
        Platform::MacOs => Box::new(MacCursorSource::new()),
        other => Box::new(GenericCursorSource::new(other)),
    }
}
