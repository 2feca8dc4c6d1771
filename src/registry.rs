//! The application's cursor table.
//!
//! A [`CursorRegistry`] starts out empty, is populated by a single call to
//! [`CursorRegistry::initialize`] and is read-only afterwards. It also owns
//! the wrapper records behind native cursor handles, so it has to outlive
//! every use of the handles it hands out.

use crate::backend::CursorFactory;
use crate::config::CursorConfig;
use crate::error::{CursorError, Result};
use crate::model::{CursorHandle, CursorRole, ScalingFactor, StandardShape};
use crate::native::{NativeCursorArena, NativeCursorSource, NativeHandle, source_for};
use crate::pipeline::bitmap_cursor::create_bitmap_cursor;
use crate::pipeline::resources::ResourceLoader;
use crate::pipeline::scaling::cursor_size;
use crate::platform::Platform;

pub const EYEDROPPER_RESOURCE: &str = "EyedropCursor";

/// Pointer tip of the eyedropper art, in base (1x) pixels.
pub const EYEDROPPER_HOTSPOT: (u32, u32) = (6, 25);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Populating,
    Ready,
}

/// Where a role's cursor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSource {
    Standard(StandardShape),
    Native(NativeHandle),
    Bitmap { size: u32 },
}

#[derive(Debug, Clone, Copy)]
struct CursorEntry {
    handle: CursorHandle,
    source: CursorSource,
}

#[derive(Debug)]
pub struct CursorRegistry {
    state: RegistryState,
    entries: [Option<CursorEntry>; CursorRole::COUNT],
    arena: NativeCursorArena,
}

impl Default for CursorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorRegistry {
    pub fn new() -> Self {
        Self {
            state: RegistryState::Uninitialized,
            entries: [None; CursorRole::COUNT],
            arena: NativeCursorArena::new(),
        }
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == RegistryState::Ready
    }

    /// Builds every cursor. Only valid once: a registry that is already
    /// populated rejects the call with [`CursorError::AlreadyInitialized`].
    ///
    /// Fatal errors (missing or corrupt artwork) leave the registry
    /// uninitialized with nothing allocated. Native cursors that cannot be
    /// fetched are replaced by the standard shape with a warning.
    pub fn initialize<F, R>(
        &mut self,
        factory: &mut F,
        resources: &R,
        native: &dyn NativeCursorSource,
        config: &CursorConfig,
        scale: ScalingFactor,
    ) -> Result<()>
    where
        F: CursorFactory + ?Sized,
        R: ResourceLoader + ?Sized,
    {
        if self.state != RegistryState::Uninitialized {
            return Err(CursorError::AlreadyInitialized);
        }
        config.validate()?;

        self.state = RegistryState::Populating;
        log::debug!(
            "initializing cursors for {} at scale {}",
            native.platform(),
            scale.get()
        );

        match self.populate(factory, resources, native, config, scale) {
            Ok(()) => {
                self.state = RegistryState::Ready;
                log::info!(
                    "cursor registry ready ({} native cursors)",
                    self.arena.len()
                );
                Ok(())
            }
            Err(e) => {
                log::error!("cursor initialization failed: {}", e);
                self.reset();
                Err(e)
            }
        }
    }

    /// [`initialize`](Self::initialize) with the native source of the
    /// platform this binary was built for.
    pub fn initialize_for_current_platform<F, R>(
        &mut self,
        factory: &mut F,
        resources: &R,
        config: &CursorConfig,
        scale: ScalingFactor,
    ) -> Result<()>
    where
        F: CursorFactory + ?Sized,
        R: ResourceLoader + ?Sized,
    {
        let native = source_for(Platform::current());
        self.initialize(factory, resources, &*native, config, scale)
    }

    fn populate<F, R>(
        &mut self,
        factory: &mut F,
        resources: &R,
        native: &dyn NativeCursorSource,
        config: &CursorConfig,
        scale: ScalingFactor,
    ) -> Result<()>
    where
        F: CursorFactory + ?Sized,
        R: ResourceLoader + ?Sized,
    {
        for role in CursorRole::ALL {
            if let Some(shape) = role.standard_shape() {
                let handle = factory.create_standard_cursor(shape);
                self.set(role, handle, CursorSource::Standard(shape));
            }
        }

        if config.native_cursors {
            self.apply_native_overrides(native);
        } else {
            log::debug!("native cursors disabled by configuration");
        }

        let size = config
            .cursor_size
            .unwrap_or_else(|| cursor_size(native.platform().base_cursor_size(), scale));
        let handle = create_bitmap_cursor(
            factory,
            resources,
            EYEDROPPER_RESOURCE,
            EYEDROPPER_HOTSPOT,
            size,
        )?;
        self.set(CursorRole::Eyedropper, handle, CursorSource::Bitmap { size });

        debug_assert!(self.entries.iter().all(Option::is_some));
        Ok(())
    }

    fn apply_native_overrides(&mut self, native: &dyn NativeCursorSource) {
        for role in CursorRole::ALL {
            let wrapped = native
                .load(role)
                .and_then(|found| found.map(|h| self.arena.wrap(h).map(|c| (h, c))).transpose());

            match wrapped {
                Ok(Some((native_handle, handle))) => {
                    log::debug!("using native {} cursor", role);
                    self.set(role, handle, CursorSource::Native(native_handle));
                }
                Ok(None) => {}
                Err(e) => log::warn!("{}; keeping the standard {} cursor", e, role),
            }
        }
    }

    fn set(&mut self, role: CursorRole, handle: CursorHandle, source: CursorSource) {
        self.entries[role.index()] = Some(CursorEntry { handle, source });
    }

    fn reset(&mut self) -> usize {
        self.entries = [None; CursorRole::COUNT];
        self.state = RegistryState::Uninitialized;
        self.arena.clear()
    }

    /// The handle for `role`, once the registry is ready.
    pub fn get(&self, role: CursorRole) -> Option<CursorHandle> {
        self.entry(role).map(|e| e.handle)
    }

    pub fn cursor(&self, role: CursorRole) -> Result<CursorHandle> {
        self.get(role).ok_or(CursorError::NotReady)
    }

    pub fn source(&self, role: CursorRole) -> Option<CursorSource> {
        self.entry(role).map(|e| e.source)
    }

    fn entry(&self, role: CursorRole) -> Option<&CursorEntry> {
        if self.is_ready() {
            self.entries[role.index()].as_ref()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CursorRole, CursorHandle)> + '_ {
        CursorRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|h| (role, h)))
    }

    /// Wrapper records backing the native cursors.
    pub fn native_records(&self) -> &NativeCursorArena {
        &self.arena
    }

    /// Releases the native wrapper records and returns how many were freed.
    /// Every handle obtained from this registry must already be out of use
    /// by the windowing library.
    pub fn shutdown(mut self) -> usize {
        let released = self.reset();
        log::debug!("released {} native cursor records", released);
        released
    }
}
