// Library exports for cursor-registry

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod native;
pub mod pipeline;
pub mod platform;
pub mod registry;

pub use backend::CursorFactory;
pub use config::CursorConfig;
pub use error::{CursorError, Result};
pub use model::{CursorHandle, CursorImage, CursorRole, ScalingFactor, StandardShape};
pub use native::{NativeCursorSource, NativeHandle};
pub use pipeline::resources::{DirectoryResources, EmbeddedResources, ResourceLoader};
pub use pipeline::scaling::{scale_hotspot, select_variant};
pub use platform::Platform;
pub use registry::{CursorRegistry, CursorSource, RegistryState};
