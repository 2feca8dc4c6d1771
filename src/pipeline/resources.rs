// Cursor artwork lookup and decoding

use image::{ImageFormat, RgbaImage};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use xcursor::parser::parse_xcursor;

use super::tga;
use crate::error::{CursorError, Result};

const XCURSOR_MAGIC: &[u8] = b"Xcur";

/// Source of cursor bitmaps keyed by logical name (`EyedropCursor`,
/// `EyedropCursor@2x`, ...).
pub trait ResourceLoader {
    fn load(&self, name: &str) -> Result<RgbaImage>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &T {
    fn load(&self, name: &str) -> Result<RgbaImage> {
        (**self).load(name)
    }
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Box<T> {
    fn load(&self, name: &str) -> Result<RgbaImage> {
        (**self).load(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    Xcursor,
    Tga,
    Image(ImageFormat),
}

impl ResourceFormat {
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.len() >= 4 && &data[0..4] == XCURSOR_MAGIC {
            Some(ResourceFormat::Xcursor)
        } else if tga::looks_like_tga(data) {
            Some(ResourceFormat::Tga)
        } else {
            image::guess_format(data).ok().map(ResourceFormat::Image)
        }
    }
}

/// Decodes cursor artwork to RGBA8. `name` is only used for error reporting.
pub fn decode_bitmap(name: &str, data: &[u8]) -> Result<RgbaImage> {
    let format = ResourceFormat::detect(data)
        .ok_or_else(|| CursorError::decode(name, "unrecognized image format"))?;

    match format {
        ResourceFormat::Tga => decode_with(name, data, ImageFormat::Tga),
        ResourceFormat::Image(format) => decode_with(name, data, format),
        ResourceFormat::Xcursor => decode_xcursor(name, data),
    }
}

fn decode_with(name: &str, data: &[u8], format: ImageFormat) -> Result<RgbaImage> {
    image::load_from_memory_with_format(data, format)
        .map(|img| img.to_rgba8())
        .map_err(|e| CursorError::decode(name, e))
}

// Xcursor files carry several nominal sizes; the largest one is the art.
fn decode_xcursor(name: &str, data: &[u8]) -> Result<RgbaImage> {
    let images = parse_xcursor(data)
        .ok_or_else(|| CursorError::decode(name, "malformed Xcursor file"))?;

    let largest = images
        .into_iter()
        .reduce(|best, img| if img.size > best.size { img } else { best })
        .ok_or_else(|| CursorError::decode(name, "Xcursor file has no images"))?;

    RgbaImage::from_raw(largest.width, largest.height, largest.pixels_rgba)
        .ok_or_else(|| CursorError::decode(name, "Xcursor pixel buffer has the wrong length"))
}

/// Artwork compiled into the application, e.g. with `include_bytes!`.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedResources {
    entries: BTreeMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, data: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(name.into(), data.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ResourceLoader for EmbeddedResources {
    fn load(&self, name: &str) -> Result<RgbaImage> {
        let data = self
            .entries
            .get(name)
            .ok_or_else(|| CursorError::MissingResource(name.to_string()))?;
        decode_bitmap(name, data)
    }
}

/// Artwork read from a directory, one file per resource. The file stem is
/// the resource name: `EyedropCursor@2x.tga` provides `EyedropCursor@2x`.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
    files: BTreeMap<String, PathBuf>,
}

impl DirectoryResources {
    pub fn open(dir: &Path) -> Result<Self> {
        let mut files = BTreeMap::new();

        for entry in WalkDir::new(dir).max_depth(1) {
            let entry = entry.map_err(|e| CursorError::Io {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            let path = entry.path();
            if !path.is_file() || !is_artwork_file(path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files.insert(stem.to_string(), path.to_path_buf());
            }
        }

        log::debug!(
            "indexed {} cursor resources in {}",
            files.len(),
            dir.display()
        );

        Ok(Self {
            root: dir.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

fn is_artwork_file(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "tga" | "png" | "bmp" | "xcur")
        }
        None => false,
    }
}

impl ResourceLoader for DirectoryResources {
    fn load(&self, name: &str) -> Result<RgbaImage> {
        let path = self
            .files
            .get(name)
            .ok_or_else(|| CursorError::MissingResource(name.to_string()))?;
        let data = fs::read(path).map_err(|source| CursorError::Io {
            path: path.clone(),
            source,
        })?;
        decode_bitmap(name, &data)
    }
}

/// Looks in `primary` first and only falls through on a missing resource;
/// decode errors in `primary` are reported as-is.
pub struct LayeredResources<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ResourceLoader, F: ResourceLoader> LayeredResources<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ResourceLoader, F: ResourceLoader> ResourceLoader for LayeredResources<P, F> {
    fn load(&self, name: &str) -> Result<RgbaImage> {
        match self.primary.load(name) {
            Err(CursorError::MissingResource(_)) => self.fallback.load(name),
            other => other,
        }
    }
}
