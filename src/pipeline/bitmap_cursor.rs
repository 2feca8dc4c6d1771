// Custom cursors built from bitmap artwork

use super::resources::ResourceLoader;
use super::scaling::{scale_hotspot, select_variant};
use crate::backend::CursorFactory;
use crate::error::{CursorError, Result};
use crate::model::{CursorHandle, CursorImage};

/// Loads `name` (or `name@2x` when `size` calls for it) and scales the
/// logical `hotspot` into the chosen bitmap's pixel space.
pub fn load_cursor_image<R>(
    resources: &R,
    name: &str,
    hotspot: (u32, u32),
    size: u32,
) -> Result<CursorImage>
where
    R: ResourceLoader + ?Sized,
{
    let variant = select_variant(size);
    let resource_name = variant.resource_name(name);
    let bitmap = resources.load(&resource_name)?;

    let (hx, hy) = scale_hotspot(hotspot.0, hotspot.1, variant.multiplier);
    let (width, height) = bitmap.dimensions();
    if hx >= width || hy >= height {
        return Err(CursorError::HotspotOutOfBounds {
            name: resource_name,
            x: hx,
            y: hy,
            width,
            height,
        });
    }

    Ok(CursorImage {
        width,
        height,
        pixels: bitmap.into_raw(),
        hotspot: (hx, hy),
    })
}

pub fn create_bitmap_cursor<F, R>(
    factory: &mut F,
    resources: &R,
    name: &str,
    hotspot: (u32, u32),
    size: u32,
) -> Result<CursorHandle>
where
    F: CursorFactory + ?Sized,
    R: ResourceLoader + ?Sized,
{
    let image = load_cursor_image(resources, name, hotspot, size)?;
    log::debug!(
        "creating {}x{} cursor from `{}` (requested {}px, hotspot {:?})",
        image.width,
        image.height,
        name,
        size,
        image.hotspot
    );
    Ok(factory.create_custom_cursor(&image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{Created, RecordingFactory};
    use crate::pipeline::resources::EmbeddedResources;
    use crate::pipeline::tga::tests::encode_raw;

    fn eyedropper_art() -> EmbeddedResources {
        EmbeddedResources::new()
            .with("EyedropCursor", encode_raw(32, 32, &[[0, 0, 0, 255]; 32 * 32]))
            .with("EyedropCursor@2x", encode_raw(64, 64, &[[0, 0, 0, 255]; 64 * 64]))
    }

    #[test]
    fn test_small_size_uses_base_art() {
        let image = load_cursor_image(&eyedropper_art(), "EyedropCursor", (6, 25), 24).unwrap();
        assert_eq!((image.width, image.height), (32, 32));
        assert_eq!(image.hotspot, (6, 25));
        assert_eq!(image.pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_large_size_uses_hires_art_and_scaled_hotspot() {
        let mut factory = RecordingFactory::default();
        let handle =
            create_bitmap_cursor(&mut factory, &eyedropper_art(), "EyedropCursor", (6, 25), 40)
                .unwrap();

        assert_eq!(
            factory.lookup(handle),
            Some(&Created::Custom {
                width: 64,
                height: 64,
                hotspot: (12, 50),
            })
        );
    }

    #[test]
    fn test_missing_variant_is_fatal() {
        let resources = EmbeddedResources::new()
            .with("EyedropCursor", encode_raw(32, 32, &[[0, 0, 0, 255]; 32 * 32]));
        let mut factory = RecordingFactory::default();

        let err = create_bitmap_cursor(&mut factory, &resources, "EyedropCursor", (6, 25), 64)
            .unwrap_err();
        assert!(matches!(&err, CursorError::MissingResource(n) if n == "EyedropCursor@2x"));
        assert!(err.is_fatal());
        assert!(factory.created.is_empty());
    }

    #[test]
    fn test_hotspot_outside_art_rejected() {
        let resources = EmbeddedResources::new()
            .with("Tiny", encode_raw(8, 8, &[[0, 0, 0, 255]; 64]));
        assert!(matches!(
            load_cursor_image(&resources, "Tiny", (6, 25), 16),
            Err(CursorError::HotspotOutOfBounds { y: 25, height: 8, .. })
        ));
    }

    #[test]
    fn test_overflowing_hotspot_saturates_and_is_rejected() {
        let mut factory = RecordingFactory::default();
        let err = create_bitmap_cursor(
            &mut factory,
            &eyedropper_art(),
            "EyedropCursor",
            (3_000_000_000, 6),
            40,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CursorError::HotspotOutOfBounds { x: u32::MAX, y: 12, width: 64, .. }
        ));
        assert!(factory.created.is_empty());
    }
}
