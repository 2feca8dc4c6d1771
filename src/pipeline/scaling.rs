// Resolution variant selection and hotspot scaling for bitmap cursors

use crate::model::ScalingFactor;

/// Requested sizes above this use the `@2x` art.
pub const HIRES_THRESHOLD: u32 = 32;

pub const HIRES_SUFFIX: &str = "@2x";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub suffix: &'static str,
    pub multiplier: u32,
}

impl Variant {
    pub const BASE: Variant = Variant {
        suffix: "",
        multiplier: 1,
    };

    pub const HIRES: Variant = Variant {
        suffix: HIRES_SUFFIX,
        multiplier: 2,
    };

    /// Resource name of this variant, e.g. `EyedropCursor@2x`.
    pub fn resource_name(&self, name: &str) -> String {
        format!("{}{}", name, self.suffix)
    }
}

pub fn select_variant(requested_size: u32) -> Variant {
    if requested_size > HIRES_THRESHOLD {
        Variant::HIRES
    } else {
        Variant::BASE
    }
}

/// Scales a hotspot into the pixel space of the selected variant.
///
/// Multipliers are whole numbers, so the product is exact and needs no
/// rounding. A product that does not fit in `u32` saturates to `u32::MAX`;
/// such a hotspot is then rejected by the bounds check against the bitmap.
pub fn scale_hotspot(hx: u32, hy: u32, multiplier: u32) -> (u32, u32) {
    (hx.saturating_mul(multiplier), hy.saturating_mul(multiplier))
}

/// Pixel size asked of the bitmap constructor for a platform base size at
/// the given display scale.
pub fn cursor_size(base: u32, scale: ScalingFactor) -> u32 {
    ((base as f32 * scale.get()).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_boundaries() {
        assert_eq!(select_variant(32), Variant::BASE);
        assert_eq!(select_variant(33), Variant::HIRES);
        assert_eq!(select_variant(0), Variant::BASE);
        assert_eq!(select_variant(u32::MAX), Variant::HIRES);
    }

    #[test]
    fn test_variant_examples() {
        let v = select_variant(40);
        assert_eq!(v.suffix, "@2x");
        assert_eq!(v.multiplier, 2);

        let v = select_variant(24);
        assert_eq!(v.suffix, "");
        assert_eq!(v.multiplier, 1);
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(Variant::HIRES.resource_name("EyedropCursor"), "EyedropCursor@2x");
        assert_eq!(Variant::BASE.resource_name("EyedropCursor"), "EyedropCursor");
    }

    #[test]
    fn test_scale_hotspot_is_linear() {
        assert_eq!(scale_hotspot(6, 25, 2), (12, 50));
        assert_eq!(scale_hotspot(6, 25, 1), (6, 25));
        for hx in 0..64 {
            for m in [1, 2] {
                let (x, y) = scale_hotspot(hx, 63 - hx, m);
                assert_eq!(x, hx * m);
                assert_eq!(y, (63 - hx) * m);
            }
        }
    }

    #[test]
    fn test_scale_hotspot_exact_beyond_f32_precision() {
        assert_eq!(scale_hotspot(16_777_217, 0, 1), (16_777_217, 0));
        assert_eq!(scale_hotspot(16_777_217, 16_777_219, 2), (33_554_434, 33_554_438));
    }

    #[test]
    fn test_scale_hotspot_overflow_saturates() {
        assert_eq!(scale_hotspot(3_000_000_000, 7, 2), (u32::MAX, 14));
        assert_eq!(scale_hotspot(u32::MAX, u32::MAX / 2, 2), (u32::MAX, u32::MAX - 1));
    }

    #[test]
    fn test_cursor_size() {
        assert_eq!(cursor_size(32, ScalingFactor::STANDARD), 32);
        assert_eq!(cursor_size(32, ScalingFactor::new(1.25).unwrap()), 40);
        assert_eq!(cursor_size(24, ScalingFactor::new(1.5).unwrap()), 36);
        assert_eq!(cursor_size(32, ScalingFactor::new(0.001).unwrap()), 1);
    }
}
