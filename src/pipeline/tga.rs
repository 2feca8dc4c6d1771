// Truevision TGA sniffing. TGA has no magic number, so `image::guess_format`
// never reports it; decoding itself goes through the `image` crate.

const HEADER_LEN: usize = 18;
const TYPE_TRUE_COLOR: u8 = 2;
const TYPE_TRUE_COLOR_RLE: u8 = 10;

/// Structural header check for the true-color layouts cursor art uses
/// (no color map, raw or RLE, 24 or 32 bits per pixel).
pub fn looks_like_tga(data: &[u8]) -> bool {
    if data.len() < HEADER_LEN {
        return false;
    }
    let image_type = data[2];
    let pixel_depth = data[16];
    data[1] == 0
        && matches!(image_type, TYPE_TRUE_COLOR | TYPE_TRUE_COLOR_RLE)
        && matches!(pixel_depth, 24 | 32)
}
