pub mod bitmap_cursor;
pub mod resources;
pub mod scaling;
pub mod tga;
