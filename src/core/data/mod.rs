pub mod colour;
pub mod complex_grid;
pub mod field;
pub mod pixel_buffer;
pub mod region;
