pub mod colour_map;
pub mod complex_map;
pub mod frame_sink;
pub mod modulation;
