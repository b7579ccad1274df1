pub mod actions;
pub mod colour_maps;
pub mod data;
pub mod engines;
pub mod orchestrator;
pub mod ports;
