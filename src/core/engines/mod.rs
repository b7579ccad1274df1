pub mod domain_coloring;
pub mod escape_time;
pub mod newton;
pub mod root_table;
