pub mod commands;
pub mod csv_loader;
pub mod render;
pub mod utils;
