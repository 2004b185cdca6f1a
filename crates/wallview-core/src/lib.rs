pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod layout;
pub mod pan;
pub mod panel;
pub mod render;
pub mod visualizer;
pub mod wall;
