pub mod config;
pub mod coord;
pub mod frame;
pub mod model;
pub mod net;
pub mod render;
pub mod session;
