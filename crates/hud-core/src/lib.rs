pub mod animation;
pub mod boot;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod frame_loop;
pub mod inputs;
pub mod particles;
pub mod rings;
pub mod scene;
pub mod surface;
pub mod visualizer;

pub use animation::*;
pub use canvas::*;
pub use config::*;
pub use frame_loop::*;
pub use inputs::*;
pub use particles::*;
pub use rings::*;
pub use surface::*;
pub use visualizer::*;
