//! Renders an OBJ model to an image file with `softraster`.

#[macro_use]
extern crate log;

pub mod camera;
pub mod model;
pub mod renderer;
pub mod settings;
pub mod shaders;
