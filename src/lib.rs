pub mod classifier_config;
pub mod geometry_utils;
pub mod landmarks;
pub mod report;
pub mod systems;

pub type Point2D = (f32, f32);
