pub mod crop_planner;
pub mod image_transformer;
