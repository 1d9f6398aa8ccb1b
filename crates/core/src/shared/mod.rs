pub mod constants;
pub mod crop_config;
pub mod crop_region;
pub mod face_box;
pub mod frame;
