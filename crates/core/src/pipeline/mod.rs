pub mod batch_reporter;
pub mod crop_avatar_use_case;
pub mod crop_batch_use_case;
pub mod input_scanner;
