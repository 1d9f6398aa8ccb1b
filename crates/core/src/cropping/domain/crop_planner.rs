use crate::shared::crop_config::CropConfig;
use crate::shared::crop_region::{CropMethod, CropPlan, CropRegion};
use crate::shared::face_box::FaceBox;

/// Chooses the square crop for one image.
///
/// With faces present, the largest face is centered in a square of its longer
/// side plus `padding` on each side, shifted down by `vertical_offset` of the
/// crop size, shrunk to fit the image and slid inward at the edges. Without
/// faces the largest centered square is used.
pub fn plan_crop(
    image_width: u32,
    image_height: u32,
    faces: &[FaceBox],
    config: &CropConfig,
) -> CropPlan {
    match FaceBox::largest(faces) {
        Some(face) => CropPlan {
            region: face_region(image_width, image_height, face, config),
            method: CropMethod::Face,
        },
        None => CropPlan {
            region: center_region(image_width, image_height),
            method: CropMethod::Fallback,
        },
    }
}

fn face_region(image_width: u32, image_height: u32, face: &FaceBox, config: &CropConfig) -> CropRegion {
    let (cx, cy) = face.center();
    let longest = face.width().max(face.height());

    let mut crop_size = (longest as f64 * (1.0 + 2.0 * config.padding)) as u32;

    // Offset is taken from the unclamped size.
    let cy = cy as i64 + (crop_size as f64 * config.vertical_offset) as i64;

    crop_size = crop_size.min(image_width).min(image_height);

    let half = (crop_size / 2) as i64;
    let left = slide_inside((cx as i64 - half).max(0), crop_size, image_width);
    let top = slide_inside((cy - half).max(0), crop_size, image_height);

    CropRegion::square(left, top, crop_size)
}

/// Moves `start` back so that `[start, start + size)` ends inside `limit`.
fn slide_inside(start: i64, size: u32, limit: u32) -> u32 {
    if start + size as i64 > limit as i64 {
        limit - size
    } else {
        start as u32
    }
}

fn center_region(image_width: u32, image_height: u32) -> CropRegion {
    let crop_size = image_width.min(image_height);
    CropRegion::square(
        (image_width - crop_size) / 2,
        (image_height - crop_size) / 2,
        crop_size,
    )
}
