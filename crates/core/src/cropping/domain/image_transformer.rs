use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::shared::crop_region::CropRegion;

/// Crops `image` to `region`, resizes to `target_size`² with Lanczos3 and
/// converts to 8-bit RGB.
///
/// Images with an alpha channel are resampled with premultiplied alpha and
/// then flattened onto black, so fully transparent pixels come out black.
pub fn transform(image: &DynamicImage, region: &CropRegion, target_size: u32) -> RgbImage {
    let size = region.size();
    let cropped = image.crop_imm(region.left, region.top, size, size);
    if cropped.color().has_alpha() {
        return resize_premultiplied(&cropped, target_size);
    }
    match cropped.resize_exact(target_size, target_size, FilterType::Lanczos3) {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}

fn resize_premultiplied(image: &DynamicImage, target_size: u32) -> RgbImage {
    let mut rgba = image.to_rgba32f();
    for p in rgba.pixels_mut() {
        let a = p[3];
        p[0] *= a;
        p[1] *= a;
        p[2] *= a;
    }

    let resized = imageops::resize(&rgba, target_size, target_size, FilterType::Lanczos3);

    RgbImage::from_fn(target_size, target_size, |x, y| {
        let p = resized.get_pixel(x, y);
        // Alpha that rounds to zero at 8 bits carries no color.
        let alpha = (p[3].clamp(0.0, 1.0) * 255.0).round() / 255.0;
        if alpha == 0.0 {
            return Rgb([0, 0, 0]);
        }
        let channel = |v: f32| ((v / alpha).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb([channel(p[0]), channel(p[1]), channel(p[2])])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};

    fn split_image(w: u32, h: u32) -> DynamicImage {
        // left half red, right half blue
        let img = RgbImage::from_fn(w, h, |x, _| {
            if x < w / 2 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    fn close(a: u8, b: u8) -> bool {
        a.abs_diff(b) <= 2
    }

    #[test]
    fn test_output_has_target_dimensions() {
        let img = split_image(600, 400);
        let out = transform(&img, &CropRegion::square(100, 0, 400), 800);
        assert_eq!(out.dimensions(), (800, 800));
    }

    #[test]
    fn test_downscale_to_smaller_target() {
        let img = split_image(600, 400);
        let out = transform(&img, &CropRegion::square(0, 0, 400), 64);
        assert_eq!(out.dimensions(), (64, 64));
    }

    #[test]
    fn test_crop_selects_region_content() {
        let img = split_image(200, 100);
        let out = transform(&img, &CropRegion::square(100, 0, 100), 50);
        for p in out.pixels() {
            assert!(close(p[0], 0) && close(p[2], 255), "unexpected {p:?}");
        }
    }

    #[test]
    fn test_half_transparent_keeps_stored_color() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([10, 20, 30, 128])));
        let out = transform(&img, &CropRegion::square(0, 0, 40), 20);
        let p = out.get_pixel(10, 10);
        assert!(close(p[0], 10) && close(p[1], 20) && close(p[2], 30), "{p:?}");
    }

    #[test]
    fn test_fully_transparent_becomes_black() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 0])));
        let out = transform(&img, &CropRegion::square(0, 0, 40), 20);
        for p in out.pixels() {
            assert_eq!(*p, Rgb([0, 0, 0]));
        }
    }

    #[test]
    fn test_transparent_color_does_not_bleed_into_opaque_edge() {
        // left half opaque red, right half transparent white
        let img = RgbaImage::from_fn(40, 40, |x, _| {
            if x < 20 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 0])
            }
        });
        let out = transform(&DynamicImage::ImageRgba8(img), &CropRegion::square(0, 0, 40), 20);

        let edge = out.get_pixel(9, 10);
        assert!(close(edge[0], 255) && edge[1] == 0 && edge[2] == 0, "{edge:?}");
        assert_eq!(*out.get_pixel(18, 10), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_grayscale_is_expanded_to_rgb() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(30, 30, Luma([77])));
        let out = transform(&img, &CropRegion::square(5, 5, 20), 10);
        let p = out.get_pixel(0, 0);
        assert!(close(p[0], 77) && close(p[1], 77) && close(p[2], 77), "{p:?}");
    }
}
