use image::imageops::{self, FilterType};
use image::{Rgb as Pixel, RgbImage};

use crate::models::{Logo, Rgb};

/// Draw a logo over the center of a rendered code.
///
/// A background-colored square of `size + 2 * padding` is painted first,
/// then the logo is fitted into a `size` box keeping its aspect ratio and
/// alpha-blended on top. Both boxes are capped at the image side.
pub fn overlay_logo(image: &mut RgbImage, logo: &Logo, background: Rgb) {
    let (logo_w, logo_h) = logo.image.dimensions();
    let (width, height) = image.dimensions();
    let size = logo.size.min(width.min(height));
    if logo_w == 0 || logo_h == 0 || size == 0 {
        return;
    }

    let boxed = size.saturating_add(logo.padding.saturating_mul(2));
    fill_centered(image, boxed, boxed, background);

    let (draw_w, draw_h) = fit_box(logo_w, logo_h, size);
    let scaled = imageops::resize(&logo.image, draw_w, draw_h, FilterType::Lanczos3);
    let x0 = (width as i64 - draw_w as i64) / 2;
    let y0 = (height as i64 - draw_h as i64) / 2;

    for (x, y, src) in scaled.enumerate_pixels() {
        let (px, py) = (x0 + x as i64, y0 + y as i64);
        if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
            continue;
        }
        let [r, g, b, a] = src.0;
        let dst = image.get_pixel_mut(px as u32, py as u32);
        let blend = |s: u8, d: u8| ((s as u32 * a as u32 + d as u32 * (255 - a as u32) + 127) / 255) as u8;
        *dst = Pixel([blend(r, dst[0]), blend(g, dst[1]), blend(b, dst[2])]);
    }
}

/// Largest (width, height) with the source aspect ratio fitting a `size` square
pub fn fit_box(width: u32, height: u32, size: u32) -> (u32, u32) {
    let aspect = width as f64 / height as f64;
    let (w, h) = if aspect > 1.0 {
        (size as f64, size as f64 / aspect)
    } else {
        (size as f64 * aspect, size as f64)
    };
    ((w.round() as u32).max(1), (h.round() as u32).max(1))
}

fn fill_centered(image: &mut RgbImage, w: u32, h: u32, color: Rgb) {
    let (width, height) = image.dimensions();
    let x0 = width.saturating_sub(w) / 2;
    let y0 = height.saturating_sub(h) / 2;
    let pixel = Pixel::from(color);
    for y in y0..y0.saturating_add(h).min(height) {
        for x in x0..x0.saturating_add(w).min(width) {
            image.put_pixel(x, y, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_fit_box() {
        assert_eq!(fit_box(100, 100, 70), (70, 70));
        assert_eq!(fit_box(200, 100, 70), (70, 35));
        assert_eq!(fit_box(100, 200, 70), (35, 70));
        assert_eq!(fit_box(1000, 1, 70), (70, 1));
    }

    #[test]
    fn test_overlay_paints_background_square_and_logo() {
        let mut image = RgbImage::from_pixel(100, 100, Pixel([0, 0, 0]));
        let logo = Logo {
            image: RgbaImage::from_pixel(10, 10, Rgba([200, 10, 10, 255])),
            size: 20,
            padding: 5,
        };
        overlay_logo(&mut image, &logo, Rgb::new(255, 255, 255));

        // padding ring is background
        assert_eq!(image.get_pixel(36, 36).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(63, 63).0, [255, 255, 255]);
        // outside the box untouched
        assert_eq!(image.get_pixel(34, 34).0, [0, 0, 0]);
        // logo in the middle
        assert_eq!(image.get_pixel(50, 50).0, [200, 10, 10]);
    }

    #[test]
    fn test_transparent_logo_keeps_background() {
        let mut image = RgbImage::from_pixel(60, 60, Pixel([0, 0, 0]));
        let logo = Logo {
            image: RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 0])),
            size: 20,
            padding: 0,
        };
        overlay_logo(&mut image, &logo, Rgb::new(9, 9, 9));
        assert_eq!(image.get_pixel(30, 30).0, [9, 9, 9]);
    }

    #[test]
    fn test_huge_padding_fills_whole_image() {
        let mut image = RgbImage::from_pixel(40, 40, Pixel([0, 0, 0]));
        let logo = Logo {
            image: RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 255])),
            size: 10,
            padding: u32::MAX / 2 + 1,
        };
        overlay_logo(&mut image, &logo, Rgb::new(9, 9, 9));
        assert_eq!(image.get_pixel(0, 0).0, [9, 9, 9]);
        assert_eq!(image.get_pixel(39, 39).0, [9, 9, 9]);
        assert_eq!(image.get_pixel(20, 20).0, [200, 10, 10]);
    }

    #[test]
    fn test_logo_larger_than_image_is_capped() {
        let mut image = RgbImage::from_pixel(30, 30, Pixel([0, 0, 0]));
        let logo = Logo {
            image: RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 255])),
            size: u32::MAX,
            padding: 0,
        };
        overlay_logo(&mut image, &logo, Rgb::new(9, 9, 9));
        assert_eq!(image.get_pixel(0, 0).0, [200, 10, 10]);
        assert_eq!(image.get_pixel(29, 29).0, [200, 10, 10]);
    }
}
