#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn padded_adds_twice_the_padding() {
    let size = Size::new(896.0, 700.0).padded(32.0);
    assert_eq!(size, Size::new(960.0, 764.0));
}

#[test]
fn drawable_rejects_zero_and_nan() {
    assert!(Size::new(1.0, 1.0).is_drawable());
    assert!(!Size::new(0.0, 10.0).is_drawable());
    assert!(!Size::new(10.0, f64::NAN).is_drawable());
}

#[test]
fn scaled_pixels_rounds_up() {
    assert_eq!(Size::new(100.2, 50.0).scaled_pixels(2.0), (201, 100));
    assert_eq!(Size::new(-4.0, 3.0).scaled_pixels(2.0), (0, 6));
}

#[test]
fn rect_inset_never_negative() {
    let r = Rect::new(0.0, 0.0, 40.0, 40.0).inset(30.0);
    assert_eq!(r.x, 30.0);
    assert_eq!(r.width, 0.0);
    assert_eq!(r.height, 0.0);
}

#[test]
fn cover_crop_wide_source_crops_sides() {
    let crop = cover_crop(Size::new(400.0, 100.0), Size::new(100.0, 100.0));
    assert_eq!(crop, Some(Rect::new(150.0, 0.0, 100.0, 100.0)));
}

#[test]
fn cover_crop_tall_source_crops_top_and_bottom() {
    let crop = cover_crop(Size::new(100.0, 400.0), Size::new(200.0, 100.0));
    assert_eq!(crop, Some(Rect::new(0.0, 175.0, 100.0, 50.0)));
}

#[test]
fn cover_crop_same_ratio_uses_whole_image() {
    let crop = cover_crop(Size::new(300.0, 200.0), Size::new(150.0, 100.0));
    assert_eq!(crop, Some(Rect::new(0.0, 0.0, 300.0, 200.0)));
}

#[test]
fn cover_crop_rejects_empty_sizes() {
    assert!(cover_crop(Size::new(0.0, 10.0), Size::new(10.0, 10.0)).is_none());
    assert!(cover_crop(Size::new(10.0, 10.0), Size::new(10.0, 0.0)).is_none());
}
