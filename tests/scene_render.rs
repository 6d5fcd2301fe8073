//! End-to-end compositing scenarios: partial outline failure, multiply
//! blending, and scene switching.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use image::RgbImage;
use roomtint::engine::{SceneView, StaticOutlineSource};

const LEFT_WALL: &str = r##"<svg viewBox="0 0 1280 720">
    <path d="M 0 0 L 640 0 L 640 720 L 0 720 Z" fill="#ffffff"/>
</svg>"##;

const RIGHT_WALL: &str = r##"<svg viewBox="0 0 1280 720">
    <path d="M 640 0 L 1280 0 L 1280 720 L 640 720 Z" fill="#ffffff"/>
</svg>"##;

fn base_photo() -> RgbImage {
    RgbImage::from_pixel(128, 72, image::Rgb([200, 180, 160]))
}

fn wait_until_loaded(view: &mut SceneView) {
    for _ in 0..1000 {
        view.pump();
        if !view.is_loading() {
            return;
        }
        thread::sleep(Duration::from_millis(2));
    }
    panic!("scene never finished loading");
}

fn living_room_source() -> Arc<StaticOutlineSource> {
    let mut source = StaticOutlineSource::new();
    source.insert("living-room", "left-wall", LEFT_WALL);
    source.insert("living-room", "right-wall", RIGHT_WALL);
    // The curtain document exists but its geometry does not parse
    source.insert("living-room", "curtain", "<svg><path d='M bogus'/></svg>");
    Arc::new(source)
}

#[test]
fn scene_with_one_broken_outline_stays_usable() {
    let mut view = SceneView::new(living_room_source());
    view.open_scene(
        "living-room",
        base_photo(),
        &["left-wall", "right-wall", "curtain"],
    );
    wait_until_loaded(&mut view);

    let mut tintable = view.tintable_regions();
    tintable.sort_unstable();
    assert_eq!(tintable, vec!["left-wall", "right-wall"]);

    view.pick_color("left-wall", "#dc143c");
    view.pick_color("right-wall", "#3a7bd5");
    view.pick_color("curtain", "#00ff00");

    let rendered = view.render().expect("scene renders despite broken region");
    // Left half carries the crimson tint, right half the blue one
    let left = rendered.get_pixel(10, 36).0;
    let right = rendered.get_pixel(120, 36).0;
    assert!(left[0] > left[2], "left wall should lean red, got {:?}", left);
    assert!(right[2] > right[0], "right wall should lean blue, got {:?}", right);
}

#[test]
fn multiply_blend_keeps_shading_visible() {
    let mut photo = base_photo();
    // A dark shadow pixel inside the left wall
    photo.put_pixel(10, 36, image::Rgb([60, 54, 48]));

    let mut view = SceneView::new(living_room_source());
    view.open_scene("living-room", photo, &["left-wall"]);
    wait_until_loaded(&mut view);
    view.pick_color("left-wall", "#dc143c");

    let rendered = view.render().unwrap();
    let shadow = rendered.get_pixel(10, 36).0;
    let lit = rendered.get_pixel(20, 36).0;
    // Multiplicative compositing: the shadow stays darker than lit wall
    assert!(shadow[0] < lit[0]);
    assert!(shadow[1] < lit[1]);

    // The exact blend: channel * (0.3 + 0.7 * tint/255)
    let expected_red = (200.0 * (0.3 + 0.7 * (0xdc as f64) / 255.0)).round() as u8;
    assert_eq!(lit[0], expected_red);
}

#[test]
fn outline_coordinates_scale_to_photo_dimensions() {
    // Outlines are authored in 1280x720 space; the photo is 128x72. The
    // left-wall outline must cover exactly the left half either way.
    let mut view = SceneView::new(living_room_source());
    view.open_scene("living-room", base_photo(), &["left-wall"]);
    wait_until_loaded(&mut view);
    view.pick_color("left-wall", "#000000");

    let rendered = view.render().unwrap();
    let untouched = image::Rgb([200, 180, 160]);
    assert_ne!(rendered.get_pixel(63, 36), &untouched);
    assert_eq!(rendered.get_pixel(64, 36), &untouched);
}

#[test]
fn switching_scenes_discards_previous_state() {
    let mut view = SceneView::new(living_room_source());
    view.open_scene("living-room", base_photo(), &["left-wall", "right-wall"]);
    wait_until_loaded(&mut view);
    view.pick_color("left-wall", "#dc143c");

    view.open_scene("living-room", base_photo(), &["left-wall"]);
    wait_until_loaded(&mut view);

    assert!(view.selections().is_empty());
    assert_eq!(view.tintable_regions(), vec!["left-wall"]);
    let rendered = view.render().unwrap();
    assert_eq!(rendered.get_pixel(10, 36), &image::Rgb([200, 180, 160]));
}
