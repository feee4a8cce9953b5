// Host-side tests for logo sampling and particle seeding.

use glam::Vec3;
use pointcloud_core::sampler::{sample_points, spawn_particles};
use pointcloud_core::{Bitmap, SampleGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn masked_bitmap(width: u32, height: u32, opaque: &[(u32, u32)]) -> Bitmap {
    let mut bmp = Bitmap::transparent(width, height);
    for &(x, y) in opaque {
        bmp.set_pixel(x, y, [255, 255, 255, 1]);
    }
    bmp
}

#[test]
fn only_grid_points_with_alpha_are_sampled() {
    // (2,0) and (4,3) are on the 2x3 grid, (1,1) and (3,3) are not.
    let bmp = masked_bitmap(6, 6, &[(2, 0), (4, 3), (1, 1), (3, 3)]);
    let grid = SampleGrid {
        step_x: 2,
        step_y: 3,
    };
    assert_eq!(sample_points(&bmp, grid), vec![(2, 0), (4, 3)]);
}

#[test]
fn points_are_ordered_x_outer_y_inner() {
    let bmp = masked_bitmap(4, 4, &[(0, 2), (2, 0), (0, 0), (2, 2)]);
    let grid = SampleGrid {
        step_x: 2,
        step_y: 2,
    };
    assert_eq!(
        sample_points(&bmp, grid),
        vec![(0, 0), (0, 2), (2, 0), (2, 2)]
    );
}

#[test]
fn fully_opaque_bitmap_yields_every_grid_point() {
    let mut bmp = Bitmap::transparent(500, 500);
    for y in 0..500 {
        for x in 0..500 {
            bmp.set_pixel(x, y, [0, 0, 0, 255]);
        }
    }
    let points = sample_points(&bmp, SampleGrid::default());
    assert_eq!(points.len(), 100 * 100);
}

#[test]
fn transparent_bitmap_yields_no_particles() {
    let bmp = Bitmap::transparent(50, 50);
    let mut rng = StdRng::seed_from_u64(1);
    let store = spawn_particles(&bmp, SampleGrid::default(), &mut rng);
    assert!(store.is_empty());
}

#[test]
fn spawned_particles_start_at_rest_on_their_anchor() {
    let bmp = masked_bitmap(100, 50, &[(0, 0), (25, 10), (95, 45)]);
    let mut rng = StdRng::seed_from_u64(9);
    let store = spawn_particles(&bmp, SampleGrid::default(), &mut rng);
    assert_eq!(store.len(), 3);

    let p = store.get(1).unwrap();
    assert_eq!(p.position, Vec3::new(25.0 - 50.0, 10.0, 0.0));
    assert_eq!(p.base_position(), p.position);
    assert_eq!(p.velocity, Vec3::ZERO);
    assert!(!p.hit);
    assert_eq!(p.color, Vec3::ZERO);
    assert!((p.alt_color - Vec3::new(0.25, 0.2, 0.75)).length() < 1e-6);

    for p in store.particles() {
        assert!(p.mass >= 1.0 && p.mass < 2.0, "mass {} out of range", p.mass);
        assert_eq!(p.base_position(), p.position);
    }
}

#[test]
fn same_seed_gives_same_masses() {
    let bmp = Bitmap::shield(120, 120);
    let a = spawn_particles(&bmp, SampleGrid::default(), &mut StdRng::seed_from_u64(5));
    let b = spawn_particles(&bmp, SampleGrid::default(), &mut StdRng::seed_from_u64(5));
    assert!(!a.is_empty());
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn decoded_png_round_trips_alpha() {
    let mut img = image::RgbaImage::new(3, 2);
    img.put_pixel(1, 1, image::Rgba([10, 20, 30, 128]));
    let mut png = std::io::Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png).unwrap();

    let bmp = Bitmap::decode(png.get_ref()).unwrap();
    assert_eq!((bmp.width(), bmp.height()), (3, 2));
    assert_eq!(bmp.alpha(1, 1), 128);
    assert_eq!(bmp.alpha(0, 0), 0);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(Bitmap::decode(b"not an image").is_err());
}
