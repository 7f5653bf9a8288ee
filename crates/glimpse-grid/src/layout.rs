//! Cube placement and camera for the grid scene.

use glam::{Mat4, Vec3};

/// Spacing between neighbouring cube centers.
const SPACING: f32 = 2.0;
/// Camera distance in units of grid width.
const ORBIT_FACTOR: f32 = 1.5;

const FOV_Y_DEG: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 10_000.0;

/// Degrees of spin per second for each unit of cube index.
const SPIN_DEG_PER_INDEX: f32 = 20.0;
const SPIN_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// `(row, col)` of cube `index` in a grid of side `side`.
#[inline]
pub fn cell(index: u32, side: u32) -> (u32, u32) {
    (index / side, index % side)
}

/// Shift that centers a grid of side `side` on the origin.
#[inline]
pub fn center_offset(side: u32) -> f32 {
    (side as f32 - 1.0) * SPACING / 2.0
}

/// Model matrix for cube `index` at time `t` seconds.
///
/// Rows run along X and columns along Y; each cube spins about a fixed
/// oblique axis at a rate proportional to its index.
pub fn model_matrix(index: u32, side: u32, t: f32) -> Mat4 {
    let (row, col) = cell(index, side);
    let offset = center_offset(side);
    let translation = Vec3::new(
        row as f32 * SPACING - offset,
        col as f32 * SPACING - offset,
        0.0,
    );
    let angle = t * (SPIN_DEG_PER_INDEX * index as f32).to_radians();

    Mat4::from_translation(translation) * Mat4::from_axis_angle(SPIN_AXIS.normalize(), angle)
}

/// Fills `out` with one model matrix per cube, in index order.
pub fn model_matrices(grid_size: u32, t: f32, out: &mut Vec<Mat4>) {
    out.clear();
    let side = grid_size.isqrt();
    if side == 0 {
        return;
    }
    out.extend((0..grid_size).map(|i| model_matrix(i, side, t)));
}

/// Camera orbit radius for a grid of `grid_size` cubes.
#[inline]
pub fn orbit_radius(grid_size: u32) -> f32 {
    grid_size.isqrt() as f32 * SPACING * ORBIT_FACTOR
}

/// Camera orbiting the origin in the XZ plane, one radian per second.
pub fn view_matrix(grid_size: u32, t: f64) -> Mat4 {
    let radius = orbit_radius(grid_size);
    let eye = Vec3::new(t.sin() as f32 * radius, 0.0, t.cos() as f32 * radius);
    Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
}

pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn center_cube_of_five_by_five_sits_at_origin() {
        assert_eq!(cell(12, 5), (2, 2));
        assert_eq!(center_offset(5), 4.0);
        let m = model_matrix(12, 5, 3.7);
        assert!(approx(m.w_axis.truncate(), Vec3::ZERO));
    }

    #[test]
    fn every_cell_is_covered_once() {
        for k in 1..=7u32 {
            let cells: HashSet<_> = (0..k * k).map(|i| cell(i, k)).collect();
            assert_eq!(cells.len(), (k * k) as usize);
            assert!(cells.iter().all(|&(r, c)| r < k && c < k));
        }
    }

    #[test]
    fn one_matrix_per_cube() {
        let mut out = Vec::new();
        model_matrices(36, 0.0, &mut out);
        assert_eq!(out.len(), 36);
        model_matrices(0, 0.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn corners_are_symmetric_about_origin() {
        let first = model_matrix(0, 4, 0.0).w_axis.truncate();
        let last = model_matrix(15, 4, 0.0).w_axis.truncate();
        assert!(approx(first, Vec3::new(-3.0, -3.0, 0.0)));
        assert!(approx(last, Vec3::new(3.0, 3.0, 0.0)));
    }

    #[test]
    fn first_cube_never_spins() {
        let m = model_matrix(0, 1, 123.0);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn spin_keeps_translation() {
        let still = model_matrix(7, 5, 0.0).w_axis;
        let spun = model_matrix(7, 5, 2.5).w_axis;
        assert!(still.abs_diff_eq(spun, 1e-5));
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn orbit_radius_scales_with_side() {
        assert_eq!(orbit_radius(25), 15.0);
        assert_eq!(orbit_radius(1), 3.0);
        assert_eq!(orbit_radius(0), 0.0);
    }

    #[test]
    fn camera_starts_on_positive_z() {
        let view = view_matrix(25, 0.0);
        // The origin lies straight ahead at the orbit radius.
        let origin_in_view = view.transform_point3(Vec3::ZERO);
        assert!(approx(origin_in_view, Vec3::new(0.0, 0.0, -15.0)));
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let p = projection_matrix(4.0 / 3.0);
        let ndc = p.project_point3(Vec3::new(0.0, 0.0, -Z_NEAR));
        assert!(ndc.z.abs() < 1e-4);
    }
}
