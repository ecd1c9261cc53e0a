//! Ray caster - one distance sample per screen column
//!
//! Rays are fanned evenly across the field of view around the view direction
//! and marched in fixed steps until they enter a wall cell or run out of range.
//!
//! Two details are empirical and reproduced exactly:
//!
//! - The fan is an even angular split, not a tangent-correct projection, so wide
//!   fields of view show fish-eye curvature.
//! - Each step is scaled by `dot(ray, view)` before it is mapped to the grid. This
//!   is a plain multiply by the cosine, not the `1/cos` flat-plane correction.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{ColumnSample, Vec2f, Vec2i, CORNER_VIEW_ANGLE, DISTANCE_STEP, MAX_DISTANCE};

/// Cast one ray per column and return the samples in column order.
///
/// The result always has exactly `screen_width` entries.
pub fn cast(
    screen_width: usize,
    grid: &Grid,
    position: Vec2f,
    direction: Vec2f,
    fov: f32,
) -> Vec<ColumnSample> {
    let mut out = Vec::with_capacity(screen_width);
    cast_into(screen_width, grid, position, direction, fov, &mut out);
    out
}

/// Like [`cast`] but reuses `out`. It is cleared first.
pub fn cast_into(
    screen_width: usize,
    grid: &Grid,
    position: Vec2f,
    direction: Vec2f,
    fov: f32,
    out: &mut Vec<ColumnSample>,
) {
    out.clear();
    out.extend(
        (0..screen_width)
            .map(|i| ray_direction(direction, fov, i, screen_width))
            .map(|ray| cast_ray(grid, position, direction, ray)),
    );
}

/// Direction of ray `i` of `n`: `direction` rotated by `-fov/2 + fov·i/n`.
pub fn ray_direction(direction: Vec2f, fov: f32, i: usize, n: usize) -> Vec2f {
    let angle = -fov / 2.0 + fov * i as f32 / n as f32;
    direction.rotate(angle)
}

/// All `n` ray directions, left to right.
pub fn ray_directions(direction: Vec2f, fov: f32, n: usize) -> Vec<Vec2f> {
    (0..n).map(|i| ray_direction(direction, fov, i, n)).collect()
}

/// March a single ray.
///
/// `view` is the player's facing direction and `ray` this column's direction.
pub fn cast_ray(grid: &Grid, position: Vec2f, view: Vec2f, ray: Vec2f) -> ColumnSample {
    let depth = ray.dot(view);

    for distance in 0..MAX_DISTANCE {
        // Multiplication order matters for bit-exact results.
        let offset = ray
            .scale(distance as f32)
            .scale(DISTANCE_STEP)
            .scale(depth);
        let cell = (position + offset).trunc();

        if grid.is_wall(cell) {
            return ColumnSample::hit(distance, is_corner_hit(cell, position, ray));
        }
    }

    ColumnSample::MISS
}

/// Does `ray` pass within `CORNER_VIEW_ANGLE` of one of the three corners of
/// `cell` nearest to `position`?
///
/// Only the three nearest corners count; the farthest one is never tested.
pub fn is_corner_hit(cell: Vec2i, position: Vec2f, ray: Vec2f) -> bool {
    let mut corners: ArrayVec<(f32, f32), 4> = ArrayVec::new();
    for dx in 0..2 {
        for dy in 0..2 {
            let to_corner = Vec2i::new(cell.x + dx, cell.y + dy).as_f32() - position;
            let len = to_corner.length();
            let cos = to_corner.scale(1.0 / len).dot(ray);
            corners.push((len, cos));
        }
    }

    corners.sort_by(|a, b| a.0.total_cmp(&b.0));

    // acos of a dot that rounded past 1.0 is NaN and never counts.
    corners
        .iter()
        .take(3)
        .any(|&(_, cos)| cos.acos() < CORNER_VIEW_ANGLE)
}
