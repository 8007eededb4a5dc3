use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::surface::SurfaceGrid;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut,
};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizationError {
    #[error("surface grid has no samples")]
    EmptyGrid,
    #[error("image size must be non-zero, got {0}x{1}")]
    EmptyCanvas(u32, u32),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

const MARKER_COLOR: Rgb<u8> = Rgb([220, 30, 30]);
const ARROW_COLOR: Rgb<u8> = Rgb([220, 30, 30]);
const DOT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const GRID_COLOR: Rgb<u8> = Rgb([215, 215, 215]);
const AXIS_COLOR: Rgb<u8> = Rgb([90, 90, 90]);
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

// Anchors of the viridis colour map.
const VIRIDIS: [(f64, [u8; 3]); 5] = [
    (0.00, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.50, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.00, [253, 231, 37]),
];

pub fn viridis(t: f64) -> Rgb<u8> {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    for pair in VIRIDIS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
            return Rgb([lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2])]);
        }
    }
    Rgb(VIRIDIS[VIRIDIS.len() - 1].1)
}

fn check_canvas(width: u32, height: u32) -> Result<(), VisualizationError> {
    if width == 0 || height == 0 {
        return Err(VisualizationError::EmptyCanvas(width, height));
    }
    Ok(())
}

pub fn render_surface(
    grid: &SurfaceGrid,
    marker: Point<f64>,
    width: u32,
    height: u32,
) -> Result<RgbImage, VisualizationError> {
    check_canvas(width, height)?;
    let (z_min, z_max) = grid.min_max().ok_or(VisualizationError::EmptyGrid)?;
    let bounds = grid.bounds();
    let n = grid.resolution();
    let z_span = if z_max > z_min { z_max - z_min } else { 1.0 };

    let nearest = |t: f64| ((t * (n - 1) as f64).round() as usize).min(n - 1);

    let mut img = RgbImage::from_fn(width, height, |px, py| {
        let tx = (px as f64 + 0.5) / width as f64;
        let ty = 1.0 - (py as f64 + 0.5) / height as f64;
        match grid.get(nearest(tx), nearest(ty)) {
            Some(z) if z.is_finite() => viridis((z - z_min) / z_span),
            _ => BACKGROUND,
        }
    });

    if bounds.contains(marker) {
        let (mx, my) = bounds.to_pixel(marker, width, height);
        let radius = (width.min(height) / 80).max(3) as i32;
        let center = (mx as i32, my as i32);
        draw_filled_circle_mut(&mut img, center, radius, MARKER_COLOR);
        draw_hollow_circle_mut(&mut img, center, radius + 1, DOT_COLOR);
    } else {
        log::debug!("Marker {:?} lies outside the sampled domain", marker);
    }

    Ok(img)
}

pub fn draw_surface(
    grid: &SurfaceGrid,
    marker: Point<f64>,
    filename: &Path,
    width: u32,
    height: u32,
) -> Result<(), VisualizationError> {
    let img = render_surface(grid, marker, width, height)?;
    img.save(filename)?;
    Ok(())
}

fn draw_thick_line(img: &mut RgbImage, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
    for (ox, oy) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)] {
        draw_line_segment_mut(img, (from.0 + ox, from.1 + oy), (to.0 + ox, to.1 + oy), color);
    }
}

/// Renders the gradient at `anchor` as an arrow in the xy-plane.
///
/// The arrow uses unit display scale: its length in plot coordinates equals
/// the gradient magnitude, so steep points draw arrows that leave the
/// `[-bound, bound]` viewport.
pub fn render_gradient(
    anchor: Point<f64>,
    gradient: Point<f64>,
    bound: f64,
    width: u32,
    height: u32,
) -> Result<RgbImage, VisualizationError> {
    check_canvas(width, height)?;
    let view = Rect::square(bound);
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let map = |p: Point<f64>| view.to_pixel(p, width, height);

    let first = view.min.x.ceil() as i64;
    let last = view.max.x.floor() as i64;
    for k in first..=last {
        let k = k as f64;
        let color = if k == 0.0 { AXIS_COLOR } else { GRID_COLOR };
        draw_line_segment_mut(
            &mut img,
            map(Point::new(k, view.min.y)),
            map(Point::new(k, view.max.y)),
            color,
        );
        draw_line_segment_mut(
            &mut img,
            map(Point::new(view.min.x, k)),
            map(Point::new(view.max.x, k)),
            color,
        );
    }

    if let Some(dir) = gradient.normalized() {
        let tip = anchor + gradient;
        draw_thick_line(&mut img, map(anchor), map(tip), ARROW_COLOR);

        let head = (gradient.norm() * 0.25).min(bound * 0.1);
        let back = -dir;
        let (sin, cos) = 25f64.to_radians().sin_cos();
        for s in [sin, -sin] {
            let wing = Point::new(back.x * cos - back.y * s, back.x * s + back.y * cos);
            draw_thick_line(&mut img, map(tip), map(tip + wing * head), ARROW_COLOR);
        }
    } else if !gradient.is_finite() {
        log::warn!("Gradient {:?} is not finite; skipping arrow", gradient);
    }

    let (ax, ay) = map(anchor);
    let radius = (width.min(height) / 120).max(2) as i32;
    draw_filled_circle_mut(&mut img, (ax as i32, ay as i32), radius, DOT_COLOR);

    Ok(img)
}

pub fn draw_gradient(
    anchor: Point<f64>,
    gradient: Point<f64>,
    bound: f64,
    filename: &Path,
    width: u32,
    height: u32,
) -> Result<(), VisualizationError> {
    let img = render_gradient(anchor, gradient, bound, width, height)?;
    img.save(filename)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::surface::linspace;

    fn bowl(n: usize) -> SurfaceGrid {
        let axis = linspace(-3.0, 3.0, n);
        let heights = axis
            .iter()
            .flat_map(|&y| axis.iter().map(move |&x| x * x + y * y))
            .collect();
        SurfaceGrid::new(axis, heights)
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), Rgb([68, 1, 84]));
        assert_eq!(viridis(1.0), Rgb([253, 231, 37]));
        assert_eq!(viridis(-4.0), viridis(0.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn surface_centre_is_darkest_and_marker_is_red() {
        let img = render_surface(&bowl(61), Point::new(2.0, 2.0), 200, 200).unwrap();
        assert_eq!(img.dimensions(), (200, 200));
        assert_eq!(*img.get_pixel(100, 100), viridis(0.0));
        assert_eq!(*img.get_pixel(0, 0), viridis(1.0));
        // (2, 2) maps to pixel (166, 33).
        assert_eq!(*img.get_pixel(166, 33), MARKER_COLOR);
    }

    #[test]
    fn empty_canvas_is_rejected() {
        assert!(matches!(
            render_surface(&bowl(4), Point::default(), 0, 10),
            Err(VisualizationError::EmptyCanvas(0, 10))
        ));
    }

    #[test]
    fn gradient_arrow_starts_at_anchor_dot() {
        let img =
            render_gradient(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 3.0, 300, 300).unwrap();
        assert_eq!(*img.get_pixel(150, 150), DOT_COLOR);
        // Midway along the shaft, (1, 0) maps to pixel (200, 150).
        assert_eq!(*img.get_pixel(200, 150), ARROW_COLOR);
        // Nothing to the left of the anchor along the x axis is red.
        assert_ne!(*img.get_pixel(100, 150), ARROW_COLOR);
    }

    #[test]
    fn zero_gradient_draws_only_the_dot() {
        let img = render_gradient(Point::new(1.0, 1.0), Point::default(), 3.0, 300, 300).unwrap();
        assert!(img.pixels().all(|p| *p != ARROW_COLOR));
    }
}
