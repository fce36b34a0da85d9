use std::collections::VecDeque;

use image::{Rgb, RgbImage};

use crate::error::{PaintError, PaintResult};

/// Seed fill over 4-connected pixels sharing the seed's color.
///
/// Iterative with an explicit queue, so large regions cannot overflow the
/// stack. Returns the number of pixels repainted; filling a region that
/// already has `target` touches nothing.
pub fn flood_fill(image: &mut RgbImage, x: i64, y: i64, target: Rgb<u8>) -> PaintResult<usize> {
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let in_bounds = |x: i64, y: i64| (0..width).contains(&x) && (0..height).contains(&y);
    if !in_bounds(x, y) {
        return Err(PaintError::OutOfBounds { x, y });
    }

    let seed = *image.get_pixel(x as u32, y as u32);
    if seed == target {
        return Ok(0);
    }

    let mut painted = 0;
    let mut queue = VecDeque::new();
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        if !in_bounds(cx, cy) {
            continue;
        }
        let pixel = image.get_pixel_mut(cx as u32, cy as u32);
        if *pixel != seed {
            continue;
        }
        *pixel = target;
        painted += 1;
        queue.extend([(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)]);
    }

    log::debug!("flood fill from ({x}, {y}) repainted {painted} pixels");
    Ok(painted)
}
