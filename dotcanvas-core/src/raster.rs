use crate::canvas::Canvas;

/// Draw a line segment between two virtual pixel coordinates.
pub fn line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    line_points(x0, y0, x1, y1, |x, y| canvas.set_pixel(x as f64, y as f64));
}

/// Draw a circle of radius `r` around `(cx, cy)`.
pub fn circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32) {
    circle_points(cx, cy, r, |x, y| canvas.set_pixel(x as f64, y as f64));
}

/// Decompose a line segment into pixel coordinates, one `plot` call each.
///
/// Steps along the axis with the greater extent; the minor coordinate is
/// `trunc(step · minor_delta / major_delta)`, i.e. float division truncated
/// toward zero. This deliberately keeps the approximate rounding rather
/// than an exact integer Bresenham — the visible output depends on it.
pub fn line_points(
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    mut plot: impl FnMut(i32, i32),
) {
    let mut dx = x1 - x0;
    let mut dy = y1 - y0;

    if dx.abs() > dy.abs() {
        // x-major: traverse left to right.
        if dx < 0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
            dx = -dx;
            dy = -dy;
        }
        for x in 0..=dx {
            let y = (x as f64 * dy as f64 / dx as f64) as i32;
            plot(x0 + x, y0 + y);
        }
    } else {
        // y-major: traverse top to bottom.
        if dy < 0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
            dx = -dx;
            dy = -dy;
        }
        // dy is 0 only when dx is too (a single point); divisor 1 keeps the
        // division defined and plots exactly the origin.
        let div = if dy == 0 { 1 } else { dy };
        for y in 0..=dy {
            let x = (y as f64 * dx as f64 / div as f64) as i32;
            plot(x0 + x, y0 + y);
        }
    }
}

/// Decompose a circle into pixel coordinates via the midpoint algorithm,
/// plotting all eight symmetric octant points per step.
pub fn circle_points(cx: i32, cy: i32, r: i32, mut plot: impl FnMut(i32, i32)) {
    let mut x = 0;
    let mut y = r;
    let mut decision = 3 - 2 * r;

    plot_octants(cx, cy, x, y, &mut plot);
    while y >= x {
        x += 1;
        if decision > 0 {
            y -= 1;
            decision += 4 * (x - y) + 10;
        } else {
            decision += 4 * x + 6;
        }
        plot_octants(cx, cy, x, y, &mut plot);
    }
}

fn plot_octants(cx: i32, cy: i32, x: i32, y: i32, plot: &mut impl FnMut(i32, i32)) {
    plot(cx + x, cy + y);
    plot(cx - x, cy + y);
    plot(cx + x, cy - y);
    plot(cx - x, cy - y);
    plot(cx + y, cy + x);
    plot(cx - y, cy + x);
    plot(cx + y, cy - x);
    plot(cx - y, cy - x);
}
