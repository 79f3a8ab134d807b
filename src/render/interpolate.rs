//! Linear interpolation over integer steps.
//!
//! The scanline filler needs a dependent value (an X coordinate, a `1/z`)
//! sampled once per integer step of an independent one (a row, a column).
//! [`Stepper`] carries the running value and its per-step delta so the slope
//! is computed once per edge or span, not once per pixel.

/// Forward-difference accumulator: a value plus a constant per-step delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stepper {
    pub value: f32,
    pub delta: f32,
}

impl Stepper {
    /// Steps from `d0` towards `d1` in `steps` equal increments.
    ///
    /// Zero steps yields a constant stepper instead of dividing by zero.
    pub fn new(d0: f32, d1: f32, steps: u32) -> Self {
        let delta = if steps == 0 {
            0.0
        } else {
            (d1 - d0) / steps as f32
        };
        Self { value: d0, delta }
    }

    /// Moves one step forward.
    #[inline]
    pub fn advance(&mut self) {
        self.value += self.delta;
    }
}

impl Iterator for Stepper {
    type Item = f32;

    /// Yields the current value, then advances. Never ends; pair with `take`.
    fn next(&mut self) -> Option<f32> {
        let value = self.value;
        self.advance();
        Some(value)
    }
}

/// Samples the line through `(i0, d0)` and `(i1, d1)` at every integer from
/// `i0` to `i1` inclusive.
///
/// Returns `|i1 - i0| + 1` values, the first `d0` and the last `d1` (up to
/// rounding). Equal endpoints return the single sample `[d0]`.
pub fn interpolate(i0: i32, d0: f32, i1: i32, d1: f32) -> Vec<f32> {
    if i0 == i1 {
        return vec![d0];
    }

    let steps = i0.abs_diff(i1);
    Stepper::new(d0, d1, steps)
        .take(steps as usize + 1)
        .collect()
}

/// Interpolates an attribute along the edges of a Y-sorted triangle.
///
/// Given vertices sorted so that `y0 <= y1 <= y2`, returns
/// `(long, short)`: the attribute along the long edge 0→2 and along the two
/// short edges 0→1→2 concatenated. Both have `y2 - y0 + 1` samples, one per
/// scanline. The sample shared by the short edges at `y1` appears once.
pub fn edge_interpolate(
    y0: i32,
    v0: f32,
    y1: i32,
    v1: f32,
    y2: i32,
    v2: f32,
) -> (Vec<f32>, Vec<f32>) {
    let mut v01 = interpolate(y0, v0, y1, v1);
    let v12 = interpolate(y1, v1, y2, v2);
    let v02 = interpolate(y0, v0, y2, v2);

    v01.pop();
    v01.extend(v12);

    (v02, v01)
}
