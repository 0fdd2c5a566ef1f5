/// Bounds `x` to `[lo, hi]`. NaN maps to `hi`.
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    lo.max(x.min(hi))
}
