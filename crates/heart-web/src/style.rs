// Inline-style values written to the button controls.

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

#[inline]
pub fn scale_transform(scale: f32) -> String {
    format!("scale({})", scale)
}

/// Opacity as a CSS number, clamped to [0, 1].
#[inline]
pub fn opacity(value: f32) -> String {
    let v = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    format!("{}", v)
}
