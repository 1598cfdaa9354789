//! Fixed-width text formatting for measurement labels.
//!
//! Labels render one `name = value` row per component, with the name
//! column, the sign column and the integer digits aligned across rows so
//! multi-line coordinate readouts line up in the 3D sprite font.

use glam::Vec3;

use crate::error::{Result, VrscopeError};

/// Number of digits in the integer part of `value`.
fn integer_digits(value: f32) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    let left = value.trunc().abs() as i64;
    left.to_string().len()
}

/// Renders pre-validated rows. Row counts are the caller's problem.
fn render_rows(rows: &[(&str, f32)], decimals: usize) -> String {
    let longest_name = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let longest_left = rows
        .iter()
        .map(|(_, value)| integer_digits(*value))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len());
    for (name, value) in rows {
        let name_pad = " ".repeat(longest_name - name.len());
        let number_pad = " ".repeat(longest_left - integer_digits(*value));
        let sign = if *value > 0.0 { ' ' } else { '-' };
        lines.push(format!(
            "{name}{name_pad} = {sign}{number_pad}{:.decimals$}",
            value.abs()
        ));
    }
    lines.join("\n")
}

/// Formats named values as an aligned multi-line table.
///
/// Returns [`VrscopeError::LabelLengthMismatch`] when the slices differ in
/// length; nothing is rendered in that case.
pub fn format_table(names: &[&str], values: &[f32], decimals: usize) -> Result<String> {
    if names.len() != values.len() {
        return Err(VrscopeError::LabelLengthMismatch {
            names: names.len(),
            values: values.len(),
        });
    }
    let rows: Vec<(&str, f32)> = names.iter().copied().zip(values.iter().copied()).collect();
    Ok(render_rows(&rows, decimals))
}

/// Formats a point as aligned `x`/`y`/`z` rows.
#[must_use]
pub fn format_point(point: Vec3, decimals: usize) -> String {
    render_rows(
        &[("x", point.x), ("y", point.y), ("z", point.z)],
        decimals,
    )
}

/// Formats a distance as a single `Distance = ...` row.
#[must_use]
pub fn format_distance(distance: f32, decimals: usize) -> String {
    render_rows(&[("Distance", distance)], decimals)
}
