/// Glyph for a die showing `value`. Values outside 1..=5 show the six face.
pub fn face_glyph(value: u8) -> char {
    match value {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        _ => '⚅',
    }
}

/// `⚂ 3  ⚅ 6` style row for a list of results.
pub fn faces_line(values: &[u8]) -> String {
    values
        .iter()
        .map(|&value| format!("{} {}", face_glyph(value), value))
        .collect::<Vec<_>>()
        .join("  ")
}
