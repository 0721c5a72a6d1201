use retroclock_framebuf::FrameBuffer;

/// Renders each framebuffer row as text: `#` for ink, `.` for background.
///
/// Blank rows above and below the ink are trimmed.
pub fn render_rows<const W: usize, const H: usize>(
    frame: &FrameBuffer<W, H>,
    background: u16,
) -> Vec<String> {
    let rows: Vec<String> = (0..H)
        .filter_map(|y| frame.line(y))
        .map(|line| {
            line.iter()
                .map(|pixel| if *pixel == background { '.' } else { '#' })
                .collect()
        })
        .collect();

    let first = rows.iter().position(|row| row.contains('#'));
    let last = rows.iter().rposition(|row| row.contains('#'));
    match (first, last) {
        (Some(first), Some(last)) => rows[first..=last].to_vec(),
        _ => Vec::new(),
    }
}
