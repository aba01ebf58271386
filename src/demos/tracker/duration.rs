//! Duration input: plain minutes (`45`), `hh:mm` or `hh.mm`.

const MINUTES_PER_HOUR: u32 = 60;

/// Parse a duration into whole minutes.
///
/// Returns `None` for anything that is not a positive duration: unparsable
/// text, more than one separator, negative hours, minutes outside `0..=59`,
/// a zero total, or a total that does not fit in `u32`.
pub fn parse_duration(input: &str) -> Option<u32> {
    let minutes = if input.contains(':') {
        parse_clock(input, ':')?
    } else if input.contains('.') {
        parse_clock(input, '.')?
    } else {
        let minutes: i32 = input.parse().ok()?;
        u32::try_from(minutes).ok()?
    };
    (minutes > 0).then_some(minutes)
}

fn parse_clock(input: &str, separator: char) -> Option<u32> {
    let mut parts = input.split(separator);
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours < 0 || !(0..=59).contains(&minutes) {
        return None;
    }
    (hours as u32)
        .checked_mul(MINUTES_PER_HOUR)?
        .checked_add(minutes as u32)
}

/// Render minutes as `H h M min`.
pub fn format_hours_minutes(total: u32) -> String {
    format!(
        "{} h {} min",
        total / MINUTES_PER_HOUR,
        total % MINUTES_PER_HOUR
    )
}
