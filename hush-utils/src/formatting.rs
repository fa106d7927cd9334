/// Longest slowmode interval a channel accepts, in seconds.
pub const MAX_SLOWMODE_SECS: u16 = 21_600;

/// Discord timestamp markup styles (`<t:UNIX:STYLE>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampStyle {
    ShortTime,
    LongTime,
    ShortDate,
    LongDate,
    ShortDateTime,
    LongDateTime,
    Relative,
}

impl TimestampStyle {
    fn flag(self) -> char {
        match self {
            Self::ShortTime => 't',
            Self::LongTime => 'T',
            Self::ShortDate => 'd',
            Self::LongDate => 'D',
            Self::ShortDateTime => 'f',
            Self::LongDateTime => 'F',
            Self::Relative => 'R',
        }
    }
}

/// Render a unix timestamp (seconds) as client-localized markup, e.g. `<t:1700000000:R>`.
pub fn discord_timestamp(unix_secs: i64, style: TimestampStyle) -> String {
    format!("<t:{}:{}>", unix_secs, style.flag())
}

/// Relative time followed by date and time, used for the end of a timeout.
pub fn until_markup(unix_secs: i64) -> String {
    format!(
        "{}, {} {}",
        discord_timestamp(unix_secs, TimestampStyle::Relative),
        discord_timestamp(unix_secs, TimestampStyle::ShortDate),
        discord_timestamp(unix_secs, TimestampStyle::LongTime)
    )
}

/// Clamp a positive duration to `max_ms`. Non-positive durations are rejected.
pub fn clamp_duration_ms(ms: i64, max_ms: i64) -> Option<i64> {
    if ms <= 0 {
        return None;
    }

    Some(ms.min(max_ms))
}

/// Convert a positive duration into a slowmode interval.
///
/// Sub-second durations round up to one second; anything longer than
/// [`MAX_SLOWMODE_SECS`] is clamped.
pub fn slowmode_seconds(ms: i64) -> Option<u16> {
    if ms <= 0 {
        return None;
    }

    let seconds = (ms / 1_000 + i64::from(ms % 1_000 != 0)).min(i64::from(MAX_SLOWMODE_SECS));
    u16::try_from(seconds).ok()
}
