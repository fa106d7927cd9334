use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Current instant on the configured UTC offset.
pub fn now_at(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Fixed offset from whole minutes east of UTC; out-of-range values mean UTC.
pub fn offset_from_minutes(minutes: i32) -> FixedOffset {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}
