use hush_time::{DurationFormatter, Locale};

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn guild_only_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Эта команда работает только на серверах.",
        Locale::English => "This command only works in servers.",
    }
}

pub fn missing_permission_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "У вас нет прав на эту команду.",
        Locale::English => "You don't have permission to use this command.",
    }
}

pub fn bot_target_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Нельзя применять модерацию к ботам и приложениям.",
        Locale::English => "You can't use moderation actions on bots or application accounts.",
    }
}

pub fn self_target_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Нельзя выдать тайм-аут самому себе.",
        Locale::English => "You can't time yourself out.",
    }
}

pub fn invalid_time_message(locale: Locale, input: &str) -> String {
    let input = inline_code_safe(input);

    match locale {
        Locale::Russian => format!(
            "Не удалось разобрать время `{input}`.\nНапример: `1ч30м`, `1.5ч` или `25.12 в 18:00`"
        ),
        Locale::English => format!(
            "Seems like `{input}` is not a valid time string.\nFor example: `1h30m`, `1hour 10m` or `25.12 at 18:00`"
        ),
    }
}

pub fn cannot_mute_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Вы не можете выдавать тайм-аут этому пользователю.",
        Locale::English => "You cannot time out this member. Check role hierarchy and permissions.",
    }
}

pub fn cannot_unmute_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Не удалось снять тайм-аут с этого пользователя.",
        Locale::English => "I couldn't remove the timeout from that member. Check permissions.",
    }
}

pub fn cannot_slowmode_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Не удалось изменить медленный режим в этом канале.",
        Locale::English => "I couldn't change slowmode in that channel. Check permissions.",
    }
}

pub fn slowmode_enabled_message(locale: Locale, channel_id: u64, interval: &str) -> String {
    match locale {
        Locale::Russian => format!("Медленный режим в <#{channel_id}>: одно сообщение раз в {interval}."),
        Locale::English => format!("Slowmode in <#{channel_id}> set to {interval}."),
    }
}

pub fn slowmode_disabled_message(locale: Locale, channel_id: u64) -> String {
    match locale {
        Locale::Russian => format!("Медленный режим в <#{channel_id}> выключен."),
        Locale::English => format!("Slowmode in <#{channel_id}> disabled."),
    }
}

pub fn no_reason(locale: Locale) -> &'static str {
    match locale {
        Locale::Russian => "Причина не указана",
        Locale::English => "No reason provided",
    }
}

/// Formatted duration, or a "less than a second" label when every unit is zero.
pub fn duration_label(formatter: &DurationFormatter, ms: i64) -> String {
    let label = formatter.format(ms);
    if !label.is_empty() {
        return label;
    }

    match formatter.locale {
        Locale::Russian => "меньше секунды".to_owned(),
        Locale::English => "less than a second".to_owned(),
    }
}

/// Strip characters that would break out of inline code or ping someone.
pub fn inline_code_safe(input: &str) -> String {
    input.replace('`', "'").replace('@', "@\u{200B}")
}
