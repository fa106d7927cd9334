use poise::serenity_prelude as serenity;

use hush_time::Locale;
use hush_utils::embed::DEFAULT_EMBED_COLOR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationAction {
    Mute,
    Unmute,
}

impl ModerationAction {
    fn past_tense(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Mute, Locale::Russian) => "был отправлен подумать о своем поведении",
            (Self::Mute, Locale::English) => "has been timed out",
            (Self::Unmute, Locale::Russian) => "снова может писать",
            (Self::Unmute, Locale::English) => "is no longer timed out",
        }
    }
}

struct Labels {
    target: &'static str,
    reason: &'static str,
    duration: &'static str,
    until: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Russian => Labels {
            target: "Участник",
            reason: "Причина",
            duration: "Длительность",
            until: "До",
        },
        Locale::English => Labels {
            target: "Target",
            reason: "Reason",
            duration: "Duration",
            until: "Until",
        },
    }
}

#[derive(Clone, Debug)]
pub struct TargetProfile {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

pub fn target_profile_from_user(user: &serenity::User) -> TargetProfile {
    TargetProfile {
        display_name: user
            .global_name
            .clone()
            .unwrap_or_else(|| user.name.clone()),
        avatar_url: Some(user.face()),
    }
}

/// Timing details shown on a mute embed.
pub struct MuteWindow<'a> {
    pub duration: &'a str,
    pub until: &'a str,
}

pub fn moderation_description(
    locale: Locale,
    target_user_id: serenity::UserId,
    reason: &str,
    window: Option<&MuteWindow<'_>>,
) -> String {
    let labels = labels(locale);
    let reason = reason.replace('@', "@\u{200B}");

    let mut lines = vec![
        format!("**{} :** <@{}>", labels.target, target_user_id.get()),
        format!("**{} :** {}", labels.reason, reason),
    ];

    if let Some(window) = window {
        lines.push(format!("**{} :** {}", labels.duration, window.duration));
        lines.push(format!("**{} :** {}", labels.until, window.until));
    }

    lines.join("\n")
}

pub fn moderation_action_embed(
    locale: Locale,
    action: ModerationAction,
    target_profile: &TargetProfile,
    target_user_id: serenity::UserId,
    reason: &str,
    window: Option<&MuteWindow<'_>>,
) -> serenity::CreateEmbed {
    let heading = format!(
        "{} {}",
        target_profile.display_name,
        action.past_tense(locale)
    );

    let embed = serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(moderation_description(
            locale,
            target_user_id,
            reason,
            window,
        ));

    match target_profile.avatar_url.as_deref() {
        Some(url) => embed.author(serenity::CreateEmbedAuthor::new(heading).icon_url(url)),
        None => embed.title(heading),
    }
}

pub fn is_missing_permissions_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use hush_time::Locale;

    use super::{MuteWindow, moderation_description};

    #[test]
    fn english_description_with_window() {
        let window = MuteWindow {
            duration: "1 hour 30 minutes",
            until: "<t:10:R>",
        };

        assert_eq!(
            moderation_description(
                Locale::English,
                serenity::UserId::new(7),
                "spam @here",
                Some(&window)
            ),
            "**Target :** <@7>\n**Reason :** spam @\u{200B}here\n**Duration :** 1 hour 30 minutes\n**Until :** <t:10:R>"
        );
    }

    #[test]
    fn russian_description_without_window() {
        assert_eq!(
            moderation_description(Locale::Russian, serenity::UserId::new(7), "флуд", None),
            "**Участник :** <@7>\n**Причина :** флуд"
        );
    }
}
