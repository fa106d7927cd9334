use tracing::{error, info};

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    ModerationAction, MuteWindow, is_missing_permissions_error, moderation_action_embed,
    target_profile_from_user,
};
use crate::moderation::messages::{
    bot_target_message, cannot_mute_message, duration_label, guild_only_message,
    invalid_time_message, missing_permission_message, no_reason, self_target_message,
    usage_message,
};
use hush_core::{Context, Error};
use hush_time::{parse_absolute, parse_relative, resolve_duration};
use hush_utils::formatting::{clamp_duration_ms, until_markup};
use hush_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "mute",
    desc: "Time out a member for a duration or until a date.",
    category: "moderation",
    usage: "!mute <member> <time> [reason]",
};

/// Pull trailing time tokens out of a prefix-command reason.
///
/// `!mute @user 1h 30m spam` arrives as time `1h` and reason `30m spam`, and
/// `!mute @user 25.12 в 18:00` as time `25.12` and reason `в 18:00`. Tokens are
/// moved into the time while they keep it parseable; `--` ends the time early.
pub(crate) fn split_time_and_reason(
    time: Option<&str>,
    reason: Option<&str>,
) -> (Option<String>, Option<String>) {
    let mut time_input = time
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    let mut reason_tokens: Vec<&str> = Vec::new();
    if let Some(rest) = reason {
        let mut tokens = rest.split_whitespace().peekable();

        while let Some(token) = tokens.next() {
            if token == "--" {
                reason_tokens.extend(tokens);
                break;
            }

            let Some(current) = time_input.as_deref() else {
                reason_tokens.push(token);
                reason_tokens.extend(tokens);
                break;
            };

            if parse_relative(token).is_some() {
                time_input = Some(format!("{current} {token}"));
                continue;
            }

            let extended = format!("{current} {token}");
            if parse_absolute(&extended).is_some() {
                time_input = Some(extended);
                continue;
            }

            if let Some(next) = tokens.peek() {
                let with_separator = format!("{extended} {next}");
                if parse_absolute(&with_separator).is_some() {
                    time_input = Some(with_separator);
                    tokens.next();
                    continue;
                }
            }

            reason_tokens.push(token);
            reason_tokens.extend(tokens);
            break;
        }
    }

    let parsed_reason = if reason_tokens.is_empty() {
        None
    } else {
        Some(reason_tokens.join(" "))
    };

    (time_input, parsed_reason)
}

/// Time text and reason for one invocation.
///
/// Slash commands deliver both as separate options and are used as typed;
/// only prefix input goes through [`split_time_and_reason`].
pub(crate) fn time_and_reason(
    is_prefix: bool,
    time: Option<&str>,
    reason: Option<&str>,
) -> (Option<String>, Option<String>) {
    if is_prefix {
        return split_time_and_reason(time, reason);
    }

    let non_empty = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    };

    (non_empty(time), non_empty(reason))
}

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "The member to time out"] user: Option<serenity::User>,
    #[description = "Duration or date (e.g. 1h30m, 1.5h, 25.12 18:00)"] time: Option<String>,
    #[description = "Reason for the timeout"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let settings = &ctx.data().settings;
    let locale = settings.locale;

    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message(locale)).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MODERATE_MEMBERS,
    )
    .await?
    {
        ctx.say(missing_permission_message(locale)).await?;
        return Ok(());
    }

    let Some(user) = user else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    if user.bot {
        ctx.say(bot_target_message(locale)).await?;
        return Ok(());
    }

    if user.id == ctx.author().id {
        ctx.say(self_target_message(locale)).await?;
        return Ok(());
    }

    let is_prefix = matches!(ctx, poise::Context::Prefix(_));
    let (time_input, parsed_reason) =
        time_and_reason(is_prefix, time.as_deref(), reason.as_deref());
    let Some(time_input) = time_input else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let now = settings.now();
    let Some(duration_ms) = resolve_duration(&time_input, &now)
        .and_then(|ms| clamp_duration_ms(ms, settings.max_mute_ms()))
    else {
        ctx.say(invalid_time_message(locale, &time_input)).await?;
        return Ok(());
    };

    let until_unix = now.timestamp_millis().saturating_add(duration_ms) / 1_000;
    let until = serenity::Timestamp::from_unix_timestamp(until_unix)?;

    let mut edit = serenity::EditMember::new().disable_communication_until_datetime(until);
    if let Some(reason) = parsed_reason.as_deref() {
        edit = edit.audit_log_reason(reason);
    }

    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        if !is_missing_permissions_error(&source) {
            error!(?source, "mute request failed");
        }
        ctx.say(cannot_mute_message(locale)).await?;
        return Ok(());
    }

    info!(
        guild_id = guild_id.get(),
        target_user_id = user.id.get(),
        duration_ms,
        "member muted"
    );

    let duration = duration_label(&settings.formatter(), duration_ms);
    let until = until_markup(until_unix);
    let window = MuteWindow {
        duration: &duration,
        until: &until,
    };

    let embed = moderation_action_embed(
        locale,
        ModerationAction::Mute,
        &target_profile_from_user(&user),
        user.id,
        parsed_reason.as_deref().unwrap_or(no_reason(locale)),
        Some(&window),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
