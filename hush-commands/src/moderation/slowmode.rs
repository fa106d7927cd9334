use chrono::{DateTime, TimeZone};
use tracing::{error, info};

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::is_missing_permissions_error;
use crate::moderation::messages::{
    cannot_slowmode_message, duration_label, guild_only_message, invalid_time_message,
    missing_permission_message, slowmode_disabled_message, slowmode_enabled_message,
    usage_message,
};
use hush_core::{Context, Error};
use hush_time::resolve_duration;
use hush_utils::formatting::slowmode_seconds;
use hush_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "slowmode",
    desc: "Set or disable a channel's slowmode interval.",
    category: "moderation",
    usage: "!slowmode <time|off> [channel]",
};

const OFF_WORDS: &[&str] = &["off", "0", "disable", "none", "выкл", "нет"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SlowmodeRequest {
    Off,
    Interval(u16),
}

pub(crate) fn parse_slowmode<Tz: TimeZone>(raw: &str, now: &DateTime<Tz>) -> Option<SlowmodeRequest> {
    let raw = raw.trim();
    if OFF_WORDS.contains(&raw.to_lowercase().as_str()) {
        return Some(SlowmodeRequest::Off);
    }

    resolve_duration(raw, now)
        .and_then(slowmode_seconds)
        .map(SlowmodeRequest::Interval)
}

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn slowmode(
    ctx: Context<'_>,
    #[description = "Interval between messages (e.g. 30s, 5m) or off"] time: Option<String>,
    #[description = "Channel to change (defaults to this one)"] channel: Option<
        serenity::GuildChannel,
    >,
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
        serenity::Permissions::MANAGE_CHANNELS,
    )
    .await?
    {
        ctx.say(missing_permission_message(locale)).await?;
        return Ok(());
    }

    let Some(raw) = time.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(request) = parse_slowmode(raw, &settings.now()) else {
        ctx.say(invalid_time_message(locale, raw)).await?;
        return Ok(());
    };

    let channel_id = channel.map_or_else(|| ctx.channel_id(), |channel| channel.id);
    let seconds = match request {
        SlowmodeRequest::Off => 0,
        SlowmodeRequest::Interval(seconds) => seconds,
    };

    let edit = serenity::EditChannel::new().rate_limit_per_user(seconds);
    if let Err(source) = channel_id.edit(ctx.http(), edit).await {
        if !is_missing_permissions_error(&source) {
            error!(?source, "slowmode request failed");
        }
        ctx.say(cannot_slowmode_message(locale)).await?;
        return Ok(());
    }

    info!(
        guild_id = guild_id.get(),
        channel_id = channel_id.get(),
        seconds,
        "slowmode updated"
    );

    let reply = match request {
        SlowmodeRequest::Off => slowmode_disabled_message(locale, channel_id.get()),
        SlowmodeRequest::Interval(seconds) => {
            let interval = duration_label(&settings.formatter(), i64::from(seconds) * 1_000);
            slowmode_enabled_message(locale, channel_id.get(), &interval)
        }
    };
    ctx.say(reply).await?;

    Ok(())
}
