use tracing::{error, info};

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    ModerationAction, is_missing_permissions_error, moderation_action_embed,
    target_profile_from_user,
};
use crate::moderation::messages::{
    cannot_unmute_message, guild_only_message, missing_permission_message, no_reason,
    usage_message,
};
use hush_core::{Context, Error};
use hush_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "unmute",
    desc: "Remove a member's timeout.",
    category: "moderation",
    usage: "!unmute <member> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "The member to release"] user: Option<serenity::User>,
    #[description = "Reason for removing the timeout"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let locale = ctx.data().settings.locale;

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

    let mut edit = serenity::EditMember::new().enable_communication();
    if let Some(reason) = reason.as_deref() {
        edit = edit.audit_log_reason(reason);
    }

    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        if !is_missing_permissions_error(&source) {
            error!(?source, "unmute request failed");
        }
        ctx.say(cannot_unmute_message(locale)).await?;
        return Ok(());
    }

    info!(
        guild_id = guild_id.get(),
        target_user_id = user.id.get(),
        "member unmuted"
    );

    let embed = moderation_action_embed(
        locale,
        ModerationAction::Unmute,
        &target_profile_from_user(&user),
        user.id,
        reason.as_deref().unwrap_or(no_reason(locale)),
        None,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
