use crate::utility::embeds::{grouped_help_description, time_format_hint, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use hush_core::{Context, Error};
use hush_utils::embed::build_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Category to show"] category: Option<String>,
) -> Result<(), Error> {
    let category = category
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase);

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        ctx.say(unknown_category_message(wanted_category, &categories))
            .await?;
        return Ok(());
    }

    let commands = sorted_commands(category.as_deref());
    let embed = build_embed(
        "Available Commands",
        grouped_help_description(&commands),
        Some(time_format_hint(ctx.data().settings.locale)),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::sorted_commands;

    #[test]
    fn sorts_by_category_then_name() {
        let names: Vec<&str> = sorted_commands(None).iter().map(|cmd| cmd.name).collect();
        assert_eq!(names, vec!["mute", "slowmode", "unmute", "help", "ping"]);
    }

    #[test]
    fn filters_by_category() {
        let names: Vec<&str> = sorted_commands(Some("utility"))
            .iter()
            .map(|cmd| cmd.name)
            .collect();
        assert_eq!(names, vec!["help", "ping"]);
        assert!(sorted_commands(Some("fun")).is_empty());
    }
}
