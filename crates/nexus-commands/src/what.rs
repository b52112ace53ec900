//! Paginated command listing driven by a pager session.

use nexus_sessions::{token, Control, PagerSession, PAGER_TIMEOUT};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use tracing::warn;

use crate::framework::{Context, Error};

const COMMANDS_PER_PAGE: usize = 10;

/// List every available command, ten per page.
#[poise::command(prefix_command, slash_command)]
pub async fn what(ctx: Context<'_>) -> Result<(), Error> {
    let prefix = ctx.data().config.discord.prefix.clone();
    let entries: Vec<(String, String)> = ctx
        .framework()
        .options()
        .commands
        .iter()
        .filter(|command| !command.hide_in_help && command.name != "what")
        .map(|command| {
            (
                command.name.clone(),
                command
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description.".to_string()),
            )
        })
        .collect();

    let mut session = PagerSession::new(help_pages(&prefix, &entries));
    let session_id = ctx.id();

    let reply = ctx
        .send(
            CreateReply::default()
                .embed(page_embed(&session))
                .components(pager_rows(session_id, false)),
        )
        .await?;

    // The window is absolute: page turns do not renew it.
    let deadline = std::time::Instant::now() + PAGER_TIMEOUT;
    while let Some(press) = serenity::ComponentInteractionCollector::new(ctx)
        .filter(move |press| press.data.custom_id.starts_with(&format!("{session_id}:")))
        .timeout(deadline.saturating_duration_since(std::time::Instant::now()))
        .await
    {
        let Some((id, control)) = token::decode(&press.data.custom_id) else {
            continue;
        };
        if id != session_id {
            continue;
        }
        let moved = match control {
            Control::Previous => session.previous(),
            Control::Next => session.next(),
            Control::Option(_) => false,
        };

        let response = if moved {
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(page_embed(&session))
                    .components(pager_rows(session_id, false)),
            )
        } else {
            // Already at the boundary; just release the interaction.
            serenity::CreateInteractionResponse::Acknowledge
        };
        press.create_response(ctx.serenity_context(), response).await?;
    }

    if session.expire() {
        let finalize = reply
            .edit(
                ctx,
                CreateReply::default()
                    .embed(page_embed(&session))
                    .components(pager_rows(session_id, true)),
            )
            .await;
        if let Err(error) = finalize {
            warn!(%error, "failed to finalize expired help pager");
        }
    }
    Ok(())
}

/// Render command entries into page bodies of at most ten lines each.
fn help_pages(prefix: &str, entries: &[(String, String)]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No commands available.".to_string()];
    }
    entries
        .chunks(COMMANDS_PER_PAGE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|(name, description)| format!("**{prefix}{name}** - {description}"))
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .collect()
}

fn page_embed(session: &PagerSession<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(format!(
            "📜 Available Commands (Page {}/{})",
            session.current_index() + 1,
            session.page_count()
        ))
        .description(session.current_page().clone())
        .colour(serenity::Colour::GOLD)
}

fn pager_rows(session_id: u64, disabled: bool) -> Vec<serenity::CreateActionRow> {
    let previous = serenity::CreateButton::new(token::encode(session_id, Control::Previous))
        .label("◀ Previous")
        .style(serenity::ButtonStyle::Secondary)
        .disabled(disabled);
    let next = serenity::CreateButton::new(token::encode(session_id, Control::Next))
        .label("Next ▶")
        .style(serenity::ButtonStyle::Secondary)
        .disabled(disabled);
    vec![serenity::CreateActionRow::Buttons(vec![previous, next])]
}

#[cfg(test)]
mod tests {
    use super::help_pages;

    fn entries(count: usize) -> Vec<(String, String)> {
        (0..count)
            .map(|i| (format!("cmd{i}"), format!("Does thing {i}.")))
            .collect()
    }

    #[test]
    fn empty_listing_yields_placeholder_page() {
        let pages = help_pages("!", &[]);
        assert_eq!(pages, vec!["No commands available.".to_string()]);
    }

    #[test]
    fn ten_entries_fit_on_one_page() {
        let pages = help_pages("!", &entries(10));
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("**!cmd0** - Does thing 0."));
        assert!(pages[0].contains("**!cmd9** - Does thing 9."));
    }

    #[test]
    fn eleventh_entry_starts_a_new_page() {
        let pages = help_pages("!", &entries(11));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], "**!cmd10** - Does thing 10.");
    }

    #[test]
    fn prefix_is_applied_to_every_entry() {
        let pages = help_pages("?", &entries(3));
        assert!(pages[0].contains("**?cmd1**"));
    }
}
