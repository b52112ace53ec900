//! Trivia command driving a choice session over message buttons.

use nexus_common::truncate_string;
use nexus_sessions::{token, ChoiceSession, Control, SelectOutcome, CHOICE_TIMEOUT};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use tracing::warn;

use crate::framework::{Context, Error};
use crate::respond;

const BUTTON_LABEL_LIMIT: usize = 80;

/// Start a trivia game. Optionally pick a category.
#[poise::command(prefix_command, slash_command)]
pub async fn trivia(
    ctx: Context<'_>,
    #[description = "Question category"] category: Option<String>,
) -> Result<(), Error> {
    let question =
        nexus_providers::trivia::fetch_trivia_question(&ctx.data().http, category.as_deref())
            .await;
    let Some(question) = question else {
        return respond::couldnt_fetch(ctx, "a trivia question").await;
    };

    let mut session = {
        let mut rng = rand::thread_rng();
        ChoiceSession::new(
            question.question,
            question.correct_answer,
            question.incorrect_answers,
            &mut rng,
        )
    };

    // The invocation id keys every control token; events for other
    // invocations never reach this session.
    let session_id = ctx.id();

    let embed = question_embed(&session);
    let reply = ctx
        .send(
            CreateReply::default()
                .embed(embed)
                .components(option_rows(&session, session_id, false)),
        )
        .await?;

    // Answered sessions keep draining presses until the deadline so a second
    // click gets the explicit rejection instead of a dead interaction.
    let deadline = std::time::Instant::now() + CHOICE_TIMEOUT;
    while let Some(press) = serenity::ComponentInteractionCollector::new(ctx)
        .filter(move |press| press.data.custom_id.starts_with(&format!("{session_id}:")))
        .timeout(deadline.saturating_duration_since(std::time::Instant::now()))
        .await
    {
        let Some((id, Control::Option(index))) = token::decode(&press.data.custom_id) else {
            continue;
        };
        if id != session_id {
            continue;
        }
        let Some(option) = session.option(index).map(str::to_string) else {
            continue;
        };

        match session.select(&option) {
            SelectOutcome::Graded { correct } => {
                let verdict = if correct {
                    format!("✅ Correct! The answer was: **{}**", session.correct_answer())
                } else {
                    format!(
                        "❌ Incorrect! The correct answer was: **{}**",
                        session.correct_answer()
                    )
                };
                // Best effort like every finalizing edit: the bound message
                // may be gone by the time the response lands.
                let finalize = press
                    .create_response(
                        ctx.serenity_context(),
                        serenity::CreateInteractionResponse::UpdateMessage(
                            serenity::CreateInteractionResponseMessage::new()
                                .content(verdict)
                                .components(option_rows(&session, session_id, true)),
                        ),
                    )
                    .await;
                if let Err(error) = finalize {
                    warn!(%error, "failed to finalize answered trivia session");
                }
            }
            SelectOutcome::AlreadyClosed => {
                let rejection = press
                    .create_response(
                        ctx.serenity_context(),
                        serenity::CreateInteractionResponse::Message(
                            serenity::CreateInteractionResponseMessage::new()
                                .content("This question has already been answered.")
                                .ephemeral(true),
                        ),
                    )
                    .await;
                if let Err(error) = rejection {
                    warn!(%error, "failed to reject a late trivia answer");
                }
            }
        }
    }

    if session.expire() {
        // Best effort: the bound message may have been deleted meanwhile.
        let finalize = reply
            .edit(
                ctx,
                CreateReply::default()
                    .content("⏰ Time's up! You didn't answer in time.")
                    .components(option_rows(&session, session_id, true)),
            )
            .await;
        if let Err(error) = finalize {
            warn!(%error, "failed to finalize expired trivia session");
        }
    }
    Ok(())
}

fn question_embed(session: &ChoiceSession) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("Trivia Time!")
        .description(session.question())
        .field(
            "Choose the correct answer:",
            "Click one of the buttons below.",
            false,
        )
        .colour(serenity::Colour::BLUE)
}

fn option_rows(
    session: &ChoiceSession,
    session_id: u64,
    disabled: bool,
) -> Vec<serenity::CreateActionRow> {
    let buttons = session
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            serenity::CreateButton::new(token::encode(session_id, Control::Option(index)))
                .label(truncate_string(option, BUTTON_LABEL_LIMIT))
                .style(serenity::ButtonStyle::Primary)
                .disabled(disabled)
        })
        .collect();
    vec![serenity::CreateActionRow::Buttons(buttons)]
}
