use crate::{
	commands::author_is_admin,
	error::{Error, Result},
	Context, State,
};

/// Set the trigger phrase. (Admin only)
///
/// The rest of the message becomes the new phrase, unchanged. There is no validation on purpose.
#[tracing::instrument(skip(ctx), fields(user = ctx.author().tag()))]
#[poise::command(prefix_command, check = "author_is_admin", on_error = "Error::handle_command")]
pub async fn set_phrase(
	ctx: Context<'_>, #[rest] #[description = "The new trigger phrase."] phrase: String,
) -> Result<()> {
	ctx.watcher()
		.write()
		.await
		.set_trigger_phrase(phrase.clone());

	ctx.say(format!("Trigger phrase changed to: '{phrase}'"))
		.await?;

	Ok(())
}
