use {
	crate::{
		commands::author_is_admin,
		error::{Error, Result},
		Context, State,
	},
	poise::serenity_prelude::{Mentionable, User},
};

/// Remove a user from the ping list. (Admin only)
#[tracing::instrument(skip(ctx), fields(user = ctx.author().tag()))]
#[poise::command(prefix_command, check = "author_is_admin", on_error = "Error::handle_command")]
pub async fn remove_ping(
	ctx: Context<'_>, #[description = "The user to remove, as a @mention or ID."] user: User,
) -> Result<()> {
	let removed = ctx.watcher().write().await.remove(user.id);

	if removed {
		ctx.say(format!("Removed {} from the ping list!", user.mention()))
			.await?;
	} else {
		ctx.say(format!("{} is not in the ping list!", user.mention()))
			.await?;
	}

	Ok(())
}
