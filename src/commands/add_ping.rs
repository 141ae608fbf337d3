use {
	crate::{
		commands::author_is_admin,
		error::{Error, Result},
		Context, State,
	},
	poise::serenity_prelude::{Mentionable, User},
};

/// Add a user to the ping list. (Admin only)
#[tracing::instrument(skip(ctx), fields(user = ctx.author().tag()))]
#[poise::command(prefix_command, check = "author_is_admin", on_error = "Error::handle_command")]
pub async fn add_ping(
	ctx: Context<'_>, #[description = "The user to add, as a @mention or ID."] user: User,
) -> Result<()> {
	let added = ctx.watcher().write().await.add(user.id);

	if added {
		ctx.say(format!("Added {} to the ping list!", user.mention()))
			.await?;
	} else {
		ctx.say(format!("{} is already in the ping list!", user.mention()))
			.await?;
	}

	Ok(())
}
