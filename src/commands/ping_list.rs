use {
	crate::{
		error::{Error, Result},
		Context, State,
	},
	poise::serenity_prelude::Mentionable,
};

/// Show the current ping list.
///
/// IDs that don't resolve to a known user (e.g. because they left every server the bot is on)
/// are skipped; if nothing resolves, the list is reported as empty.
#[tracing::instrument(skip(ctx), fields(user = ctx.author().tag()))]
#[poise::command(prefix_command, on_error = "Error::handle_command")]
pub async fn ping_list(ctx: Context<'_>) -> Result<()> {
	let mentions = {
		let watcher = ctx.watcher().read().await;
		let cache = &ctx.serenity_context().cache;

		watcher
			.ping_list()
			.iter()
			.filter_map(|&user_id| Some(cache.user(user_id)?.mention().to_string()))
			.collect::<Vec<_>>()
	};

	if mentions.is_empty() {
		ctx.say("No users in the ping list!").await?;
	} else {
		ctx.say(format!("Current ping list: {}", mentions.join(", ")))
			.await?;
	}

	Ok(())
}
