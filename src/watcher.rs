//! The message watcher. This is the heart of the bot: it holds the trigger phrase and the ping
//! list, and evaluates every incoming message against them.

use {
	crate::{error::Result, GlobalState},
	poise::{
		serenity_prelude::{Context, Mentionable, Message, ReactionType, UserId},
		Event,
	},
	tracing::{debug, info},
};

/// Reaction attached to every message that contains the trigger phrase.
pub const REACTION: &str = "📢";

/// Dispatches the gateway events the bot cares about. All other events are ignored.
pub async fn handle_event(
	ctx: &Context, event: &Event<'_>, state: &GlobalState,
) -> Result<()> {
	debug!("Received event `{}`", event.name());

	match event {
		Event::Ready { data_about_bot } => {
			info!("Connected to Discord as {}!", data_about_bot.user.tag());
			info!("Bot is in {} guilds.", data_about_bot.guilds.len());
			Ok(())
		}
		Event::Message { new_message } => handle_message(ctx, state, new_message).await,
		_ => Ok(()),
	}
}

/// Evaluates a single incoming message against the trigger phrase.
///
/// The bot's own messages are ignored. On a match, every ping list entry is resolved through the
/// cache (unresolvable IDs are skipped silently); the mention reply is only sent if at least one
/// user resolved, but the reaction is attached to the triggering message regardless.
///
/// Prefix commands are dispatched by the framework independently of this handler, so matching
/// messages still get processed as commands.
async fn handle_message(ctx: &Context, state: &GlobalState, message: &Message) -> Result<()> {
	if message.author.id == ctx.cache.current_user_id() {
		return Ok(());
	}

	let reply = {
		let watcher = state.watcher.read().await;

		if !watcher.matches(&message.content) {
			return Ok(());
		}

		debug!(
			"Message `{}` matched trigger phrase `{}`.",
			message.id,
			watcher.trigger_phrase()
		);

		let mentions = watcher
			.ping_list()
			.iter()
			.filter_map(|&user_id| Some(ctx.cache.user(user_id)?.mention().to_string()))
			.collect::<Vec<_>>();

		(!mentions.is_empty()).then(|| watcher.ping_message(&mentions))
	};

	if let Some(reply) = reply {
		message.channel_id.say(&ctx.http, reply).await?;
	}

	message
		.react(ctx, ReactionType::Unicode(String::from(REACTION)))
		.await?;

	Ok(())
}

/// The watcher's mutable settings: the phrase being watched for and the users to mention when it
/// appears.
///
/// Settings live in memory only; they reset to the config file's values on restart.
#[derive(Debug)]
pub struct WatcherState {
	trigger_phrase: String,
	ping_list: Vec<UserId>,
}

impl WatcherState {
	/// Creates a fresh state from the configured phrase and seed list. Duplicate seed entries
	/// are dropped, keeping the first occurrence.
	pub fn new(trigger_phrase: String, seed: &[u64]) -> Self {
		let mut ping_list = Vec::with_capacity(seed.len());

		for &id in seed {
			let id = UserId(id);
			if !ping_list.contains(&id) {
				ping_list.push(id);
			}
		}

		Self { trigger_phrase, ping_list }
	}

	/// The phrase currently being watched for.
	pub fn trigger_phrase(&self) -> &str {
		&self.trigger_phrase
	}

	/// Replaces the trigger phrase. No validation; an empty phrase will match every message.
	pub fn set_trigger_phrase(&mut self, trigger_phrase: String) {
		self.trigger_phrase = trigger_phrase;
	}

	/// Whether `content` contains the trigger phrase, ignoring case. Plain substring
	/// containment; no trimming and no word boundaries.
	pub fn matches(&self, content: &str) -> bool {
		content
			.to_lowercase()
			.contains(&self.trigger_phrase.to_lowercase())
	}

	/// The users to mention, in insertion order.
	pub fn ping_list(&self) -> &[UserId] {
		&self.ping_list
	}

	/// Appends `user_id` if it isn't in the list yet. Returns whether the list changed.
	pub fn add(&mut self, user_id: UserId) -> bool {
		if self.ping_list.contains(&user_id) {
			return false;
		}

		self.ping_list.push(user_id);
		true
	}

	/// Removes `user_id` if present. Returns whether the list changed.
	pub fn remove(&mut self, user_id: UserId) -> bool {
		let old_len = self.ping_list.len();
		self.ping_list.retain(|&id| id != user_id);
		old_len != self.ping_list.len()
	}

	/// The reply sent into the channel where the trigger phrase appeared.
	pub fn ping_message(&self, mentions: &[String]) -> String {
		format!(
			"🔔 Attention: {} - The phrase '{}' was mentioned!",
			mentions.join(" "),
			self.trigger_phrase
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn watcher() -> WatcherState {
		WatcherState::new(String::from("important announcement"), &[1, 2])
	}

	#[test]
	fn matching_ignores_case() {
		let watcher = watcher();

		assert!(watcher.matches("This Is An IMPORTANT ANNOUNCEMENT today"));
		assert!(watcher.matches("important announcement"));
		assert!(!watcher.matches("nothing special"));
		assert!(!watcher.matches(""));
	}

	#[test]
	fn matching_has_no_word_boundaries() {
		let watcher = WatcherState::new(String::from("ann"), &[]);

		assert!(watcher.matches("This user got bANNed."));
	}

	#[test]
	fn empty_phrase_matches_everything() {
		let mut watcher = watcher();
		watcher.set_trigger_phrase(String::new());

		assert!(watcher.matches("literally anything"));
		assert!(watcher.matches(""));
	}

	#[test]
	fn new_phrase_applies_immediately() {
		let mut watcher = watcher();

		assert!(!watcher.matches("we need to talk about ferris"));

		watcher.set_trigger_phrase(String::from("ferris"));

		assert!(watcher.matches("we need to talk about ferris"));
		assert!(!watcher.matches("This Is An IMPORTANT ANNOUNCEMENT today"));
	}

	#[test]
	fn adding_is_idempotent() {
		let mut watcher = watcher();

		assert!(watcher.add(UserId(3)));
		assert!(!watcher.add(UserId(3)));
		assert_eq!(watcher.ping_list(), [UserId(1), UserId(2), UserId(3)]);
	}

	#[test]
	fn removing_an_absent_user_changes_nothing() {
		let mut watcher = watcher();

		assert!(!watcher.remove(UserId(42)));
		assert_eq!(watcher.ping_list(), [UserId(1), UserId(2)]);

		assert!(watcher.remove(UserId(1)));
		assert_eq!(watcher.ping_list(), [UserId(2)]);
	}

	#[test]
	fn seed_duplicates_are_dropped() {
		let watcher = WatcherState::new(String::from("x"), &[7, 7, 8, 7]);

		assert_eq!(watcher.ping_list(), [UserId(7), UserId(8)]);
	}

	#[test]
	fn ping_message_contains_mentions_and_phrase() {
		let watcher = watcher();
		let mentions = [String::from("<@1>"), String::from("<@2>")];

		assert_eq!(
			watcher.ping_message(&mentions),
			"🔔 Attention: <@1> <@2> - The phrase 'important announcement' was mentioned!"
		);
	}
}
