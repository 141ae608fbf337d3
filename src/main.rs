//! Discord Bot that watches chat for a trigger phrase.
//!
//! Whenever a message contains the configured phrase (case-insensitive), the bot mentions a
//! configurable list of users in that channel and reacts to the triggering message. The phrase
//! and the ping list can be changed at runtime via prefix commands; both reset to the values in
//! the config file on restart. If you have any suggestions or bug reports, feel free to submit an
//! [issue on GitHub](https://github.com/herald-bot/herald/issues)!

#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![warn(clippy::style, clippy::perf, clippy::complexity, clippy::correctness)]

mod commands;
mod error;
mod watcher;

use {
	crate::{error::Error, watcher::WatcherState},
	clap::Parser,
	color_eyre::Result as Eyre,
	poise::{
		serenity_prelude::GatewayIntents, Command, Framework, FrameworkOptions,
		PrefixFrameworkOptions,
	},
	serde::Deserialize,
	std::path::PathBuf,
	time::macros::format_description,
	tokio::sync::RwLock,
	tracing::info,
	tracing_subscriber::{
		fmt::{format::FmtSpan, time::UtcTime},
		EnvFilter,
	},
};

#[tokio::main]
async fn main() -> Eyre<()> {
	color_eyre::install()?;
	let args = Args::parse();

	let config_file = std::fs::read_to_string(args.config)?;
	let config: Config = toml::from_str(&config_file)?;

	// The token is deliberately not part of the config file so it never ends up in version
	// control. Missing token => print a hint and exit cleanly without connecting.
	let Ok(token) = std::env::var("DISCORD_BOT_TOKEN") else {
		eprintln!("Please set the `DISCORD_BOT_TOKEN` environment variable.");
		return Ok(());
	};

	let cwd = std::env::var("PWD")?;
	let file_logger = tracing_appender::rolling::minutely(cwd + "/logs", "herald.log");
	let (log_writer, _guard) = tracing_appender::non_blocking(file_logger);

	tracing_subscriber::fmt()
		.compact()
		.with_writer(log_writer)
		.with_timer(UtcTime::new(format_description!(
			"[[[year]-[month]-[day] | [hour]:[minute]:[second]]"
		)))
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW)
		.with_env_filter({
			EnvFilter::new(if args.debug {
				"DEBUG"
			} else if let Some(ref level) = config.log_level {
				level.as_str()
			} else {
				"herald=INFO"
			})
		})
		.init();

	let global_state = GlobalState::new(config);

	let framework = Framework::builder()
		.options(FrameworkOptions {
			prefix_options: PrefixFrameworkOptions {
				prefix: Some(global_state.config.command_prefix.clone()),
				ignore_bots: true,
				..Default::default()
			},
			commands: vec![
				commands::add_ping(),
				commands::ping_list(),
				commands::remove_ping(),
				commands::set_phrase(),
			],
			event_handler: |ctx, event, _, state| {
				Box::pin(watcher::handle_event(ctx, event, state))
			},
			..Default::default()
		})
		.token(&token)
		.intents(
			GatewayIntents::GUILDS
				| GatewayIntents::GUILD_MEMBERS
				| GatewayIntents::GUILD_MESSAGES
				| GatewayIntents::MESSAGE_CONTENT,
		)
		.setup(move |_, _, framework| {
			Box::pin(async move {
				let prefix = &global_state.config.command_prefix;
				for Command { name, .. } in &framework.options().commands {
					info!("Successfully registered command `{prefix}{name}`.");
				}

				Ok(global_state)
			})
		});

	info!("Finished setting up. Connecting to Discord...");
	framework
		.run()
		.await
		.expect("Failed to run framework.");

	Ok(())
}

/// Some convenience CLI arguments to configure the bot quickly without changing the config file.
/// Any of these options will override the values set in the config file.
#[derive(Debug, Clone, Parser)]
struct Args {
	/// The path to the bot's config file.
	#[arg(short, long)]
	#[clap(default_value = "./config.toml")]
	pub config: PathBuf,

	/// Run in debug mode.
	#[arg(long)]
	#[clap(default_value = "false")]
	pub debug: bool,
}

/// Config file for the bot. Every field has a default, so an empty file is a valid config.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Can be one of the following:
	/// - `TRACE`
	/// - `DEBUG`
	/// - `INFO`
	/// - `WARN`
	/// - `ERROR`
	///
	/// This value will default to `INFO`.
	/// The `--debug` flag will always override this value to `DEBUG`.
	pub log_level: Option<String>,

	/// The prefix for the bot's text commands, e.g. `!ping_list`.
	#[serde(default = "default_command_prefix")]
	pub command_prefix: String,

	/// The phrase the bot watches for. Matched case-insensitively as a substring of every
	/// incoming message. Can be changed at runtime with `set_phrase`.
	#[serde(default = "default_trigger_phrase")]
	pub trigger_phrase: String,

	/// The `UserID`s to mention whenever the trigger phrase appears. Can be changed at runtime
	/// with `add_ping` / `remove_ping`.
	#[serde(default)]
	pub ping_list: Vec<u64>,
}

fn default_command_prefix() -> String {
	String::from("!")
}

fn default_trigger_phrase() -> String {
	String::from("important announcement")
}

/// Global State Object used for the entire runtime of the process. This holds "global"
/// information such as the parsed config file and the watcher's mutable settings.
#[derive(Debug)]
pub struct GlobalState {
	/// Parsed config file of the bot.
	pub config: Config,

	/// The trigger phrase and ping list. Shared between the message handler and the
	/// administrative commands, hence the lock.
	pub watcher: RwLock<WatcherState>,
}

impl GlobalState {
	fn new(config: Config) -> Self {
		let watcher = RwLock::new(WatcherState::new(
			config.trigger_phrase.clone(),
			&config.ping_list,
		));

		Self { config, watcher }
	}
}

/// Global `Context` type which gets passed to commands.
pub type Context<'ctx> = poise::Context<'ctx, GlobalState, Error>;

/// Convenience trait for getter functions on [`Context`] since it's not my own type and I haven't
/// figured out how to replace it yet.
#[allow(missing_docs)]
pub trait State {
	fn watcher(&self) -> &RwLock<WatcherState>;
}

impl State for Context<'_> {
	fn watcher(&self) -> &RwLock<WatcherState> {
		&self.data().watcher
	}
}
