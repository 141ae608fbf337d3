//! The global [`Error`] and [`Result`] types used across the entire crate.

use tracing::{error, info, warn};

/// Convenience alias for results using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Global `Error` type for the entire crate.
#[derive(Debug, Clone)]
pub enum Error {
	/// Some unknown error occurred.
	Unknown,

	/// Some custom edge-case error that doesn't deserve it's own enum variant.
	Custom(String),

	/// User Input was out of range.
	InputOutOfRange,

	/// A command that only works on a Guild was called somewhere else.
	NoGuild {
		/// Extra context appended to the response.
		reason: String,
	},
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Error::Unknown => "Some unknown error occurred.",
			Error::Custom(msg) => msg,
			Error::InputOutOfRange => {
				"Your input was out of range. Please provide some realistic values."
			}
			Error::NoGuild { reason } => {
				return f.write_fmt(format_args!(
					"You can only call this command on a server{reason}."
				))
			}
		})
	}
}

impl std::error::Error for Error {}

impl From<serenity::Error> for Error {
	fn from(value: serenity::Error) -> Self {
		match value {
			serenity::Error::NotInRange(param, value, min, max) => {
				warn!("User Input (`{value}`) for `{param}` out of range (`{min}` - `{max}`)");
				Self::InputOutOfRange
			}
			why => {
				warn!("Error occurred: {why:?}");
				Self::Unknown
			}
		}
	}
}

impl From<color_eyre::Report> for Error {
	fn from(value: color_eyre::Report) -> Self {
		Self::Custom(value.to_string())
	}
}

impl Error {
	/// Turns a failed command invocation into a response for the invoker.
	pub async fn handle_command(error: poise::FrameworkError<'_, crate::GlobalState, Error>) {
		error!("Command failed. {error:?}");

		let content = match &error {
			poise::FrameworkError::Command { error, .. } => error.to_string(),
			poise::FrameworkError::ArgumentParse { input, .. } => {
				format!(
					"You provided invalid input. {}",
					if let Some(input) = input { input.as_str() } else { "" }
				)
			}
			poise::FrameworkError::CommandCheckFailed { error: Some(why), .. } => why.to_string(),
			poise::FrameworkError::CommandCheckFailed { error: None, .. } => {
				String::from("You need administrator permissions to use this command!")
			}
			poise::FrameworkError::MissingBotPermissions { missing_permissions, .. } => {
				error!("{missing_permissions}");
				String::from("The bot is missing permissions for this action. Please contact the server owner and kindly ask them to give the bot the required permissions.")
			}
			why => {
				error!("{why:?}");
				String::from("Failed to execute command.")
			}
		};

		if let Some(ctx) = &error.ctx() {
			if let Err(why) = ctx.say(content.as_str()).await {
				error!("Failed to respond to command. {why:?}");
			}

			info!("Handled error with `{content}`.");
		}
	}
}
