//! All the commands the bot supports, plus the authorization predicate gating the
//! administrative ones.

mod add_ping;
pub use add_ping::add_ping;

mod ping_list;
pub use ping_list::ping_list;

mod remove_ping;
pub use remove_ping::remove_ping;

mod set_phrase;
pub use set_phrase::set_phrase;

use {
	crate::{
		error::{Error, Result},
		Context,
	},
	poise::serenity_prelude::Permissions,
};

/// An invoker's role as far as this bot is concerned, derived from their permissions on the
/// server the command was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
	/// Holds the `ADMINISTRATOR` permission.
	Administrator,

	/// Everybody else.
	Member,
}

impl Role {
	/// Derives a role from a permission set.
	pub fn from_permissions(permissions: Permissions) -> Self {
		if permissions.contains(Permissions::ADMINISTRATOR) {
			Self::Administrator
		} else {
			Self::Member
		}
	}
}

/// Authorization predicate for the administrative commands. The framework evaluates this before
/// running the command body; returning `Ok(false)` rejects the invocation via
/// [`Error::handle_command`].
pub async fn author_is_admin(ctx: Context<'_>) -> Result<bool> {
	let Some(member) = ctx.author_member().await else {
		return Err(Error::NoGuild { reason: String::new() });
	};

	let permissions = member.permissions(ctx.serenity_context())?;

	Ok(Role::from_permissions(permissions) == Role::Administrator)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn administrator_permission_grants_the_admin_role() {
		assert_eq!(
			Role::from_permissions(Permissions::ADMINISTRATOR),
			Role::Administrator
		);
		assert_eq!(
			Role::from_permissions(Permissions::ADMINISTRATOR | Permissions::SEND_MESSAGES),
			Role::Administrator
		);
	}

	#[test]
	fn everything_else_is_a_regular_member() {
		assert_eq!(Role::from_permissions(Permissions::empty()), Role::Member);
		assert_eq!(
			Role::from_permissions(Permissions::SEND_MESSAGES | Permissions::MANAGE_MESSAGES),
			Role::Member
		);
	}
}
