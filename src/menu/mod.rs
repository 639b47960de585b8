//! Menu model for the timer shell.
//!
//! - `action.rs`: menu actions, key bindings and input parsing
//! - `builder.rs`: state-dependent menu configuration
//!
//! Both parts are platform-independent. The shell resolves user input
//! against the current menu so that only offered actions reach the engine.

pub mod action;
pub mod builder;

pub use action::{parse_input, MenuAction};
pub use builder::{MenuBuilder, MenuConfig, MenuItemConfig};

/// Resolves user input against a menu.
///
/// Returns the first parsed action that the menu offers. `Err` carries the
/// parsed candidates when none is offered (empty for unknown input).
pub fn resolve_input(input: &str, menu: &MenuConfig) -> Result<MenuAction, Vec<MenuAction>> {
    let candidates = parse_input(input);
    candidates
        .iter()
        .copied()
        .find(|action| menu.offers(*action))
        .ok_or(candidates)
}
