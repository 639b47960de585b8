//! Menu actions and their key bindings.
//!
//! Each action maps to a single key, the same keys the status-bar menu uses
//! as key equivalents. Input may also be the action's name.

use std::fmt;

use tracing::debug;

use crate::engine::EngineCommand;

// ============================================================================
// MenuAction
// ============================================================================

/// Actions that can be triggered from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Start the current session
    Start,
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Reset the current session
    Reset,
    /// Skip to the next session
    Skip,
    /// Show the menu
    Help,
    /// Quit the application
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MenuAction {
    /// Every action, in menu order.
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Start,
        MenuAction::Pause,
        MenuAction::Resume,
        MenuAction::Reset,
        MenuAction::Skip,
        MenuAction::Help,
        MenuAction::Quit,
    ];

    /// Returns the lowercase action name.
    pub fn name(&self) -> &'static str {
        match self {
            MenuAction::Start => "start",
            MenuAction::Pause => "pause",
            MenuAction::Resume => "resume",
            MenuAction::Reset => "reset",
            MenuAction::Skip => "skip",
            MenuAction::Help => "help",
            MenuAction::Quit => "quit",
        }
    }

    /// Returns the key that triggers this action.
    ///
    /// Start and Resume share `s`; which one applies depends on the state.
    pub fn key(&self) -> char {
        match self {
            MenuAction::Start | MenuAction::Resume => 's',
            MenuAction::Pause => 'p',
            MenuAction::Reset => 'r',
            MenuAction::Skip => 'k',
            MenuAction::Help => 'h',
            MenuAction::Quit => 'q',
        }
    }

    /// Returns the engine command for this action, if it has one.
    pub fn to_command(&self) -> Option<EngineCommand> {
        match self {
            MenuAction::Start | MenuAction::Resume => Some(EngineCommand::Start),
            MenuAction::Pause => Some(EngineCommand::Pause),
            MenuAction::Reset => Some(EngineCommand::Reset),
            MenuAction::Skip => Some(EngineCommand::Skip),
            MenuAction::Help | MenuAction::Quit => None,
        }
    }
}

// ============================================================================
// Input parsing
// ============================================================================

/// Parses one line of user input into candidate actions.
///
/// A bare `s` matches both Start and Resume; the caller picks whichever the
/// current menu offers. Returns an empty list for unknown input.
pub fn parse_input(input: &str) -> Vec<MenuAction> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Vec::new();
    }

    let actions: Vec<MenuAction> = match input.as_str() {
        "?" => vec![MenuAction::Help],
        "exit" => vec![MenuAction::Quit],
        _ if input.chars().count() == 1 => {
            let key = input.chars().next().unwrap_or_default();
            MenuAction::ALL
                .into_iter()
                .filter(|action| action.key() == key)
                .collect()
        }
        _ => MenuAction::ALL
            .into_iter()
            .filter(|action| action.name() == input)
            .collect(),
    };

    debug!(input = %input, ?actions, "parsed menu input");
    actions
}

// ============================================================================
// Tests
// ============================================================================
