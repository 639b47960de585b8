//! Menu building based on the engine state.
//!
//! This module handles:
//! - The session header ("Work Session")
//! - Choosing the primary action: Start, Pause or Resume
//! - The fixed Reset / Skip / Quit entries
//!
//! The configuration is platform-independent; the terminal shell prints it.

use crate::types::{EngineSnapshot, TimerState};

use super::action::MenuAction;

// ============================================================================
// MenuItemConfig
// ============================================================================

/// Configuration for a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemConfig {
    /// Display text for the menu item
    pub text: String,
    /// Action triggered by the item (`None` for labels)
    pub action: Option<MenuAction>,
    /// Whether the menu item is enabled (selectable)
    pub enabled: bool,
}

impl MenuItemConfig {
    /// Creates an enabled item bound to an action.
    pub fn action(text: impl Into<String>, action: MenuAction) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
            enabled: true,
        }
    }

    /// Creates a disabled label.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
            enabled: false,
        }
    }

    /// Returns the key equivalent of the item's action.
    pub fn key(&self) -> Option<char> {
        self.action.map(|action| action.key())
    }
}

// ============================================================================
// MenuConfig
// ============================================================================

/// Complete menu configuration for one engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Session header (always disabled)
    pub header: MenuItemConfig,
    /// Start, Pause or Resume depending on the state
    pub primary: MenuItemConfig,
    /// Reset button
    pub reset: MenuItemConfig,
    /// Skip button, named after the next session
    pub skip: MenuItemConfig,
    /// Quit button
    pub quit: MenuItemConfig,
}

impl MenuConfig {
    /// Returns the items in display order.
    pub fn items(&self) -> [&MenuItemConfig; 5] {
        [
            &self.header,
            &self.primary,
            &self.reset,
            &self.skip,
            &self.quit,
        ]
    }

    /// Returns true if the menu currently offers the action.
    ///
    /// Help is always available.
    pub fn offers(&self, action: MenuAction) -> bool {
        action == MenuAction::Help
            || self
                .items()
                .iter()
                .any(|item| item.enabled && item.action == Some(action))
    }
}

// ============================================================================
// MenuBuilder
// ============================================================================

/// Builds the menu configuration from an engine snapshot.
#[derive(Debug, Default)]
pub struct MenuBuilder;

impl MenuBuilder {
    /// Creates a new MenuBuilder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the menu for the given state.
    pub fn build(&self, snapshot: &EngineSnapshot) -> MenuConfig {
        MenuConfig {
            header: MenuItemConfig::label(format!("{} Session", snapshot.session.label())),
            primary: Self::primary_item(snapshot.state),
            reset: MenuItemConfig::action("Reset", MenuAction::Reset),
            skip: MenuItemConfig::action(
                format!("Skip to {}", snapshot.session.next().label()),
                MenuAction::Skip,
            ),
            quit: MenuItemConfig::action("Quit", MenuAction::Quit),
        }
    }

    fn primary_item(state: TimerState) -> MenuItemConfig {
        match state {
            TimerState::Idle => MenuItemConfig::action("Start", MenuAction::Start),
            TimerState::Running => MenuItemConfig::action("Pause", MenuAction::Pause),
            TimerState::Paused => MenuItemConfig::action("Resume", MenuAction::Resume),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Session;

    fn snapshot(state: TimerState, session: Session) -> EngineSnapshot {
        EngineSnapshot {
            state,
            session,
            remaining_seconds: session.duration_secs(),
        }
    }

    mod menu_item_config_tests {
        use super::*;

        #[test]
        fn test_action_item() {
            let item = MenuItemConfig::action("Reset", MenuAction::Reset);
            assert!(item.enabled);
            assert_eq!(item.key(), Some('r'));
        }

        #[test]
        fn test_label_item() {
            let item = MenuItemConfig::label("Work Session");
            assert!(!item.enabled);
            assert_eq!(item.key(), None);
        }
    }

    mod menu_builder_tests {
        use super::*;

        #[test]
        fn test_idle_work_menu() {
            let config = MenuBuilder::new().build(&snapshot(TimerState::Idle, Session::Work));

            assert_eq!(config.header.text, "Work Session");
            assert!(!config.header.enabled);
            assert_eq!(config.primary.text, "Start");
            assert_eq!(config.primary.action, Some(MenuAction::Start));
            assert_eq!(config.skip.text, "Skip to Break");
            assert_eq!(config.quit.text, "Quit");
        }

        #[test]
        fn test_running_menu_offers_pause() {
            let config = MenuBuilder::new().build(&snapshot(TimerState::Running, Session::Work));

            assert_eq!(config.primary.text, "Pause");
            assert!(config.offers(MenuAction::Pause));
            assert!(!config.offers(MenuAction::Start));
            assert!(!config.offers(MenuAction::Resume));
        }

        #[test]
        fn test_paused_menu_offers_resume() {
            let config =
                MenuBuilder::new().build(&snapshot(TimerState::Paused, Session::ShortBreak));

            assert_eq!(config.header.text, "Break Session");
            assert_eq!(config.primary.text, "Resume");
            assert_eq!(config.skip.text, "Skip to Work");
            assert!(config.offers(MenuAction::Resume));
            assert!(!config.offers(MenuAction::Pause));
        }

        #[test]
        fn test_always_offered() {
            for state in [TimerState::Idle, TimerState::Running, TimerState::Paused] {
                let config = MenuBuilder::new().build(&snapshot(state, Session::Work));
                assert!(config.offers(MenuAction::Reset));
                assert!(config.offers(MenuAction::Skip));
                assert!(config.offers(MenuAction::Quit));
                assert!(config.offers(MenuAction::Help));
            }
        }

        #[test]
        fn test_items_order() {
            let config = MenuBuilder::new().build(&EngineSnapshot::initial());
            let texts: Vec<&str> = config.items().iter().map(|i| i.text.as_str()).collect();
            assert_eq!(
                texts,
                vec!["Work Session", "Start", "Reset", "Skip to Break", "Quit"]
            );
        }
    }
}
