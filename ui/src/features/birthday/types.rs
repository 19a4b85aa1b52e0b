// Core types for the birthday wish generator
use crate::services::config::BirthdayConfig;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct WishState {
    /// Live value of the name field
    pub bestie_name: String,
    /// Trimmed snapshot taken at the last confirmation, empty while editing
    pub displayed_name: String,
}

#[derive(Clone, Debug)]
pub enum WishAction {
    SetName(String),
    Confirm,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WishPhase {
    Idle,
    Editing,
    Confirmed,
}

/// Rendered contents of the wish card
#[derive(Clone, PartialEq, Debug)]
pub struct BirthdayWish {
    pub heading: String,
    pub body: String,
}

pub fn wish_heading(name: &str) -> String {
    format!("Happy Birthday, {}!", name)
}

impl WishState {
    /// The confirm button is enabled only for a non-blank name.
    /// Pressing Enter dispatches [`WishAction::Confirm`] regardless.
    pub fn can_confirm(&self) -> bool {
        !self.bestie_name.trim().is_empty()
    }

    pub fn phase(&self) -> WishPhase {
        if !self.displayed_name.is_empty() {
            WishPhase::Confirmed
        } else if self.bestie_name.is_empty() {
            WishPhase::Idle
        } else {
            WishPhase::Editing
        }
    }

    /// Card contents, present only after a successful confirmation
    pub fn wish(&self, config: &BirthdayConfig) -> Option<BirthdayWish> {
        if self.displayed_name.is_empty() {
            return None;
        }
        Some(BirthdayWish {
            heading: wish_heading(&self.displayed_name),
            body: config.wish_body.clone(),
        })
    }

    pub fn reduce_in_place(&mut self, action: WishAction) {
        match action {
            WishAction::SetName(name) => {
                self.bestie_name = name;
                self.displayed_name.clear();
            }
            WishAction::Confirm => {
                let trimmed = self.bestie_name.trim();
                if !trimmed.is_empty() {
                    self.displayed_name = trimmed.to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(name: &str) -> WishState {
        let mut state = WishState::default();
        state.reduce_in_place(WishAction::SetName(name.to_string()));
        state
    }

    #[test]
    fn test_confirm_shows_heading() {
        let mut state = typed("Alex");
        state.reduce_in_place(WishAction::Confirm);

        let wish = state.wish(&BirthdayConfig::default()).unwrap();
        assert_eq!(wish.heading, "Happy Birthday, Alex!");
        assert_eq!(state.phase(), WishPhase::Confirmed);
    }

    #[test]
    fn test_blank_names_never_show_a_card() {
        for name in ["", "   ", "\t\n"] {
            let mut state = typed(name);
            assert!(!state.can_confirm());
            state.reduce_in_place(WishAction::Confirm);
            assert_eq!(state.displayed_name, "");
            assert!(state.wish(&BirthdayConfig::default()).is_none());
        }
    }

    #[test]
    fn test_displayed_name_is_trimmed_snapshot() {
        let mut state = typed("  Sam  ");
        state.reduce_in_place(WishAction::Confirm);
        assert_eq!(state.displayed_name, "Sam");
        assert_eq!(state.bestie_name, "  Sam  ");
    }

    #[test]
    fn test_editing_after_confirm_hides_card() {
        let mut state = typed("Sam");
        state.reduce_in_place(WishAction::Confirm);
        assert_eq!(
            state.wish(&BirthdayConfig::default()).unwrap().heading,
            "Happy Birthday, Sam!"
        );

        state.reduce_in_place(WishAction::SetName("Samm".to_string()));
        assert!(state.wish(&BirthdayConfig::default()).is_none());
        assert_eq!(state.phase(), WishPhase::Editing);

        state.reduce_in_place(WishAction::Confirm);
        assert_eq!(state.displayed_name, "Samm");
    }

    #[test]
    fn test_blank_confirm_after_edit_keeps_card_hidden() {
        let mut state = typed("Sam");
        state.reduce_in_place(WishAction::Confirm);
        state.reduce_in_place(WishAction::SetName("  ".to_string()));
        state.reduce_in_place(WishAction::Confirm);
        assert_eq!(state.phase(), WishPhase::Editing);
        assert!(state.wish(&BirthdayConfig::default()).is_none());
    }

    #[test]
    fn test_wish_body_comes_from_config() {
        let config = BirthdayConfig {
            wish_body: "Cake time.".to_string(),
        };
        let mut state = typed("Alex");
        state.reduce_in_place(WishAction::Confirm);
        assert_eq!(state.wish(&config).unwrap().body, "Cake time.");
    }

    #[test]
    fn test_phase_starts_idle() {
        assert_eq!(WishState::default().phase(), WishPhase::Idle);
    }
}
