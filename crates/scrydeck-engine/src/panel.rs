//! The results panel and its presentation state.

use scrydeck::Card;

use crate::render;

/// What the results panel is currently presenting.
///
/// Exactly one state holds at a time; the enum replaces the mutually
/// exclusive presentation flags of a CSS-class state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelState {
    /// Nothing to show: no input yet, or a lookup that matched nothing.
    #[default]
    Empty,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Error,
    /// Resolved card records, in input order.
    Populated(Vec<Card>),
}

/// The results panel controller.
///
/// Each `show_*` call fully sets the desired state, superseding whatever was
/// previously displayed; rendering dispatches on the state in one place.
///
/// # Example
///
/// ```
/// use scrydeck_engine::{Panel, PanelState};
///
/// let mut panel = Panel::new();
/// assert_eq!(*panel.state(), PanelState::Empty);
///
/// panel.show_loading();
/// assert!(panel.html().contains("results--loading"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Panel {
    state: PanelState,
}

impl Panel {
    /// Create a panel in the empty state.
    pub fn new() -> Self {
        Self {
            state: PanelState::Empty,
        }
    }

    /// The current presentation state.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Clear the panel and show the empty state.
    pub fn show_empty(&mut self) {
        self.state = PanelState::Empty;
    }

    /// Show the loading state.
    pub fn show_loading(&mut self) {
        self.state = PanelState::Loading;
    }

    /// Show the error state.
    pub fn show_error(&mut self) {
        self.state = PanelState::Error;
    }

    /// Show resolved cards, or the empty state when there are none.
    ///
    /// A successful fetch that matched nothing presents exactly like empty
    /// input; zero cards is not an error.
    pub fn show_populated(&mut self, cards: Vec<Card>) {
        self.state = if cards.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Populated(cards)
        };
    }

    /// Render the panel as HTML: the results container with its state
    /// modifier, or the concatenated card fragments when populated.
    pub fn html(&self) -> String {
        match &self.state {
            PanelState::Empty => r#"<div class="results results--empty"></div>"#.to_string(),
            PanelState::Loading => r#"<div class="results results--loading"></div>"#.to_string(),
            PanelState::Error => r#"<div class="results results--error"></div>"#.to_string(),
            PanelState::Populated(cards) => {
                let fragments: String = cards.iter().map(render::render_card).collect();
                format!(r#"<div class="results">{}</div>"#, fragments)
            }
        }
    }

    /// The panel's plain text, for the clipboard.
    ///
    /// Empty unless the panel is populated, so callers can treat "nothing to
    /// copy" and "not populated" as one condition.
    pub fn text(&self) -> String {
        match &self.state {
            PanelState::Populated(cards) => {
                let renderings: Vec<String> = cards.iter().map(render::render_card_text).collect();
                renderings.join("\n")
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card {
            name: name.into(),
            mana_cost: None,
            type_line: "Instant".into(),
            oracle_text: None,
            flavor_text: None,
            power: None,
            toughness: None,
        }
    }

    #[test]
    fn test_each_show_call_supersedes() {
        let mut panel = Panel::new();

        panel.show_loading();
        assert_eq!(*panel.state(), PanelState::Loading);

        panel.show_error();
        assert_eq!(*panel.state(), PanelState::Error);

        panel.show_populated(vec![card("Opt")]);
        assert!(matches!(panel.state(), PanelState::Populated(cards) if cards.len() == 1));

        panel.show_empty();
        assert_eq!(*panel.state(), PanelState::Empty);
    }

    #[test]
    fn test_zero_cards_shows_empty_not_error() {
        let mut panel = Panel::new();
        panel.show_populated(Vec::new());
        assert_eq!(*panel.state(), PanelState::Empty);
    }

    #[test]
    fn test_html_carries_state_modifier() {
        let mut panel = Panel::new();
        assert!(panel.html().contains("results--empty"));

        panel.show_loading();
        assert!(panel.html().contains("results--loading"));

        panel.show_error();
        assert!(panel.html().contains("results--error"));
    }

    #[test]
    fn test_populated_html_keeps_input_order() {
        let mut panel = Panel::new();
        panel.show_populated(vec![card("Opt"), card("Ponder")]);

        let html = panel.html();
        let opt = html.find("Opt").unwrap();
        let ponder = html.find("Ponder").unwrap();
        assert!(opt < ponder);
        assert!(!html.contains("results--"));
    }

    #[test]
    fn test_text_empty_unless_populated() {
        let mut panel = Panel::new();
        assert!(panel.text().is_empty());

        panel.show_loading();
        assert!(panel.text().is_empty());

        panel.show_error();
        assert!(panel.text().is_empty());

        panel.show_populated(vec![card("Opt")]);
        assert!(panel.text().contains("Opt"));
    }
}
