//! Player setup: mode choice, then a city (and with it a piece colour) for
//! each player.
//!
//! The result is a pair of [`PlayerInfo`] labels. The session stores them
//! for display but never looks inside.

use log::debug;

use crate::board::Piece;
use crate::session::GameMode;

/// Piece colours offered by the cities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Green,
    Red,
    Yellow,
    Blue,
    Orange,
    Purple,
    Cyan,
}

/// A selectable city. Cities alternate between two colour slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub slot: u8,
    pub color: PieceColor,
}

pub static CITIES: [City; 7] = [
    City { name: "Asmara", slot: 1, color: PieceColor::Green },
    City { name: "Keren", slot: 2, color: PieceColor::Red },
    City { name: "Barentu", slot: 1, color: PieceColor::Yellow },
    City { name: "Massawa", slot: 2, color: PieceColor::Blue },
    City { name: "Assab", slot: 1, color: PieceColor::Orange },
    City { name: "Mendefera", slot: 2, color: PieceColor::Purple },
    City { name: "Ate", slot: 1, color: PieceColor::Cyan },
];

/// Display name of the computer opponent
pub const COMPUTER_NAME: &str = "Computer";

/// Look up a city by name
pub fn city_by_name(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name == name)
}

/// Name and colour shown for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub color: PieceColor,
}

impl From<&City> for PlayerInfo {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.to_string(),
            color: city.color,
        }
    }
}

/// Labels for both players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLabels {
    pub one: PlayerInfo,
    pub two: PlayerInfo,
}

impl PlayerLabels {
    /// Label for a piece. `Empty` falls back to player 1.
    pub fn get(&self, piece: Piece) -> &PlayerInfo {
        match piece {
            Piece::Two => &self.two,
            Piece::One | Piece::Empty => &self.one,
        }
    }

    /// Player 2 as the computer: fixed name, colour of the first city in
    /// the other colour slot.
    pub fn against_computer(first: &City) -> Self {
        let color = CITIES
            .iter()
            .find(|c| c.slot != first.slot)
            .map_or(first.color, |c| c.color);
        Self {
            one: first.into(),
            two: PlayerInfo {
                name: COMPUTER_NAME.to_string(),
                color,
            },
        }
    }
}

impl Default for PlayerLabels {
    fn default() -> Self {
        Self {
            one: (&CITIES[0]).into(),
            two: (&CITIES[1]).into(),
        }
    }
}

/// Where the setup flow currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupStep {
    ChooseMode,
    ChooseCity {
        mode: GameMode,
        chooser: Piece,
        first: Option<&'static City>,
    },
    Ready {
        mode: GameMode,
        players: PlayerLabels,
    },
}

/// Step-by-step player setup
#[derive(Debug, Clone)]
pub struct SetupFlow {
    step: SetupStep,
}

impl Default for SetupFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupFlow {
    pub fn new() -> Self {
        Self {
            step: SetupStep::ChooseMode,
        }
    }

    pub fn step(&self) -> &SetupStep {
        &self.step
    }

    /// Pick the game mode. Ignored outside the mode step.
    pub fn choose_mode(&mut self, mode: GameMode) {
        if self.step == SetupStep::ChooseMode {
            self.step = SetupStep::ChooseCity {
                mode,
                chooser: Piece::One,
                first: None,
            };
        }
    }

    /// Cities the current chooser may pick. Player 2 may take any city
    /// except player 1's.
    pub fn city_options(&self) -> Vec<&'static City> {
        match &self.step {
            SetupStep::ChooseCity { first: None, .. } => CITIES.iter().collect(),
            SetupStep::ChooseCity {
                first: Some(taken), ..
            } => CITIES.iter().filter(|c| c.name != taken.name).collect(),
            _ => Vec::new(),
        }
    }

    /// Pick a city for the current chooser.
    ///
    /// Returns false (and changes nothing) when the city is not on offer.
    pub fn choose_city(&mut self, name: &str) -> bool {
        let Some(city) = self.city_options().into_iter().find(|c| c.name == name) else {
            return false;
        };

        let SetupStep::ChooseCity { mode, first, .. } = &self.step else {
            return false;
        };
        let (mode, first) = (*mode, *first);

        self.step = match (mode, first) {
            (GameMode::VsComputer, _) => SetupStep::Ready {
                mode,
                players: PlayerLabels::against_computer(city),
            },
            (GameMode::TwoPlayer, None) => SetupStep::ChooseCity {
                mode,
                chooser: Piece::Two,
                first: Some(city),
            },
            (GameMode::TwoPlayer, Some(one)) => SetupStep::Ready {
                mode,
                players: PlayerLabels {
                    one: one.into(),
                    two: city.into(),
                },
            },
        };
        debug!("setup step: {:?}", self.step);
        true
    }

    /// Mode and labels once every choice has been made
    pub fn ready(&self) -> Option<(GameMode, &PlayerLabels)> {
        match &self.step {
            SetupStep::Ready { mode, players } => Some((*mode, players)),
            _ => None,
        }
    }

    /// Start over from the mode choice
    pub fn reset(&mut self) {
        self.step = SetupStep::ChooseMode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_flow() {
        let mut setup = SetupFlow::new();
        assert!(setup.city_options().is_empty());

        setup.choose_mode(GameMode::TwoPlayer);
        assert_eq!(setup.city_options().len(), CITIES.len());
        assert!(setup.choose_city("Barentu"));

        let options = setup.city_options();
        assert_eq!(options.len(), CITIES.len() - 1);
        assert!(options.iter().all(|c| c.name != "Barentu"));
        // Same colour slot is still allowed for player 2
        assert!(options.iter().any(|c| c.name == "Asmara"));

        assert!(setup.choose_city("Asmara"));
        let (mode, players) = setup.ready().unwrap();
        assert_eq!(mode, GameMode::TwoPlayer);
        assert_eq!(players.one.name, "Barentu");
        assert_eq!(players.two.name, "Asmara");
        assert_eq!(players.two.color, PieceColor::Green);
    }

    #[test]
    fn test_player_two_cannot_repeat_city() {
        let mut setup = SetupFlow::new();
        setup.choose_mode(GameMode::TwoPlayer);
        assert!(setup.choose_city("Keren"));
        assert!(!setup.choose_city("Keren"));
        assert!(setup.ready().is_none());
    }

    #[test]
    fn test_computer_gets_other_slot_colour() {
        let mut setup = SetupFlow::new();
        setup.choose_mode(GameMode::VsComputer);
        assert!(setup.choose_city("Massawa"));
        let (_, players) = setup.ready().unwrap();
        assert_eq!(players.one.color, PieceColor::Blue);
        assert_eq!(players.two.name, COMPUTER_NAME);
        assert_eq!(players.two.color, PieceColor::Green);

        let players = PlayerLabels::against_computer(city_by_name("Ate").unwrap());
        assert_eq!(players.two.color, PieceColor::Red);
    }

    #[test]
    fn test_unknown_city_ignored() {
        let mut setup = SetupFlow::new();
        assert!(!setup.choose_city("Asmara"));
        setup.choose_mode(GameMode::VsComputer);
        assert!(!setup.choose_city("Addis"));
        assert!(matches!(setup.step(), SetupStep::ChooseCity { .. }));
    }

    #[test]
    fn test_reset_returns_to_mode_choice() {
        let mut setup = SetupFlow::new();
        setup.choose_mode(GameMode::VsComputer);
        setup.choose_city("Assab");
        setup.reset();
        assert_eq!(setup.step(), &SetupStep::ChooseMode);
    }

    #[test]
    fn test_labels_lookup() {
        let labels = PlayerLabels::default();
        assert_eq!(labels.get(Piece::One).name, "Asmara");
        assert_eq!(labels.get(Piece::Two).name, "Keren");
    }
}
