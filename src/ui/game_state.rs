//! Game state management for the GUI
//!
//! Wraps the [`Session`] with what only the front end needs: the setup
//! flow, the delayed computer turn and a transient message line.

use std::time::{Duration, Instant};

use log::debug;

use crate::engine::{AiEngine, Selection};
use crate::session::{GameMode, Phase, Session, Status};
use crate::setup::{SetupFlow, SetupStep};
use crate::{Piece, Pos, Rejection};

/// Computer turn scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    /// The computer plays once `due` has passed
    Waiting { due: Instant },
}

/// Main GUI state
pub struct GameState {
    pub session: Session,
    pub setup: SetupFlow,
    pub ai_state: AiState,
    pub last_ai_selection: Option<Selection>,
    pub message: Option<String>,
    ai_delay: Duration,
}

impl GameState {
    /// `seed` makes the computer's random choices reproducible
    pub fn new(ai_delay: Duration, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => AiEngine::with_seed(seed),
            None => AiEngine::new(),
        };
        Self {
            session: Session::with_engine(engine),
            setup: SetupFlow::new(),
            ai_state: AiState::Idle,
            last_ai_selection: None,
            message: None,
            ai_delay,
        }
    }

    /// Check if the computer is about to move
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Waiting { .. })
    }

    /// Time left before the computer moves
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Waiting { due } => Some(due.saturating_duration_since(now)),
            AiState::Idle => None,
        }
    }

    pub fn choose_mode(&mut self, mode: GameMode) {
        self.setup.choose_mode(mode);
    }

    /// Pick a city; starts the game once both players are set
    pub fn choose_city(&mut self, name: &str) {
        if !self.setup.choose_city(name) {
            debug!("city '{name}' not on offer");
            return;
        }
        if let Some((mode, players)) = self.setup.ready() {
            let players = players.clone();
            self.session.start(mode, players);
            self.ai_state = AiState::Idle;
            self.last_ai_selection = None;
            self.message = None;
        }
    }

    /// Attempt to place a piece for the human whose turn it is
    pub fn try_place(&mut self, pos: Pos, now: Instant) -> Result<(), Rejection> {
        if self.is_ai_thinking() {
            return Err(Rejection::NotYourTurn);
        }
        self.session.apply_move(pos).inspect_err(|e| {
            debug!("move at {pos} rejected: {e}");
        })?;
        self.message = None;
        self.schedule_ai(now);
        Ok(())
    }

    /// Start the computer's countdown if it owes a move
    pub fn schedule_ai(&mut self, now: Instant) {
        if self.session.is_computer_turn() && !self.is_ai_thinking() {
            self.ai_state = AiState::Waiting {
                due: now + self.ai_delay,
            };
        }
    }

    /// Play the computer's move once its countdown has run out
    pub fn check_ai(&mut self, now: Instant) {
        let AiState::Waiting { due } = self.ai_state else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_state = AiState::Idle;
        match self.session.play_computer_turn() {
            Ok((_, selection)) => self.last_ai_selection = Some(selection),
            Err(e) => {
                debug!("computer turn skipped: {e}");
                self.message = Some(format!("Computer could not move: {e}"));
            }
        }
    }

    /// Undo, cancelling a pending computer move
    pub fn undo(&mut self) {
        self.ai_state = AiState::Idle;
        match self.session.undo() {
            Ok(_) => self.message = None,
            Err(e) => debug!("undo ignored: {e}"),
        }
    }

    /// Back to the mode choice
    pub fn restart(&mut self) {
        self.session.restart();
        self.setup.reset();
        self.ai_state = AiState::Idle;
        self.last_ai_selection = None;
        self.message = None;
    }

    /// Whether the board should react to clicks
    pub fn accepts_clicks(&self) -> bool {
        self.session.is_active() && !self.is_ai_thinking() && !self.session.is_computer_turn()
    }

    /// Text for the status line
    pub fn status_text(&self) -> String {
        let players = self.session.players();
        match self.session.status() {
            Status::ChooseMode => match self.setup.step() {
                SetupStep::ChooseMode => "Choose a game mode to start".to_string(),
                SetupStep::ChooseCity { chooser, .. } => {
                    format!("Player {}: choose your city", chooser.number())
                }
                SetupStep::Ready { .. } => "Ready".to_string(),
            },
            Status::Turn(piece) => format!("Turn: {}", players.get(piece).name),
            Status::ComputerThinking => format!("Turn: {} (thinking)", players.two.name),
            Status::Won(piece) => format!("{} wins!", players.get(piece).name),
            Status::Draw => "Tie.".to_string(),
        }
    }

    /// True when the human lost to the computer
    pub fn is_computer_win(&self) -> bool {
        matches!(self.session.phase(), Phase::Ended(crate::Outcome::Win(Piece::Two)))
            && self.session.mode() == GameMode::VsComputer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(mode: GameMode) -> GameState {
        let mut state = GameState::new(Duration::from_millis(700), Some(5));
        state.choose_mode(mode);
        state.choose_city("Asmara");
        if mode == GameMode::TwoPlayer {
            state.choose_city("Keren");
        }
        state
    }

    #[test]
    fn test_setup_starts_session() {
        let mut state = GameState::new(Duration::ZERO, None);
        assert_eq!(state.status_text(), "Choose a game mode to start");
        state.choose_mode(GameMode::TwoPlayer);
        assert_eq!(state.status_text(), "Player 1: choose your city");
        state.choose_city("Assab");
        assert_eq!(state.status_text(), "Player 2: choose your city");
        state.choose_city("Keren");
        assert!(state.session.is_active());
        assert_eq!(state.status_text(), "Turn: Assab");
    }

    #[test]
    fn test_computer_waits_for_delay() {
        let mut state = started(GameMode::VsComputer);
        let t0 = Instant::now();
        state.try_place(Pos::new(0, 0), t0).unwrap();
        assert!(state.is_ai_thinking());
        assert!(!state.accepts_clicks());
        assert_eq!(state.status_text(), "Turn: Computer (thinking)");
        assert_eq!(state.try_place(Pos::new(1, 1), t0), Err(Rejection::NotYourTurn));

        state.check_ai(t0 + Duration::from_millis(100));
        assert_eq!(state.session.history().len(), 1);

        state.check_ai(t0 + Duration::from_millis(700));
        assert_eq!(state.session.history().len(), 2);
        assert!(!state.is_ai_thinking());
        assert_eq!(state.session.board().get(Pos::CENTER), Piece::Two);
        assert_eq!(state.status_text(), "Turn: Asmara");
    }

    #[test]
    fn test_undo_cancels_pending_computer_move() {
        let mut state = started(GameMode::VsComputer);
        let t0 = Instant::now();
        state.try_place(Pos::new(0, 0), t0).unwrap();
        state.undo();
        assert!(!state.is_ai_thinking());
        assert!(state.session.board().is_board_empty());

        state.check_ai(t0 + Duration::from_secs(5));
        assert!(state.session.board().is_board_empty());
        assert!(state.accepts_clicks());
    }

    #[test]
    fn test_two_player_win_text() {
        let mut state = started(GameMode::TwoPlayer);
        let now = Instant::now();
        for col in 0..3 {
            state.try_place(Pos::new(0, col), now).unwrap();
            state.try_place(Pos::new(1, col), now).unwrap();
        }
        state.try_place(Pos::new(0, 3), now).unwrap();
        assert_eq!(state.status_text(), "Asmara wins!");
        assert!(!state.is_computer_win());
        assert!(!state.accepts_clicks());
    }

    #[test]
    fn test_restart_returns_to_setup() {
        let mut state = started(GameMode::VsComputer);
        state.try_place(Pos::new(2, 2), Instant::now()).unwrap();
        state.restart();
        assert_eq!(state.session.phase(), Phase::Setup);
        assert_eq!(state.setup.step(), &SetupStep::ChooseMode);
        assert!(!state.is_ai_thinking());
    }
}
