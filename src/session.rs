//! Game session: board, turn, history and the phase state machine
//!
//! ```text
//! Setup --start--> InProgress --winning or filling move--> Ended
//!   ^                  |  ^                                  |
//!   |                  +--+ move / undo                      |
//!   +-------------------------- restart ---------------------+
//! ```
//!
//! Every command is a method returning `Result<_, Rejection>`. A rejected
//! command leaves the session exactly as it was.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::board::{Board, Piece, Pos};
use crate::engine::{AiEngine, Selection};
use crate::error::Rejection;
use crate::history::{History, MoveRecord};
use crate::rules::{evaluate, winning_line, Outcome};
use crate::setup::PlayerLabels;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans sharing the board (hotseat)
    TwoPlayer,
    /// Human is player 1, the computer is player 2
    #[default]
    VsComputer,
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for mode and player choices
    Setup,
    InProgress,
    Ended(Outcome),
}

/// What the status line should say after the latest transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    ChooseMode,
    Turn(Piece),
    ComputerThinking,
    Won(Piece),
    Draw,
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Set when this move ended the game
    pub result: Option<Outcome>,
}

/// One game from setup to end or restart
pub struct Session<R: Rng = StdRng> {
    board: Board,
    phase: Phase,
    current: Piece,
    history: History,
    mode: GameMode,
    players: PlayerLabels,
    engine: AiEngine<R>,
}

impl Session<StdRng> {
    /// Session with an OS-seeded computer opponent
    pub fn new() -> Self {
        Self::with_engine(AiEngine::new())
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// Session using the given computer opponent
    pub fn with_engine(engine: AiEngine<R>) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Setup,
            current: Piece::One,
            history: History::new(),
            mode: GameMode::default(),
            players: PlayerLabels::default(),
            engine,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Piece {
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn players(&self) -> &PlayerLabels {
        &self.players
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// The computer is player 2 in vs-computer games
    pub fn is_computer(&self, piece: Piece) -> bool {
        self.mode == GameMode::VsComputer && piece == Piece::Two
    }

    /// True while a computer move is owed
    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.is_computer(self.current)
    }

    /// Undo is offered exactly while a game runs and something was played
    pub fn can_undo(&self) -> bool {
        self.is_active() && self.history.can_undo()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|m| m.pos)
    }

    /// Begin a new game: empty board, empty history, player 1 to move
    pub fn start(&mut self, mode: GameMode, players: PlayerLabels) {
        self.board = Board::new();
        self.history.clear();
        self.current = Piece::One;
        self.mode = mode;
        self.players = players;
        self.phase = Phase::InProgress;
        info!(
            "game started: {:?}, {} vs {}",
            mode, self.players.one.name, self.players.two.name
        );
    }

    /// Drop the current game and go back to setup
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current = Piece::One;
        self.phase = Phase::Setup;
        info!("session restarted");
    }

    /// Human move from raw coordinates (e.g. a click)
    pub fn apply_move_at(&mut self, row: usize, col: usize) -> Result<MoveOutcome, Rejection> {
        let pos = Pos::try_new(row, col).ok_or(Rejection::OutOfBounds { row, col })?;
        self.apply_move(pos)
    }

    /// Human move for the player whose turn it is
    pub fn apply_move(&mut self, pos: Pos) -> Result<MoveOutcome, Rejection> {
        if !self.is_active() {
            return Err(Rejection::NotInProgress);
        }
        if self.is_computer(self.current) {
            return Err(Rejection::NotYourTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(Rejection::Occupied(pos));
        }
        Ok(self.execute_move(pos))
    }

    /// Let the computer play its owed move
    pub fn play_computer_turn(&mut self) -> Result<(MoveOutcome, Selection), Rejection> {
        if !self.is_active() {
            return Err(Rejection::NotInProgress);
        }
        if !self.is_computer(self.current) {
            return Err(Rejection::NotYourTurn);
        }
        // An active game always has an empty cell; a full board ends it
        let selection = self
            .engine
            .select(&self.board, self.current)
            .ok_or(Rejection::NotInProgress)?;
        Ok((self.execute_move(selection.pos), selection))
    }

    /// Record, place, evaluate, then either end the game or pass the turn
    fn execute_move(&mut self, pos: Pos) -> MoveOutcome {
        let record = MoveRecord::new(pos, self.current);

        self.history.record(record);
        self.board.place(pos, record.piece);
        debug!("move {}: {:?} at {}", self.history.len(), record.piece, pos);

        let result = evaluate(&self.board, pos);
        match result {
            Some(outcome) => {
                self.phase = Phase::Ended(outcome);
                info!("game over after {} moves: {:?}", self.history.len(), outcome);
            }
            None => self.current = self.current.opponent(),
        }

        MoveOutcome { record, result }
    }

    /// Take back the last move, or the last exchange against the computer.
    ///
    /// Against the computer both the computer's reply and the human move
    /// before it are removed. The player who made the earliest removed move
    /// is to move again. Returns how many moves were removed.
    pub fn undo(&mut self) -> Result<usize, Rejection> {
        if !self.is_active() {
            return Err(Rejection::NotInProgress);
        }
        let last = *self.history.last().ok_or(Rejection::NothingToUndo)?;

        let count = if self.is_computer(last.piece) && self.history.len() >= 2 {
            2
        } else {
            1
        };

        for _ in 0..count {
            if let Some(record) = self.history.pop() {
                self.board.remove(record.pos);
                self.current = record.piece;
            }
        }
        debug!(
            "undid {} move(s), {:?} to move, {} left",
            count,
            self.current,
            self.history.len()
        );
        Ok(count)
    }

    /// Status line state for the current phase
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Setup => Status::ChooseMode,
            Phase::InProgress if self.is_computer(self.current) => Status::ComputerThinking,
            Phase::InProgress => Status::Turn(self.current),
            Phase::Ended(Outcome::Win(piece)) => Status::Won(piece),
            Phase::Ended(Outcome::Draw) => Status::Draw,
        }
    }

    /// Cells of the winning run once the game is won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match self.phase {
            Phase::Ended(Outcome::Win(_)) => winning_line(&self.board, self.last_move()?),
            _ => None,
        }
    }
}
