use log::{debug, info, warn};

use super::legality::{all_legal_moves, is_in_check, legal_moves};
use crate::error::ChessError;
use crate::game_state::{Board, Move, PieceKind, Player, Square};

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
}

/// Turn manager: owns the board, tracks the side to move and only lets legal
/// moves through.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Player::White)
    }

    /// Creates a game from an existing position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Every legal move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        all_legal_moves(&self.board, self.to_move)
    }

    /// Legal moves of the piece on `square`. Empty when the piece belongs to
    /// the side not on move.
    pub fn legal_moves_from(&self, square: Square) -> Result<Vec<Move>, ChessError> {
        let piece = self.board.occupant(square)?;
        if piece.player() != self.to_move {
            return Ok(Vec::new());
        }
        legal_moves(&self.board, square)
    }

    /// Plays the legal move from `from` to `to` and passes the turn.
    ///
    /// `promotion` picks the piece a pawn becomes on the last row and defaults
    /// to a queen; it is ignored for other moves. Anything that is not a legal
    /// move of the side to move, a move from an empty square included, fails
    /// with [`ChessError::IllegalMove`].
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, ChessError> {
        let wanted = promotion.unwrap_or(PieceKind::Queen);
        let candidate = self
            .legal_moves_from(from)
            .unwrap_or_default()
            .into_iter()
            .find(|mv| mv.to == to && mv.promotion().is_none_or(|kind| kind == wanted));

        let Some(mv) = candidate else {
            warn!("rejected illegal move {from}{to} for {:?}", self.to_move);
            return Err(ChessError::IllegalMove { from, to });
        };

        self.board.play(&mv)?;
        self.to_move = self.to_move.opponent();
        debug!("played {mv}, {:?} to move", self.to_move);

        match self.status() {
            GameStatus::InProgress => {}
            GameStatus::Checkmate => info!("checkmate, {:?} wins", self.to_move.opponent()),
            GameStatus::Stalemate => info!("stalemate"),
        }

        Ok(mv)
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.to_move)
    }

    pub fn status(&self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::InProgress
        } else if self.in_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}
