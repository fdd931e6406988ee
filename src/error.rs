use thiserror::Error;

use crate::game_state::{PieceId, Square};

/// Errors surfaced by board queries and move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside the 8x8 grid.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// Reverse lookup on a piece that is not placed on the board.
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),

    /// A move was requested from a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// A piece was placed on a square that is already taken.
    #[error("square {0} is already occupied")]
    Occupied(Square),

    /// The board has handed out every piece identity it can represent.
    #[error("no piece identities left on this board")]
    PieceIdsExhausted,

    /// The move is not among the legal moves of the position, or does not fit
    /// the board it is applied to.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
}
