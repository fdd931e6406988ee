//! Move generation for chess.
//!
//! A [`Board`] owns the pieces; each [`Piece`] asks the board where it stands
//! and which squares it can reach. [`game_logic::legality`] filters those
//! moves down to the ones that keep the mover's king safe, and [`Game`] wraps
//! it all into a turn manager.

pub mod error;
pub mod game_logic;
pub mod game_state;

pub use error::ChessError;
pub use game_logic::{Game, GameStatus};
pub use game_state::{Board, Move, MoveKind, Piece, PieceKind, Player, Square};
