mod board;
mod moves;
mod piece;
mod square;

pub use board::Board;
pub use moves::{Move, MoveKind};
pub use piece::{Piece, PieceId, PieceKind, Player};
pub use square::{BOARD_SIZE, Bitboard, NUM_SQUARES, Square, SquareParseError};
