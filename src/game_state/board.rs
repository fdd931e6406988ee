use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{Move, MoveKind, NUM_SQUARES, Piece, PieceId, PieceKind, Player, Square};
use crate::error::ChessError;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board owns every piece placed on it. Alongside the grid it keeps a
/// reverse index from [`PieceId`] to [`Square`], updated on every mutation, so
/// [`Board::find_piece`] never scans.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    locations: HashMap<PieceId, Square>,
    /// Square skipped by the last two-row pawn advance, cleared by any other move.
    en_passant: Option<Square>,
    /// Pieces that have left their starting square at least once.
    moved: HashSet<PieceId>,
    /// Next unused identity. Ids are never handed out twice.
    next_id: u32,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with the standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::new();
        for player in [Player::White, Player::Black] {
            for (col, kind) in (0..).zip(BACK_RANK) {
                board.set_initial(player.home_row(), col, kind, player);
                board.set_initial(player.pawn_row(), col, PieceKind::Pawn, player);
            }
        }
        board.next_id = NUM_SQUARES as u32;
        board
    }

    /// Puts a starting piece on `(row, col)`, named after its starting square.
    fn set_initial(&mut self, row: u8, col: u8, kind: PieceKind, player: Player) {
        let square = Square::from_row_col(row, col);
        let id = PieceId(u32::from(square.index()));
        self.set(square, Some(Piece::new(id, kind, player)));
    }

    /// Places a new piece on an empty square.
    ///
    /// Fails with [`ChessError::Occupied`] if the square is taken.
    pub fn place(
        &mut self,
        kind: PieceKind,
        player: Player,
        square: Square,
    ) -> Result<Piece, ChessError> {
        if self.get_piece(square).is_some() {
            return Err(ChessError::Occupied(square));
        }
        let piece = self.spawn(kind, player)?;
        self.set(square, Some(piece));
        Ok(piece)
    }

    /// Creates a piece with an identity this board has not used before.
    fn spawn(&mut self, kind: PieceKind, player: Player) -> Result<Piece, ChessError> {
        let id = PieceId(self.next_id);
        let Some(next) = self.next_id.checked_add(1) else {
            return Err(ChessError::PieceIdsExhausted);
        };
        self.next_id = next;
        Ok(Piece::new(id, kind, player))
    }

    /// Returns the occupant of `square`, if any.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    /// Returns the occupant of `square`, failing when it is empty.
    pub(crate) fn occupant(&self, square: Square) -> Result<Piece, ChessError> {
        match self.get_piece(square) {
            Some(piece) => Ok(piece),
            None => Err(ChessError::EmptySquare(square)),
        }
    }

    /// Returns the occupant at raw coordinates, failing for off-board ones.
    pub fn piece_at(&self, row: i8, col: i8) -> Result<Option<Piece>, ChessError> {
        Square::at(row, col).map(|square| self.get_piece(square))
    }

    /// Returns the square `piece` currently stands on.
    pub fn find_piece(&self, piece: &Piece) -> Result<Square, ChessError> {
        self.locations
            .get(&piece.id())
            .copied()
            .ok_or(ChessError::PieceNotFound(piece.id()))
    }

    /// Relocates the occupant of `from` to `to`, returning any piece captured there.
    ///
    /// Marks the piece as moved and records the en-passant target when a pawn
    /// advances two rows. No legality checks are made.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessError> {
        let piece = self.occupant(from)?;

        self.set(from, None);
        let captured = self.set(to, Some(piece));
        self.moved.insert(piece.id());

        let double_push = piece.kind() == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2;
        let skipped = Square::from_row_col((from.row() + to.row()) / 2, from.col());
        self.en_passant = double_push.then_some(skipped);

        Ok(captured)
    }

    /// Detaches the occupant of `square` from the board.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Applies a generated move, including en-passant, castling and promotion
    /// side effects. Returns the captured piece, if any.
    ///
    /// Every precondition is checked before the board changes, so a failed
    /// move leaves it untouched.
    pub fn play(&mut self, mv: &Move) -> Result<Option<Piece>, ChessError> {
        match mv.kind {
            MoveKind::Quiet | MoveKind::DoublePush | MoveKind::Capture => {
                self.move_piece(mv.from, mv.to)
            }
            MoveKind::EnPassant => {
                let victim = self.en_passant_victim(mv)?;
                self.move_piece(mv.from, mv.to)?;
                Ok(self.remove(victim))
            }
            MoveKind::Castle { rook_from, rook_to } => {
                self.occupant(mv.from)?;
                self.occupant(rook_from)?;
                self.move_piece(mv.from, mv.to)?;
                self.move_piece(rook_from, rook_to)?;
                Ok(None)
            }
            MoveKind::Promotion { promote_to, .. } => {
                let pawn = self.occupant(mv.from)?;
                let promoted = self.spawn(promote_to, pawn.player())?;
                let captured = self.move_piece(mv.from, mv.to)?;
                self.set(mv.to, Some(promoted));
                self.moved.insert(promoted.id());
                Ok(captured)
            }
        }
    }

    /// Square of the opposing pawn an en-passant capture takes.
    fn en_passant_victim(&self, mv: &Move) -> Result<Square, ChessError> {
        let pawn = self.occupant(mv.from)?;
        let square = Square::from_row_col(mv.from.row(), mv.to.col());
        let victim = self.occupant(square)?;
        if victim.kind() != PieceKind::Pawn || victim.player() == pawn.player() {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(square)
    }

    /// Writes `slot` into the grid and keeps the reverse index in step.
    fn set(&mut self, square: Square, slot: Option<Piece>) -> Option<Piece> {
        let cell = &mut self.grid[square.row() as usize][square.col() as usize];
        let previous = std::mem::replace(cell, slot);
        if let Some(old) = previous {
            self.locations.remove(&old.id());
            self.moved.remove(&old.id());
        }
        if let Some(new) = slot {
            self.locations.insert(new.id(), square);
        }
        previous
    }

    /// Target square for an en-passant capture, if the last move allows one.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Overrides the en-passant target, e.g. when importing a position.
    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    /// Whether `piece` has left its starting square.
    pub fn has_moved(&self, piece: &Piece) -> bool {
        self.moved.contains(&piece.id())
    }

    /// Records `piece` as moved without moving it, e.g. to drop castling rights.
    pub fn mark_moved(&mut self, piece: &Piece) {
        self.moved.insert(piece.id());
    }

    /// All placed pieces with their squares, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get_piece(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.player() == player)
    }

    /// Square of `player`'s king, or `None` if the player has none on the board.
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces_of(player)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(square, _)| square)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in (0..8u8).rev() {
            write!(f, " {} ", row + 1)?;
            for col in 0..8u8 {
                let cell = self
                    .get_piece(Square::from_row_col(row, col))
                    .map_or('.', |piece| piece.symbol());
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        if let Some(ep) = self.en_passant {
            writeln!(f, "en passant: {ep}")?;
        }
        Ok(())
    }
}
