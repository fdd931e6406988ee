//! Pseudo-legal move generation, one rule per [`PieceKind`].
//!
//! Generated moves respect piece geometry and board occupancy but may still
//! leave the mover's own king attacked; see [`super::legality`] for the filter.

use crate::error::ChessError;
use crate::game_state::{Board, Move, MoveKind, Piece, PieceKind, Player, Square};

use super::legality::is_attacked;

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Column the king starts on, and where it lands when castling (king side, queen side).
const KING_COL: u8 = 4;
const CASTLES: [Castle; 2] = [
    Castle {
        rook_col: 7,
        king_to: 6,
        rook_to: 5,
    },
    Castle {
        rook_col: 0,
        king_to: 2,
        rook_to: 3,
    },
];

struct Castle {
    rook_col: u8,
    king_to: u8,
    rook_to: u8,
}

impl Piece {
    /// Destination squares of this piece's pseudo-legal moves, without duplicates.
    ///
    /// Does not mutate the board. A pawn with several promotion choices onto the
    /// same square lists that square once.
    pub fn get_available_moves(&self, board: &Board) -> Result<Vec<Square>, ChessError> {
        let mut squares: Vec<Square> = Vec::new();
        for mv in self.pseudo_legal_moves(board)? {
            if !squares.contains(&mv.to) {
                squares.push(mv.to);
            }
        }
        Ok(squares)
    }

    /// All pseudo-legal moves of this piece from wherever it stands on `board`.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Result<Vec<Move>, ChessError> {
        let from = board.find_piece(self)?;
        Ok(generate(board, from, *self))
    }

    /// Moves this piece to `destination`, capturing whatever stands there.
    ///
    /// The destination is not checked against the available moves; callers do
    /// that first.
    pub fn move_to(
        &self,
        board: &mut Board,
        destination: Square,
    ) -> Result<Option<Piece>, ChessError> {
        let from = board.find_piece(self)?;
        board.move_piece(from, destination)
    }
}

/// Pseudo-legal moves of `piece` standing on `from`.
pub(crate) fn generate(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let player = piece.player();
    let mut moves = Vec::new();

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, from, player, &mut moves),
        PieceKind::Knight => step_moves(board, from, player, &KNIGHT_JUMPS, &mut moves),
        PieceKind::Bishop => slide_moves(board, from, player, &DIAGONAL, &mut moves),
        PieceKind::Rook => slide_moves(board, from, player, &ORTHOGONAL, &mut moves),
        PieceKind::Queen => {
            slide_moves(board, from, player, &ORTHOGONAL, &mut moves);
            slide_moves(board, from, player, &DIAGONAL, &mut moves);
        }
        PieceKind::King => {
            step_moves(board, from, player, &KING_STEPS, &mut moves);
            castling_moves(board, from, piece, &mut moves);
        }
    }

    moves
}

/// Squares along one direction, up to and including the first occupied one.
pub(crate) fn ray(
    board: &Board,
    from: Square,
    (dr, dc): (i8, i8),
) -> impl Iterator<Item = Square> + '_ {
    let mut next = from.offset(dr, dc);
    let mut blocked = false;
    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let square = next?;
        blocked = board.get_piece(square).is_some();
        next = square.offset(dr, dc);
        Some(square)
    })
}

/// How a piece of `player` may enter `to`: quietly, by capture, or not at all.
fn entry(board: &Board, to: Square, player: Player) -> Option<MoveKind> {
    match board.get_piece(to) {
        None => Some(MoveKind::Quiet),
        Some(occupant) if occupant.player() != player => Some(MoveKind::Capture),
        Some(_) => None,
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    player: Player,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc)
            && let Some(kind) = entry(board, to, player)
        {
            moves.push(Move::new(from, to, kind));
        }
    }
}

fn slide_moves(
    board: &Board,
    from: Square,
    player: Player,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in ray(board, from, direction) {
            if let Some(kind) = entry(board, to, player) {
                moves.push(Move::new(from, to, kind));
            }
        }
    }
}

fn pawn_moves(board: &Board, from: Square, player: Player, moves: &mut Vec<Move>) {
    // Promotion happens on arrival, so a pawn is never left on this row.
    if from.row() == player.promotion_row() {
        return;
    }
    let forward = player.forward();

    if let Some(one) = from.offset(forward, 0)
        && board.get_piece(one).is_none()
    {
        push_pawn_move(from, one, player, false, moves);

        if from.row() == player.pawn_row()
            && let Some(two) = from.offset(2 * forward, 0)
            && board.get_piece(two).is_none()
        {
            moves.push(Move::new(from, two, MoveKind::DoublePush));
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(forward, dc) else {
            continue;
        };
        match board.get_piece(to) {
            Some(victim) if victim.player() != player => {
                push_pawn_move(from, to, player, true, moves);
            }
            None if en_passant_open(board, from, to, player) => {
                moves.push(Move::new(from, to, MoveKind::EnPassant));
            }
            _ => {}
        }
    }
}

/// Whether `to` is the en-passant target and an opponent pawn stands beside
/// `from` on its column.
fn en_passant_open(board: &Board, from: Square, to: Square, player: Player) -> bool {
    if board.en_passant() != Some(to) {
        return false;
    }
    let beside = Square::from_row_col(from.row(), to.col());
    board
        .get_piece(beside)
        .is_some_and(|p| p.kind() == PieceKind::Pawn && p.player() != player)
}

fn push_pawn_move(from: Square, to: Square, player: Player, capture: bool, moves: &mut Vec<Move>) {
    if to.row() != player.promotion_row() {
        let kind = if capture {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };
        moves.push(Move::new(from, to, kind));
        return;
    }
    for promote_to in PieceKind::PROMOTIONS {
        let kind = MoveKind::Promotion {
            promote_to,
            capture,
        };
        moves.push(Move::new(from, to, kind));
    }
}

fn castling_moves(board: &Board, from: Square, king: Piece, moves: &mut Vec<Move>) {
    let player = king.player();
    let home = player.home_row();
    if from != Square::from_row_col(home, KING_COL) || board.has_moved(&king) {
        return;
    }
    let enemy = player.opponent();
    if is_attacked(board, from, enemy) {
        return;
    }

    for castle in &CASTLES {
        let rook_from = Square::from_row_col(home, castle.rook_col);
        if !unmoved_rook(board, rook_from, player) {
            continue;
        }

        let lo = KING_COL.min(castle.rook_col);
        let hi = KING_COL.max(castle.rook_col);
        let path_clear = (lo + 1..hi)
            .map(|col| Square::from_row_col(home, col))
            .all(|square| board.get_piece(square).is_none());
        if !path_clear {
            continue;
        }

        let crossed = Square::from_row_col(home, castle.rook_to);
        let to = Square::from_row_col(home, castle.king_to);
        if is_attacked(board, crossed, enemy) || is_attacked(board, to, enemy) {
            continue;
        }

        moves.push(Move::new(
            from,
            to,
            MoveKind::Castle {
                rook_from,
                rook_to: crossed,
            },
        ));
    }
}

/// Whether a rook of `player` that has never moved stands on `square`.
fn unmoved_rook(board: &Board, square: Square, player: Player) -> bool {
    let Some(rook) = board.get_piece(square) else {
        return false;
    };
    rook.kind() == PieceKind::Rook && rook.player() == player && !board.has_moved(&rook)
}
