use log::trace;

use crate::error::ChessError;
use crate::game_state::{Bitboard, Board, Move, Piece, PieceKind, Player, Square};

use super::movegen::{DIAGONAL, KING_STEPS, KNIGHT_JUMPS, ORTHOGONAL, generate, ray};

/// Squares attacked by `piece` standing on `from`.
///
/// Differs from the move set: pawns attack both forward diagonals whether or
/// not anything stands there, rays include a blocker of either colour, and the
/// king's castling moves attack nothing.
pub fn attacks_from(board: &Board, from: Square, piece: &Piece) -> Bitboard {
    let steps = |offsets: &[(i8, i8)]| -> Bitboard {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    };
    let rays = |directions: &[(i8, i8)]| -> Bitboard {
        directions
            .iter()
            .flat_map(|&direction| ray(board, from, direction))
            .collect()
    };
    let forward = piece.player().forward();

    match piece.kind() {
        PieceKind::Pawn => steps(&[(forward, -1), (forward, 1)]),
        PieceKind::Knight => steps(&KNIGHT_JUMPS),
        PieceKind::King => steps(&KING_STEPS),
        PieceKind::Bishop => rays(&DIAGONAL),
        PieceKind::Rook => rays(&ORTHOGONAL),
        PieceKind::Queen => rays(&DIAGONAL) | rays(&ORTHOGONAL),
    }
}

/// Union of the squares attacked by every piece of `player`.
pub fn attacked_by(board: &Board, player: Player) -> Bitboard {
    board
        .pieces_of(player)
        .map(|(from, piece)| attacks_from(board, from, &piece))
        .fold(Bitboard::EMPTY, |acc, attacks| acc | attacks)
}

/// Whether any piece of `by` attacks `square`.
pub fn is_attacked(board: &Board, square: Square, by: Player) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| attacks_from(board, from, &piece).contains(square))
}

/// Whether `player`'s king is attacked. A player without a king is never in check.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    board
        .king_square(player)
        .is_some_and(|king| is_attacked(board, king, player.opponent()))
}

/// Plays `mv` on a scratch copy of `board` and reports whether the mover's
/// king is safe afterwards.
pub fn is_legal(board: &Board, mv: &Move) -> bool {
    let Some(mover) = board.get_piece(mv.from) else {
        return false;
    };
    let mut scratch = board.clone();
    if scratch.play(mv).is_err() {
        return false;
    }
    let legal = !is_in_check(&scratch, mover.player());
    if !legal {
        trace!("{mv} leaves the {:?} king in check", mover.player());
    }
    legal
}

/// Legal moves of the piece on `square`.
pub fn legal_moves(board: &Board, square: Square) -> Result<Vec<Move>, ChessError> {
    let piece = board.occupant(square)?;
    Ok(generate(board, square, piece)
        .into_iter()
        .filter(|mv| is_legal(board, mv))
        .collect())
}

/// Destination squares of the legal moves of the piece on `square`, without duplicates.
pub fn legal_destinations(board: &Board, square: Square) -> Result<Vec<Square>, ChessError> {
    let mut squares: Vec<Square> = Vec::new();
    for mv in legal_moves(board, square)? {
        if !squares.contains(&mv.to) {
            squares.push(mv.to);
        }
    }
    Ok(squares)
}

/// Every legal move available to `player`.
pub fn all_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .pieces_of(player)
        .flat_map(|(from, piece)| generate(board, from, piece))
        .filter(|mv| is_legal(board, mv))
        .collect()
}
