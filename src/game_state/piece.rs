use std::fmt;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Row holding this player's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }

    /// Row this player's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Farthest row in this player's pawn direction.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opponent().home_row()
    }
}

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pieces a pawn may be exchanged for on the promotion row, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Lowercase letter used in UCI and FEN notation.
    pub const fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Identity of a piece, handed out by the board when the piece is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board.
///
/// Pieces do not know where they stand; ask [`Board::find_piece`](super::Board::find_piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    player: Player,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, kind: PieceKind, player: Player) -> Self {
        Self { id, kind, player }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Letter for this piece, uppercase for White as in FEN.
    pub const fn symbol(&self) -> char {
        let c = self.kind.char();
        match self.player {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Player::White, 1, 0, 1, 7; "white")]
    #[test_case(Player::Black, -1, 7, 6, 0; "black")]
    fn test_player_geometry(player: Player, forward: i8, home: u8, pawns: u8, promotion: u8) {
        assert_eq!(player.forward(), forward);
        assert_eq!(player.home_row(), home);
        assert_eq!(player.pawn_row(), pawns);
        assert_eq!(player.promotion_row(), promotion);
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::White.opponent().opponent(), Player::White);
    }

    #[test]
    fn test_piece_symbol() {
        let white_knight = Piece::new(PieceId(0), PieceKind::Knight, Player::White);
        let black_queen = Piece::new(PieceId(1), PieceKind::Queen, Player::Black);

        assert_eq!(white_knight.symbol(), 'N');
        assert_eq!(black_queen.symbol(), 'q');
    }
}
