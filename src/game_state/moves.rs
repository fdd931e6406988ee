use std::fmt;

use super::{PieceKind, Square};

/// What a move does besides relocating the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move to an empty square.
    Quiet,
    /// Pawn advance of two rows from its starting row.
    DoublePush,
    /// Capture of the piece standing on the destination.
    Capture,
    /// Pawn capture of the pawn that just passed the destination.
    EnPassant,
    /// King move of two columns, the rook hops over it.
    Castle { rook_from: Square, rook_to: Square },
    /// Pawn reaching the farthest row, exchanged for `promote_to`.
    Promotion {
        promote_to: PieceKind,
        capture: bool,
    },
}

/// A single generated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    pub const fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::Promotion { capture: true, .. }
        )
    }

    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }
}

/// UCI notation, e.g. `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.char())?;
        }
        Ok(())
    }
}
