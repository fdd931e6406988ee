//! Cross-checks legal move generation against `shakmaty` on well-known
//! positions, and perft node counts against published values.

use std::collections::BTreeSet;

use chessington::game_logic::all_legal_moves;
use chessington::{Board, PieceKind, Player, Square};
use shakmaty::{CastlingMode, Chess, Color, File, Position, Rank, Role, fen::Fen};
use test_case::test_case;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
const EN_PASSANT: &str = "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";

/// A position held by both engines.
struct Pair {
    ours: Board,
    to_move: Player,
    theirs: Chess,
}

fn load(fen: &str) -> Pair {
    let theirs: Chess = fen
        .parse::<Fen>()
        .expect("valid FEN")
        .into_position(CastlingMode::Standard)
        .expect("valid position");

    let mut ours = Board::new();
    for rank in Rank::ALL {
        for file in File::ALL {
            let square = shakmaty::Square::from_coords(file, rank);
            if let Some(piece) = theirs.board().piece_at(square) {
                ours.place(kind(piece.role), player(piece.color), convert(square))
                    .expect("one piece per square");
            }
        }
    }

    let fields: Vec<&str> = fen.split_whitespace().collect();
    for (right, home) in [('K', "h1"), ('Q', "a1"), ('k', "h8"), ('q', "a8")] {
        if !fields[2].contains(right)
            && let Some(rook) = ours.get_piece(home.parse().expect("valid square"))
        {
            ours.mark_moved(&rook);
        }
    }
    if fields[3] != "-" {
        ours.set_en_passant(Some(fields[3].parse().expect("valid en passant square")));
    }

    let to_move = player(theirs.turn());
    Pair {
        ours,
        to_move,
        theirs,
    }
}

fn convert(square: shakmaty::Square) -> Square {
    square.to_string().parse().expect("same notation")
}

fn kind(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn player(color: Color) -> Player {
    match color {
        Color::White => Player::White,
        Color::Black => Player::Black,
    }
}

fn our_moves(board: &Board, to_move: Player) -> BTreeSet<String> {
    all_legal_moves(board, to_move)
        .iter()
        .map(|mv| mv.to_string())
        .collect()
}

fn their_moves(pos: &Chess) -> BTreeSet<String> {
    pos.legal_moves()
        .iter()
        .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
        .collect()
}

/// Compares move lists at every node down to `depth`, following both engines
/// along the same moves.
fn assert_same_tree(board: &Board, to_move: Player, pos: &Chess, depth: u32, line: &str) {
    let ours = our_moves(board, to_move);
    let theirs = their_moves(pos);
    assert_eq!(
        ours,
        theirs,
        "move lists differ after [{line}]\nmissing: {:?}\nextra: {:?}\n{board:?}",
        theirs.difference(&ours).collect::<Vec<_>>(),
        ours.difference(&theirs).collect::<Vec<_>>(),
    );
    if depth <= 1 {
        return;
    }

    for mv in all_legal_moves(board, to_move) {
        let uci = mv.to_string();
        let theirs_mv = pos
            .legal_moves()
            .into_iter()
            .find(|m| m.to_uci(CastlingMode::Standard).to_string() == uci)
            .expect("move sets are equal");

        let mut next_board = board.clone();
        next_board.play(&mv).expect("generated move applies");
        let mut next_pos = pos.clone();
        next_pos.play_unchecked(theirs_mv);

        let next_line = format!("{line} {uci}");
        let next = to_move.opponent();
        assert_same_tree(&next_board, next, &next_pos, depth - 1, &next_line);
    }
}

fn perft(board: &Board, to_move: Player, depth: u32) -> u64 {
    let moves = all_legal_moves(board, to_move);
    if depth <= 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| {
            let mut next = board.clone();
            next.play(mv).expect("generated move applies");
            perft(&next, to_move.opponent(), depth - 1)
        })
        .sum()
}

#[test_case(START, 2; "start position")]
#[test_case(KIWIPETE, 2; "kiwipete")]
#[test_case(POSITION_3, 3; "rook and pawn endgame")]
#[test_case(POSITION_4, 2; "promotions and pins")]
#[test_case(POSITION_5, 2; "promotion with check")]
#[test_case(EN_PASSANT, 2; "en passant available")]
fn matches_shakmaty(fen: &str, depth: u32) {
    let pair = load(fen);
    assert_same_tree(&pair.ours, pair.to_move, &pair.theirs, depth, "");
}

#[test_case(START, 1, 20; "start depth 1")]
#[test_case(START, 3, 8_902; "start depth 3")]
#[test_case(KIWIPETE, 1, 48; "kiwipete depth 1")]
#[test_case(KIWIPETE, 2, 2_039; "kiwipete depth 2")]
#[test_case(POSITION_3, 3, 2_812; "position 3 depth 3")]
#[test_case(POSITION_4, 2, 264; "position 4 depth 2")]
#[test_case(POSITION_5, 2, 1_486; "position 5 depth 2")]
fn perft_counts(fen: &str, depth: u32, nodes: u64) {
    let pair = load(fen);
    assert_eq!(perft(&pair.ours, pair.to_move, depth), nodes);
}
