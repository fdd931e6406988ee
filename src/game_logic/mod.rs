mod engine;
pub mod legality;
pub mod movegen;

pub use engine::{Game, GameStatus};
pub use legality::{
    all_legal_moves, attacked_by, attacks_from, is_attacked, is_in_check, is_legal,
    legal_destinations, legal_moves,
};
