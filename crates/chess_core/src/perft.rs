use crate::{game::Game, types::Move};

/// Counts all leaf positions `depth` plies below the current one.
///
/// Plays every move through the game's push/pop stack, so a correct count
/// also shows the undo stack restores each position exactly.
pub fn perft(game: &mut Game, depth: u8) -> u64 {
    fn inner(game: &mut Game, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        game.legal_moves_into(buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            game.push(mv);
            nodes += inner(game, depth - 1, rest);
            game.pop();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(game, depth, &mut layers[..])
}
