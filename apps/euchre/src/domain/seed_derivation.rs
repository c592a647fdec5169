//! Seed derivation so a whole game replays from one base seed.

/// Seed for shuffling the deck of one round.
///
/// Same game seed + round number always yields the same deal.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed for a seeded strategy sitting at `seat`.
///
/// Kept apart from the dealing seeds so a player's choices never mirror the shuffle.
pub fn derive_player_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_mul(31)
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
