pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const HAND_SIZE: usize = 5;

/// Tricks needed to carry a round of `tricks_per_round` tricks (3 of 5).
pub fn majority(tricks_per_round: u8) -> u8 {
    tricks_per_round / 2 + 1
}
