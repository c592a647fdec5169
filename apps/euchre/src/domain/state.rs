use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3
pub type TeamId = u8; // 0..=1

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_player(dealer)
}

/// Seats 0,2 form team 0; seats 1,3 form team 1.
#[inline]
pub fn team_of(seat: Seat) -> TeamId {
    seat % 2
}

#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

#[inline]
pub fn opposing_team(team: TeamId) -> TeamId {
    1 - team
}

/// All four seats starting left of the dealer: the bidding order.
pub fn call_order(dealer: Seat) -> Vec<Seat> {
    (0..PLAYERS as i8)
        .map(|i| seat_offset(round_start_seat(dealer), i))
        .collect()
}

pub fn require_seat(seat: Seat, ctx: &'static str) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("seat {seat} is out of range ({ctx})"),
        ))
    }
}
