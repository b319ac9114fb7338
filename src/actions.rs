//! Command handlers driving the phase state machine.
//!
//! Each handler re-validates phase, turn, and card legality against the
//! current state and either applies the action atomically or returns a
//! [`DomainError`] with the state untouched. The UI layer is expected to
//! disable illegal controls proactively, but the engine is the sole source
//! of truth and rejects out-of-phase calls regardless.

use tracing::{debug, info};

use crate::cards_types::{Card, Suit};
use crate::dealing::{deal, left_of_player, shuffled_deck};
use crate::errors::{ActionErrorKind, CardErrorKind, DomainError};
use crate::ranking::{effective_suit, sort_cards, winning_player};
use crate::scoring::{add_scores, hand_over, score_hand, winner};
use crate::state::{GameState, Phase, Play, Seat, TableState, SEATS};

/// Outcome of a single play, describing what the state machine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Winner of the trick this play completed, if it completed one.
    pub trick_winner: Option<Seat>,
    /// Whether this play finished the hand and its score was applied.
    pub hand_scored: bool,
    /// Phase after the play resolved.
    pub phase_after: Phase,
}

fn require_phase(state: &GameState, phase: Phase) -> Result<(), DomainError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(DomainError::IllegalAction(ActionErrorKind::PhaseMismatch))
    }
}

fn require_turn(state: &GameState, who: Seat) -> Result<(), DomainError> {
    if state.current_player == Some(who) {
        Ok(())
    } else {
        Err(DomainError::IllegalAction(ActionErrorKind::OutOfTurn))
    }
}

/// Reset per-hand fields for a fresh deal. Scores persist across hands.
fn reset_hand(state: &mut GameState) {
    state.table = TableState::empty();
    state.best = None;
    state.maker = None;
    state.discarded = None;
    state.current_trick.clear();
}

/// Deal a fresh hand from `deck` (exactly 24 cards, in final play order)
/// and open round-one bidding at the dealer's left.
pub fn deal_hand(state: &mut GameState, deck: &[Card]) -> Result<(), DomainError> {
    require_phase(state, Phase::Deal)?;
    let table = deal(deck)?;

    reset_hand(state);
    state.table = table;
    state.phase = Phase::Bid1;
    state.current_player = Some(left_of_player(state.dealer));
    debug!(dealer = state.dealer, "hand dealt, bidding opens");
    Ok(())
}

/// The no-argument `deal` action a UI issues: shuffle the template deck
/// and deal it.
pub fn deal_shuffled(state: &mut GameState) -> Result<(), DomainError> {
    let deck = shuffled_deck(&mut rand::rng());
    deal_hand(state, &deck)
}

/// Pass during either bidding round.
///
/// In round one, the dealer's pass turns the up-card down and opens round
/// two. In round two, the dealer's pass either throws the hand in (deal
/// rotates left, nothing scored) or, under stick-the-dealer, is rejected.
pub fn pass_bid(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    match state.phase {
        Phase::Bid1 => {
            require_turn(state, who)?;
            if who == state.dealer {
                state.phase = Phase::Bid2;
                state.current_player = Some(left_of_player(state.dealer));
                debug!("all four passed, up-card turned down");
            } else {
                state.current_player = Some(left_of_player(who));
            }
            Ok(())
        }
        Phase::Bid2 => {
            require_turn(state, who)?;
            if who == state.dealer {
                if state.config.stick_the_dealer {
                    return Err(DomainError::IllegalAction(ActionErrorKind::DealerMustCall));
                }
                info!(dealer = state.dealer, "hand thrown in, deal passes left");
                state.dealer = left_of_player(state.dealer);
                reset_hand(state);
                state.phase = Phase::Deal;
                state.current_player = Some(state.dealer);
            } else {
                state.current_player = Some(left_of_player(who));
            }
            Ok(())
        }
        _ => Err(DomainError::IllegalAction(ActionErrorKind::PhaseMismatch)),
    }
}

/// Order up the up-card as trump. The ordering seat's team becomes the
/// maker, the dealer takes the up-card and must discard before play.
pub fn order_up_card(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    require_phase(state, Phase::Bid1)?;
    require_turn(state, who)?;
    let Some(up) = state.table.up_card else {
        // Invariant: the up-card is present throughout Bid1.
        return Err(DomainError::IllegalAction(ActionErrorKind::PhaseMismatch));
    };

    state.best = Some(up.suit);
    state.maker = Some(who);
    state.table.up_card = None;
    state.table.hands[state.dealer as usize].push(up);
    state.phase = Phase::DealerDiscard;
    state.current_player = Some(state.dealer);
    info!(maker = who, best = ?up.suit, "up-card ordered up");
    Ok(())
}

/// Call a trump suit in round two. The turned-down up-card's suit is
/// barred; any other suit sets trump and starts play at the dealer's left.
pub fn call_best(state: &mut GameState, who: Seat, suit: Suit) -> Result<(), DomainError> {
    require_phase(state, Phase::Bid2)?;
    require_turn(state, who)?;
    if state.table.up_card.map(|c| c.suit) == Some(suit) {
        return Err(DomainError::IllegalAction(ActionErrorKind::BarredSuit));
    }

    state.best = Some(suit);
    state.maker = Some(who);
    state.table.up_card = None;
    state.phase = Phase::PlayHand;
    state.current_player = Some(left_of_player(state.dealer));
    info!(maker = who, best = ?suit, "best called");
    Ok(())
}

/// Dealer exchanges exactly one card from their six-card hand for the
/// up-card already taken. The discard leaves play for the hand.
pub fn dealer_discard_and_pickup(state: &mut GameState, card: Card) -> Result<(), DomainError> {
    require_phase(state, Phase::DealerDiscard)?;
    let dealer = state.dealer;
    let Some(pos) = state.table.hands[dealer as usize]
        .iter()
        .position(|&c| c == card)
    else {
        return Err(DomainError::IllegalCard(CardErrorKind::NotInHand));
    };

    let removed = state.table.hands[dealer as usize].remove(pos);
    state.discarded = Some(removed);
    state.phase = Phase::PlayHand;
    state.current_player = Some(left_of_player(dealer));
    debug!(dealer, "dealer discarded and picked up");
    Ok(())
}

/// Tricks taken per seat so far this hand.
pub fn tricks_taken(table: &TableState) -> [u8; 4] {
    let mut taken = [0u8; 4];
    for (count, tricks) in taken.iter_mut().zip(table.tricks.iter()) {
        *count = tricks.len() as u8;
    }
    taken
}

/// Cards `who` may legally play right now, weakest first. Empty outside
/// PlayHand. Following suit goes by *effective* suit: a hand holding only
/// the left bower of the led trump suit must play it.
pub fn legal_moves(state: &GameState, who: Seat) -> Vec<Card> {
    if state.phase != Phase::PlayHand {
        return Vec::new();
    }

    let hand = &state.table.hands[who as usize];
    let lead = state
        .current_trick
        .first()
        .map(|play| effective_suit(play.card, state.best));

    if let Some(lead_suit) = lead {
        let follows: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|&c| effective_suit(c, state.best) == lead_suit)
            .collect();
        if !follows.is_empty() {
            return sort_cards(&follows, state.best, lead);
        }
    }
    sort_cards(hand, state.best, lead)
}

/// Play one card into the current trick.
///
/// Completing the fourth play resolves the trick; the winner takes it and
/// leads the next. Completing the fifth trick scores the hand, accumulates
/// match totals, and either rotates the deal or ends the match.
pub fn play_card(state: &mut GameState, who: Seat, card: Card) -> Result<PlayOutcome, DomainError> {
    require_phase(state, Phase::PlayHand)?;
    require_turn(state, who)?;

    let Some(pos) = state.table.hands[who as usize]
        .iter()
        .position(|&c| c == card)
    else {
        return Err(DomainError::IllegalCard(CardErrorKind::NotInHand));
    };
    if !legal_moves(state, who).contains(&card) {
        return Err(DomainError::IllegalCard(CardErrorKind::MustFollowSuit));
    }

    let played = state.table.hands[who as usize].remove(pos);
    state.current_trick.push(Play {
        player: who,
        card: played,
    });

    let mut outcome = PlayOutcome {
        trick_winner: None,
        hand_scored: false,
        phase_after: state.phase,
    };

    if state.current_trick.len() < SEATS {
        state.current_player = Some(left_of_player(who));
        return Ok(outcome);
    }

    // Trick complete: the winner takes it and leads the next.
    let trick = std::mem::take(&mut state.current_trick);
    if let Some(winner_seat) = winning_player(&trick, state.best) {
        debug!(winner = winner_seat, "trick resolved");
        state.table.tricks[winner_seat as usize].push(trick);
        state.current_player = Some(winner_seat);
        outcome.trick_winner = Some(winner_seat);
    }

    let taken = tricks_taken(&state.table);
    if hand_over(&taken) {
        if let Some(maker) = state.maker {
            let hand_scores = score_hand(&taken, maker);
            state.scores = add_scores(state.scores, hand_scores);
            outcome.hand_scored = true;
            info!(?hand_scores, totals = ?state.scores, "hand scored");
        }

        if winner(state.scores, state.config.winning_score).is_some() {
            state.phase = Phase::End;
            state.current_player = None;
            info!(scores = ?state.scores, "match over");
        } else {
            state.dealer = left_of_player(state.dealer);
            reset_hand(state);
            state.phase = Phase::Deal;
            state.current_player = Some(state.dealer);
        }
    }

    outcome.phase_after = state.phase;
    Ok(outcome)
}

/// Fast-forward the remainder of the hand by repeatedly playing the
/// weakest legal card for the seat to act. Purely mechanical trick
/// completion: bidding decisions are never made here.
pub fn auto_play(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, Phase::PlayHand)?;
    while state.phase == Phase::PlayHand {
        let Some(who) = state.current_player else {
            break;
        };
        let Some(&card) = legal_moves(state, who).first() else {
            break;
        };
        play_card(state, who, card)?;
    }
    Ok(())
}
