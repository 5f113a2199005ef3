use crate::domain::card::Card;
use crate::domain::player::{TurnAction, TurnDecision};

/// Проверить ответ игрока на ход против того, что знает дилер.
///
/// `pile` – стопка борда до хода, `held` – карты, которые дилер раздал
/// игроку и которые тот ещё не сыграл. Ошибка – текст для `EngineError::Protocol`.
pub fn validate_decision(
    board: &Card,
    pile: &[Card],
    held: &[Card],
    decision: &TurnDecision,
) -> Result<(), String> {
    let hand_size_before = held.len();
    match decision.action {
        TurnAction::Played => {
            let card = decision.board_card;
            if !card.playable_against(board) {
                return Err(format!("played {card} which does not match board {board}"));
            }
            if pile.contains(&card) {
                return Err(format!("played {card} which is already on the pile"));
            }
            if !held.contains(&card) {
                return Err(format!("played {card} which is not in their hand"));
            }
            if decision.points != card.score() {
                return Err(format!(
                    "claimed {} points for {card} worth {}",
                    decision.points,
                    card.score()
                ));
            }
            if decision.hand_size_after + 1 != hand_size_before {
                return Err(format!(
                    "hand went from {hand_size_before} to {} after a play",
                    decision.hand_size_after
                ));
            }
        }
        TurnAction::Passed => {
            if decision.board_card != *board {
                return Err(format!(
                    "passed but moved board from {board} to {}",
                    decision.board_card
                ));
            }
            if decision.points != 0 {
                return Err(format!("passed but claimed {} points", decision.points));
            }
            if decision.hand_size_after != hand_size_before {
                return Err(format!(
                    "hand went from {hand_size_before} to {} after a pass",
                    decision.hand_size_after
                ));
            }
        }
    }

    if decision.hand_empty != (decision.hand_size_after == 0) {
        return Err(format!(
            "hand_empty={} with {} cards left",
            decision.hand_empty, decision.hand_size_after
        ));
    }

    Ok(())
}
