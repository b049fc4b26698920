use crate::game::{Color, GameState, Role};
use strum::EnumCount;

pub const KNIGHT_VALUE: f32 = 101.0;
pub const BISHOP_VALUE: f32 = 102.0;
pub const ROOK_VALUE: f32 = 103.0;
pub const QUEEN_VALUE: f32 = 105.0;

/// Share of the total material held by each player, indexed by `Color`.
/// The components sum to 1.
pub type Score = [f32; Color::COUNT];

pub fn get_role_value(role: Role) -> f32 {
    match role {
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
    }
}

pub fn evaluate_material(state: &GameState) -> [f32; Color::COUNT] {
    let mut material = [0.0; Color::COUNT];

    for pawn in state.pawns() {
        material[pawn.player as usize] += get_role_value(pawn.role());
    }

    material
}

pub fn evaluate(state: &GameState) -> Score {
    let material = evaluate_material(state);
    let total: f32 = material.iter().sum();

    if total <= 0.0 {
        return [0.0; Color::COUNT];
    }

    material.map(|value| value / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::create_game_state;

    #[test]
    fn symmetric_start_is_even() {
        let state = create_game_state(true, true, true, true).unwrap();
        let score = evaluate(&state);

        for value in score {
            assert!((value - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn absent_players_score_zero() {
        let state = create_game_state(true, false, true, false).unwrap();
        let score = evaluate(&state);

        assert_eq!(score[Color::Green as usize], 0.0);
        assert_eq!(score[Color::Blue as usize], 0.0);
        assert!((score.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn material_follows_current_roles() {
        let state = create_game_state(true, true, true, true).unwrap();
        let material = evaluate_material(&state);

        // two knights and two bishops each
        assert_eq!(material[Color::Red as usize], 2.0 * KNIGHT_VALUE + 2.0 * BISHOP_VALUE);
    }
}
