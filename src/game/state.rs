use super::board::{ColorBoard, Position};
use super::bounds::Bounds;
use super::error::{GameError, MoveRejection};
use super::movegen::get_moves;
use super::pieces::{Color, MAX_PAWNS, Pawn, PawnId, Role, starting_pawns};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

/// An immutable game position. Transitions return a new value.
///
/// Pawns live in a fixed arena indexed by their id, so a state is a small
/// `Copy` value and expanding the search tree never allocates per child
/// beyond the child list itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "GameSnapshot", try_from = "GameSnapshot")]
pub struct GameState {
    bounds: Bounds,
    pawns: [Option<Pawn>; MAX_PAWNS],
    current_player: Color,
}

/// Flat persisted form of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub bounds: Bounds,
    pub pawns: Vec<Pawn>,
    pub current_player: Color,
}

impl From<GameState> for GameSnapshot {
    fn from(state: GameState) -> Self {
        Self {
            bounds: state.bounds,
            pawns: state.pawns().copied().collect(),
            current_player: state.current_player,
        }
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = GameError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        GameState::from_parts(snapshot.bounds, snapshot.pawns, snapshot.current_player)
    }
}

/// Starts a game with the starting pawns of every selected color.
pub fn create_game_state(red: bool, green: bool, yellow: bool, blue: bool) -> Result<GameState, GameError> {
    let players = Color::iter()
        .zip([red, green, yellow, blue])
        .filter_map(|(color, selected)| selected.then_some(color))
        .collect::<Vec<_>>();

    GameState::new(&players)
}

impl GameState {
    pub fn new(players: &[Color]) -> Result<GameState, GameError> {
        let mut players = players.to_vec();
        players.sort_unstable();
        players.dedup();

        if players.len() < 2 {
            return Err(GameError::Setup(players.len()));
        }

        let mut pawns = [None; MAX_PAWNS];
        for &player in &players {
            for pawn in starting_pawns(player) {
                pawns[pawn.id as usize] = Some(pawn);
            }
        }

        let mut state = GameState {
            bounds: Bounds::FULL,
            pawns,
            current_player: Color::Green,
        };

        state.bounds = Bounds::update(state.positions(), &Bounds::FULL);
        state.current_player = state.next_player_after(Color::Green);

        log::debug!(
            "new game for {:?}, bounds {}, {} to move",
            players,
            state.bounds,
            state.current_player
        );

        Ok(state)
    }

    /// Builds a state from its parts, checking every structural invariant.
    pub fn from_parts(bounds: Bounds, pawns: Vec<Pawn>, current_player: Color) -> Result<GameState, GameError> {
        let invalid = |message: String| Err(GameError::InvalidSnapshot(message));

        if !bounds.is_valid() {
            return invalid(format!("bounds {:?} are not a valid region", bounds));
        }

        let mut slots = [None; MAX_PAWNS];
        for pawn in pawns {
            match slots.get_mut(pawn.id as usize) {
                None => return invalid(format!("pawn id {} out of range", pawn.id)),
                Some(Some(_)) => return invalid(format!("pawn id {} used twice", pawn.id)),
                Some(slot) => *slot = Some(pawn),
            }
        }

        let state = GameState {
            bounds,
            pawns: slots,
            current_player,
        };

        if let Err(error) = state.check_invariants() {
            return Err(GameError::InvalidSnapshot(error));
        }

        if state.pawn_count() == 0 {
            return invalid("no pawns left".to_string());
        }

        if !state.has_player(current_player) && !state.is_game_over() {
            return invalid(format!("{} is on turn without any pawns", current_player));
        }

        Ok(state)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Living pawns in id order.
    pub fn pawns(&self) -> impl Iterator<Item = &Pawn> {
        self.pawns.iter().flatten()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.pawns().map(|pawn| pawn.position)
    }

    pub fn pawn_count(&self) -> usize {
        self.pawns().count()
    }

    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(id as usize).and_then(Option::as_ref)
    }

    pub fn pawn_at(&self, position: Position) -> Option<&Pawn> {
        self.pawns().find(|pawn| pawn.position == position)
    }

    pub fn has_player(&self, player: Color) -> bool {
        self.pawns().any(|pawn| pawn.player == player)
    }

    pub fn occupancy(&self) -> ColorBoard {
        let mut board = ColorBoard::default();

        for pawn in self.pawns() {
            board[pawn.position.row as usize][pawn.position.col as usize] = Some(pawn.player);
        }

        board
    }

    /// Distinct colors that still own pawns.
    pub fn get_players(&self) -> Vec<Color> {
        Color::iter().filter(|&color| self.has_player(color)).collect()
    }

    pub fn is_game_over(&self) -> bool {
        let mut alive = [false; Color::COUNT];
        for pawn in self.pawns() {
            alive[pawn.player as usize] = true;
        }

        alive.iter().filter(|&&a| a).count() <= 1
    }

    pub fn winner(&self) -> Option<Color> {
        match self.get_players().as_slice() {
            [winner] => Some(*winner),
            _ => None,
        }
    }

    /// Legal destinations of a pawn; empty for unknown ids.
    pub fn get_pawn_moves(&self, id: PawnId) -> Vec<Position> {
        match self.pawn(id) {
            Some(pawn) => get_moves(pawn, &self.occupancy(), &self.bounds),
            None => Vec::new(),
        }
    }

    /// Every `(pawn, destination)` pair available to the player on turn.
    pub fn legal_moves(&self) -> Vec<(PawnId, Position)> {
        let occupancy = self.occupancy();

        self.pawns()
            .filter(|pawn| pawn.player == self.current_player)
            .flat_map(|pawn| {
                get_moves(pawn, &occupancy, &self.bounds)
                    .into_iter()
                    .map(move |destination| (pawn.id, destination))
            })
            .collect()
    }

    pub fn make_move(&self, id: PawnId, destination: Position) -> Result<GameState, GameError> {
        let pawn = self.pawn(id).ok_or(MoveRejection::UnknownPawn(id))?;

        if pawn.player != self.current_player {
            return Err(MoveRejection::NotOnTurn {
                pawn: id,
                owner: pawn.player,
                player: self.current_player,
            }
            .into());
        }

        if !destination.is_in(&self.get_pawn_moves(id)) {
            return Err(MoveRejection::IllegalDestination { pawn: id, destination }.into());
        }

        Ok(self.apply_move(id, destination))
    }

    /// Every state reachable in one move by the player on turn.
    pub fn get_next(&self) -> Vec<GameState> {
        self.legal_moves()
            .into_iter()
            .map(|(id, destination)| self.apply_move(id, destination))
            .collect()
    }

    // Assumes the move is legal.
    fn apply_move(&self, id: PawnId, destination: Position) -> GameState {
        let mut next = *self;

        if let Some(captured) = next.pawn_at(destination).map(|pawn| pawn.id) {
            next.pawns[captured as usize] = None;
        }

        if let Some(pawn) = next.pawns[id as usize].as_mut() {
            pawn.position = destination;
        }

        next.bounds = Bounds::update(next.positions(), &self.bounds);

        // A knight in the middle of a 3×3 region can never move again, so it
        // is taken off the board unless the game is already decided.
        if next.bounds.is_smallest() && !next.is_game_over() {
            let stuck = next
                .pawn_at(next.bounds.center())
                .filter(|pawn| pawn.role() == Role::Knight)
                .map(|pawn| pawn.id);

            if let Some(stuck) = stuck {
                log::debug!("removing deadlocked pawn {} at {}", stuck, next.bounds.center());
                next.pawns[stuck as usize] = None;
            }
        }

        next.current_player = next.next_player_after(self.current_player);

        debug_assert!(
            next.check_invariants().is_ok(),
            "{:?}",
            next.check_invariants()
        );

        next
    }

    // Requires at least one living pawn; otherwise `player` is returned.
    fn next_player_after(&self, player: Color) -> Color {
        let mut candidate = player.next_in_turn();

        for _ in 1..Color::COUNT {
            if self.has_player(candidate) {
                return candidate;
            }
            candidate = candidate.next_in_turn();
        }

        player
    }

    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if !self.bounds.is_valid() {
            return Err(format!("bounds {:?} are not a valid region", self.bounds));
        }

        let mut occupied = [[false; 8]; 8];

        for (slot, pawn) in self.pawns.iter().enumerate() {
            let Some(pawn) = pawn else { continue };

            if pawn.id as usize != slot {
                return Err(format!("pawn {} stored in slot {}", pawn.id, slot));
            }

            if !self.bounds.contains(pawn.position) {
                return Err(format!("pawn {} at {} is outside {}", pawn.id, pawn.position, self.bounds));
            }

            let square = &mut occupied[pawn.position.row as usize][pawn.position.col as usize];
            if *square {
                return Err(format!("two pawns share {}", pawn.position));
            }
            *square = true;
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<GameState, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }
}
