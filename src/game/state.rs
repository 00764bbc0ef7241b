use super::player::Player;
use super::win::Outcome;

/// Whose turn it is and whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub whose_turn: Player,
    pub terminal: bool,
}

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Turn(Player),
    GameOver,
}

/// Tracks turn order. Kept in lockstep with the board's outcome by
/// [`TurnController::record`], which is called once per placed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
}

impl TurnController {
    pub fn new() -> Self {
        TurnController {
            state: TurnState {
                whose_turn: Player::Player1, // Player 1 starts
                terminal: false,
            },
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.terminal {
            Phase::GameOver
        } else {
            Phase::Turn(self.state.whose_turn)
        }
    }

    /// Player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.phase() {
            Phase::Turn(player) => Some(player),
            Phase::GameOver => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.terminal
    }

    /// Advance after a successful placement given the board's new outcome.
    pub fn record(&mut self, outcome: Outcome) {
        if self.state.terminal {
            return;
        }
        if outcome.is_terminal() {
            self.state.terminal = true;
        } else {
            self.state.whose_turn = self.state.whose_turn.other();
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
