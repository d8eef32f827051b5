//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer has finished; hands can be settled.
    Settlement,
    /// Round has been settled; another round may start.
    RoundOver,
    /// No more rounds will be played.
    Finished,
}
