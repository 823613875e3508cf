use log::info;

use super::{BoardEngine, Direction, Outcome};

/// A renderer-independent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Restart,
    Exit,
}

/// Where the game loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Playing,
    Won,
    Lost,
    Exit,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// What an intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The grid changed and a tile was spawned.
    Moved,
    /// The move would not change the grid.
    Blocked,
    /// The intent has no meaning in the current phase.
    Ignored,
    Restarted,
    Exited,
}

/// The game loop state machine shared by every front end.
///
/// `Init -> Playing -> Won | Lost -> Init`, with `Exit` reachable from any
/// phase. All transitions are driven by [`Session::handle`].
#[derive(Debug, Clone)]
pub struct Session {
    engine: BoardEngine,
    phase: Phase,
}

impl Session {
    pub fn new(engine: BoardEngine) -> Self {
        Session {
            engine,
            phase: Phase::Init,
        }
    }

    /// Continue from the engine's current position without resetting it.
    pub fn resume(engine: BoardEngine) -> Self {
        let phase = match engine.outcome() {
            Outcome::Continue => Phase::Playing,
            Outcome::Won => Phase::Won,
            Outcome::LostNoMoves => Phase::Lost,
        };
        Session { engine, phase }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Reset the board if the session is in `Init` and begin playing.
    pub fn start(&mut self) {
        if self.phase == Phase::Init {
            self.engine.reset();
            self.phase = Phase::Playing;
        }
    }

    /// Feed one intent through the state machine.
    pub fn handle(&mut self, intent: Intent) -> Event {
        if self.phase == Phase::Exit {
            return Event::Ignored;
        }

        match intent {
            Intent::Exit => {
                self.phase = Phase::Exit;
                Event::Exited
            }
            Intent::Restart => {
                self.phase = Phase::Init;
                self.start();
                Event::Restarted
            }
            Intent::Move(direction) => {
                self.start();
                if self.phase != Phase::Playing {
                    return Event::Ignored;
                }
                if !self.engine.apply_move(direction) {
                    return Event::Blocked;
                }
                self.phase = match self.engine.outcome() {
                    Outcome::Continue => Phase::Playing,
                    Outcome::Won => {
                        info!(
                            "reached {} with score {}",
                            self.engine.win_target(),
                            self.engine.score()
                        );
                        Phase::Won
                    }
                    Outcome::LostNoMoves => {
                        info!(
                            "no moves left, final score {}\n{}",
                            self.engine.score(),
                            self.engine.grid()
                        );
                        Phase::Lost
                    }
                };
                Event::Moved
            }
        }
    }
}
