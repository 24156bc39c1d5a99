//! Session router: one screen per game, plus the home menu.
//!
//! Navigating to a game builds a fresh engine for it; navigating away
//! drops the engine, and its scheduler with it, so no timer outlives the
//! game instance it was armed for.

use arcade_core::commands::{InputSnapshot, PlayerCommand};
use arcade_core::enums::GameKind;
use arcade_core::state::GameSnapshot;
use arcade_sim::engine::{GameEngine, SimConfig};

/// Which screen the shell is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// The game-select menu. No engine is live here.
    #[default]
    Home,
    Shooter,
    Moonbase,
    Lander,
}

impl Route {
    /// The game this route hosts, if any.
    pub fn game(self) -> Option<GameKind> {
        match self {
            Route::Home => None,
            Route::Shooter => Some(GameKind::Shooter),
            Route::Moonbase => Some(GameKind::Moonbase),
            Route::Lander => Some(GameKind::Lander),
        }
    }

    /// Parse a route name as given on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Route::Home),
            "shooter" => Some(Route::Shooter),
            "moonbase" => Some(Route::Moonbase),
            "lander" => Some(Route::Lander),
            _ => None,
        }
    }
}

/// One user session: the current route and the engine behind it.
pub struct Session {
    route: Route,
    seed: u64,
    engine: Option<GameEngine>,
}

impl Session {
    /// New session on the home screen. The seed feeds every engine the
    /// session builds.
    pub fn new(seed: u64) -> Self {
        Self {
            route: Route::Home,
            seed,
            engine: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    /// Switch routes. Navigating to the current route is a no-op;
    /// anything else tears down the old game instance.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.route = route;
        self.engine = route.game().map(|kind| {
            GameEngine::new(SimConfig {
                kind,
                seed: self.seed,
            })
        });
    }

    /// Forward a player command to the active engine, if any.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        if let Some(engine) = self.engine.as_mut() {
            engine.queue_command(command);
        }
    }

    /// Advance the active engine one tick. `None` on the home screen.
    pub fn tick(&mut self, input: InputSnapshot) -> Option<GameSnapshot> {
        self.engine.as_mut().map(|engine| engine.tick(input))
    }
}
