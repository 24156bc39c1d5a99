//! Headless smoke runner: drives one game in the game loop thread and
//! prints snapshot JSON lines until the run ends or the tick budget runs
//! out.

use std::env;
use std::process::ExitCode;
use std::sync::mpsc;

use arcade_app::game_loop;
use arcade_app::session::Route;
use arcade_app::state::{AppState, GameLoopCommand};
use arcade_core::commands::PlayerCommand;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let route = args.next().unwrap_or_else(|| "shooter".into());
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(300);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let Some(route) = Route::parse(&route) else {
        eprintln!("usage: arcade-app [shooter|moonbase|lander] [ticks] [seed]");
        return ExitCode::from(2);
    };

    let state = AppState::new();
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(snapshot_tx, state.latest_snapshot.clone(), seed);

    let started = cmd_tx
        .send(GameLoopCommand::Navigate(route))
        .and_then(|_| cmd_tx.send(GameLoopCommand::Player(PlayerCommand::StartGame)));
    if started.is_err() {
        eprintln!("game loop thread is gone");
        return ExitCode::FAILURE;
    }

    for _ in 0..ticks {
        let Ok(snapshot) = snapshot_rx.recv() else {
            break;
        };
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("snapshot serialization failed: {err}");
                break;
            }
        }
        if snapshot.game_over || snapshot.game_won {
            break;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    drop(snapshot_rx);
    let _ = handle.join();
    ExitCode::SUCCESS
}
