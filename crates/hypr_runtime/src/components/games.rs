use std::time::Duration;

use arcade::{Direction, Position, SnakeGame, TronGame, Winner, TICK_INTERVAL_MS};

use super::*;

/// Pixel size of one Tron arena cell.
const TRON_CELL_PX: i32 = 15;

// Escape leaves a game at any time, including after game over, and must win
// against every other handler on the page.
fn exit_or_steer(ev: &web_sys::KeyboardEvent, on_exit: Callback<()>) -> Option<Direction> {
    if ev.key() == "Escape" {
        ev.prevent_default();
        ev.stop_immediate_propagation();
        on_exit.call(());
        return None;
    }
    match ev.key().to_lowercase().as_str() {
        "arrowup" | "w" => Some(Direction::Up),
        "arrowdown" | "s" => Some(Direction::Down),
        "arrowleft" | "a" => Some(Direction::Left),
        "arrowright" | "d" => Some(Direction::Right),
        _ => None,
    }
}

#[component]
/// Snake: 20x20 grid redrawn from the engine snapshot every tick.
pub(super) fn SnakeView(on_exit: Callback<()>) -> impl IntoView {
    let game = create_rw_signal(SnakeGame::new(platform_host::next_monotonic_timestamp_ms()));

    if let Ok(interval) = set_interval_with_handle(
        move || game.update(SnakeGame::tick),
        Duration::from_millis(TICK_INTERVAL_MS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let Some(heading) = exit_or_steer(&ev, on_exit) else {
            return;
        };
        if game.with_untracked(SnakeGame::is_game_over) {
            return;
        }
        game.update(|g| g.set_heading(heading));
    });
    on_cleanup(move || key_listener.remove());

    view! {
        <div class="snake-game">
            <div class="snake-header">
                <h2>"TERMINAL SNAKE"</h2>
                <p>{move || format!("SCORE: {} | ESC TO EXIT", game.get().score())}</p>
                <Show when=move || game.get().is_game_over() fallback=|| ()>
                    <p class="snake-game-over">"GAME OVER! PRESS ESC"</p>
                </Show>
            </div>
            <div class="snake-grid">
                {move || {
                    let g = game.get();
                    let size = g.grid_size();
                    (0..size * size)
                        .map(|index| {
                            let cell = Position::new(index % size, index / size);
                            let class = if g.body().contains(&cell) {
                                "snake-cell body"
                            } else if g.food() == cell {
                                "snake-cell food"
                            } else {
                                "snake-cell"
                            };
                            view! { <div class=class></div> }
                        })
                        .collect_view()
                }}
            </div>
            <p class="snake-help">
                "Use Arrow Keys or WASD to move. Eat the red pixels to grow. Don't hit the walls or yourself!"
            </p>
        </div>
    }
}

#[component]
/// Tron: trails drawn as absolutely positioned cells over a fixed arena.
pub(super) fn TronView(on_exit: Callback<()>) -> impl IntoView {
    let game = create_rw_signal(TronGame::new());

    if let Ok(interval) = set_interval_with_handle(
        move || game.update(TronGame::tick),
        Duration::from_millis(TICK_INTERVAL_MS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let Some(heading) = exit_or_steer(&ev, on_exit) else {
            return;
        };
        if game.with_untracked(TronGame::is_game_over) {
            return;
        }
        game.update(|g| g.steer(heading));
    });
    on_cleanup(move || key_listener.remove());

    let banner = move || match game.get().winner() {
        Some(Winner::Player) => "YOU WIN! Press ESC to exit".to_string(),
        Some(Winner::Opponent) => "AI WINS! Press ESC to exit".to_string(),
        None => "[TRON] LIGHT CYCLE BATTLE | Arrow Keys / WASD | ESC to Exit".to_string(),
    };

    let arena_px = move || game.with_untracked(|g| g.grid_size()) * TRON_CELL_PX;

    view! {
        <div class="tron-game">
            <div class="tron-banner">{banner}</div>
            <div
                class="tron-arena"
                style=move || format!("width:{0}px;height:{0}px;", arena_px())
            >
                {move || {
                    let g = game.get();
                    let segment = |cell: &Position, class: &'static str| {
                        view! {
                            <div
                                class=class
                                style=format!(
                                    "left:{}px;top:{}px;width:{}px;height:{}px;",
                                    cell.x * TRON_CELL_PX,
                                    cell.y * TRON_CELL_PX,
                                    TRON_CELL_PX,
                                    TRON_CELL_PX,
                                )
                            ></div>
                        }
                    };
                    g.player_trail()
                        .iter()
                        .map(|cell| segment(cell, "tron-cell player"))
                        .chain(
                            g.opponent_trail().iter().map(|cell| segment(cell, "tron-cell opponent")),
                        )
                        .collect_view()
                }}
            </div>
        </div>
    }
}
