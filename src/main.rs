//! Pocket Arcade entry point
//!
//! Headless demo driver: exercises both engines through their schedulers
//! against a recording sink and logs what happened. Real hosts embed the
//! library, supply a render sink, and feed frame callbacks and input
//! events from their own event loop.

use std::time::{SystemTime, UNIX_EPOCH};

use pocket_arcade::consts::SNAKE_TICK_INTERVAL;
use pocket_arcade::pong::PongControl;
use pocket_arcade::render::RecordingSink;
use pocket_arcade::snake::Direction;
use pocket_arcade::tasks::{MemoryStorage, TaskList};
use pocket_arcade::{FrameScheduler, PongGame, SnakeGame};

fn main() {
    env_logger::init();
    log::info!("Pocket Arcade (headless demo) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed: {seed}");

    let mut sink = RecordingSink::new();

    // Paddle-ball: five simulated seconds at 60 fps, both players leaning
    // on a key the whole time
    let mut pong = FrameScheduler::continuous(PongGame::new(800.0, 600.0, seed));
    pong.set_active(true);
    pong.engine_mut().set_active(true);
    pong.engine_mut().control(PongControl::LeftUp, true);
    pong.engine_mut().control(PongControl::RightDown, true);

    let mut draw_calls = 0;
    for _ in 0..300 {
        pong.on_frame(1.0 / 60.0, &mut sink);
        draw_calls += sink.take().len();
    }
    let score = pong.engine().state.score;
    log::info!(
        "pong after 5s: score {} - {}, {} draw commands emitted",
        score.left,
        score.right,
        draw_calls
    );

    // Grid-snake: ten simulated seconds, steering a staircase until the
    // wall ends the run
    let mut snake = FrameScheduler::fixed_step(
        SnakeGame::new(400.0, 400.0, seed ^ 0x5eed),
        SNAKE_TICK_INTERVAL,
    );
    snake.set_active(true);
    snake.engine_mut().set_active(true);
    snake.engine_mut().start();

    for frame in 0..600u32 {
        match frame % 40 {
            0 => snake.engine_mut().queue_direction(Direction::Down),
            20 => snake.engine_mut().queue_direction(Direction::Right),
            _ => {}
        }
        snake.on_frame(1.0 / 60.0, &mut sink);
        sink.take();
    }
    let state = &snake.engine().state;
    log::info!(
        "snake after 10s: score {}, length {}, phase {:?}",
        state.score,
        state.body.len(),
        state.phase
    );

    // Task list round trip through the storage contract
    let mut storage = MemoryStorage::default();
    let mut tasks = TaskList::new();
    if let Err(err) = tasks.add("", "2026-08-06", "") {
        log::info!("rejected as expected: {err}");
    }
    let _ = tasks.add("beat the paddle demo", "2026-08-06", "");
    let _ = tasks.add("tune the snake interval", "2026-08-07", "feels slow?");
    tasks.save(&mut storage);
    let reloaded = TaskList::load(&storage);
    log::info!(
        "task store: {} tasks persisted, {} active, {:?} due days in Aug",
        reloaded.len(),
        reloaded.active_count(),
        reloaded.days_with_tasks(2026, 8)
    );
}
