//! Grid-snake game state
//!
//! Discrete simulation on a `cols x rows` cell grid. The body is a deque
//! with the head at the front; all cells are pairwise distinct at the start
//! of every tick. Food placement draws from the state's own seeded RNG.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// One grid cell. Signed so a candidate head can sit out of range before
/// the bounds check rejects it; in-range cells satisfy `[0,cols)x[0,rows)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Travel direction, one cell per tick. The grid is y-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Coarse lifecycle of a snake session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakePhase {
    /// Laid out, waiting for a start
    Idle,
    /// Ticking
    Running,
    /// Ended; only `start`/`reset` leave this phase
    GameOver,
}

/// Complete grid-snake state
#[derive(Debug, Clone)]
pub struct SnakeState {
    pub cols: i32,
    pub rows: i32,
    /// Head at the front, tail at the back
    pub body: VecDeque<Cell>,
    /// Direction applied this tick
    pub dir: Direction,
    /// Queued by input, adopted at the start of the next tick; never the
    /// exact reverse of `dir`
    pub(crate) pending: Direction,
    /// `None` only when the board is full
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: SnakePhase,
    pub(crate) rng: Pcg32,
}

impl SnakeState {
    /// Create a state sized from the viewport, laid out and idle
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let (cols, rows) = grid_from_viewport(width, height);
        let mut state = Self {
            cols,
            rows,
            body: VecDeque::new(),
            dir: Direction::Right,
            pending: Direction::Right,
            food: None,
            score: 0,
            phase: SnakePhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset(false);
        state
    }

    /// Back to the starting layout: score zeroed, a 3-cell body in the
    /// grid's left-center heading right, fresh food. Ends `Idle`, or
    /// `Running` when `keep_running`.
    pub fn reset(&mut self, keep_running: bool) {
        self.score = 0;
        self.dir = Direction::Right;
        self.pending = Direction::Right;
        self.body.clear();
        let head = Cell::new(self.cols / 4 + 2, self.rows / 2);
        for i in 0..SNAKE_START_LEN as i32 {
            self.body.push_back(Cell::new(head.x - i, head.y));
        }
        self.place_food();
        self.phase = if keep_running {
            SnakePhase::Running
        } else {
            SnakePhase::Idle
        };
    }

    /// Queue a direction change for the next tick. The exact reverse of the
    /// *current* direction is rejected - the head must not fold back into
    /// its own neck - and repeating the current direction is a no-op.
    pub fn queue_direction(&mut self, requested: Direction) {
        if requested == self.dir || requested == self.dir.opposite() {
            return;
        }
        self.pending = requested;
    }

    /// Begin play. From `GameOver` this is a full reset straight into
    /// `Running`; from `Idle` it just starts; while `Running` it is a no-op.
    pub fn start(&mut self) {
        match self.phase {
            SnakePhase::GameOver => self.reset(true),
            SnakePhase::Idle => self.phase = SnakePhase::Running,
            SnakePhase::Running => {}
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.iter().any(|&c| c == cell)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    /// Choose a new food cell not covered by the body.
    ///
    /// Bounded: a handful of uniform draws, then an exhaustive scan of the
    /// free cells. Returns false when the board is full, leaving `food`
    /// unset - the caller treats that as a terminal condition.
    pub(crate) fn place_food(&mut self) -> bool {
        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let cell = Cell::new(
                self.rng.random_range(0..self.cols),
                self.rng.random_range(0..self.rows),
            );
            if !self.contains(cell) {
                self.food = Some(cell);
                return true;
            }
        }

        // Dense board: sampling keeps hitting the body, so enumerate
        let free: Vec<Cell> = (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| Cell::new(x, y)))
            .filter(|&c| !self.contains(c))
            .collect();

        if free.is_empty() {
            self.food = None;
            log::info!("board full: no free cell for food");
            return false;
        }

        log::debug!("food placement fell back to scan, {} cells free", free.len());
        self.food = Some(free[self.rng.random_range(0..free.len())]);
        true
    }

    /// Recompute the grid from a new viewport.
    ///
    /// While `Running` the game ends defensively if any body or food cell
    /// falls outside the new bounds (cells are never teleported). `Idle`
    /// recomputes the starting layout; `GameOver` leaves the dead body in
    /// place for the overlay.
    pub fn resize(&mut self, width: f32, height: f32) {
        let (cols, rows) = grid_from_viewport(width, height);
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;

        match self.phase {
            SnakePhase::Running => {
                let clipped = self.body.iter().any(|&c| !self.in_bounds(c))
                    || self.food.is_some_and(|f| !self.in_bounds(f));
                if clipped {
                    self.phase = SnakePhase::GameOver;
                    log::info!("resize clipped the running game, ending it");
                }
            }
            SnakePhase::Idle => self.reset(false),
            SnakePhase::GameOver => {}
        }
    }
}

/// Derive grid dimensions from pixel dimensions, clamped to sane minimums
fn grid_from_viewport(width: f32, height: f32) -> (i32, i32) {
    let cols = ((width.max(0.0) / CELL_SIZE) as i32).max(MIN_GRID_COLS);
    let rows = ((height.max(0.0) / CELL_SIZE) as i32).max(MIN_GRID_ROWS);
    (cols, rows)
}
