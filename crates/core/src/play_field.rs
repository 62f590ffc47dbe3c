//! Play field module - the snake simulation
//!
//! `PlayField` owns all authoritative game state: the snake body, the travel
//! direction, the food voxel, the projected side, and the game-over flag. One
//! call to [`PlayField::update`] advances the simulation by exactly one tick;
//! [`PlayField::render_frame`] produces the textual 2D projection of the
//! current state.
//!
//! The simulation never fails at runtime. Self-collision is terminal state
//! (`game_over`), not an error, and `update` becomes a no-op once the flag is
//! set. The only fallible operation is construction with a non-positive
//! dimension.

use std::collections::VecDeque;
use std::fmt;
use std::fmt::Write as _;

use crate::grid::VoxelGrid;
use crate::projection::{project, Frame};
use crate::rng::SimpleRng;
use crate::types::{CellState, Direction, Side, Voxel, INITIAL_SNAKE_LEN};

/// Construction error: the requested cube side length was not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDimension(pub i16);

impl fmt::Display for InvalidDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "play field dimension must be positive, got {}", self.0)
    }
}

impl std::error::Error for InvalidDimension {}

/// The cubic snake play field.
///
/// State transitions happen only through [`update`](Self::update),
/// [`set_direction`](Self::set_direction) and [`set_side`](Self::set_side);
/// everything else is read-only observation.
#[derive(Debug, Clone)]
pub struct PlayField {
    dimension: i16,
    /// Body segments, tail at the front, head at the back.
    snake: VecDeque<Voxel>,
    direction: Direction,
    side: Side,
    food: Voxel,
    game_over: bool,
    rng: SimpleRng,
}

impl PlayField {
    /// Create a play field of side `dimension`, seeded for food placement.
    ///
    /// The snake spawns as a vertical run of segments through the grid
    /// center with its head at the exact center, already moving right.
    pub fn new(dimension: i16, seed: u32) -> Result<Self, InvalidDimension> {
        if dimension <= 0 {
            return Err(InvalidDimension(dimension));
        }

        let mut field = Self {
            dimension,
            snake: VecDeque::new(),
            direction: Direction::Right,
            side: Side::FrontZx,
            food: Voxel::new(0, 0, 0),
            game_over: false,
            rng: SimpleRng::new(seed),
        };

        field.seed_snake();
        field.place_food();
        Ok(field)
    }

    fn seed_snake(&mut self) {
        let center = self.dimension / 2;

        // Tail first, head last. Seed coordinates wrap like normal motion;
        // fields smaller than the nominal length get a shorter snake so the
        // segments stay unique.
        let len = INITIAL_SNAKE_LEN.min(self.dimension as usize);
        for offset in (0..len as i16).rev() {
            self.snake.push_back(Voxel::new(
                center,
                (center - offset).rem_euclid(self.dimension),
                center,
            ));
        }
    }

    /// Side length of the cubic field.
    pub fn dimension(&self) -> i16 {
        self.dimension
    }

    /// Current travel direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cube face currently selected for projection.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Current food location.
    pub fn food(&self) -> Voxel {
        self.food
    }

    /// Whether the snake has collided with itself. Never reset.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Number of body segments.
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// The head segment (most recently entered voxel).
    pub fn head(&self) -> Voxel {
        *self.snake.back().expect("snake is never empty")
    }

    /// Body segments in tail-to-head order.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Voxel> + '_ {
        self.snake.iter().copied()
    }

    /// Request a direction change, effective on the next tick.
    ///
    /// An exact reversal of the current direction is silently ignored: with
    /// any body behind the head, reversing would collide with the second
    /// segment immediately. Every other value, including the current
    /// direction, is accepted.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite_of(direction) {
            return;
        }
        self.direction = direction;
    }

    /// Select the cube face to project. Purely visual, never filtered.
    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    /// Pin the food to a specific voxel.
    ///
    /// Bypasses random placement; intended for tests and scripted scenarios
    /// that must not depend on the RNG stream.
    pub fn set_food(&mut self, voxel: Voxel) {
        self.food = voxel;
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Moves the head one voxel along the current direction, wrapping
    /// toroidally at the field boundary. Eating food grows the snake by one
    /// segment and re-places the food; otherwise the tail segment is dropped.
    /// A head landing on any body segment sets `game_over` and leaves the
    /// snake and food untouched; once the flag is set, `update` is a no-op.
    pub fn update(&mut self) {
        if self.game_over {
            return;
        }

        let new_head = self.step_from(self.head());

        if self.snake.contains(&new_head) {
            self.game_over = true;
            return;
        }

        self.snake.push_back(new_head);

        if new_head == self.food {
            self.place_food();
        } else {
            self.snake.pop_front();
        }
    }

    fn step_from(&self, head: Voxel) -> Voxel {
        let (dx, dy, dz) = self.direction.delta();
        Voxel::new(
            (head.x + dx).rem_euclid(self.dimension),
            (head.y + dy).rem_euclid(self.dimension),
            (head.z + dz).rem_euclid(self.dimension),
        )
    }

    /// Place food on a free voxel of the mid-depth plane.
    ///
    /// Random probing is bounded; a nearly full field falls back to a
    /// deterministic scan (mid-plane first, then the rest of the cube) so
    /// placement always terminates. A snake covering every voxel leaves
    /// nothing to place and the food stays where it was.
    fn place_food(&mut self) {
        let plane = self.dimension / 2;

        let budget = 4 * (self.dimension as u32).pow(2);
        for _ in 0..budget {
            let candidate = Voxel::new(
                self.rng.next_coord(self.dimension),
                self.rng.next_coord(self.dimension),
                plane,
            );
            if !self.snake.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }

        if let Some(free) = self.first_free_voxel(plane) {
            self.food = free;
        }
    }

    fn first_free_voxel(&self, plane: i16) -> Option<Voxel> {
        for y in 0..self.dimension {
            for x in 0..self.dimension {
                let candidate = Voxel::new(x, y, plane);
                if !self.snake.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }
        for z in 0..self.dimension {
            if z == plane {
                continue;
            }
            for y in 0..self.dimension {
                for x in 0..self.dimension {
                    let candidate = Voxel::new(x, y, z);
                    if !self.snake.contains(&candidate) {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }

    /// Project the current state onto the active side.
    ///
    /// The voxel grid is a derived view: it is rebuilt from the snake and
    /// food positions on every call, so the projection is a pure function of
    /// the current state.
    pub fn frame(&self) -> Frame {
        let mut grid = VoxelGrid::new(self.dimension);
        self.rebuild_grid(&mut grid);
        project(&grid, self.side)
    }

    /// Render the active side as text: `D` rows of `D` two-character glyphs.
    pub fn render_frame(&self) -> String {
        self.frame().to_text()
    }

    fn rebuild_grid(&self, grid: &mut VoxelGrid) {
        grid.clear();

        // Snake first; the food write below overwrites a coincident cell, so
        // food keeps visual priority.
        for &segment in &self.snake {
            grid.set(segment, CellState::SnakeBody);
        }
        grid.set(self.food, CellState::Food);
    }

    /// One `(x: X, y: Y, z: Z)` line per segment, head to tail.
    pub fn snake_report(&self) -> String {
        let mut out = String::new();
        for segment in self.snake.iter().rev() {
            let _ = writeln!(out, "(x: {}, y: {}, z: {})", segment.x, segment.y, segment.z);
        }
        out
    }
}
