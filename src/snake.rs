use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid cell in logical (row, column) coordinates.
///
/// Row 0 is the top wall row; rows grow downward, columns grow rightward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                row: self.row - 1,
                col: self.col,
            },
            Direction::Down => Self {
                row: self.row + 1,
                col: self.col,
            },
            Direction::Left => Self {
                row: self.row,
                col: self.col - 1,
            },
            Direction::Right => Self {
                row: self.row,
                col: self.col + 1,
            },
        }
    }

    /// Returns true when the position lies strictly inside the wall ring.
    #[must_use]
    pub fn is_interior(self, grid: GridSize) -> bool {
        self.row > 0
            && self.col > 0
            && self.row < i32::from(grid.height) - 1
            && self.col < i32::from(grid.width) - 1
    }
}

/// Ordered snake body: a ring buffer of cells with the head at the front.
///
/// Always holds at least one segment. Each advance reuses the vacated tail
/// slot for the new head, so steady-state movement allocates nothing.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the whole body one cell in `direction`.
    ///
    /// Every segment takes the position of its head-ward neighbour and the
    /// head advances into the adjacent cell; the old tail cell is vacated.
    pub fn advance(&mut self, direction: Direction) {
        let next_head = self.head().step(direction);
        self.body.push_front(next_head);
        let _ = self.body.pop_back();
    }

    /// Grows by duplicating the tail segment in place.
    ///
    /// The duplicate occupies the same cell as the tail this tick and
    /// diverges on the next advance. Returns `false` without growing when the
    /// body is already at `max_length`.
    pub fn grow_tail(&mut self, max_length: usize) -> bool {
        if self.body.len() >= max_length {
            return false;
        }

        let tail = *self
            .body
            .back()
            .expect("snake body must always contain at least one segment");
        self.body.push_back(tail);
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
