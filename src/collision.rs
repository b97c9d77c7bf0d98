use crate::config::GridSize;
use crate::snake::Snake;

/// What the snake's head ran into, if anything.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    /// Head on or beyond the wall ring.
    Wall,
    /// Head on another body segment.
    Body,
}

/// Classifies the head position after a movement step.
///
/// The wall test runs first: a head that is simultaneously on the ring and on
/// a body segment reports `Wall`, never `Body`.
#[must_use]
pub fn classify(snake: &Snake, grid: GridSize) -> Option<Collision> {
    if !snake.head().is_interior(grid) {
        return Some(Collision::Wall);
    }

    if snake.head_overlaps_body() {
        return Some(Collision::Body);
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::{classify, Collision};

    const GRID: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn interior_head_with_clear_body_is_no_collision() {
        let snake = Snake::from_segments(vec![
            Position { row: 5, col: 6 },
            Position { row: 5, col: 5 },
        ]);

        assert_eq!(classify(&snake, GRID), None);
    }

    #[test]
    fn head_on_the_top_wall_row_is_a_wall_collision() {
        let snake = Snake::new(Position { row: 0, col: 4 });

        assert_eq!(classify(&snake, GRID), Some(Collision::Wall));
    }

    #[test]
    fn every_wall_edge_counts_as_a_collision() {
        let on_ring = [
            Position { row: 19, col: 4 },
            Position { row: 4, col: 0 },
            Position { row: 4, col: 19 },
            Position { row: -1, col: 4 },
            Position { row: 4, col: 25 },
        ];

        for head in on_ring {
            let snake = Snake::new(head);
            assert_eq!(classify(&snake, GRID), Some(Collision::Wall), "{head:?}");
        }
    }

    #[test]
    fn head_on_a_body_segment_is_a_body_collision() {
        // Head has wrapped around onto its own third segment.
        let snake = Snake::from_segments(vec![
            Position { row: 3, col: 3 },
            Position { row: 3, col: 4 },
            Position { row: 3, col: 3 },
            Position { row: 3, col: 2 },
        ]);

        assert_eq!(classify(&snake, GRID), Some(Collision::Body));
    }

    #[test]
    fn wall_takes_precedence_over_body_overlap() {
        let snake = Snake::from_segments(vec![
            Position { row: 0, col: 4 },
            Position { row: 1, col: 4 },
            Position { row: 0, col: 4 },
        ]);

        assert_eq!(classify(&snake, GRID), Some(Collision::Wall));
    }
}
