use ahash::AHashMap;

/// Compass facing. `Up` moves towards negative y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn turn_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSignal {
    Left,
    Right,
}

impl TurnSignal {
    /// 0 turns left; any other value turns right.
    pub fn from_output(value: i64) -> Self {
        if value == 0 {
            TurnSignal::Left
        } else {
            TurnSignal::Right
        }
    }
}

/// Inclusive bounding box of written cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

/// Sparse grid plus the position and facing of the robot walking over it.
#[derive(Debug, Clone, Default)]
pub struct GridWalker {
    cells: AHashMap<(i64, i64), i64>,
    position: (i64, i64),
    facing: Direction,
}

impl GridWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: i64, y: i64, facing: Direction) -> Self {
        Self {
            cells: AHashMap::new(),
            position: (x, y),
            facing,
        }
    }

    pub fn position(&self) -> (i64, i64) {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Value of the current cell, `None` if it was never written.
    pub fn read(&self) -> Option<i64> {
        self.cell(self.position.0, self.position.1)
    }

    pub fn cell(&self, x: i64, y: i64) -> Option<i64> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn write(&mut self, value: i64) {
        self.cells.insert(self.position, value);
    }

    pub fn turn(&mut self, signal: TurnSignal) {
        self.facing = match signal {
            TurnSignal::Left => self.facing.turn_left(),
            TurnSignal::Right => self.facing.turn_right(),
        };
    }

    pub fn move_forward(&mut self) {
        let (dx, dy) = self.facing.delta();
        self.position = (self.position.0 + dx, self.position.1 + dy);
    }

    /// Number of distinct cells written at least once.
    pub fn painted_count(&self) -> usize {
        self.cells.len()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut keys = self.cells.keys();
        let &(x, y) = keys.next()?;
        let start = Bounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };
        Some(keys.fold(start, |b, &(x, y)| Bounds {
            min_x: b.min_x.min(x),
            max_x: b.max_x.max(x),
            min_y: b.min_y.min(y),
            max_y: b.max_y.max(y),
        }))
    }

    /// Dense copy of the written area, top row first.
    pub fn cells_as_rows(&self) -> Vec<Vec<Option<i64>>> {
        let Some(bounds) = self.bounds() else {
            return Vec::new();
        };
        (bounds.min_y..=bounds.max_y)
            .map(|y| {
                (bounds.min_x..=bounds.max_x)
                    .map(|x| self.cell(x, y))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_turns_return_to_start() {
        let mut dir = Direction::Up;
        for _ in 0..4 {
            dir = dir.turn_right();
        }
        assert_eq!(dir, Direction::Up);
        assert_eq!(Direction::Up.turn_left(), Direction::Left);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
    }

    #[test]
    fn walker_moves_in_facing_direction() {
        let mut walker = GridWalker::new();
        walker.move_forward();
        assert_eq!(walker.position(), (0, -1), "up decreases y");
        walker.turn(TurnSignal::Right);
        walker.move_forward();
        assert_eq!(walker.position(), (1, -1));
        walker.turn(TurnSignal::from_output(0));
        assert_eq!(walker.facing(), Direction::Up);
    }

    #[test]
    fn writes_are_counted_once_per_cell() {
        let mut walker = GridWalker::new();
        assert_eq!(walker.read(), None);
        walker.write(1);
        walker.write(0);
        assert_eq!(walker.read(), Some(0));
        walker.move_forward();
        walker.write(1);
        assert_eq!(walker.painted_count(), 2);
    }

    #[test]
    fn rows_cover_bounding_box() {
        let mut walker = GridWalker::at(2, 0, Direction::Right);
        walker.write(1);
        walker.move_forward();
        walker.turn(TurnSignal::Right);
        walker.move_forward();
        walker.write(0);
        assert_eq!(
            walker.bounds(),
            Some(Bounds {
                min_x: 2,
                max_x: 3,
                min_y: 0,
                max_y: 1
            })
        );
        assert_eq!(
            walker.cells_as_rows(),
            vec![vec![Some(1), None], vec![None, Some(0)]]
        );
    }

    #[test]
    fn empty_grid_has_no_bounds() {
        let walker = GridWalker::new();
        assert_eq!(walker.bounds(), None);
        assert!(walker.cells_as_rows().is_empty());
    }
}
