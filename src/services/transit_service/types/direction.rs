/// MBTA `direction_id`; indexes a route's `direction_names`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Zero,
    One,
}

impl Direction {
    pub fn index(self) -> usize {
        match self {
            Direction::Zero => 0,
            Direction::One => 1,
        }
    }

    pub fn as_filter(self) -> &'static str {
        match self {
            Direction::Zero => "0",
            Direction::One => "1",
        }
    }
}
