use std::ops::Add;

/// A cell coordinate, `row` first like the grid storage.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: isize,
    pub col: isize,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

/// wraps `n` into `0..len`, so that `-1` lands on the last index.
pub fn wrap(n: isize, len: usize) -> usize {
    let len = len as isize;
    (((n % len) + len) % len) as usize
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(0, 8), 0);
    assert_eq!(wrap(7, 8), 7);
    assert_eq!(wrap(8, 8), 0);
    assert_eq!(wrap(-1, 8), 7);
    assert_eq!(wrap(-9, 8), 7);
    assert_eq!(wrap(17, 8), 1);
}

#[test]
fn test_pos_add() {
    assert_eq!(pos!(1, 2) + pos!(-1, 3), pos!(0, 5));
}
