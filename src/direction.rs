use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The four canonical step vectors. The remaining compass directions are
/// covered by writing a word backward along one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Ray {
    Right,
    Down,
    DiagDownRight,
    DiagUpRight,
}

impl Ray {
    /// `(d_row, d_col)`
    pub fn step(self) -> (isize, isize) {
        match self {
            Ray::Right => (0, 1),
            Ray::Down => (1, 0),
            Ray::DiagDownRight => (1, 1),
            Ray::DiagUpRight => (-1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub ray: Ray,
    pub is_backward: bool,
}

impl Direction {
    pub fn new(ray: Ray, is_backward: bool) -> Self {
        Self { ray, is_backward }
    }

    pub fn d_row(&self) -> isize {
        self.ray.step().0
    }

    pub fn d_col(&self) -> isize {
        self.ray.step().1
    }

    /// Forward rays first, then (if enabled) the same rays reversed.
    pub fn catalog(allow_backwards: bool) -> Vec<Direction> {
        let mut dirs: Vec<Direction> = Ray::iter().map(|r| Direction::new(r, false)).collect();
        if allow_backwards {
            dirs.extend(Ray::iter().map(|r| Direction::new(r, true)));
        }
        dirs
    }

    /// The full 8-direction scan space.
    pub fn all() -> Vec<Direction> {
        Self::catalog(true)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_backward {
            write!(f, "{} (reversed)", self.ray)
        } else {
            write!(f, "{}", self.ray)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(Direction::catalog(false).len(), 4);
        assert_eq!(Direction::catalog(true).len(), 8);
        assert!(Direction::catalog(false).iter().all(|d| !d.is_backward));
    }

    #[test]
    fn reversed_variants_share_vectors() {
        let all = Direction::all();
        for (fwd, back) in all[..4].iter().zip(&all[4..]) {
            assert_eq!(fwd.ray, back.ray);
            assert!(back.is_backward);
        }
    }

    #[test]
    fn ray_labels() {
        assert_eq!(Ray::DiagUpRight.to_string(), "diag_up_right");
        assert_eq!(Direction::new(Ray::Right, true).to_string(), "right (reversed)");
    }
}
