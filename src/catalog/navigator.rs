//! Circular cursor over a fixed-size table.

/// Relative movement requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Step::Forward => 1,
            Step::Backward => -1,
        }
    }
}

/// Cursor over a catalog of `N` items arranged in a ring.
///
/// The position is always a valid index: movement uses Euclidean remainder
/// over `N`, so any delta lands back in `0..N`. `N == 0` is rejected at
/// compile time, which keeps [`Navigator::current`] total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator<'a, T, const N: usize> {
    catalog: &'a [T; N],
    position: usize,
}

impl<'a, T, const N: usize> Navigator<'a, T, N> {
    const NON_EMPTY: () = assert!(N > 0, "catalog must contain at least one entry");

    /// Creates a navigator positioned on the first entry.
    pub fn new(catalog: &'a [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            catalog,
            position: 0,
        }
    }

    pub fn current(&self) -> &'a T {
        &self.catalog[self.position]
    }

    pub fn next(&mut self) -> &'a T {
        self.step(Step::Forward.delta())
    }

    pub fn previous(&mut self) -> &'a T {
        self.step(Step::Backward.delta())
    }

    pub fn go(&mut self, step: Step) -> &'a T {
        self.step(step.delta())
    }

    /// Moves by `delta` positions around the ring and returns the new entry.
    pub fn step(&mut self, delta: isize) -> &'a T {
        // Reduce first so the addition cannot overflow.
        let shift = delta.rem_euclid(N as isize) as usize;
        self.position = (self.position + shift) % N;
        self.current()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIX: [u8; 6] = [10, 11, 12, 13, 14, 15];

    fn at(position: usize) -> Navigator<'static, u8, 6> {
        let mut nav = Navigator::new(&SIX);
        nav.step(position as isize);
        nav
    }

    #[test]
    fn starts_at_zero() {
        let nav = Navigator::new(&SIX);
        assert_eq!(nav.position(), 0);
        assert_eq!(*nav.current(), 10);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut nav = at(5);
        assert_eq!(*nav.next(), 10);
        assert_eq!(nav.position(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut nav = at(0);
        assert_eq!(*nav.previous(), 15);
        assert_eq!(nav.position(), 5);
    }

    #[test]
    fn scripted_walk_matches_ring_order() {
        let mut nav = Navigator::new(&SIX);
        let mut seen = Vec::new();
        nav.next();
        seen.push(nav.position());
        nav.next();
        seen.push(nav.position());
        nav.previous();
        seen.push(nav.position());
        nav.previous();
        seen.push(nav.position());
        nav.previous();
        seen.push(nav.position());
        nav.next();
        seen.push(nav.position());
        assert_eq!(seen, vec![1, 2, 1, 0, 5, 0]);
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for p in 0..6 {
            let mut nav = at(p);
            nav.next();
            nav.previous();
            assert_eq!(nav.position(), p);

            nav.previous();
            nav.next();
            assert_eq!(nav.position(), p);
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for p in 0..6 {
            let mut nav = at(p);
            for _ in 0..6 {
                nav.next();
            }
            assert_eq!(nav.position(), p);
        }
    }

    #[test]
    fn large_deltas_stay_in_range() {
        let mut nav = Navigator::new(&SIX);
        assert_eq!(nav.step(13), &11);
        assert_eq!(nav.step(-20), &15);
        nav.step(isize::MAX);
        assert!(nav.position() < 6);
        nav.step(isize::MIN);
        assert!(nav.position() < 6);
    }

    #[test]
    fn current_does_not_move() {
        let nav = at(3);
        for _ in 0..4 {
            assert_eq!(*nav.current(), 13);
        }
        assert_eq!(nav.position(), 3);
    }

    #[test]
    fn single_entry_catalog_always_returns_it() {
        let one = ["only"];
        let mut nav = Navigator::new(&one);
        assert_eq!(*nav.next(), "only");
        assert_eq!(*nav.previous(), "only");
        assert_eq!(nav.position(), 0);
    }

    #[test]
    fn go_follows_step_direction() {
        let mut nav = Navigator::new(&SIX);
        assert_eq!(*nav.go(Step::Backward), 15);
        assert_eq!(*nav.go(Step::Forward), 10);
    }
}
