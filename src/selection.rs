/// tracks which library entry has focus. both ends wrap around so the
/// carousel never hits a dead end
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// `len` must be at least 1; the scanner refuses to build an empty
    /// library so browsing always has something to focus
    pub fn new(len: usize) -> Self {
        assert!(len >= 1, "selection needs a non-empty library");
        Selection { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// move focus one entry left, wrapping to the last entry
    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// move focus one entry right, wrapping to the first entry
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_one() {
        let mut s = Selection::new(3);
        s.next();
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut s = Selection::new(3);
        s.prev();
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut s = Selection::new(3);
        s.next();
        s.next();
        s.next();
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for n in 1..8 {
            let mut s = Selection::new(n);
            for _ in 0..n {
                s.next();
            }
            assert_eq!(s.index(), 0);
        }
    }

    #[test]
    fn test_single_entry_never_moves() {
        let mut s = Selection::new(1);
        s.next();
        s.prev();
        s.next();
        assert_eq!(s.index(), 0);
    }

    #[test]
    #[should_panic]
    fn test_empty_library_rejected() {
        let _ = Selection::new(0);
    }
}
