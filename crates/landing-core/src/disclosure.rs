//! Open/closed state of a single FAQ item.
//!
//! Items are independent; opening one never closes another.

/// Binary disclosure toggle, closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Chevron glyph for the header row
    pub fn chevron(&self) -> &'static str {
        if self.open {
            "\u{25B4}"
        } else {
            "\u{25BE}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!Disclosure::default().is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut item = Disclosure::default();
        item.toggle();
        assert!(item.is_open());
        item.toggle();
        assert!(!item.is_open());
    }

    #[test]
    fn items_are_independent() {
        let mut first = Disclosure::default();
        let second = Disclosure::default();
        first.toggle();
        assert!(first.is_open());
        assert!(!second.is_open());
    }
}
