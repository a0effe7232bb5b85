//! Indentation state for one generation pass.

use std::ops::{Deref, DerefMut};

use super::Generator;

/// Current depth plus a cached indent string, grown as needed.
pub(crate) struct Indentation {
    depth: usize,
    unit: String,
    cache: String,
}

impl Indentation {
    pub(crate) fn new(width: usize) -> Self {
        Indentation { depth: 0, unit: " ".repeat(width), cache: String::new() }
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Indent string for the current depth.
    pub(crate) fn current(&mut self) -> &str {
        let need = self.depth * self.unit.len();
        while self.cache.len() < need {
            self.cache.push_str(&self.unit);
        }
        &self.cache[..need]
    }

    fn push(&mut self) {
        self.depth += 1;
    }

    fn pop(&mut self) {
        debug_assert!(self.depth > 0, "indentation popped below zero");
        self.depth = self.depth.saturating_sub(1);
    }
}

/// One level deeper for as long as the guard lives.
///
/// Dropping the guard restores the caller's depth, including when a nested
/// formatter returns early with an error.
pub(crate) struct Nested<'g> {
    generator: &'g mut Generator,
}

impl Generator {
    pub(crate) fn nested(&mut self) -> Nested<'_> {
        self.indent.push();
        Nested { generator: self }
    }
}

impl Deref for Nested<'_> {
    type Target = Generator;

    fn deref(&self) -> &Generator {
        &*self.generator
    }
}

impl DerefMut for Nested<'_> {
    fn deref_mut(&mut self) -> &mut Generator {
        &mut *self.generator
    }
}

impl Drop for Nested<'_> {
    fn drop(&mut self) {
        self.generator.indent.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Literal, Node};
    use crate::config::Config;

    #[test]
    fn indent_string_tracks_depth() {
        let mut ind = Indentation::new(4);
        assert_eq!(ind.current(), "");
        ind.push();
        ind.push();
        assert_eq!(ind.current(), "        ");
        ind.pop();
        assert_eq!(ind.current(), "    ");
    }

    #[test]
    fn guard_restores_depth() {
        let mut g = Generator::new(&Config::default());
        {
            let mut inner = g.nested();
            let inner2 = inner.nested();
            assert_eq!(inner2.indent.depth(), 2);
        }
        assert_eq!(g.indent.depth(), 0);
    }

    #[test]
    fn guard_restores_depth_on_error() {
        let mut g = Generator::new(&Config::default());
        let bad = Node::Literal(Literal { value: String::new() });
        let result = {
            let mut inner = g.nested();
            inner.dispatch(&bad)
        };
        assert!(result.is_err());
        assert_eq!(g.indent.depth(), 0);
    }
}
