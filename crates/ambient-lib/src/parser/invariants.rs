//! Assertions the grammar relies on; excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.lookahead_guard.get() != 0,
            "parser stalled: no token consumed after repeated lookahead"
        );
        self.lookahead_guard.set(self.lookahead_guard.get() - 1);
    }

    #[inline]
    pub(super) fn assert_current(&mut self, expected_kind: SyntaxKind) {
        let current_kind = self.current();
        assert_eq!(
            current_kind, expected_kind,
            "grammar rule entered at {current_kind:?} instead of {expected_kind:?}",
        );
    }

    #[inline]
    pub(super) fn assert_word(&mut self, word: &str) {
        assert!(
            self.at_word(word),
            "grammar rule entered without the keyword `{word}`"
        );
    }
}
