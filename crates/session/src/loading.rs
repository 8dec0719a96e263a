//! Process-wide busy indicator with counter semantics.
//!
//! A plain boolean breaks as soon as two operations overlap: the first one
//! to finish would hide an indicator the slower one still owns. `show`
//! increments, `hide` decrements (floor-clamped at zero), and visibility is
//! "counter > 0".

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared loading indicator driven by any long-running operation, not only
/// authentication.
#[derive(Debug, Default)]
pub struct LoadingSignal {
    active: AtomicU64,
}

impl LoadingSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one operation as in flight.
    pub fn show(&self) {
        self.active.fetch_add(1, Ordering::AcqRel);
    }

    /// Mark one operation as finished. Clamped at zero: an unmatched hide
    /// is a no-op rather than an underflow.
    pub fn hide(&self) {
        let _ = self
            .active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    pub fn is_visible(&self) -> bool {
        self.active.load(Ordering::Acquire) > 0
    }

    /// Number of operations currently holding the signal.
    pub fn active_count(&self) -> u64 {
        self.active.load(Ordering::Acquire)
    }

    /// Show now, hide when the guard drops. Covers early returns and `?`.
    pub fn guard(&self) -> LoadingGuard<'_> {
        self.show();
        LoadingGuard { signal: self }
    }
}

/// RAII handle pairing a `show` with exactly one `hide`.
#[derive(Debug)]
pub struct LoadingGuard<'a> {
    signal: &'a LoadingSignal,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.signal.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_operations_do_not_hide_each_other() {
        let signal = LoadingSignal::new();
        signal.show(); // slow operation
        signal.show(); // fast operation
        signal.hide(); // fast one finishes first
        assert!(signal.is_visible());
        signal.hide();
        assert!(!signal.is_visible());
    }

    #[test]
    fn hide_is_clamped_at_zero() {
        let signal = LoadingSignal::new();
        signal.hide();
        signal.hide();
        assert!(!signal.is_visible());
        signal.show();
        assert!(signal.is_visible());
        assert_eq!(signal.active_count(), 1);
    }

    #[test]
    fn guard_hides_on_drop() {
        let signal = LoadingSignal::new();
        {
            let _busy = signal.guard();
            assert!(signal.is_visible());
        }
        assert!(!signal.is_visible());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: visibility equals shows-minus-hides clamped at
            /// zero, for any interleaving.
            #[test]
            fn visibility_matches_clamped_balance(ops in prop::collection::vec(any::<bool>(), 0..128)) {
                let signal = LoadingSignal::new();
                let mut balance: i64 = 0;
                for is_show in ops {
                    if is_show {
                        signal.show();
                        balance += 1;
                    } else {
                        signal.hide();
                        balance = (balance - 1).max(0);
                    }
                    prop_assert_eq!(signal.is_visible(), balance > 0);
                    prop_assert_eq!(signal.active_count(), balance as u64);
                }
            }
        }
    }
}
