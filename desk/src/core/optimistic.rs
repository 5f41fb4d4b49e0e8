//! # Optimistic Updates
//!
//! [`Optimistic::apply`] snapshots a value, mutates it in place and hands back
//! the snapshot. The caller keeps the mutation on success and calls
//! [`Optimistic::rollback`] on failure, which restores the whole snapshot
//! rather than merging.

#[derive(Debug, Clone)]
pub struct Optimistic<T> {
    snapshot: T,
}

impl<T: Clone> Optimistic<T> {
    /// Deep-copy `target`, then apply `mutate` to it.
    pub fn apply(target: &mut T, mutate: impl FnOnce(&mut T)) -> Self {
        let snapshot = target.clone();
        mutate(target);
        Self { snapshot }
    }

    /// Keep the optimistic state.
    pub fn commit(self) {}

    /// Restore the pre-mutation value.
    pub fn rollback(self, target: &mut T) {
        *target = self.snapshot;
    }

    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Flag {
        id: u8,
        on: bool,
    }

    #[test]
    fn test_rollback_restores_full_snapshot() {
        let before = vec![Flag { id: 1, on: true }, Flag { id: 2, on: false }];
        let mut items = before.clone();

        let pending = Optimistic::apply(&mut items, |items| {
            for item in items.iter_mut() {
                item.on = item.id == 2;
            }
        });
        assert!(items[1].on);
        assert!(!items[0].on);

        pending.rollback(&mut items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_commit_keeps_mutation() {
        let mut value = 1;
        let pending = Optimistic::apply(&mut value, |v| *v = 2);
        assert_eq!(*pending.snapshot(), 1);

        pending.commit();
        assert_eq!(value, 2);
    }
}
