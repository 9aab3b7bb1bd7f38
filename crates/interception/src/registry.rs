use std::sync::{Mutex, PoisonError};

use crate::entry::EntryPoint;

/// Every entry point that went through resolution. Append-only; each entry
/// lands here exactly once and snapshots list the newest first.
#[derive(Default)]
pub struct Registry {
    entries: Mutex<Vec<&'static EntryPoint>>,
}

impl Registry {
    pub fn insert(&self, entry: &'static EntryPoint) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    pub fn snapshot(&self) -> Vec<&'static EntryPoint> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::entry::EntryPoint;
    use crate::registry::Registry;

    static FIRST: EntryPoint = EntryPoint::new("glBegin\0");
    static SECOND: EntryPoint = EntryPoint::new("glEnd\0");

    #[test]
    fn snapshot_lists_newest_first() {
        let registry = Registry::default();
        assert!(registry.is_empty());

        registry.insert(&FIRST);
        registry.insert(&SECOND);

        let names: Vec<_> = registry.snapshot().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["glEnd", "glBegin"]);
        assert_eq!(registry.len(), 2);
    }
}
