//! Write-tracked state cells
//!
//! Every piece of component state lives in a `Tracked<T>`. Each write bumps a
//! revision counter, which gives the host a cheap "did anything change"
//! check and lets tests assert that a torn-down component stays silent.

/// A state value plus a count of how many times it has been written
#[derive(Clone, Debug, Default)]
pub struct Tracked<T> {
    value: T,
    writes: u64,
}

impl<T> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self { value, writes: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of writes since creation
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Replace the value unconditionally (counts as a write)
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.writes += 1;
    }

    /// Mutate the value in place (counts as a write)
    pub fn update<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.writes += 1;
        f(&mut self.value)
    }
}

impl<T: PartialEq> Tracked<T> {
    /// Write only if the new value differs. Returns whether a write happened.
    pub fn set_if_changed(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: Clone> Tracked<T> {
    /// Clone out the current value
    pub fn snapshot(&self) -> T {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_counts_writes() {
        let mut cell = Tracked::new(0);
        cell.set(1);
        cell.set(1);
        assert_eq!(*cell.get(), 1);
        assert_eq!(cell.writes(), 2);
    }

    #[test]
    fn test_set_if_changed_skips_equal() {
        let mut cell = Tracked::new(false);
        assert!(!cell.set_if_changed(false));
        assert!(cell.set_if_changed(true));
        assert_eq!(cell.writes(), 1);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let mut cell = Tracked::new(vec![1, 2]);
        let len = cell.update(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
        assert_eq!(cell.snapshot(), vec![1, 2, 3]);
        assert_eq!(cell.writes(), 1);
    }
}
