use std::collections::HashMap;

/// A sparse vector mapping feature indices to coefficients.
///
/// Absent indices read as `0.0`, and storing `0.0` removes the entry, so only nonzero
/// coefficients are ever held. The buffer is meant to be allocated once and reused: fill it,
/// consume it, then `clear` it, which keeps the allocated capacity around for the next cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseAccumulator {
    entries: HashMap<usize, f32>,
}

impl SparseAccumulator {
    /// Creates a new empty `SparseAccumulator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty `SparseAccumulator` able to hold `capacity` entries without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Stores `value` at `index`, overwriting any previous coefficient.
    ///
    /// # Arguments
    /// * `index` - The feature index.
    /// * `value` - The new coefficient, a value of `0.0` removes the entry.
    pub fn set(&mut self, index: usize, value: f32) {
        if value == 0. {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }

    /// Returns the coefficient stored at `index`, or `0.0` if there is none.
    pub fn get(&self, index: usize) -> f32 {
        self.entries.get(&index).copied().unwrap_or_default()
    }

    /// Returns the sum of the squares of every stored coefficient.
    pub fn squared_norm(&self) -> f32 {
        self.entries.values().map(|v| v * v).sum()
    }

    /// Iterates the populated indices in no particular order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates the populated `(index, coefficient)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }

    /// The amount of populated indices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry while keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
