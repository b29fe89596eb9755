use serde::{Deserialize, Serialize};

/// Direction of a single-step move within an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

impl Direction {
    /// The index of the neighbor in this direction, if it lies within `0..len`.
    pub fn neighbor(self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => Some(index + 1).filter(|&next| next < len),
        }
    }
}

/// Result of a bounds-checked move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The element at `from` now sits at `to`, and its neighbor took `from`.
    Moved { from: usize, to: usize },
    /// The neighbor was out of range; nothing changed.
    Unchanged,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// A vector whose positions are the presentation order.
///
/// Used for both the question list and each question's options. Reordering
/// only ever happens through [`OrderedList::swap_adjacent`], which reports
/// whether it did anything instead of silently clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an element and return its index.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Remove the element at `index`; later elements shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, item: T) -> Option<T> {
        self.items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Swap the element at `index` with its neighbor in `direction`.
    pub fn swap_adjacent(&mut self, index: usize, direction: Direction) -> MoveOutcome {
        match direction.neighbor(index, self.items.len()) {
            Some(to) => {
                self.items.swap(index, to);
                MoveOutcome::Moved { from: index, to }
            }
            None => MoveOutcome::Unchanged,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
