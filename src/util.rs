use core::hash::{Hash, Hasher};
use std::collections::HashSet;
use std::fmt::Debug;

/// Insertion-ordered collection without duplicates.
#[derive(Clone, Eq)]
pub struct VecSet<T: Hash> {
    vec: Vec<T>,
    set: HashSet<T>,
}

impl<T: Hash + Eq + Clone> VecSet<T> {
    /// Appends `element` unless it is already present. Returns whether it was new.
    pub fn insert(&mut self, element: T) -> bool {
        let success = self.set.insert(element.clone());
        if success {
            self.vec.push(element);
        }
        success
    }
    pub fn contains(&self, element: &T) -> bool {
        self.set.contains(element)
    }
    pub fn extend(&mut self, elements: impl IntoIterator<Item = T>) {
        for x in elements.into_iter() {
            self.insert(x);
        }
    }
}
impl<T: Hash + Eq + Clone> FromIterator<T> for VecSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut c = VecSet::default();
        c.extend(iter);
        c
    }
}
impl<T: Hash + Eq + Clone> From<Vec<T>> for VecSet<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}
impl<T: Hash> VecSet<T> {
    pub fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}

impl<'a, T: Hash> IntoIterator for &'a VecSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<T: Debug + Hash> Debug for VecSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

// order-sensitive, unlike the inner set
impl<T: Hash + PartialEq> PartialEq for VecSet<T> {
    fn eq(&self, other: &VecSet<T>) -> bool {
        self.vec == other.vec
    }
}
impl<T: Hash + PartialEq> PartialEq<[T]> for VecSet<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.vec.as_slice() == other
    }
}
impl<T: Hash + PartialEq, const N: usize> PartialEq<[T; N]> for VecSet<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.vec.as_slice() == other.as_slice()
    }
}
impl<T: Hash> Hash for VecSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vec.hash(state)
    }
}

impl<T: Hash> Default for VecSet<T> {
    fn default() -> Self {
        Self { vec: Default::default(), set: Default::default() }
    }
}
