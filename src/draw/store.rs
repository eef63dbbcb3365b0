//! Ordered shape storage.

use super::shape::Shape;
use thiserror::Error;

/// Errors raised when addressing a shape by index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("shape index {index} out of range (store holds {len} shapes)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Container for all shapes on the canvas.
///
/// Insertion order is paint order: the first shape is the bottom layer and the
/// last is drawn on top. A shape's index is its only identity, so removing a
/// shape shifts the indices of everything after it.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape on top of the existing ones.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Attempts to add a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be exceeded.
    pub fn try_append(&mut self, shape: Shape, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    /// Swaps in a new shape at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, shape: Shape) -> Result<Shape, StoreError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, shape))
    }

    /// Removes the shape at `index`; later shapes move down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Shape, StoreError> {
        self.check(index)?;
        Ok(self.shapes.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Shape, StoreError> {
        self.check(index)?;
        Ok(&mut self.shapes[index])
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn check(&self, index: usize) -> Result<(), StoreError> {
        if index < self.shapes.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            })
        }
    }
}
