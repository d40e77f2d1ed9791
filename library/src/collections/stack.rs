use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,
}

pub type EmptyStackError = StackError;

/// Last-in-first-out storage; the end of the backend vector is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    backend: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Stack { backend: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.backend.push(item);
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.backend.pop().ok_or(StackError::Empty)
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.backend.last().ok_or(StackError::Empty)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.backend.len()
    }

    pub fn clear(&mut self) {
        self.backend.clear();
    }
}
