use std::collections::VecDeque;

/// The collection of discovered but not yet fully expanded vertices during a
/// traversal.
///
/// [`Queue`] gives breadth-first order and [`Stack`] depth-first order.
/// `peek` and `take` return `None` on an empty collection.
pub trait Frontier<T>: Default {
    fn put(&mut self, value: T);
    fn take(&mut self) -> Option<T>;
    fn peek(&self) -> Option<&T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out collection.
#[derive(Debug, Clone)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    pub fn enqueue(&mut self, value: T) {
        self.0.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    /// Returns the element that would be dequeued next.
    pub fn peek(&self) -> Option<&T> {
        self.0.front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn put(&mut self, value: T) {
        self.enqueue(value);
    }

    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }
}

/// Last-in, first-out collection.
#[derive(Debug, Clone)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    /// Returns the element that would be popped next.
    pub fn peek(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn put(&mut self, value: T) {
        self.push(value);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }
}
