//! Fixed-capacity circular buffer with overwrite-on-full semantics.
//!
//! The buffer keeps the most recent insertions in FIFO order. One backing
//! slot is reserved as a gap to distinguish full from empty, so a buffer
//! constructed with `capacity` slots holds at most `capacity - 1` elements.
//! Enqueueing into a full buffer silently evicts the oldest element rather
//! than failing; dequeueing an empty buffer returns `None` rather than
//! failing. Single-owner, single-threaded use: callers needing shared access
//! must add their own synchronization.

/// Error raised when constructing a buffer with an unusable capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    /// Capacity must be at least 1; every invariant assumes a nonzero
    /// slot count.
    ZeroCapacity,
}

impl std::fmt::Display for RingBufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RingBufferError::ZeroCapacity => {
                write!(f, "ring buffer capacity must be at least 1")
            }
        }
    }
}

impl std::error::Error for RingBufferError {}

/// Bounded FIFO over a fixed array of `Option<T>` slots.
///
/// `head` is the next slot to dequeue from, `tail` the next slot to enqueue
/// into. The buffer is empty iff `head == tail` and full iff advancing
/// `tail` would collide with `head`. Slots outside the occupied range are
/// always `None`, so removed values never linger.
///
/// A capacity of 1 is a degenerate boundary: with the gap slot reserved,
/// such a buffer is simultaneously empty and full, and everything enqueued
/// into it is immediately unreachable. This matches the full/empty
/// arithmetic rather than being special-cased.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
}

impl<T> RingBuffer<T> {
    /// Create a buffer with `capacity` backing slots (`capacity - 1` usable
    /// elements). Rejects a zero capacity.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
        })
    }

    /// Append an element, evicting the oldest one first if the buffer is
    /// full. Never fails; eviction is the defined overflow behavior.
    pub fn enqueue(&mut self, item: T) {
        if self.is_full() {
            self.dequeue();
        }
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.slots.len();
    }

    /// Remove and return the oldest element, or `None` if the buffer is
    /// empty. The vacated slot is cleared.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        item
    }

    /// Borrow the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        (self.tail + 1) % self.slots.len() == self.head
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        let capacity = self.slots.len();
        (self.tail + capacity - self.head) % capacity
    }

    /// Raw backing slot count, as passed at construction. One slot is the
    /// full/empty gap; see [`usable_capacity`](Self::usable_capacity).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Maximum number of elements the buffer can hold (`capacity() - 1`).
    pub fn usable_capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Iterate over the stored elements, oldest to newest, without
    /// mutating the buffer.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let capacity = self.slots.len();
        (0..self.len()).filter_map(move |i| self.slots[(self.head + i) % capacity].as_ref())
    }

    /// Clone the stored elements into a `Vec`, oldest to newest.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_capacity() {
        let result = RingBuffer::<i32>::new(0);
        assert_eq!(result.unwrap_err(), RingBufferError::ZeroCapacity);
    }

    #[test]
    fn starts_empty() {
        let buffer = RingBuffer::<i32>::new(4).unwrap();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.usable_capacity(), 3);
        assert_eq!(buffer.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn preserves_insertion_order_below_capacity() {
        let mut buffer = RingBuffer::new(5).unwrap();
        for value in ["a", "b", "c", "d"] {
            buffer.enqueue(value);
        }
        assert_eq!(buffer.to_vec(), vec!["a", "b", "c", "d"]);
        assert!(buffer.is_full());
    }

    #[test]
    fn overflow_evicts_exactly_the_oldest() {
        let mut buffer = RingBuffer::new(4).unwrap();
        buffer.enqueue(1);
        buffer.enqueue(2);
        buffer.enqueue(3);
        assert!(buffer.is_full());

        buffer.enqueue(4);
        assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
        assert_eq!(buffer.len(), buffer.usable_capacity());
    }

    #[test]
    fn dequeue_on_empty_returns_none_without_mutation() {
        let mut buffer = RingBuffer::<String>::new(3).unwrap();
        assert_eq!(buffer.dequeue(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn peek_never_mutates() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.enqueue(7);
        assert_eq!(buffer.peek(), Some(&7));
        assert_eq!(buffer.peek(), Some(&7));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.dequeue(), Some(7));
    }

    #[test]
    fn balanced_enqueue_dequeue_returns_to_empty() {
        let mut buffer = RingBuffer::new(3).unwrap();
        // Walk the cursors around the ring a few times.
        for round in 0..7 {
            buffer.enqueue(round);
            assert_eq!(buffer.dequeue(), Some(round));
            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn capacity_three_scenario() {
        // Two usable slots: A, B fill the buffer; C evicts A.
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.enqueue("A");
        buffer.enqueue("B");
        assert!(buffer.is_full());
        assert_eq!(buffer.to_vec(), vec!["A", "B"]);

        buffer.enqueue("C");
        assert_eq!(buffer.to_vec(), vec!["B", "C"]);

        assert_eq!(buffer.dequeue(), Some("B"));
        assert_eq!(buffer.to_vec(), vec!["C"]);
        assert_eq!(buffer.dequeue(), Some("C"));
        assert_eq!(buffer.to_vec(), Vec::<&str>::new());
        assert_eq!(buffer.dequeue(), None);
    }

    #[test]
    fn capacity_one_is_empty_and_full_at_once() {
        // Degenerate boundary: the single slot is the gap slot, so the
        // buffer can never hold anything.
        let mut buffer = RingBuffer::new(1).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.is_full());
        assert_eq!(buffer.usable_capacity(), 0);

        buffer.enqueue(42);
        assert!(buffer.is_empty());
        assert!(buffer.is_full());
        assert_eq!(buffer.dequeue(), None);
        assert_eq!(buffer.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn evicted_and_dequeued_slots_are_cleared() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.enqueue(String::from("x"));
        buffer.enqueue(String::from("y"));
        buffer.enqueue(String::from("z"));
        buffer.dequeue();
        buffer.dequeue();
        assert!(buffer.is_empty());
        assert!(buffer.slots.iter().all(|slot| slot.is_none()));
    }
}
