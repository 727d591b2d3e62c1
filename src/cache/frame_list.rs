//! Index-arena doubly-linked list of frames.
//!
//! FIFO, LRU and LFU all keep their frames in an ordered sequence that
//! needs O(1) unlinking from the middle. Rather than pointer-linked nodes,
//! frames live in a fixed arena (`slots`) and link to each other by
//! [`FrameId`]. Removed slots go on a free list and are reused by the next
//! insertion.
//!
//! ```text
//!   head                                   tail
//!    │                                      │
//!    ▼                                      ▼
//!  [slot 2] ⇄ [slot 0] ⇄ [slot 3] ⇄ ... ⇄ [slot 1]
//! ```

use std::collections::HashSet;

use crate::cache::frame::Frame;
use crate::cache::store::FrameStore;
use crate::common::{Error, FrameId, PageId, Result};

#[derive(Debug, Clone)]
struct Node<M> {
    frame: Frame<M>,
    prev: Option<FrameId>,
    next: Option<FrameId>,
}

/// A bounded doubly-linked list of frames backed by an index arena.
///
/// # Panics
/// Structural misuse is a bug, not an error: inserting past capacity,
/// popping an empty list, or following a link to a freed slot all panic.
#[derive(Debug, Clone)]
pub struct FrameList<M = ()> {
    /// Arena of nodes. `None` marks a freed slot.
    slots: Vec<Option<Node<M>>>,

    /// Freed slot indices available for reuse.
    free: Vec<FrameId>,

    head: Option<FrameId>,
    tail: Option<FrameId>,

    /// Number of linked frames.
    len: usize,

    capacity: usize,
}

impl<M> FrameList<M> {
    /// Create an empty list holding at most `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        })
    }

    #[inline]
    pub fn head(&self) -> Option<FrameId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<FrameId> {
        self.tail
    }

    pub fn get(&self, id: FrameId) -> Option<&Frame<M>> {
        match self.slots.get(id.0) {
            Some(Some(node)) => Some(&node.frame),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame<M>> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => Some(&mut node.frame),
            _ => None,
        }
    }

    /// The linked frame in slot `id`.
    ///
    /// # Panics
    /// Panics if `id` is a free or out-of-range slot.
    pub fn frame_mut(&mut self, id: FrameId) -> &mut Frame<M> {
        &mut self.node_mut(id).frame
    }

    /// Iterate frames from head to tail.
    pub fn iter(&self) -> Iter<'_, M> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    /// Insert `frame` as the new head.
    pub fn push_front(&mut self, frame: Frame<M>) -> FrameId {
        let id = self.alloc(frame);
        self.link_front(id);
        id
    }

    /// Insert `frame` as the new tail.
    pub fn push_back(&mut self, frame: Frame<M>) -> FrameId {
        let id = self.alloc(frame);
        self.link_back(id);
        id
    }

    /// Remove and return the head frame.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> Frame<M> {
        let Some(id) = self.head else {
            panic!("pop_front on empty frame list");
        };
        self.remove(id)
    }

    /// Remove and return the tail frame.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> Frame<M> {
        let Some(id) = self.tail else {
            panic!("pop_back on empty frame list");
        };
        self.remove(id)
    }

    /// Unlink the frame in slot `id`, free the slot and return the frame.
    ///
    /// # Panics
    /// Panics if `id` does not refer to a linked frame.
    pub fn remove(&mut self, id: FrameId) -> Frame<M> {
        self.unlink(id);
        let node = match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => node,
            None => panic!("remove of free slot {}", id),
        };
        self.free.push(id);
        self.len -= 1;
        node.frame
    }

    /// Relink the frame in slot `id` as the head. No-op if it already is.
    pub fn move_to_front(&mut self, id: FrameId) {
        if self.head == Some(id) {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    /// Drop every frame and release all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Check the structural invariants, panicking on the first violation.
    ///
    /// - forward and backward links agree
    /// - the walk from head reaches `tail` in exactly `len` steps
    /// - `len <= capacity`
    /// - every linked frame is occupied and holds a distinct page
    pub fn assert_invariants(&self) {
        assert!(
            self.len <= self.capacity,
            "frame list holds {} frames, capacity {}",
            self.len,
            self.capacity
        );

        let mut seen = HashSet::with_capacity(self.len);
        let mut prev = None;
        let mut cursor = self.head;
        let mut steps = 0;
        while let Some(id) = cursor {
            steps += 1;
            assert!(steps <= self.len, "frame list walk exceeds len {}", self.len);

            let node = self.node(id);
            assert_eq!(node.prev, prev, "broken back link at {}", id);
            assert!(node.frame.is_occupied(), "linked {} is empty", id);
            let page = node.frame.resident_page();
            assert!(
                seen.insert(page),
                "{} resident in more than one frame",
                page
            );

            prev = Some(id);
            cursor = node.next;
        }
        assert_eq!(steps, self.len, "frame list walk/len mismatch");
        assert_eq!(self.tail, prev, "tail does not end the walk");
    }

    fn alloc(&mut self, frame: Frame<M>) -> FrameId {
        assert!(
            self.len < self.capacity,
            "frame list overflow: capacity {}",
            self.capacity
        );
        let page = frame.resident_page();
        debug_assert!(self.find(page).is_none(), "{} already resident", page);

        let node = Node {
            frame,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                FrameId::new(self.slots.len() - 1)
            }
        };
        self.len += 1;
        id
    }

    fn link_front(&mut self, id: FrameId) {
        let old_head = self.head;
        {
            let node = self.node_mut(id);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => self.node_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn link_back(&mut self, id: FrameId) {
        let old_tail = self.tail;
        {
            let node = self.node_mut(id);
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn unlink(&mut self, id: FrameId) {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
        let node = self.node_mut(id);
        node.prev = None;
        node.next = None;
    }

    fn node(&self, id: FrameId) -> &Node<M> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling link to {}", id),
        }
    }

    fn node_mut(&mut self, id: FrameId) -> &mut Node<M> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling link to {}", id),
        }
    }
}

impl<M> FrameStore for FrameList<M> {
    fn find(&self, page: PageId) -> Option<FrameId> {
        self.iter()
            .find(|(_, frame)| frame.holds(page))
            .map(|(id, _)| id)
    }

    fn count(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Head-to-tail iterator over a [`FrameList`].
#[derive(Debug)]
pub struct Iter<'a, M> {
    list: &'a FrameList<M>,
    next: Option<FrameId>,
}

impl<'a, M> Iterator for Iter<'a, M> {
    type Item = (FrameId, &'a Frame<M>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.node(id);
        self.next = node.next;
        Some((id, &node.frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(page: u32) -> Frame {
        Frame::loaded(PageId::new(page), ())
    }

    fn pages<M>(list: &FrameList<M>) -> Vec<u32> {
        list.iter().map(|(_, f)| f.resident_page().0).collect()
    }

    #[test]
    fn test_push_back_pop_front_is_fifo() {
        let mut list = FrameList::new(3).unwrap();
        list.push_back(frame(1));
        list.push_back(frame(2));
        list.push_back(frame(3));
        assert!(list.is_full());
        assert_eq!(pages(&list), vec![1, 2, 3]);

        assert_eq!(list.pop_front().resident_page(), PageId::new(1));
        assert_eq!(list.pop_front().resident_page(), PageId::new(2));
        assert_eq!(list.pop_front().resident_page(), PageId::new(3));
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        list.assert_invariants();
    }

    #[test]
    fn test_push_front_pop_back() {
        let mut list = FrameList::new(3).unwrap();
        list.push_front(frame(1));
        list.push_front(frame(2));
        assert_eq!(pages(&list), vec![2, 1]);
        assert_eq!(list.pop_back().resident_page(), PageId::new(1));
        assert_eq!(pages(&list), vec![2]);
        list.assert_invariants();
    }

    #[test]
    fn test_move_head_is_noop() {
        let mut list = FrameList::new(3).unwrap();
        list.push_back(frame(1));
        let head = list.head().unwrap();
        list.push_back(frame(2));

        list.move_to_front(head);
        assert_eq!(pages(&list), vec![1, 2]);
        list.assert_invariants();
    }

    #[test]
    fn test_move_sole_element() {
        let mut list = FrameList::new(2).unwrap();
        let only = list.push_back(frame(7));
        list.move_to_front(only);
        assert_eq!(list.head(), Some(only));
        assert_eq!(list.tail(), Some(only));
        list.assert_invariants();
    }

    #[test]
    fn test_move_tail_repairs_tail() {
        let mut list = FrameList::new(3).unwrap();
        list.push_back(frame(1));
        let middle = list.push_back(frame(2));
        let tail = list.push_back(frame(3));

        list.move_to_front(tail);
        assert_eq!(pages(&list), vec![3, 1, 2]);
        assert_eq!(list.tail(), Some(middle));
        list.assert_invariants();
    }

    #[test]
    fn test_remove_middle_and_reuse_slot() {
        let mut list = FrameList::new(3).unwrap();
        list.push_back(frame(1));
        let middle = list.push_back(frame(2));
        list.push_back(frame(3));

        assert_eq!(list.remove(middle).resident_page(), PageId::new(2));
        assert_eq!(pages(&list), vec![1, 3]);
        assert!(list.get(middle).is_none());

        // Freed slot is handed out again
        let reused = list.push_back(frame(4));
        assert_eq!(reused, middle);
        assert_eq!(pages(&list), vec![1, 3, 4]);
        list.assert_invariants();
    }

    #[test]
    fn test_find() {
        let mut list = FrameList::new(2).unwrap();
        let id = list.push_back(frame(5));
        assert_eq!(list.find(PageId::new(5)), Some(id));
        assert_eq!(list.find(PageId::new(6)), None);
    }

    #[test]
    fn test_clear() {
        let mut list = FrameList::new(2).unwrap();
        list.push_back(frame(1));
        list.push_back(frame(2));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        list.push_back(frame(3));
        list.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "frame list overflow")]
    fn test_overflow_panics() {
        let mut list = FrameList::new(1).unwrap();
        list.push_back(frame(1));
        list.push_back(frame(2));
    }

    #[test]
    #[should_panic(expected = "pop_front on empty frame list")]
    fn test_pop_empty_panics() {
        let mut list: FrameList = FrameList::new(1).unwrap();
        list.pop_front();
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = FrameList::<()>::new(0).unwrap_err();
        assert_eq!(err, Error::InvalidCapacity(0));
    }

    #[test]
    fn test_frame_mut() {
        let mut list = FrameList::new(2).unwrap();
        let id = list.push_back(Frame::loaded(PageId::new(1), 1u64));
        *list.frame_mut(id).meta_mut() += 1;
        assert_eq!(list.get(id).map(|f| *f.meta()), Some(2));
    }

    #[test]
    #[should_panic(expected = "dangling link")]
    fn test_frame_mut_on_free_slot_panics() {
        let mut list = FrameList::new(2).unwrap();
        let id = list.push_back(frame(1));
        list.remove(id);
        list.frame_mut(id);
    }

    #[test]
    #[should_panic(expected = "Page(1) resident in more than one frame")]
    fn test_invariants_catch_duplicate_page() {
        let mut list = FrameList::new(3).unwrap();
        list.push_back(frame(1));
        let second = list.push_back(frame(2));

        // Corrupt the list behind the uniqueness check in push
        list.frame_mut(second).replace(PageId::new(1), ());
        list.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "is empty")]
    fn test_invariants_catch_empty_linked_frame() {
        let mut list = FrameList::new(2).unwrap();
        let id = list.push_back(frame(1));
        list.frame_mut(id).reset();
        list.assert_invariants();
    }
}
