//! Encode buffer.

use core::cell::RefCell;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;

/// A write cursor over growable storage owned by the caller.
///
/// Several cursors may point into the same storage at once: a list writes
/// its head through one cursor while its tail is filled through a
/// [`view`](Self::view) opened at the end of the head. The cursors never
/// write the same bytes because every head size is known before anything
/// is written. The buffer itself does not check this.
#[derive(Debug)]
pub struct EncodeBuffer<'a> {
    storage: &'a RefCell<Vec<u8>>,
    pos: usize,
}

impl<'a> EncodeBuffer<'a> {
    /// Cursor at the end of `storage`.
    pub fn new(storage: &'a RefCell<Vec<u8>>) -> Self {
        let pos = storage.borrow().len();
        Self { storage, pos }
    }

    /// Current cursor position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Make room for `additional` bytes past the cursor.
    pub fn reserve(&mut self, additional: usize) {
        let mut storage = self.storage.borrow_mut();
        let needed = (self.pos + additional).saturating_sub(storage.len());
        storage.reserve(needed);
    }

    /// Write `bytes` at the cursor and advance past them.
    pub fn write(&mut self, bytes: &[u8]) {
        let mut storage = self.storage.borrow_mut();
        let end = self.pos + bytes.len();
        if end > storage.len() {
            storage.resize(end, 0);
        }
        storage[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// A second cursor over the same storage, at `position`.
    ///
    /// Storage is zero filled up to `position`, so the bytes between this
    /// cursor and the view can still be written through this cursor.
    pub fn view(&self, position: usize) -> EncodeBuffer<'a> {
        debug_assert!(position >= self.pos, "view behind the cursor");
        let mut storage = self.storage.borrow_mut();
        if position > storage.len() {
            storage.resize(position, 0);
        }
        EncodeBuffer {
            storage: self.storage,
            pos: position,
        }
    }

    /// Move this cursor to the end of a view it opened.
    pub fn join(&mut self, view: EncodeBuffer<'a>) {
        debug_assert!(core::ptr::eq(self.storage, view.storage));
        debug_assert!(view.pos >= self.pos, "join behind the cursor");
        self.pos = view.pos;
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use super::EncodeBuffer;

    #[test]
    fn write_advances() {
        let storage = RefCell::new(vec![0xff]);
        let mut buf = EncodeBuffer::new(&storage);
        assert_eq!(buf.pos(), 1);
        buf.write(&[1, 2]);
        buf.write(&[]);
        assert_eq!(buf.pos(), 3);
        assert_eq!(storage.into_inner(), vec![0xff, 1, 2]);
    }

    #[test]
    fn view_interleaves_with_head() {
        let storage = RefCell::new(Vec::new());
        let mut head = EncodeBuffer::new(&storage);
        let mut tail = head.view(4);
        tail.write(&[5]);
        head.write(&[1, 2]);
        tail.write(&[6]);
        head.write(&[3, 4]);
        assert_eq!(head.pos(), 4);
        head.join(tail);
        assert_eq!(head.pos(), 6);
        assert_eq!(storage.into_inner(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reserve_is_idempotent() {
        let storage = RefCell::new(Vec::new());
        let mut buf = EncodeBuffer::new(&storage);
        buf.reserve(64);
        let capacity = storage.borrow().capacity();
        assert!(capacity >= 64);
        buf.reserve(64);
        buf.reserve(10);
        assert_eq!(storage.borrow().capacity(), capacity);
        buf.write(&[0; 64]);
        assert_eq!(storage.borrow().capacity(), capacity);
    }
}
