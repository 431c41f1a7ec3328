//! # DigitList
//! An ordered, mutable sequence of digits, most significant digit first.
//! A digit is a value in `0..=15`: `0..=9` for decimal numbers and `0..=15` once a
//! number has been converted to hexadecimal. The list does not know which base it holds.
//!
//! The list is a doubly-linked chain of nodes kept in an arena. Nodes refer to their
//! neighbours by slot index, removed slots are recycled through a free list, and the
//! list keeps head, tail and length so both ends are reachable in O(1).
//! # Example
//! ```
//! use digit_num::DigitList;
//!
//! let mut list: DigitList = "1234".into();
//! list.insert(0, 9).unwrap();
//! list.shift_left();
//! assert_eq!(list, [1, 2, 3, 4, 9]);
//! assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![9, 4, 3, 2, 1]);
//! ```
//!

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::DigitError;

/// One position of a number, `0..=15`.
pub type Digit = u8;

type Link = Option<usize>;

#[derive(Debug, Clone, Copy)]
struct Node {
    value: Digit,
    prev: Link,
    next: Link,
}

#[derive(Clone, Default)]
pub struct DigitList {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
}

// 节点链接辅助函数
impl DigitList {
    fn alloc(&mut self, value: Digit, prev: Link, next: Link) -> usize {
        let node = Node { value, prev, next };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn link_last(&mut self, value: Digit) -> usize {
        let last = self.tail;
        let id = self.alloc(value, last, None);
        match last {
            None => self.head = Some(id),
            Some(last) => self.nodes[last].next = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    fn link_before(&mut self, value: Digit, succ: usize) -> usize {
        let pred = self.nodes[succ].prev;
        let id = self.alloc(value, pred, Some(succ));
        self.nodes[succ].prev = Some(id);
        match pred {
            None => self.head = Some(id),
            Some(pred) => self.nodes[pred].next = Some(id),
        }
        self.len += 1;
        id
    }

    fn unlink(&mut self, id: usize) -> Digit {
        let Node { value, prev, next } = self.nodes[id];
        match prev {
            None => self.head = next,
            Some(prev) => self.nodes[prev].next = next,
        }
        match next {
            None => self.tail = prev,
            Some(next) => self.nodes[next].prev = prev,
        }
        // a recycled slot must not keep the chain reachable
        self.nodes[id].prev = None;
        self.nodes[id].next = None;
        self.free.push(id);
        self.len -= 1;
        value
    }

    /// Walks from whichever end is closer to `index`.
    fn node(&self, index: usize) -> Result<usize, DigitError> {
        self.check_element_index(index)?;
        let mut x;
        if index < (self.len >> 1) {
            x = self.head;
            for _ in 0..index {
                x = x.and_then(|id| self.nodes[id].next);
            }
        } else {
            x = self.tail;
            for _ in index + 1..self.len {
                x = x.and_then(|id| self.nodes[id].prev);
            }
        }
        x.ok_or(DigitError::IndexOutOfRange { index, len: self.len })
    }

    fn check_element_index(&self, index: usize) -> Result<(), DigitError> {
        if index >= self.len {
            return Err(DigitError::IndexOutOfRange { index, len: self.len });
        }
        Ok(())
    }

    fn check_position_index(&self, index: usize) -> Result<(), DigitError> {
        if index > self.len {
            return Err(DigitError::IndexOutOfRange { index, len: self.len });
        }
        Ok(())
    }
}

// 实现构造
impl DigitList {
    pub fn new() -> Self {
        DigitList::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        DigitList { nodes: Vec::with_capacity(cap), ..DigitList::default() }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

// 实现两端操作
impl DigitList {
    /// Appends a digit at the least significant end.
    pub fn push(&mut self, digit: Digit) {
        debug_assert!(digit < 16, "digit {} out of bound", digit);
        self.link_last(digit);
    }

    /// Prepends a digit at the most significant end.
    pub fn push_front(&mut self, digit: Digit) {
        debug_assert!(digit < 16, "digit {} out of bound", digit);
        match self.head {
            Some(first) => { self.link_before(digit, first); },
            None => { self.link_last(digit); },
        }
    }

    pub fn pop_front(&mut self) -> Option<Digit> {
        self.head.map(|first| self.unlink(first))
    }

    pub fn pop_back(&mut self) -> Option<Digit> {
        self.tail.map(|last| self.unlink(last))
    }

    pub fn first(&self) -> Option<Digit> {
        self.head.map(|id| self.nodes[id].value)
    }

    pub fn last(&self) -> Option<Digit> {
        self.tail.map(|id| self.nodes[id].value)
    }
}

// 实现按位置访问
impl DigitList {
    pub fn get(&self, index: usize) -> Result<Digit, DigitError> {
        let id = self.node(index)?;
        Ok(self.nodes[id].value)
    }

    /// Replaces the digit at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, digit: Digit) -> Result<Digit, DigitError> {
        let id = self.node(index)?;
        Ok(std::mem::replace(&mut self.nodes[id].value, digit))
    }

    /// Inserts before the digit at `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, digit: Digit) -> Result<(), DigitError> {
        self.check_position_index(index)?;
        if index == self.len {
            self.push(digit);
        } else {
            let succ = self.node(index)?;
            self.link_before(digit, succ);
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Digit, DigitError> {
        let id = self.node(index)?;
        Ok(self.unlink(id))
    }
}

// 实现查找与批量删除
impl DigitList {
    pub fn contains(&self, digit: Digit) -> bool {
        self.index_of(digit).is_some()
    }

    pub fn index_of(&self, digit: Digit) -> Option<usize> {
        self.iter().position(|d| d == digit)
    }

    pub fn last_index_of(&self, digit: Digit) -> Option<usize> {
        self.iter().rposition(|d| d == digit)
    }

    /// Removes the first occurrence of `digit`.
    pub fn remove_value(&mut self, digit: Digit) -> bool {
        let mut cursor = self.cursor_mut();
        while let Some(d) = cursor.current() {
            if d == digit {
                cursor.remove_current();
                return true;
            }
            cursor.move_next();
        }
        false
    }

    /// Removes every occurrence of every digit in `digits`.
    pub fn remove_all(&mut self, digits: &[Digit]) -> bool {
        self.retain(|d| !digits.contains(&d))
    }

    /// Keeps only the digits for which `keep` returns `true`.
    /// Returns whether anything was removed.
    pub fn retain<F: FnMut(Digit) -> bool>(&mut self, mut keep: F) -> bool {
        let mut modified = false;
        let mut cursor = self.cursor_mut();
        while let Some(d) = cursor.current() {
            if keep(d) {
                cursor.move_next();
            } else {
                cursor.remove_current();
                modified = true;
            }
        }
        modified
    }

    pub fn to_vec(&self) -> Vec<Digit> {
        self.iter().collect()
    }
}

// 实现交换, 排序与循环移位
impl DigitList {
    /// Exchanges two digits. Invalid indices are reported with `false`, never with a panic.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len || j >= self.len {
            return false;
        }
        if i == j {
            return true;
        }
        match (self.node(i), self.node(j)) {
            (Ok(a), Ok(b)) => {
                let tmp = self.nodes[a].value;
                self.nodes[a].value = self.nodes[b].value;
                self.nodes[b].value = tmp;
                true
            }
            _ => false,
        }
    }

    pub fn sort_ascending(&mut self) {
        self.bubble_sort(|a, b| a > b);
    }

    pub fn sort_descending(&mut self) {
        self.bubble_sort(|a, b| a < b);
    }

    /// Swaps neighbours while `out_of_order`, until a full pass makes no swap.
    fn bubble_sort<F: Fn(Digit, Digit) -> bool>(&mut self, out_of_order: F) {
        if self.len <= 1 {
            return;
        }
        let mut swapped = true;
        while swapped {
            swapped = false;
            let mut current = self.head;
            while let Some(id) = current {
                let next = self.nodes[id].next;
                if let Some(n) = next {
                    let (a, b) = (self.nodes[id].value, self.nodes[n].value);
                    if out_of_order(a, b) {
                        self.nodes[id].value = b;
                        self.nodes[n].value = a;
                        swapped = true;
                    }
                }
                current = next;
            }
        }
    }

    /// Moves the first digit to the end.
    pub fn shift_left(&mut self) {
        if self.len <= 1 {
            return;
        }
        if let Some(first) = self.pop_front() {
            self.push(first);
        }
    }

    /// Moves the last digit to the front.
    pub fn shift_right(&mut self) {
        if self.len <= 1 {
            return;
        }
        if let Some(last) = self.pop_back() {
            self.push_front(last);
        }
    }
}

// 实现迭代
impl DigitList {
    /// Most significant digit first. Use `.rev()` to walk from the least significant digit.
    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, front: self.head, back: self.tail, remaining: self.len }
    }

    /// Iterates over the digits from `index` to the end.
    pub fn iter_from(&self, index: usize) -> Result<Iter<'_>, DigitError> {
        self.check_position_index(index)?;
        let front = if index == self.len { None } else { Some(self.node(index)?) };
        Ok(Iter { list: self, front, back: self.tail, remaining: self.len - index })
    }

    /// A cursor on the first digit, or on the "ghost" position of an empty list.
    pub fn cursor_mut(&mut self) -> CursorMut<'_> {
        let current = self.head;
        let index = if current.is_some() { 0 } else { self.len };
        CursorMut { list: self, current, index }
    }

    /// A cursor on the digit at `index`; `index == len()` puts it on the ghost position.
    pub fn cursor_mut_at(&mut self, index: usize) -> Result<CursorMut<'_>, DigitError> {
        self.check_position_index(index)?;
        let current = if index == self.len { None } else { Some(self.node(index)?) };
        Ok(CursorMut { list: self, current, index })
    }
}

#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a DigitList,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = &self.list.nodes[id];
        self.front = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Digit> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = &self.list.nodes[id];
        self.back = node.prev;
        self.remaining -= 1;
        Some(node.value)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a DigitList {
    type Item = Digit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct IntoIter(DigitList);

impl Iterator for IntoIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Digit> {
        self.0.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for DigitList {
    type Item = Digit;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Digit> for DigitList {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut list = DigitList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Digit> for DigitList {
    fn extend<I: IntoIterator<Item = Digit>>(&mut self, iter: I) {
        for digit in iter {
            self.push(digit);
        }
    }
}

/// A cursor that can edit the list while walking it.
///
/// Besides the digits, the cursor can rest on a "ghost" position between the last
/// and the first digit, where [`current`](CursorMut::current) is `None`.
/// Moving past either end lands on the ghost, moving again wraps around.
pub struct CursorMut<'a> {
    list: &'a mut DigitList,
    current: Link,
    index: usize,
}

impl<'a> CursorMut<'a> {
    pub fn current(&self) -> Option<Digit> {
        self.current.map(|id| self.list.nodes[id].value)
    }

    /// `None` on the ghost position.
    pub fn index(&self) -> Option<usize> {
        self.current.map(|_| self.index)
    }

    pub fn move_next(&mut self) {
        match self.current {
            None => {
                self.current = self.list.head;
                self.index = 0;
            }
            Some(id) => {
                self.current = self.list.nodes[id].next;
                self.index += 1;
            }
        }
    }

    pub fn move_prev(&mut self) {
        match self.current {
            None => {
                self.current = self.list.tail;
                self.index = self.list.len.saturating_sub(1);
            }
            Some(id) => {
                self.current = self.list.nodes[id].prev;
                self.index = match self.current {
                    Some(_) => self.index - 1,
                    None => self.list.len,
                };
            }
        }
    }

    /// Replaces the current digit, returning the old one. Does nothing on the ghost.
    pub fn set_current(&mut self, digit: Digit) -> Option<Digit> {
        let id = self.current?;
        Some(std::mem::replace(&mut self.list.nodes[id].value, digit))
    }

    /// Inserts before the current digit; on the ghost this appends to the list.
    pub fn insert_before(&mut self, digit: Digit) {
        match self.current {
            None => self.list.push(digit),
            Some(id) => { self.list.link_before(digit, id); },
        }
        self.index += 1;
    }

    /// Removes the current digit and moves to the one after it.
    pub fn remove_current(&mut self) -> Option<Digit> {
        let id = self.current?;
        self.current = self.list.nodes[id].next;
        Some(self.list.unlink(id))
    }
}

// 实现比较
impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitList {}

impl PartialEq<[Digit]> for DigitList {
    fn eq(&self, other: &[Digit]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<Vec<Digit>> for DigitList {
    fn eq(&self, other: &Vec<Digit>) -> bool {
        *self == other[..]
    }
}

impl<const N: usize> PartialEq<[Digit; N]> for DigitList {
    fn eq(&self, other: &[Digit; N]) -> bool {
        *self == other[..]
    }
}

impl Hash for DigitList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for digit in self.iter() {
            state.write_u8(digit);
        }
    }
}

impl Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
fn list(digits: &[Digit]) -> DigitList {
    digits.iter().copied().collect()
}

#[test]
fn test_push_and_get() {
    let mut a = DigitList::new();
    assert!(a.is_empty());
    a.push(1);
    a.push(2);
    a.push_front(0);
    assert_eq!(a.len(), 3);
    assert_eq!(a.get(0), Ok(0));
    assert_eq!(a.get(2), Ok(2));
    assert_eq!(a.get(3), Err(DigitError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(a.first(), Some(0));
    assert_eq!(a.last(), Some(2));
}

#[test]
fn test_insert_remove() {
    let mut a = list(&[1, 2, 3, 4, 5]);
    a.insert(2, 9).unwrap();
    assert_eq!(a.get(2), Ok(9));
    assert_eq!(a, [1, 2, 9, 3, 4, 5]);
    a.insert(6, 7).unwrap();
    a.insert(0, 8).unwrap();
    assert_eq!(a, [8, 1, 2, 9, 3, 4, 5, 7]);
    assert_eq!(a.insert(9, 1), Err(DigitError::IndexOutOfRange { index: 9, len: 8 }));

    assert_eq!(a.remove(3), Ok(9));
    assert_eq!(a.remove(0), Ok(8));
    assert_eq!(a.remove(5), Ok(7));
    assert_eq!(a, [1, 2, 3, 4, 5]);
    assert_eq!(a.remove(5), Err(DigitError::IndexOutOfRange { index: 5, len: 5 }));
    // both directions still agree after unlinking
    assert_eq!(a.iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_slot_reuse() {
    let mut a = list(&[1, 2, 3]);
    a.remove(1).unwrap();
    a.push(4);
    a.insert(0, 5).unwrap();
    assert_eq!(a, [5, 1, 3, 4]);
    assert_eq!(a.nodes.len(), 4);
    while a.pop_back().is_some() {}
    assert!(a.is_empty());
    assert_eq!(a.head, None);
    assert_eq!(a.tail, None);
}

#[test]
fn test_set() {
    let mut a = list(&[1, 2, 3]);
    assert_eq!(a.set(1, 15), Ok(2));
    assert_eq!(a, [1, 15, 3]);
    assert_eq!(a.set(3, 0), Err(DigitError::IndexOutOfRange { index: 3, len: 3 }));
}

#[test]
fn test_swap() {
    let mut a = list(&[1, 2, 3]);
    assert!(a.swap(0, 2));
    assert_eq!(a, [3, 2, 1]);
    assert!(a.swap(1, 1));
    assert!(!a.swap(0, 3));
    assert!(!a.swap(7, 7));
    assert_eq!(a, [3, 2, 1]);
}

#[test]
fn test_sort() {
    let mut a = list(&[3, 1, 15, 0, 9, 1]);
    a.sort_ascending();
    assert_eq!(a, [0, 1, 1, 3, 9, 15]);
    a.sort_descending();
    assert_eq!(a, [15, 9, 3, 1, 1, 0]);

    let mut b = DigitList::new();
    b.sort_ascending();
    assert!(b.is_empty());
}

#[test]
fn test_shift() {
    let mut a = list(&[1, 2, 3, 4]);
    a.shift_left();
    assert_eq!(a, [2, 3, 4, 1]);
    a.shift_right();
    assert_eq!(a, [1, 2, 3, 4]);
    a.shift_right();
    assert_eq!(a, [4, 1, 2, 3]);

    let mut b = list(&[7]);
    b.shift_left();
    assert_eq!(b, [7]);
    b.shift_right();
    assert_eq!(b, [7]);
}

#[test]
fn test_iter() {
    let a = list(&[1, 2, 3, 4]);
    let mut it = a.iter();
    assert_eq!(it.len(), 4);
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next_back(), Some(3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
    // restartable
    assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(a.iter_from(2).unwrap().collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(a.iter_from(4).unwrap().count(), 0);
    assert!(a.iter_from(5).is_err());
    assert_eq!(a.clone().into_iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
}

#[test]
fn test_cursor() {
    let mut a = list(&[1, 2, 3]);
    let mut cursor = a.cursor_mut_at(1).unwrap();
    assert_eq!(cursor.current(), Some(2));
    assert_eq!(cursor.remove_current(), Some(2));
    assert_eq!(cursor.current(), Some(3));
    assert_eq!(cursor.index(), Some(1));
    cursor.insert_before(8);
    assert_eq!(cursor.index(), Some(2));
    cursor.move_next();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.index(), None);
    cursor.insert_before(9);
    cursor.move_prev();
    assert_eq!(cursor.current(), Some(9));
    assert_eq!(cursor.index(), Some(3));
    cursor.set_current(4);
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(1));
    cursor.move_prev();
    assert_eq!(cursor.current(), None);
    assert_eq!(a, [1, 8, 3, 4]);
}

#[test]
fn test_remove_values() {
    let mut a = list(&[1, 0, 2, 0, 3, 1]);
    assert_eq!(a.index_of(0), Some(1));
    assert_eq!(a.last_index_of(1), Some(5));
    assert!(!a.contains(9));
    assert!(a.remove_value(1));
    assert_eq!(a, [0, 2, 0, 3, 1]);
    assert!(a.remove_all(&[0, 3]));
    assert_eq!(a, [2, 1]);
    assert!(!a.remove_all(&[5]));
    assert!(a.retain(|d| d > 1));
    assert_eq!(a, vec![2]);
}

#[test]
fn test_eq_ignores_layout() {
    let mut a = list(&[9, 1, 2]);
    a.remove(0).unwrap();
    let b = list(&[1, 2]);
    assert_eq!(a, b);
    assert_eq!(format!("{:?}", a), "[1, 2]");
    a.clear();
    assert_eq!(a, DigitList::new());
}
