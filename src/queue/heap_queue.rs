use std::collections::BinaryHeap;

use super::{FrontierElement, FrontierQueue};

#[derive(Clone, Default)]
pub struct HeapQueue {
    queue: BinaryHeap<FrontierElement>,
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl FrontierQueue for HeapQueue {
    fn push(&mut self, element: FrontierElement) {
        self.queue.push(element)
    }

    fn pop(&mut self) -> Option<FrontierElement> {
        self.queue.pop()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
