use classic_dsa::{BinarySearchTree, LinkedList, MaxHeap, PriorityQueue, Queue, Stack};
use proptest::prelude::*;
use std::collections::{BinaryHeap, VecDeque};

#[derive(Debug, Clone)]
enum Operation {
    Push(i16),
    Pop,
    Peek,
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => any::<i16>().prop_map(Operation::Push),
            2 => Just(Operation::Pop),
            1 => Just(Operation::Peek),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn test_queue_matches_vec_deque(ops in operations()) {
        let mut model = VecDeque::new();
        let mut queue = Queue::new();
        for op in ops {
            match op {
                Operation::Push(v) => {
                    model.push_back(v);
                    queue.enqueue(v);
                }
                Operation::Pop => prop_assert_eq!(queue.dequeue(), model.pop_front()),
                Operation::Peek => prop_assert_eq!(queue.peek(), model.front()),
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
        }
    }

    #[test]
    fn test_stack_matches_vec(ops in operations()) {
        let mut model = Vec::new();
        let mut stack = Stack::new();
        for op in ops {
            match op {
                Operation::Push(v) => {
                    model.push(v);
                    stack.push(v);
                }
                Operation::Pop => prop_assert_eq!(stack.pop(), model.pop()),
                Operation::Peek => prop_assert_eq!(stack.peek(), model.last()),
            }
            prop_assert_eq!(stack.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn test_max_heap_matches_binary_heap(ops in operations()) {
        let mut model = BinaryHeap::new();
        let mut heap = MaxHeap::new();
        for op in ops {
            match op {
                Operation::Push(v) => {
                    model.push(v);
                    heap.insert(v);
                }
                Operation::Pop => prop_assert_eq!(heap.delete(), model.pop()),
                Operation::Peek => prop_assert_eq!(heap.peek(), model.peek()),
            }
            prop_assert_eq!(heap.len(), model.len());
        }
        prop_assert_eq!(heap.into_sorted_vec(), model.into_sorted_vec());
    }

    #[test]
    fn test_priority_queue_min_drains_sorted(values in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = PriorityQueue::from_elements(values.clone(), |a: &i32, b: &i32| a < b);
        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn test_bst_in_order_is_sorted(values in proptest::collection::vec(any::<u16>(), 0..300)) {
        let tree: BinarySearchTree<_> = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();

        let in_order: Vec<_> = tree.in_order().into_iter().copied().collect();
        prop_assert_eq!(&in_order, &expected);
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(tree.min(), expected.first());
        prop_assert_eq!(tree.max(), expected.last());
        prop_assert!(tree.height() <= values.len());
        for v in &values {
            prop_assert!(tree.contains(v));
        }
    }

    #[test]
    fn test_linked_list_matches_vec(
        ops in proptest::collection::vec((0u8..4, any::<u8>()), 0..150)
    ) {
        let mut model: Vec<u8> = Vec::new();
        let mut list = LinkedList::new();
        for (kind, v) in ops {
            match kind {
                0 => {
                    model.push(v);
                    list.append(v);
                }
                1 => {
                    model.insert(0, v);
                    list.prepend(v);
                }
                2 => {
                    let removed = model.iter().position(|x| *x == v).map(|i| model.remove(i));
                    prop_assert_eq!(list.delete(&v), removed.is_some());
                }
                _ => {
                    let front = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), front);
                }
            }
            prop_assert!(list.iter().eq(model.iter()));
            prop_assert_eq!(list.back(), model.last());
        }
    }
}
