//! A quick look at each container and what its `Display` output looks like.

use anyhow::{Context, Result};
use classic_dsa::{
    BinarySearchTree, BinaryTreeNode, LinkedList, MaxHeap, PriorityQueue, Queue, Stack, Tree,
};

fn main() -> Result<()> {
    let mut stack: Stack<_> = ["plate 1", "plate 2"].into_iter().collect();
    stack.push("plate 3");
    println!("{stack}");
    println!("popped {:?}\n", stack.pop());

    let mut queue: Queue<_> = ["Ray", "Brian", "Eric"].into_iter().collect();
    queue.enqueue("Kelvin");
    let first = queue.dequeue().context("queue was just filled")?;
    println!("served {first}, next up {:?}\n", queue.peek());

    let mut list: LinkedList<_> = (1..=3).collect();
    list.prepend(0);
    list.delete(&2);
    println!("list {list}\n");

    let mut heap = MaxHeap::from_elements([1, 12, 3, 4, 1, 6, 8, 7]);
    heap.insert(20);
    println!("heap {heap:?}, max {:?}", heap.peek());
    println!("sorted {:?}\n", heap.into_sorted_vec());

    let mut tasks = PriorityQueue::min();
    for deadline in [30, 5, 12] {
        tasks.enqueue(deadline);
    }
    println!("earliest deadline {:?}\n", tasks.dequeue());

    let bst: BinarySearchTree<_> = [7, 1, 9, 0, 5, 8].into_iter().collect();
    println!("bst {bst}");
    println!("contains 5? {}  height {}\n", bst.contains(&5), bst.height());

    let expression = BinaryTreeNode::with_children(
        '*',
        Some(BinaryTreeNode::with_children(
            '+',
            Some(BinaryTreeNode::new('3')),
            Some(BinaryTreeNode::new('2')),
        )),
        Some(BinaryTreeNode::new('4')),
    );
    let mut post = String::new();
    expression.post_order_with(|c| post.push(*c));
    println!("postfix {post}\n");

    let menu = Tree::with_children(
        "beverages",
        vec![
            Tree::with_children("hot", vec![Tree::new("tea"), Tree::new("coffee")]),
            Tree::with_children("cold", vec![Tree::new("soda"), Tree::new("milk")]),
        ],
    );
    let hot = menu.find(&"hot").context("menu has a hot section")?;
    println!("menu has {} items, hot drinks: {}", menu.count(), hot.children().len());

    Ok(())
}
