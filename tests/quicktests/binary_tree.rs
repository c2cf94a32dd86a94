use ds_tree::binary_tree::BinaryTree;
use ds_tree::node::{Node, Side};
use quickcheck_macros::quickcheck;

/// Builds a complete tree holding `xs` in level order: the children of the node at index `i`
/// sit at `2i + 1` and `2i + 2`.
fn complete_tree(xs: &[u16]) -> BinaryTree<u16> {
    let mut tree = BinaryTree::new();
    for (i, &x) in xs.iter().enumerate() {
        if i == 0 {
            tree.set_root(Node::new(x)).unwrap();
            continue;
        }

        // Walk the bits of `i + 1` below the leading one: 0 = left, 1 = right.
        let position = i + 1;
        let depth = (usize::BITS - position.leading_zeros() - 1) as usize;
        let mut path: Vec<Side> = (0..depth)
            .rev()
            .map(|bit| {
                if (position >> bit) & 1 == 0 {
                    Side::Left
                } else {
                    Side::Right
                }
            })
            .collect();
        let side = path.pop().unwrap();
        match side {
            Side::Left => tree.attach_left(&path, Node::new(x)).unwrap(),
            Side::Right => tree.attach_right(&path, Node::new(x)).unwrap(),
        }
    }
    tree
}

#[quickcheck]
fn levelorder_of_a_complete_tree_is_insertion_order(xs: Vec<u16>) -> bool {
    let tree = complete_tree(&xs);
    let mut visited = Vec::new();
    tree.levelorder(|x| visited.push(*x));

    visited == xs && tree.len() == xs.len()
}

#[quickcheck]
fn height_of_a_complete_tree_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree = complete_tree(&xs);
    let expected = (usize::BITS - xs.len().leading_zeros()) as usize;

    tree.height() == expected
}

#[quickcheck]
fn detaching_the_root_children_keeps_only_the_root(xs: Vec<u16>) -> bool {
    let mut tree = complete_tree(&xs);
    let left = tree.detach_left(&[]);
    let right = tree.detach_right(&[]);

    if xs.is_empty() {
        return left.is_err() && right.is_err();
    }

    let mut visited = Vec::new();
    tree.preorder_iterative(|x| visited.push(*x));
    visited == xs[..1]
        && left.unwrap().map(|node| *node.payload()) == xs.get(1).copied()
        && right.unwrap().map(|node| *node.payload()) == xs.get(2).copied()
}

#[quickcheck]
fn clear_frees_every_payload(xs: Vec<u16>) -> bool {
    let mut tree = complete_tree(&xs);
    let mut freed = Vec::new();
    tree.clear_with(|x| freed.push(x));
    freed.sort_unstable();

    let mut expected = xs;
    expected.sort_unstable();
    freed == expected && tree.is_empty()
}
