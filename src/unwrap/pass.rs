//! Tree traversal for the unwrap pass.

use crate::dom::{Dom, NodeId};

/// Walk the tree bottom-up and call `visitor` on every element.
///
/// The element list is snapshotted in post-order before any visit, so a
/// visitor may splice the element it is handed without disturbing the walk:
/// its children were already visited, and whatever it moves into its parent
/// is seen again when the parent's turn comes.
pub fn walk_elements_bottom_up<F>(dom: &mut Dom, mut visitor: F)
where
    F: FnMut(&mut Dom, NodeId),
{
    for id in post_order_elements(dom, dom.document()) {
        visitor(dom, id);
    }
}

/// Elements below `root` in post-order (children before parents).
///
/// Iterative, so nesting depth is bounded by memory rather than the stack.
fn post_order_elements(dom: &Dom, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            if dom.is_element(id) {
                order.push(id);
            }
            continue;
        }

        stack.push((id, true));
        let start = stack.len();
        stack.extend(dom.children(id).map(|child| (child, false)));
        stack[start..].reverse();
    }

    order
}
