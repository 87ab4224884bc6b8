use crate::{Id, Node};

/// One element reached by [`walk`].
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    pub id: Id,
    pub node: &'a Node,
    /// Number of element ancestors.
    pub depth: usize,
    pub parent: Option<Id>,
}

/// Pre-order walk over the elements of a forest; text nodes are skipped.
///
/// Ids are handed out in visit order starting at 0, which is what makes [`Id`] a stable
/// handle for a given forest.
pub fn walk(forest: &[Node]) -> Walk<'_> {
    Walk {
        stack: forest.iter().rev().map(|node| (node, 0, None)).collect(),
        next: 0,
    }
}

pub struct Walk<'a> {
    stack: Vec<(&'a Node, usize, Option<Id>)>,
    next: u32,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, parent)) = self.stack.pop() {
            let Node::Element { children, .. } = node else {
                continue;
            };
            let id = Id(self.next);
            self.next = self.next.wrapping_add(1);
            for child in children.iter().rev() {
                self.stack.push((child, depth + 1, Some(id)));
            }
            return Some(Visit {
                id,
                node,
                depth,
                parent,
            });
        }
        None
    }
}

pub fn find_node_by_id(forest: &[Node], id: Id) -> Option<&Node> {
    walk(forest)
        .find(|visit| visit.id == id)
        .map(|visit| visit.node)
}

/// Number of elements in the forest, self-closed ones included.
pub fn node_count(forest: &[Node]) -> usize {
    walk(forest).count()
}

/// Ids of the element's ancestors, nearest first.
pub fn ancestors_of(forest: &[Node], id: Id) -> Vec<Id> {
    let mut parents = Vec::new();
    for visit in walk(forest) {
        parents.push(visit.parent);
        if visit.id == id {
            break;
        }
    }
    let mut out = Vec::new();
    let mut current = parents.get(id.0 as usize).copied().flatten();
    while let Some(parent) = current {
        out.push(parent);
        current = parents[parent.0 as usize];
    }
    out
}
