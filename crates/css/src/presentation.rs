use html::Id;
use std::collections::BTreeMap;

// Per-element view state kept outside the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeFlags {
    pub selected: bool, // matched the last selector
    pub opened: bool,   // children shown
}

impl NodeFlags {
    fn is_default(self) -> bool {
        self == NodeFlags::default()
    }
}

/// Presentation overlay for one forest, keyed by the pre-order [`Id`]s of
/// [`html::traverse::walk`].
///
/// Only elements with a flag set are stored, so two overlays compare equal exactly when
/// they show the same state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    flags: BTreeMap<Id, NodeFlags>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self, id: Id) -> NodeFlags {
        self.flags.get(&id).copied().unwrap_or_default()
    }

    pub fn set_flags(&mut self, id: Id, flags: NodeFlags) {
        if flags.is_default() {
            self.flags.remove(&id);
        } else {
            self.flags.insert(id, flags);
        }
    }

    pub fn mark_selected(&mut self, id: Id) {
        self.flags.entry(id).or_default().selected = true;
    }

    pub fn mark_opened(&mut self, id: Id) {
        self.flags.entry(id).or_default().opened = true;
    }

    /// Flips `opened` for one element and returns the new value.
    pub fn toggle_opened(&mut self, id: Id) -> bool {
        let mut flags = self.flags(id);
        flags.opened = !flags.opened;
        self.set_flags(id, flags);
        flags.opened
    }

    pub fn is_selected(&self, id: Id) -> bool {
        self.flags(id).selected
    }

    pub fn is_opened(&self, id: Id) -> bool {
        self.flags(id).opened
    }

    /// Selected elements in document order.
    pub fn selected_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.flags
            .iter()
            .filter(|(_, flags)| flags.selected)
            .map(|(&id, _)| id)
    }

    pub fn opened_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.flags
            .iter()
            .filter(|(_, flags)| flags.opened)
            .map(|(&id, _)| id)
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
