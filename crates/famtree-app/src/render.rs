//! Renderer boundary: the tree-layout widget consumed as an external
//! collaborator. The core only ever commands a full re-render with a
//! focus id and reads back the currently centered person.

use famtree_core::TreeSnapshot;

pub trait Renderer {
    /// Re-renders the whole tree, centering on `focus` when given.
    fn render(&mut self, snapshot: &TreeSnapshot, focus: Option<&str>);

    /// Id of the person the widget is currently centered on.
    fn current_focus(&self) -> Option<String>;
}
