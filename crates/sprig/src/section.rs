//! Lazy discovery of the section tree.
//!
//! A test case never declares its sections up front. Each time the body
//! reaches a `section!` site, the site is looked up (or inserted) in the
//! [`SectionTree`] owned by the running test case, and a [`SectionGuard`]
//! decides whether to enter it. The tree outlives a single invocation, so the
//! `done` markers recorded here steer the next invocation towards the next
//! unvisited path.

use crate::test::Location;
use indexmap::IndexMap;
use std::{cell::RefCell, rc::Rc, thread};

pub(crate) type SectionKey = usize;

/// The persistent record of a section declaration site.
#[derive(Debug)]
pub(crate) struct SectionNode {
    pub(crate) location: Location,
    pub(crate) description: &'static str,
    pub(crate) parent: Option<SectionKey>,
    pub(crate) children: Vec<SectionKey>,
    pub(crate) done: bool,
    pub(crate) entered_this_run: bool,
    pub(crate) previous_active: Option<SectionKey>,
}

/// The table of sections discovered so far for one test case.
#[derive(Debug, Default)]
pub(crate) struct SectionTree {
    nodes: IndexMap<Location, SectionNode>,
    roots: Vec<SectionKey>,
}

impl SectionTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up the node declared at `location`, registering it under `parent`
    /// the first time the site is reached.
    pub(crate) fn discover(
        &mut self,
        location: Location,
        description: &'static str,
        parent: Option<SectionKey>,
    ) -> SectionKey {
        if let Some(key) = self.nodes.get_index_of(&location) {
            return key;
        }

        let (key, _) = self.nodes.insert_full(
            location,
            SectionNode {
                location,
                description,
                parent,
                children: vec![],
                done: false,
                entered_this_run: false,
                previous_active: None,
            },
        );
        match parent {
            Some(parent) => self.node_mut(parent).children.push(key),
            None => self.roots.push(key),
        }
        log::trace!("discovered section {:?} at {}", description, location);

        key
    }

    pub(crate) fn node(&self, key: SectionKey) -> &SectionNode {
        &self.nodes[key]
    }

    pub(crate) fn node_mut(&mut self, key: SectionKey) -> &mut SectionNode {
        &mut self.nodes[key]
    }

    fn children_done(&self, key: SectionKey) -> bool {
        self.node(key)
            .children
            .iter()
            .all(|&child| self.node(child).done)
    }

    /// Return whether every top-level section discovered so far is done.
    ///
    /// A tree without any sections is trivially exhausted.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.roots.iter().all(|&root| self.node(root).done)
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &SectionNode> + '_ {
        self.nodes.values()
    }
}

/// The traversal cursor of a single invocation.
#[derive(Debug, Default)]
pub(crate) struct ExecutionState {
    pub(crate) path_completed: bool,
    active: Vec<SectionKey>,
}

impl ExecutionState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The deepest currently entered section.
    pub(crate) fn cursor(&self) -> Option<SectionKey> {
        self.active.last().copied()
    }

    /// The active chain, root first.
    pub(crate) fn active_chain(&self) -> &[SectionKey] {
        &self.active[..]
    }

    fn push(&mut self, key: SectionKey) {
        self.active.push(key);
    }

    /// Move the cursor back to `previous`, dropping every entry after it.
    fn restore(&mut self, previous: Option<SectionKey>) {
        let len = match previous {
            Some(previous) => match self.active.iter().rposition(|&key| key == previous) {
                Some(pos) => pos + 1,
                None => return,
            },
            None => 0,
        };
        self.active.truncate(len);
    }
}

/// Decide whether the section declared at `location` is entered on the
/// current invocation and return the guard that releases it.
pub(crate) fn enter(
    tree: &Rc<RefCell<SectionTree>>,
    state: &Rc<RefCell<ExecutionState>>,
    location: Location,
    description: &'static str,
) -> SectionGuard {
    let entered;
    let key;
    {
        let mut tree = tree.borrow_mut();
        let mut state = state.borrow_mut();

        key = tree.discover(location, description, state.cursor());

        let previous = state.cursor();
        let node = tree.node_mut(key);
        debug_assert!(!node.entered_this_run, "section {} is re-entered", location);
        entered = !node.done && !state.path_completed;
        if entered {
            node.previous_active = previous;
            node.entered_this_run = true;
            state.push(key);
            log::trace!("enter section {:?}", description);
        } else {
            log::trace!(
                "skip section {:?} (done = {}, path completed = {})",
                description,
                node.done,
                state.path_completed
            );
        }
    }

    SectionGuard {
        tree: tree.clone(),
        state: state.clone(),
        key,
        entered,
        finished: false,
    }
}

/// The scoped controller of a section site.
///
/// The bookkeeping for leaving the section runs when the guard is dropped,
/// so it happens on a normal exit of the section body as well as while a
/// fault unwinds through it.
#[doc(hidden)] // private API
#[must_use]
pub struct SectionGuard {
    tree: Rc<RefCell<SectionTree>>,
    state: Rc<RefCell<ExecutionState>>,
    key: SectionKey,
    entered: bool,
    finished: bool,
}

impl SectionGuard {
    /// Return whether the body of the section should run.
    #[inline]
    pub fn entered(&self) -> bool {
        self.entered
    }

    /// Leave the section after its body has run to the end.
    ///
    /// A guard dropped without calling this method is treated as an early
    /// exit, e.g. a fault, `return` or `?` inside the body.
    #[inline]
    pub fn finish(mut self) {
        self.finished = true;
    }

    fn leave(&mut self, unwinding: bool) {
        let (mut tree, mut state) =
            match (self.tree.try_borrow_mut(), self.state.try_borrow_mut()) {
                (Ok(tree), Ok(state)) => (tree, state),
                _ => {
                    log::error!("the section state is busy while leaving a section");
                    return;
                }
            };

        let node = tree.node_mut(self.key);

        // The chain is kept intact while a fault unwinds so that it can be reported.
        if node.entered_this_run && !unwinding {
            state.restore(node.previous_active);
        }
        node.entered_this_run = false;

        if node.done {
            return;
        }

        if !state.path_completed {
            // first completion of a leaf path.
            state.path_completed = true;
            node.done = true;
            log::trace!("section {:?} completed a path", node.description);
            return;
        }

        // A descendant has completed the path on this invocation. The section
        // is exhausted only if its body reached the end, since the sites after
        // an early exit have not been discovered yet.
        if self.finished && tree.children_done(self.key) {
            let node = tree.node_mut(self.key);
            node.done = true;
            log::trace!("section {:?} exhausted", node.description);
        }
    }
}

impl Drop for SectionGuard {
    fn drop(&mut self) {
        if self.entered {
            self.leave(thread::panicking());
        }
    }
}
