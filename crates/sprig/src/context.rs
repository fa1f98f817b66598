use crate::{
    section::{self, ExecutionState, SectionGuard, SectionTree},
    test::{Location, TestDesc},
};
use std::{cell::RefCell, marker::PhantomData, rc::Rc};

/// Context values while running the test case.
///
/// A fresh context is handed to the test function on every invocation.
/// It gives access to the sections of the test case through `section!()`.
pub struct Context<'a> {
    desc: &'a TestDesc,
    tree: Rc<RefCell<SectionTree>>,
    state: Rc<RefCell<ExecutionState>>,
    _marker: PhantomData<fn(&'a ()) -> &'a ()>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        desc: &'a TestDesc,
        tree: Rc<RefCell<SectionTree>>,
        state: Rc<RefCell<ExecutionState>>,
    ) -> Self {
        Self {
            desc,
            tree,
            state,
            _marker: PhantomData,
        }
    }

    /// Return the metadata of the running test case.
    #[inline]
    pub fn desc(&self) -> &TestDesc {
        self.desc
    }

    /// Return the description of the innermost section currently executing.
    pub fn current_section(&self) -> Option<&'static str> {
        let key = self.state.borrow().cursor()?;
        Some(self.tree.borrow().node(key).description)
    }

    /// Return the descriptions of the sections currently entered, outermost first.
    pub fn active_sections(&self) -> Vec<&'static str> {
        let tree = self.tree.borrow();
        self.state
            .borrow()
            .active_chain()
            .iter()
            .map(|&key| tree.node(key).description)
            .collect()
    }

    #[doc(hidden)] // private API
    pub fn enter_section(&mut self, location: Location, description: &'static str) -> SectionGuard {
        section::enter(&self.tree, &self.state, location, description)
    }
}
