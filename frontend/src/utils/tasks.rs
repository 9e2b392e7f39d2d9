use futures::future::{abortable, AbortHandle};
use std::{cell::RefCell, collections::HashMap, future::Future, rc::Rc};

/// Async work owned by a mounted view.
///
/// Every tracked future can be aborted at once with [`TaskScope::cancel_all`],
/// which the owning view calls from `on_cleanup`. A cancelled scope refuses
/// new work, so completions can never land after teardown.
#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Rc<RefCell<ScopeInner>>,
}

#[derive(Default)]
struct ScopeInner {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
    closed: bool,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `fut` so it stops at its next poll once the scope is cancelled.
    /// Returns `None` when the scope is already closed.
    pub fn track<F>(&self, fut: F) -> Option<impl Future<Output = ()> + 'static>
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, handle) = abortable(fut);
        let id = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return None;
            }
            inner.next_id = inner.next_id.wrapping_add(1);
            let id = inner.next_id;
            inner.handles.insert(id, handle);
            id
        };
        let scope = Rc::clone(&self.inner);
        Some(async move {
            if task.await.is_err() {
                log::debug!("task {} aborted", id);
            }
            scope.borrow_mut().handles.remove(&id);
        })
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if let Some(task) = self.track(fut) {
            leptos::spawn_local(task);
        }
    }

    pub fn cancel_all(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.closed = true;
        for (_, handle) in inner.handles.drain() {
            handle.abort();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inner.borrow().handles.len()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }
}
