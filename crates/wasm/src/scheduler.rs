use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use folio_core::schedule::{Scheduler, Task, TaskId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::handle_error;

type Callback = Closure<dyn FnMut()>;

/// `setTimeout`-backed scheduler.
///
/// Each pending task owns its JS callback. A fired callback is parked in
/// `retired` and only dropped when the next callback fires, never while it
/// is still on the stack.
pub struct TimeoutScheduler {
    window: Window,
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: Cell<u64>,
    live: RefCell<HashMap<u64, (i32, Callback)>>,
    retired: RefCell<Vec<Callback>>,
}

impl TimeoutScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            inner: Rc::new(Inner::default()),
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let inner = Rc::clone(&self.inner);
        let mut task = Some(task);
        let callback = Callback::new(move || {
            inner.retired.borrow_mut().clear();
            let fired = inner.live.borrow_mut().remove(&id);
            if let Some((_, closure)) = fired {
                inner.retired.borrow_mut().push(closure);
            }
            if let Some(task) = task.take() {
                task();
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                self.inner.live.borrow_mut().insert(id, (handle, callback));
            }
            Err(e) => handle_error("timer scheduling", &e),
        }
        TaskId(id)
    }

    fn cancel(&self, id: TaskId) {
        let removed = self.inner.live.borrow_mut().remove(&id.0);
        if let Some((handle, _callback)) = removed {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
