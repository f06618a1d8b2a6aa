use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use shared::forms::FormState;

/// Shared handle to a form's state, passed to inputs and the editor the way
/// a form library's `control` object is.
#[derive(Debug, Clone)]
pub struct FormControl(Rc<RefCell<FormState>>);

impl FormControl {
    pub fn new(form: FormState) -> Self {
        Self(Rc::new(RefCell::new(form)))
    }

    pub fn borrow(&self) -> Ref<'_, FormState> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, FormState> {
        self.0.borrow_mut()
    }
}

impl PartialEq for FormControl {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
