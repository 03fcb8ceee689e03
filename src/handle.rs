use std::fmt;
use std::rc::Rc;

/// An opaque handle to a runtime value, carried as the JavaScript
/// expression that denotes it (`"evt"`, `"document"`, ...). Handles are
/// immutable; cloning shares the underlying allocation.
#[derive(Clone, Debug)]
pub struct Handle(Rc<str>);

impl Handle {
    pub fn new(expr: impl Into<Rc<str>>) -> Handle {
        Handle(expr.into())
    }

    /// The expression this handle stands for.
    pub fn expr(&self) -> &str {
        &self.0
    }

    /// Identity, not text equality: true only for clones of one handle.
    pub fn same(a: &Handle, b: &Handle) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl From<&str> for Handle {
    fn from(expr: &str) -> Handle {
        Handle::new(expr)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr())
    }
}
