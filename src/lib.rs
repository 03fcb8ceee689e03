pub mod dom;
pub mod handle;
pub mod ident;
pub mod literal;
pub mod member;

pub use dom::{Decl, DeclError, EmitError, Interface, MemberKind, Registry, Slot, View};
pub use handle::Handle;
pub use ident::IdentError;
pub use literal::Literal;
pub use member::Member;
