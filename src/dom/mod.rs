mod event;
mod keyevent;
mod mouseevent;
mod range;
mod uievent;

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::handle::Handle;
use crate::ident::IdentError;
use crate::literal::Literal;
use crate::member::Member;

/// Where a declared member lives on its interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Addressed directly on the instance, or on the interface global.
    Own,
    /// Qualified by the interface's `prototype` member.
    Prototype,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MemberKind {
    Field { readonly: bool },
    Method { arity: usize },
    Const { value: f64 },
}

/// One row of an interface's member table.
#[derive(Clone, Debug)]
pub struct Decl {
    pub name: &'static str,
    pub slot: Slot,
    pub kind: MemberKind,
}

impl Decl {
    pub fn field(name: &'static str) -> Decl {
        Decl {
            name,
            slot: Slot::Own,
            kind: MemberKind::Field { readonly: true },
        }
    }

    pub fn method(name: &'static str, arity: usize) -> Decl {
        Decl {
            name,
            slot: Slot::Own,
            kind: MemberKind::Method { arity },
        }
    }

    pub fn proto_method(name: &'static str, arity: usize) -> Decl {
        Decl {
            name,
            slot: Slot::Prototype,
            kind: MemberKind::Method { arity },
        }
    }

    pub fn constant(name: &'static str, value: f64) -> Decl {
        Decl {
            name,
            slot: Slot::Own,
            kind: MemberKind::Const { value },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeclError {
    Name(IdentError),
    Duplicate {
        interface: &'static str,
        member: &'static str,
    },
}

impl From<IdentError> for DeclError {
    fn from(e: IdentError) -> Self {
        DeclError::Name(e)
    }
}

impl fmt::Display for DeclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclError::Name(e) => write!(f, "{e}"),
            DeclError::Duplicate { interface, member } => {
                write!(f, "{interface} declares member {member:?} twice")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EmitError {
    UnknownMember {
        interface: &'static str,
        member: String,
    },
    NotCallable {
        interface: &'static str,
        member: String,
    },
    NotAssignable {
        interface: &'static str,
        member: String,
    },
    Arity {
        interface: &'static str,
        member: String,
        expected: usize,
        got: usize,
    },
    NotConstructible {
        interface: &'static str,
    },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::UnknownMember { interface, member } => {
                write!(f, "{interface} has no member {member:?}")
            }
            EmitError::NotCallable { interface, member } => {
                write!(f, "{interface}.{member} is not a method")
            }
            EmitError::NotAssignable { interface, member } => {
                write!(f, "{interface}.{member} is not assignable")
            }
            EmitError::Arity {
                interface,
                member,
                expected,
                got,
            } => {
                write!(
                    f,
                    "{interface}.{member} expects {expected} arguments, got {got}"
                )
            }
            EmitError::NotConstructible { interface } => {
                write!(f, "{interface} cannot be constructed with new")
            }
        }
    }
}

#[derive(Debug)]
struct Row {
    decl: Decl,
    /// Chain without the interface root, resolved against a wrapped
    /// instance: `prototype.initMouseEvent`.
    instance: Member,
    /// Chain rooted at the interface's global name:
    /// `MouseEvent.prototype.initMouseEvent`.
    global: Member,
}

/// An opaque interface: a flat member table plus the interface's global
/// name. Ancestor members are already merged into the table, so lookups
/// never walk a hierarchy.
#[derive(Debug)]
pub struct Interface {
    name: &'static str,
    root: Member,
    rows: Vec<Row>,
    constructible: bool,
}

impl Interface {
    /// Build an interface from its member table. Every declared name is
    /// validated here; resolution later is infallible.
    pub fn new(
        name: &'static str,
        decls: Vec<Decl>,
        constructible: bool,
    ) -> Result<Interface, DeclError> {
        let root = Member::root(name)?;
        let proto_instance = Member::root("prototype")?;
        let proto_static = root.child("prototype")?;

        let mut seen = FxHashSet::default();
        let mut rows = Vec::with_capacity(decls.len());
        for decl in decls {
            if !seen.insert(decl.name) {
                return Err(DeclError::Duplicate {
                    interface: name,
                    member: decl.name,
                });
            }
            let (instance, global) = match decl.slot {
                Slot::Own => (Member::root(decl.name)?, root.child(decl.name)?),
                Slot::Prototype => (
                    proto_instance.child(decl.name)?,
                    proto_static.child(decl.name)?,
                ),
            };
            rows.push(Row {
                decl,
                instance,
                global,
            });
        }
        Ok(Interface {
            name,
            root,
            rows,
            constructible,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The bare global reference to the interface itself.
    pub fn global_ref(&self) -> &Member {
        &self.root
    }

    pub fn constructible(&self) -> bool {
        self.constructible
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn decls(&self) -> impl Iterator<Item = &Decl> {
        self.rows.iter().map(|row| &row.decl)
    }

    pub fn decl(&self, name: &str) -> Option<&Decl> {
        self.row(name).map(|row| &row.decl)
    }

    /// The member reference scoped to a wrapped instance, without the
    /// interface root.
    pub fn instance_ref(&self, name: &str) -> Option<&Member> {
        self.row(name).map(|row| &row.instance)
    }

    /// The member reference scoped to no particular instance, rooted at
    /// the interface's global name.
    pub fn static_ref(&self, name: &str) -> Option<&Member> {
        self.row(name).map(|row| &row.global)
    }

    /// Identity cast of a dynamic handle to a view of this interface. The
    /// handle is neither checked, copied, nor changed.
    pub fn cast(&self, handle: Handle) -> View<'_> {
        View {
            iface: self,
            handle,
        }
    }

    /// Static property read: `Event.CAPTURING_PHASE`.
    pub fn static_get(&self, name: &str) -> Result<String, EmitError> {
        let row = self.require(name)?;
        Ok(row.global.resolve())
    }

    /// Static method call: `MouseEvent.prototype.initMouseEvent(...)`.
    pub fn static_call(&self, name: &str, args: &[Literal]) -> Result<String, EmitError> {
        let row = self.require(name)?;
        self.check_call(row, args)?;
        Ok(format!("{}({})", row.global.resolve(), render_args(args)))
    }

    /// A `new` expression for this interface. Rejected unless the table
    /// declares the interface constructible.
    pub fn construct(&self, args: &[Literal]) -> Result<String, EmitError> {
        if !self.constructible {
            return Err(EmitError::NotConstructible {
                interface: self.name,
            });
        }
        Ok(format!("new {}({})", self.name, render_args(args)))
    }

    fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.decl.name == name)
    }

    fn require(&self, name: &str) -> Result<&Row, EmitError> {
        self.row(name).ok_or_else(|| EmitError::UnknownMember {
            interface: self.name,
            member: name.to_string(),
        })
    }

    fn check_call(&self, row: &Row, args: &[Literal]) -> Result<(), EmitError> {
        let MemberKind::Method { arity } = row.decl.kind else {
            return Err(EmitError::NotCallable {
                interface: self.name,
                member: row.decl.name.to_string(),
            });
        };
        if args.len() != arity {
            return Err(EmitError::Arity {
                interface: self.name,
                member: row.decl.name.to_string(),
                expected: arity,
                got: args.len(),
            });
        }
        Ok(())
    }
}

/// A typed view over a dynamic handle: the cast-only wrapper. Conformance
/// to the member table is asserted, never checked at runtime.
#[derive(Clone)]
pub struct View<'a> {
    iface: &'a Interface,
    handle: Handle,
}

impl<'a> View<'a> {
    pub fn interface(&self) -> &'a Interface {
        self.iface
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Unwrapping returns the very handle that was cast.
    pub fn into_handle(self) -> Handle {
        self.handle
    }

    /// Duck-typed capability check: membership in the interface table, not
    /// position in a hierarchy.
    pub fn supports(&self, name: &str) -> bool {
        self.iface.decl(name).is_some()
    }

    /// The instance-scoped member reference for `name`.
    pub fn member(&self, name: &str) -> Result<&'a Member, EmitError> {
        self.iface.require(name).map(|row| &row.instance)
    }

    /// Property read off the wrapped instance: `evt.type`.
    pub fn get(&self, name: &str) -> Result<String, EmitError> {
        let row = self.iface.require(name)?;
        Ok(row.instance.resolve_on(self.handle.expr()))
    }

    /// Property assignment. Rejected for anything the table does not
    /// declare as a writable field.
    pub fn set(&self, name: &str, value: &Literal) -> Result<String, EmitError> {
        let row = self.iface.require(name)?;
        match row.decl.kind {
            MemberKind::Field { readonly: false } => Ok(format!(
                "{} = {}",
                row.instance.resolve_on(self.handle.expr()),
                value.to_js()
            )),
            _ => Err(EmitError::NotAssignable {
                interface: self.iface.name,
                member: name.to_string(),
            }),
        }
    }

    /// Method invocation with expanded arguments:
    /// `document.createRange()`.
    pub fn call(&self, name: &str, args: &[Literal]) -> Result<String, EmitError> {
        let row = self.iface.require(name)?;
        self.iface.check_call(row, args)?;
        Ok(format!(
            "{}({})",
            row.instance.resolve_on(self.handle.expr()),
            render_args(args)
        ))
    }
}

fn render_args(args: &[Literal]) -> String {
    args.iter()
        .map(Literal::to_js)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The installed interface set, keyed by global name.
pub struct Registry {
    interfaces: FxHashMap<&'static str, Interface>,
}

impl Registry {
    pub fn empty() -> Registry {
        Registry {
            interfaces: FxHashMap::default(),
        }
    }

    /// The DOM binding set: Event, UIEvent, KeyEvent, MouseEvent, and
    /// DocumentRange. None of them is constructible; events come from the
    /// document, ranges from `createRange`.
    pub fn dom() -> Result<Registry, DeclError> {
        let mut registry = Registry::empty();
        registry.install(Interface::new("Event", event::decls(), false)?);
        registry.install(Interface::new("UIEvent", uievent::decls(), false)?);
        registry.install(Interface::new("KeyEvent", keyevent::decls(), false)?);
        registry.install(Interface::new("MouseEvent", mouseevent::decls(), false)?);
        registry.install(Interface::new("DocumentRange", range::decls(), false)?);
        Ok(registry)
    }

    pub fn install(&mut self, iface: Interface) {
        self.interfaces.insert(iface.name(), iface);
    }

    pub fn get(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.values()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}
