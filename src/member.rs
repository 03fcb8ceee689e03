use std::fmt;
use std::rc::Rc;

use crate::ident::{self, IdentError};

/// A declared reference to a JavaScript property or method: a name plus an
/// optional qualifying parent, forming a dotted path such as
/// `prototype.initEvent`. References are immutable; cloning shares the
/// chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Member(Rc<MemberData>);

#[derive(Debug, PartialEq, Eq, Hash)]
struct MemberData {
    name: Box<str>,
    parent: Option<Member>,
}

impl Member {
    /// A chain root. The name is validated here, never at resolution time.
    pub fn root(name: &str) -> Result<Member, IdentError> {
        ident::check(name)?;
        Ok(Member(Rc::new(MemberData {
            name: name.into(),
            parent: None,
        })))
    }

    /// A member qualified by `self`, e.g. `prototype.child("initEvent")?`.
    pub fn child(&self, name: &str) -> Result<Member, IdentError> {
        ident::check(name)?;
        Ok(Member(Rc::new(MemberData {
            name: name.into(),
            parent: Some(self.clone()),
        })))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&Member> {
        self.0.parent.as_ref()
    }

    /// Chain length, root included.
    pub fn depth(&self) -> usize {
        1 + self.parent().map_or(0, Member::depth)
    }

    /// Chain names in root-to-leaf order.
    pub fn segments(&self) -> Vec<&str> {
        let mut out = match self.parent() {
            Some(parent) => parent.segments(),
            None => Vec::new(),
        };
        out.push(self.name());
        out
    }

    /// The accessor path with no target. A parentless member resolves to
    /// the bare name, denoting a global lookup.
    pub fn resolve(&self) -> String {
        self.segments().join(".")
    }

    /// The accessor path read off `target`: the qualifying chain resolves
    /// first, the name is appended last.
    pub fn resolve_on(&self, target: &str) -> String {
        match self.parent() {
            Some(parent) => format!("{}.{}", parent.resolve_on(target), self.name()),
            None => format!("{target}.{}", self.name()),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(names: &[&str]) -> Member {
        let mut iter = names.iter();
        let mut member = Member::root(iter.next().unwrap()).unwrap();
        for name in iter {
            member = member.child(name).unwrap();
        }
        member
    }

    #[test]
    fn bare_name_resolves_to_itself() {
        let m = Member::root("initEvent").unwrap();
        assert_eq!(m.resolve(), "initEvent");
        assert_eq!(m.depth(), 1);
    }

    #[test]
    fn bare_name_against_target() {
        let m = Member::root("type").unwrap();
        assert_eq!(m.resolve_on("evt"), "evt.type");
    }

    #[test]
    fn qualified_chain() {
        let m = chain(&["prototype", "initUIEvent"]);
        assert_eq!(m.resolve(), "prototype.initUIEvent");
        assert_eq!(m.resolve_on("e"), "e.prototype.initUIEvent");
    }

    #[test]
    fn three_segment_chain() {
        let m = chain(&["Event", "prototype", "initEvent"]);
        assert_eq!(m.resolve(), "Event.prototype.initEvent");
        assert_eq!(m.resolve_on("x"), "x.Event.prototype.initEvent");
        assert_eq!(m.depth(), 3);
        assert_eq!(m.segments(), vec!["Event", "prototype", "initEvent"]);
    }

    #[test]
    fn identical_chains_are_equal_and_deterministic() {
        let a = chain(&["prototype", "initMouseEvent"]);
        let b = chain(&["prototype", "initMouseEvent"]);
        assert_eq!(a, b);
        assert_eq!(a.resolve(), b.resolve());
        assert_eq!(a.resolve_on("evt"), b.resolve_on("evt"));
    }

    #[test]
    fn different_parents_differ() {
        let a = chain(&["prototype", "initEvent"]);
        let b = Member::root("initEvent").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_names_rejected_at_declaration() {
        assert!(Member::root("").is_err());
        assert!(Member::root("1abc").is_err());
        assert!(Member::root("class").is_err());
        let proto = Member::root("prototype").unwrap();
        assert!(proto.child("foo-bar").is_err());
    }

    #[test]
    fn display_matches_resolve() {
        let m = chain(&["MouseEvent", "prototype", "initMouseEvent"]);
        assert_eq!(format!("{m}"), "MouseEvent.prototype.initMouseEvent");
    }
}
