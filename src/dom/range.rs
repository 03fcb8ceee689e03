use super::Decl;

// DOM Level 2 Traversal and Range: Interface DocumentRange, implemented
// by the document object itself.
pub(crate) fn decls() -> Vec<Decl> {
    vec![Decl::method("createRange", 0)]
}
