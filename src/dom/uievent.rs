use super::{Decl, event};

// DOM Level 2 Events: Interface UIEvent, Event's members included.
pub(crate) fn decls() -> Vec<Decl> {
    let mut decls = event::decls();
    decls.extend([
        Decl::field("view"),
        Decl::field("detail"),
        // initUIEvent(typeArg, canBubbleArg, cancelableArg, viewArg, detailArg)
        Decl::proto_method("initUIEvent", 5),
    ]);
    decls
}
