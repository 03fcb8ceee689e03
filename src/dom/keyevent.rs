use super::{Decl, uievent};

// KeyEvent as Gecko shipped it, extending UIEvent. Never standardized
// under this name; the member set below is the interoperable core.
pub(crate) fn decls() -> Vec<Decl> {
    let mut decls = uievent::decls();
    decls.extend([
        Decl::field("ctrlKey"),
        Decl::field("shiftKey"),
        Decl::field("altKey"),
        Decl::field("metaKey"),
        Decl::field("keyCode"),
        Decl::field("charCode"),
        // initKeyEvent(typeArg, canBubbleArg, cancelableArg, viewArg,
        //              ctrlKeyArg, altKeyArg, shiftKeyArg, metaKeyArg,
        //              keyCodeArg, charCodeArg)
        Decl::proto_method("initKeyEvent", 10),
    ]);
    decls
}
