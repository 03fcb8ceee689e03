use super::{Decl, uievent};

// DOM Level 2 Events: Interface MouseEvent, UIEvent's members included.
pub(crate) fn decls() -> Vec<Decl> {
    let mut decls = uievent::decls();
    decls.extend([
        Decl::field("screenX"),
        Decl::field("screenY"),
        Decl::field("clientX"),
        Decl::field("clientY"),
        Decl::field("ctrlKey"),
        Decl::field("shiftKey"),
        Decl::field("altKey"),
        Decl::field("metaKey"),
        Decl::field("button"),
        Decl::field("relatedTarget"),
        // initMouseEvent(typeArg, canBubbleArg, cancelableArg, viewArg,
        //                detailArg, screenXArg, screenYArg, clientXArg,
        //                clientYArg, ctrlKeyArg, altKeyArg, shiftKeyArg,
        //                metaKeyArg, buttonArg, relatedTargetArg)
        Decl::proto_method("initMouseEvent", 15),
    ]);
    decls
}
