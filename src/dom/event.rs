use super::Decl;

// DOM Level 2 Events: Interface Event.
pub(crate) fn decls() -> Vec<Decl> {
    vec![
        Decl::constant("CAPTURING_PHASE", 1.0),
        Decl::constant("AT_TARGET", 2.0),
        Decl::constant("BUBBLING_PHASE", 3.0),
        Decl::field("type"),
        Decl::field("target"),
        Decl::field("currentTarget"),
        Decl::field("eventPhase"),
        Decl::field("bubbles"),
        Decl::field("cancelable"),
        Decl::field("timeStamp"),
        Decl::method("stopPropagation", 0),
        Decl::method("preventDefault", 0),
        // initEvent(eventTypeArg, canBubbleArg, cancelableArg)
        Decl::proto_method("initEvent", 3),
    ]
}
