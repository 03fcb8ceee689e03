use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct IdentError {
    pub name: String,
    pub message: String,
}

impl fmt::Display for IdentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid member name {:?}: {}", self.name, self.message)
    }
}

/// Check that `name` is usable both after a `.` and as a bare global
/// reference in emitted JavaScript: a non-empty IdentifierName that is not
/// a reserved word.
pub fn check(name: &str) -> Result<(), IdentError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(error(name, "empty name"));
    };
    if !is_id_start(first) {
        return Err(error(name, format!("{first:?} cannot start an identifier")));
    }
    for ch in chars {
        if !is_id_continue(ch) {
            return Err(error(name, format!("{ch:?} is not an identifier character")));
        }
    }
    if is_reserved_word(name) {
        return Err(error(name, "reserved word"));
    }
    Ok(())
}

fn error(name: &str, message: impl Into<String>) -> IdentError {
    IdentError {
        name: name.to_string(),
        message: message.into(),
    }
}

fn is_id_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$' || unicode_id_start(ch)
}

fn is_id_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || unicode_id_continue(ch)
}

fn unicode_id_start(ch: char) -> bool {
    // Simplified: use Unicode properties for non-ASCII
    !ch.is_ascii() && unicode_ident::is_xid_start(ch)
}

fn unicode_id_continue(ch: char) -> bool {
    !ch.is_ascii() && unicode_ident::is_xid_continue(ch)
}

// ReservedWord per spec §12.7.2, plus the boolean and null literals, which
// are equally unusable as bare references.
pub fn is_reserved_word(s: &str) -> bool {
    matches!(
        s,
        "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "new"
            | "null"
            | "return"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers() {
        assert!(check("initEvent").is_ok());
        assert!(check("prototype").is_ok());
        assert!(check("x1").is_ok());
        assert!(check("_private").is_ok());
        assert!(check("$jscomp").is_ok());
    }

    #[test]
    fn unicode_identifiers() {
        assert!(check("über").is_ok());
        assert!(check("λ").is_ok());
    }

    #[test]
    fn empty_name() {
        let err = check("").unwrap_err();
        assert_eq!(err.message, "empty name");
    }

    #[test]
    fn bad_start_char() {
        assert!(check("1abc").is_err());
        assert!(check("-x").is_err());
        assert!(check(" x").is_err());
    }

    #[test]
    fn bad_continue_char() {
        assert!(check("foo-bar").is_err());
        assert!(check("foo bar").is_err());
        assert!(check("a.b").is_err());
    }

    #[test]
    fn reserved_words() {
        assert!(check("class").is_err());
        assert!(check("new").is_err());
        assert!(check("this").is_err());
        assert!(check("null").is_err());
        // contextual keywords are fine as member names
        assert!(check("of").is_ok());
        assert!(check("static").is_ok());
        assert!(check("async").is_ok());
    }

    #[test]
    fn error_display() {
        let err = check("").unwrap_err();
        assert_eq!(format!("{err}"), "invalid member name \"\": empty name");
    }
}
