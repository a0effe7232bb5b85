//! Shape checks for names carried by the tree.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::GenError;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*$").expect("identifier pattern"));

static QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*(\.[\p{L}_$][\p{L}\p{N}_$]*)*$")
        .expect("qualified name pattern")
});

const PRIMITIVES: [&str; 8] = ["boolean", "byte", "char", "short", "int", "long", "float", "double"];

#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// `a`, `a.b.C`
#[must_use]
pub fn is_qualified_name(name: &str) -> bool {
    QUALIFIED.is_match(name)
}

#[must_use]
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Borrow `name` back if it is a plain identifier.
pub(crate) fn identifier<'a>(kind: &'static str, name: &'a str) -> Result<&'a str, GenError> {
    if is_identifier(name) {
        Ok(name)
    } else if name.is_empty() {
        Err(GenError::malformed(kind, "missing name"))
    } else {
        Err(GenError::malformed(kind, format!("`{name}` is not an identifier")))
    }
}

pub(crate) fn qualified<'a>(kind: &'static str, name: &'a str) -> Result<&'a str, GenError> {
    if is_qualified_name(name) {
        Ok(name)
    } else if name.is_empty() {
        Err(GenError::malformed(kind, "missing name"))
    } else {
        Err(GenError::malformed(kind, format!("`{name}` is not a qualified name")))
    }
}
