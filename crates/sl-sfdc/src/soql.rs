//! SOQL string helpers.

/// Escape a value for interpolation into a single-quoted SOQL string literal.
///
/// Backslashes and single quotes are backslash-escaped so caller-supplied ids
/// cannot break out of the literal.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out
}

/// Quote a value as a SOQL string literal, escaping as needed.
#[must_use]
pub fn quoted(value: &str) -> String {
    format!("'{}'", escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_ids_pass_through() {
        assert_eq!(escape("006au000007dMheAAE"), "006au000007dMheAAE");
        assert_eq!(quoted("006au000007dMheAAE"), "'006au000007dMheAAE'");
    }

    #[test]
    fn single_quotes_are_escaped() {
        assert_eq!(quoted("a' OR Name != '"), "'a\\' OR Name != \\''");
    }

    #[test]
    fn backslashes_are_escaped() {
        assert_eq!(escape("a\\'b"), "a\\\\\\'b");
    }
}
