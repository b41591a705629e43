use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static OPEN_PAREN_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s+").unwrap());
static CLOSE_PAREN_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\)").unwrap());
static GLUED_OPEN_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.:)])\(").unwrap());

/// Collapse every whitespace run to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Clean up text produced by concatenating reduced nodes.
pub fn normalize_text(text: &str) -> String {
    let text = collapse_whitespace(text);
    let text = OPEN_PAREN_SPACE_RE.replace_all(&text, "(");
    let text = CLOSE_PAREN_SPACE_RE.replace_all(&text, ")");
    GLUED_OPEN_PAREN_RE
        .replace_all(&text, "$1 (")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(collapse_whitespace("  a \n\t b   c \n"), "a b c");
    }

    #[test]
    fn tightens_parentheses() {
        assert_eq!(normalize_text("section ( a ) applies"), "section (a) applies");
    }

    #[test]
    fn separates_glued_parentheses() {
        assert_eq!(normalize_text("follows.(1) first"), "follows. (1) first");
        assert_eq!(normalize_text("as follows:(A) item"), "as follows: (A) item");
        assert_eq!(normalize_text("(a)(1)"), "(a) (1)");
    }

    #[test]
    fn is_stable_when_reapplied() {
        let once = normalize_text(" ( a )( b ) text.(c)  ");
        assert_eq!(normalize_text(&once), once);
    }
}
