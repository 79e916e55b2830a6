use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static WORD_R: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\br\b").expect("'r' pattern is valid"));
static WORD_U: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bu\b").expect("'u' pattern is valid"));

/// Canonical form used for every comparison in the kernel.
///
/// Order matters: lower-case, collapse whitespace, expand the standalone
/// shorthand words "r" and "u", then trim. Idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    let expanded = WORD_R.replace_all(&collapsed, "are");
    let expanded = WORD_U.replace_all(&expanded, "you");
    expanded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_chat_shorthand() {
        assert_eq!(normalize("who r u"), "who are you");
        assert_eq!(normalize("  Who   R\tU  "), "who are you");
    }

    #[test]
    fn shorthand_only_on_word_boundaries() {
        assert_eq!(normalize("run"), "run");
        assert_eq!(normalize("your car"), "your car");
        assert_eq!(normalize("u-turn"), "you-turn");
    }

    #[test]
    fn idempotent() {
        for raw in ["", "   ", "HeLLo  there", "r u ok", "what\n\ncan u do?", "ür u"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input: {:?}", raw);
        }
    }
}
