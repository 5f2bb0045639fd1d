//! Whitespace compaction.

/// Compacts markup onto a single line.
///
/// Runs of whitespace become one space, then whitespace between `>` and
/// `<` is dropped, then whitespace right before `>` is dropped. Element
/// order and attribute values are untouched apart from their inner
/// whitespace runs. Applying it twice gives the same result as once.
#[must_use]
pub fn compact(markup: &str) -> String {
    let mut collapsed: Vec<char> = Vec::with_capacity(markup.len());
    for c in markup.chars() {
        if c.is_whitespace() {
            if collapsed.last() != Some(&' ') {
                collapsed.push(' ');
            }
        } else {
            collapsed.push(c);
        }
    }

    // After collapsing, every space sits between two non-space characters
    // (or at an end), so both removals only need the immediate neighbours.
    let mut out = String::with_capacity(collapsed.len());
    for (i, &c) in collapsed.iter().enumerate() {
        if c == ' ' {
            let prev = i.checked_sub(1).map(|p| collapsed[p]);
            let next = collapsed.get(i + 1).copied();
            if next == Some('>') || (prev == Some('>') && next == Some('<')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(compact("a  \t\n b"), "a b");
    }

    #[test]
    fn test_drops_space_between_tags() {
        assert_eq!(compact("<g>\n    <path/>\n</g>"), "<g><path/></g>");
    }

    #[test]
    fn test_drops_space_before_close() {
        // Only the space directly before `>` goes; ` />` keeps its space.
        assert_eq!(compact("<path d=\"M0,0\"\n    />"), "<path d=\"M0,0\" />");
        assert_eq!(compact("<svg   version=\"1.1\"  >"), "<svg version=\"1.1\">");
    }

    #[test]
    fn test_keeps_attribute_spaces() {
        let markup = "<svg style=\"width: 120px; height: 100px;\">";
        assert_eq!(compact(markup), markup);
    }

    #[test]
    fn test_text_between_tags_keeps_single_space() {
        assert_eq!(compact("<t> a  b </t>"), "<t> a b </t>");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "  <svg  >\n  <rect  x=\"0\"  />\n</svg>  ",
            "> < <",
            " > <",
            "<a>  text  </a>   <b/>",
            "",
        ];
        for input in inputs {
            let once = compact(input);
            assert_eq!(compact(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_sequential_rules() {
        // Space between tags goes first, then the one before '>'.
        assert_eq!(compact(" > <"), "><");
        assert_eq!(compact("> < <"), ">< <");
    }
}
