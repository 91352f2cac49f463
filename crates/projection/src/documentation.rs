/// Normalizes a documentation comment into a single-line description.
///
/// Line feeds and carriage returns become spaces, any run of two or more whitespace
/// characters collapses into one space, and the result is trimmed. Blank input has no description.
pub fn format_description(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let mut formatted = String::with_capacity(raw.len());
    let mut chars = raw.chars().map(|c| if matches!(c, '\n' | '\r') { ' ' } else { c }).peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            formatted.push(c);
            continue;
        }

        let mut run = 1;

        while chars.next_if(|c| c.is_whitespace()).is_some() {
            run += 1;
        }

        formatted.push(if run > 1 { ' ' } else { c });
    }

    let formatted = formatted.trim();

    (!formatted.is_empty()).then(|| formatted.to_string())
}

#[cfg(test)]
mod tests {
    use super::format_description;

    #[test]
    fn joins_lines_and_collapses_whitespace() {
        let formatted = format_description(Some("# Foo   _bar_\nqux\n\ntot"));

        assert_eq!(formatted.as_deref(), Some("# Foo _bar_ qux tot"));
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in ["# Foo   _bar_\nqux\n\ntot", "  leading\r\ntrailing  ", "one\ttab", "plain"] {
            let once = format_description(Some(raw));
            let twice = format_description(once.as_deref());

            assert_eq!(once, twice, "{raw:?}");
        }
    }

    #[test]
    fn carriage_returns_are_line_breaks() {
        assert_eq!(
            format_description(Some("line one\rline two")).as_deref(),
            Some("line one line two")
        );
        assert_eq!(format_description(Some("a\r\nb")).as_deref(), Some("a b"));
    }

    #[test]
    fn single_whitespace_characters_are_kept() {
        assert_eq!(format_description(Some("a\tb")).as_deref(), Some("a\tb"));
        assert_eq!(format_description(Some("a\t\tb")).as_deref(), Some("a b"));
    }

    #[test]
    fn blank_input_has_no_description() {
        assert_eq!(format_description(None), None);
        assert_eq!(format_description(Some("")), None);
        assert_eq!(format_description(Some(" \n\t \n")), None);
    }
}
