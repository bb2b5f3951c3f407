/// Characters that end a line
///
/// Wider than `str::lines()`: PDF text often carries bare `\r`, form feeds
/// between pages and Unicode line/paragraph separators.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Iterator over the lines of a string, terminators removed
///
/// `\r\n` counts as a single break and a trailing terminator does not yield
/// an extra empty line.
pub(crate) struct SplitLines<'a> {
    rest: &'a str,
}

pub(crate) fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(index) = self.rest.find(LINE_BREAKS) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..index];
        let tail = &self.rest[index..];
        let break_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        self.rest = &tail[break_len..];
        Some(line)
    }
}
