//! `Q:`/`A:` record scanner
//!
//! A question opens with a line starting `Q:` and its answer with a line
//! starting `A:`. Any other line extends the current answer, once both halves
//! exist. Incomplete pairs are dropped, never reported.

use super::lines::split_lines;
use crate::document::models::QaRecord;

const QUESTION_PREFIX: &str = "Q:";
const ANSWER_PREFIX: &str = "A:";

/// Whitespace plus the ASCII information separators `\x1c`..=`\x1f`
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn strip(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

/// Scan state threaded through the fold over lines
///
/// An empty string means the slot is unset.
#[derive(Debug, Default)]
struct ScanState {
    question: String,
    answer: String,
    records: Vec<QaRecord>,
}

impl ScanState {
    fn has_pair(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }

    /// Emit the current pair if both halves are present
    fn flush(&mut self) {
        if self.has_pair() {
            self.records.push(QaRecord {
                question: std::mem::take(&mut self.question),
                answer: std::mem::take(&mut self.answer),
            });
        }
    }

    fn step(mut self, line: &str) -> Self {
        let line = strip(line);

        if let Some(question) = line.strip_prefix(QUESTION_PREFIX) {
            self.flush();
            self.question = strip(question).to_string();
            self.answer.clear();
        } else if let Some(answer) = line.strip_prefix(ANSWER_PREFIX) {
            // A second answer line replaces the first
            self.answer = strip(answer).to_string();
        } else if self.has_pair() {
            self.answer.push(' ');
            self.answer.push_str(line);
        }

        self
    }

    fn finish(mut self) -> Vec<QaRecord> {
        self.flush();
        self.records
    }
}

/// Parse `text` into question/answer records, in source order
///
/// Never fails; text without any complete pair yields an empty vector.
/// Blank lines inside an answer contribute a single space each.
pub fn parse_qa_pairs(text: &str) -> Vec<QaRecord> {
    let records = split_lines(text)
        .fold(ScanState::default(), ScanState::step)
        .finish();

    tracing::debug!("Parsed {} question/answer record(s)", records.len());
    records
}
