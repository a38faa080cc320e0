use std::collections::HashMap;

use serde::Serialize;

use crate::processing::tokenize::TokenizerStrategy;
use crate::types::error::Error;

/// Style hints attached to marked spans. Opaque to the core; renderers
/// interpret them however they like.
const STYLE_DELETE: &str = "#f4baba";
const STYLE_REPLACE: &str = "#babdf4";
const STYLE_INSERT: &str = "#baf4cc";

/// Alignment operation covering a contiguous token run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentOp {
    /// Present identically on both sides.
    Equal,
    /// Present only on side B.
    Insert,
    /// Present only on side A.
    Delete,
    /// Differs between the sides.
    Replace,
}

/// A labeled contiguous region of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentSpan {
    /// Span text. Concatenating a side's span texts in order reconstructs
    /// that side's input exactly.
    pub text: String,
    /// Alignment operation for this span.
    pub op: AlignmentOp,
    /// Opaque style hint for marked spans; `None` for equal spans.
    pub style: Option<&'static str>,
}

/// Two parallel ordered span sequences, one reconstructing each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DiffResult {
    /// Spans reconstructing side A, with delete/replace runs marked.
    pub side_a: Vec<AlignmentSpan>,
    /// Spans reconstructing side B, with insert/replace runs marked.
    pub side_b: Vec<AlignmentSpan>,
}

/// Compute the token-level alignment of two summaries and emit tagged,
/// renderer-agnostic span sequences for both sides.
///
/// Deterministic: the same inputs with the same tokenizer always produce
/// the same spans. Empty strings on either side yield a single
/// delete-all or insert-all span for the non-empty side.
pub fn compare_summaries(
    a: &str,
    b: &str,
    tokenizer: &TokenizerStrategy,
) -> Result<DiffResult, Error> {
    // Empty sides short-circuit: splitting an empty string would yield a
    // single empty token rather than no tokens.
    if a.is_empty() && b.is_empty() {
        return Ok(DiffResult::default());
    }
    if a.is_empty() {
        return Ok(DiffResult {
            side_a: Vec::new(),
            side_b: vec![AlignmentSpan {
                text: b.to_string(),
                op: AlignmentOp::Insert,
                style: Some(STYLE_INSERT),
            }],
        });
    }
    if b.is_empty() {
        return Ok(DiffResult {
            side_a: vec![AlignmentSpan {
                text: a.to_string(),
                op: AlignmentOp::Delete,
                style: Some(STYLE_DELETE),
            }],
            side_b: Vec::new(),
        });
    }

    let a_tokens = tokenizer.tokenize(a)?;
    let b_tokens = tokenizer.tokenize(b)?;
    let separator = tokenizer.separator();
    let matcher = SequenceMatcher::new(&a_tokens, &b_tokens);

    let mut result = DiffResult::default();
    for opcode in matcher.opcodes() {
        let a_text = a_tokens[opcode.a0..opcode.a1].join(separator);
        let b_text = b_tokens[opcode.b0..opcode.b1].join(separator);
        match opcode.op {
            AlignmentOp::Equal => {
                push_span(&mut result.side_a, a_text, AlignmentOp::Equal, separator);
                push_span(&mut result.side_b, b_text, AlignmentOp::Equal, separator);
            }
            AlignmentOp::Delete => {
                push_span(&mut result.side_a, a_text, AlignmentOp::Delete, separator)
            }
            AlignmentOp::Insert => {
                push_span(&mut result.side_b, b_text, AlignmentOp::Insert, separator)
            }
            AlignmentOp::Replace => {
                push_span(&mut result.side_a, a_text, AlignmentOp::Replace, separator);
                push_span(&mut result.side_b, b_text, AlignmentOp::Replace, separator);
            }
        }
    }
    Ok(result)
}

/// Append a span, attaching the tokenizer's separator owed between
/// consecutive spans: trailing on an equal predecessor, otherwise leading
/// on the new span. Marked spans therefore carry exactly their token
/// text whenever an equal neighbour can absorb the separator. With an
/// empty separator this is plain concatenation.
fn push_span(spans: &mut Vec<AlignmentSpan>, text: String, op: AlignmentOp, separator: &str) {
    let text = match spans.last_mut() {
        Some(prev) if prev.op == AlignmentOp::Equal => {
            prev.text.push_str(separator);
            text
        }
        Some(_) => format!("{}{}", separator, text),
        None => text,
    };
    let style = match op {
        AlignmentOp::Equal => None,
        AlignmentOp::Delete => Some(STYLE_DELETE),
        AlignmentOp::Replace => Some(STYLE_REPLACE),
        AlignmentOp::Insert => Some(STYLE_INSERT),
    };
    spans.push(AlignmentSpan { text, op, style });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opcode {
    op: AlignmentOp,
    a0: usize,
    a1: usize,
    b0: usize,
    b1: usize,
}

/// Longest-matching-blocks sequence alignment over token slices
/// (Ratcliff-Obershelp). Opcodes cover both sequences completely, in
/// order, with no gaps and no overlaps.
struct SequenceMatcher<'a> {
    a: &'a [String],
    b2j: HashMap<&'a str, Vec<usize>>,
    a_len: usize,
    b_len: usize,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [String], b: &'a [String]) -> Self {
        let mut b2j: HashMap<&str, Vec<usize>> = HashMap::new();
        for (j, token) in b.iter().enumerate() {
            b2j.entry(token.as_str()).or_default().push(j);
        }
        Self { a, b2j, a_len: a.len(), b_len: b.len() }
    }

    /// Longest block such that a[besti..besti+size] == b[bestj..bestj+size]
    /// within the given window, preferring the earliest block on ties.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);
        // j2len maps a position j in b to the length of the longest match
        // ending at a[i], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut newj2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(self.a[i].as_str()) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = if j == 0 { 1 } else { j2len.get(&(j - 1)).copied().unwrap_or(0) + 1 };
                    newj2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = newj2len;
        }
        (besti, bestj, bestsize)
    }

    /// Maximal matching blocks in order, terminated by a zero-length
    /// sentinel at (a_len, b_len).
    fn matching_blocks(&self) -> Vec<(usize, usize, usize)> {
        let mut queue = vec![(0, self.a_len, 0, self.b_len)];
        let mut matching = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k > 0 {
                matching.push((i, j, k));
                if alo < i && blo < j {
                    queue.push((alo, i, blo, j));
                }
                if i + k < ahi && j + k < bhi {
                    queue.push((i + k, ahi, j + k, bhi));
                }
            }
        }
        matching.sort_unstable();

        // Merge adjacent blocks.
        let mut merged: Vec<(usize, usize, usize)> = Vec::new();
        let (mut i1, mut j1, mut k1) = (0, 0, 0);
        for (i2, j2, k2) in matching {
            if i1 + k1 == i2 && j1 + k1 == j2 {
                k1 += k2;
            } else {
                if k1 > 0 {
                    merged.push((i1, j1, k1));
                }
                (i1, j1, k1) = (i2, j2, k2);
            }
        }
        if k1 > 0 {
            merged.push((i1, j1, k1));
        }
        merged.push((self.a_len, self.b_len, 0));
        merged
    }

    fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut opcodes = Vec::new();
        for (ai, bj, size) in self.matching_blocks() {
            let op = match (i < ai, j < bj) {
                (true, true) => Some(AlignmentOp::Replace),
                (true, false) => Some(AlignmentOp::Delete),
                (false, true) => Some(AlignmentOp::Insert),
                (false, false) => None,
            };
            if let Some(op) = op {
                opcodes.push(Opcode { op, a0: i, a1: ai, b0: j, b1: bj });
            }
            i = ai + size;
            j = bj + size;
            if size > 0 {
                opcodes.push(Opcode { op: AlignmentOp::Equal, a0: ai, a1: i, b0: bj, b1: j });
            }
        }
        opcodes
    }
}
