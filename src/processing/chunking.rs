use crate::types::error::Error;

/// Lazy iterator over fixed-size character chunks of a text.
///
/// Chunks are contiguous, their concatenation equals the original text,
/// and every chunk except possibly the last contains exactly `size`
/// characters. The iterator is restartable via `Clone`. Input is expected
/// to be finite and fully resident; texts here are short academic
/// abstracts or segments.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    remaining: &'a str,
    size: usize,
}

/// Split `text` into chunks of at most `size` characters.
///
/// Zero-length input yields an empty sequence. Fails with
/// [`Error::InvalidArgument`] if `size` is zero.
pub fn chunks(text: &str, size: usize) -> Result<Chunks<'_>, Error> {
    if size == 0 {
        return Err(Error::InvalidArgument("chunk size must be positive".to_string()));
    }
    Ok(Chunks { remaining: text, size })
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }
        // Split on the byte offset of the size-th character so multi-byte
        // codepoints are never cut in half.
        let split = self
            .remaining
            .char_indices()
            .nth(self.size)
            .map(|(offset, _)| offset)
            .unwrap_or(self.remaining.len());
        let (head, tail) = self.remaining.split_at(split);
        self.remaining = tail;
        Some(head)
    }
}
