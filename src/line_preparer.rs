/*!
 * The line preparer: blank filtering, trimming and the trailing count
 * sentinel.
 */

/// Lazy prepared-line sequence for one file.
///
/// Yields every input line that is not exactly the empty string, trimmed of
/// surrounding whitespace, in original order; then yields exactly one
/// sentinel line holding the decimal count of the lines emitted before it.
/// The blank test happens on the raw line, before trimming, so a
/// whitespace-only line survives the filter and comes out empty.
///
/// Single-pass and non-restartable: consume it exactly once.
pub struct PreparedLines<I> {
    inner: I,
    emitted: usize,
    sentinel_done: bool,
}

/// Wrap a raw line sequence in the preparer
pub fn prepare_lines<I>(lines: I) -> PreparedLines<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    PreparedLines {
        inner: lines.into_iter(),
        emitted: 0,
        sentinel_done: false,
    }
}

impl<I> Iterator for PreparedLines<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for line in self.inner.by_ref() {
            if line.is_empty() {
                continue;
            }
            self.emitted += 1;
            return Some(line.trim().to_string());
        }
        if self.sentinel_done {
            None
        } else {
            self.sentinel_done = true;
            Some(self.emitted.to_string())
        }
    }
}
