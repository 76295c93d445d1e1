/// A source line with its comment and surrounding whitespace removed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CleanLine<'a> {
    /// 1-based position among the surviving lines, not in the original file.
    pub number: usize,
    pub text: &'a str,
}

/// Strips `;` comments and blank lines from `source`.
///
/// The comment marker is not string-aware: a `;` inside quotes still starts
/// a comment.
pub fn clean_lines(source: &str) -> Vec<CleanLine<'_>> {
    source
        .split('\n')
        .map(|line| match line.find(';') {
            Some(pos) => line[..pos].trim(),
            None => line.trim(),
        })
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(idx, text)| CleanLine {
            number: idx + 1,
            text,
        })
        .collect()
}
