/// Videos picked by the operator
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    /// 0-based indices, in the order they were typed, without repeats
    pub indices: Vec<usize>,

    /// Tokens that did not name a listed video
    pub rejected: Vec<String>,
}

/// Parses a comma separated list of 1-based video numbers.
///
/// Blank tokens are ignored. Anything that is not a number between 1 and
/// `count` ends up in `rejected`.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    let mut selection = Selection::default();

    for token in input.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                let index = n - 1;
                if !selection.indices.contains(&index) {
                    selection.indices.push(index);
                }
            }
            _ => selection.rejected.push(token.to_string()),
        }
    }

    selection
}
