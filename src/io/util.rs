/// Normalizes an element token to element capitalization.
///
/// Leading digits and anything after the first two letters are dropped, so tokens
/// such as `"1H"`, `"O1"` or `"CL"` map to `"H"`, `"O"` and `"Cl"`. Returns `None`
/// when no letters remain.
pub fn normalize_symbol(token: &str) -> Option<String> {
    let letters: String = token
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect();

    let mut chars = letters.chars();
    let first = chars.next()?;

    let mut symbol = String::with_capacity(letters.len());
    symbol.push(first.to_ascii_uppercase());
    symbol.extend(chars.map(|c| c.to_ascii_lowercase()));
    Some(symbol)
}

/// Collects every line with its 1-based line number.
pub fn numbered_lines<R: std::io::BufRead>(
    reader: R,
) -> Result<Vec<(usize, String)>, std::io::Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|v| (i + 1, v)))
        .collect()
}
