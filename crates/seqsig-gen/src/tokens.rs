//! Token labelling for implanted-pattern alphabets.

/// Renders `index` in base 26 using `A`..`Z`, left-padded with `A` to the
/// width needed for an alphabet of the given size.
///
/// The padding keeps labels of one alphabet uniform in length, so lexical
/// and numeric orderings agree. Alphabets up to 26 tokens use single-letter
/// labels; `token_label(0, 100)` is `"AA"` and `token_label(26, 100)` is
/// `"BA"`.
pub fn token_label(index: u32, alphabet: u32) -> String {
    let width = if alphabet <= 1 {
        0
    } else {
        (f64::from(alphabet).ln() / 26.0_f64.ln()).ceil() as usize
    };
    let mut label = String::new();
    let mut rest = index;
    while rest > 0 {
        label.insert(0, char::from(b'A' + (rest % 26) as u8));
        rest /= 26;
    }
    while label.len() < width {
        label.insert(0, 'A');
    }
    label
}

/// Builds the token list for an implanted pattern of the given length.
///
/// Each token is `"{len}{prefix}{label}"`; the leading length digit plus the
/// caller-chosen prefix keep the alphabets of concurrently implanted
/// patterns disjoint.
pub fn pattern_tokens(len: u32, prefix: &str) -> Vec<String> {
    (0..len)
        .map(|index| format!("{len}{prefix}{}", token_label(index, len)))
        .collect()
}
