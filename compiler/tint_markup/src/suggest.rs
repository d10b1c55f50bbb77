//! "Did you mean?" suggestions for misspelled color names.
//!
//! Uses Levenshtein edit distance with a length-based threshold so short
//! tokens do not get matched to unrelated names.

/// Levenshtein edit distance between two strings, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    // Two-row optimization instead of full matrix
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// - 1-2 chars: 1 edit
/// - 3-5 chars: 2 edits
/// - longer: 3 edits
fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        _ => 3,
    }
}

/// Find the closest candidate within the default threshold.
///
/// Ties go to the candidate seen first.
pub fn suggest_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    let threshold = default_threshold(name.chars().count());

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        // Skip if too different in length
        if name.len().abs_diff(candidate.len()) > threshold {
            continue;
        }
        let distance = edit_distance(name, candidate);
        if distance > threshold {
            continue;
        }
        match best {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(s, _)| s)
}
