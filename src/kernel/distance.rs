/// Levenshtein distance over Unicode scalar values.
///
/// Fills the full `(len(b)+1) x (len(a)+1)` matrix, rows indexed by `b` and
/// columns by `a`. Unit cost for insert, delete and substitute.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                (matrix[i - 1][j - 1] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j] + 1)
            };
        }
    }

    matrix[b.len()][a.len()]
}

#[cfg(test)]
mod tests {
    use super::levenshtein;

    #[test]
    fn classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("helo", "help"), 1);
        assert_eq!(levenshtein("goodby", "goodbye"), 1);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "hi"), 2);
        assert_eq!(levenshtein("bye", ""), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein("héllo", "hello"), 1);
    }

    #[test]
    fn agrees_with_strsim() {
        let samples = [
            "", "hi", "hey", "helo", "who are you", "wh0 r u", "goodbye", "see ya", "café au lait",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a:?} vs {b:?}");
            }
        }
    }
}
