// crates/activity_marker/src/lib.rs

//! The marker comment appended to a file for the span of one activity cycle.

use rand::Rng;

/// Tag every marker line starts with.
pub const MARKER_TAG: &str = "# activity marker";

/// Smallest and largest marker number; both are four digits.
pub const MARKER_MIN: u16 = 1000;
pub const MARKER_MAX: u16 = 9999;

/// Builds a marker line of the form `"<tag> <nnnn>"` using the given RNG.
pub fn marker_line<R: Rng + ?Sized>(tag: &str, rng: &mut R) -> String {
    let n: u16 = rng.gen_range(MARKER_MIN..=MARKER_MAX);
    format!("{} {}", tag, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_marker_line_has_tag_and_four_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let line = marker_line(MARKER_TAG, &mut rng);
            let number = line
                .strip_prefix(MARKER_TAG)
                .and_then(|rest| rest.strip_prefix(' '))
                .expect("marker must start with the tag and a space");
            assert_eq!(number.len(), 4, "unexpected marker number: {}", number);
            let n: u16 = number.parse().unwrap();
            assert!((MARKER_MIN..=MARKER_MAX).contains(&n));
        }
    }

    #[test]
    fn test_marker_line_custom_tag() {
        let mut rng = StdRng::seed_from_u64(1);
        let line = marker_line("// touched", &mut rng);
        assert!(line.starts_with("// touched "));
        assert!(!line.contains('\n'));
    }
}
