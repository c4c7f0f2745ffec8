//! Tests for pattern validity rules and lattice arithmetic

#[cfg(test)]
mod tests {
    use dotpattern::grid::GridShape;
    use dotpattern::pattern::Pattern;
    use dotpattern::pattern::validity::{
        AcceptAll, AllOf, DistinctPoints, MinimumLength, NoSkippedDots, PatternValidator,
        WithinGrid, intermediate_indices,
    };

    // Tests crossing an unvisited dot is rejected on a single column
    // Verified by marking the end dot visited before checking the crossing
    #[test]
    fn test_no_skipped_dots_on_column() {
        let rule = NoSkippedDots;

        assert!(!rule.validate(&Pattern::new(1, 3, vec![0, 2])));
        assert!(rule.validate(&Pattern::new(1, 3, vec![1, 0, 2])));
        assert!(rule.validate(&Pattern::new(1, 3, vec![0, 1, 2])));
    }

    // Tests diagonal and knight-move segments on a 3x3 grid
    // Verified by ignoring the diagonal step in intermediate_indices
    #[test]
    fn test_no_skipped_dots_diagonals() {
        let rule = NoSkippedDots;

        // 0 -> 8 crosses the centre dot 4
        assert!(!rule.validate(&Pattern::new(3, 3, vec![0, 8])));
        assert!(rule.validate(&Pattern::new(3, 3, vec![4, 0, 8])));
        // 0 -> 5 is (0,0) -> (1,2): no dot in between
        assert!(rule.validate(&Pattern::new(3, 3, vec![0, 5])));
    }

    #[test]
    fn test_no_skipped_dots_out_of_grid() {
        assert!(!NoSkippedDots.validate(&Pattern::new(3, 3, vec![0, 9])));
        assert!(!NoSkippedDots.validate(&Pattern::new(3, 3, vec![9])));
        assert!(NoSkippedDots.validate(&Pattern::new(3, 3, Vec::new())));
    }

    #[test]
    fn test_intermediate_indices() {
        let shape = GridShape::square(3);
        assert_eq!(intermediate_indices(shape, (0, 0), (2, 2)), vec![4]);
        assert_eq!(intermediate_indices(shape, (2, 2), (0, 0)), vec![4]);
        assert_eq!(intermediate_indices(shape, (0, 0), (2, 1)), Vec::<usize>::new());
        assert_eq!(intermediate_indices(shape, (1, 1), (1, 1)), Vec::<usize>::new());

        let long = GridShape::new(5, 1);
        assert_eq!(intermediate_indices(long, (0, 0), (4, 0)), vec![1, 2, 3]);
    }

    // Tests the simple rules in isolation
    // Verified by using > instead of >= in MinimumLength
    #[test]
    fn test_simple_rules() {
        assert!(MinimumLength::default().validate(&Pattern::new(3, 3, vec![0, 1, 2, 3])));
        assert!(!MinimumLength::default().validate(&Pattern::new(3, 3, vec![0, 1, 2])));

        assert!(DistinctPoints.validate(&Pattern::new(3, 3, vec![3, 1, 2])));
        assert!(!DistinctPoints.validate(&Pattern::new(3, 3, vec![3, 1, 3])));

        assert!(WithinGrid.validate(&Pattern::new(3, 3, vec![0, 8])));
        assert!(!WithinGrid.validate(&Pattern::new(3, 3, vec![0, 9])));

        assert!(AcceptAll.validate(&Pattern::new(0, 0, vec![5, 5])));
    }

    // Tests the strict combination reports the first broken rule
    // Verified by evaluating rules in reverse order
    #[test]
    fn test_all_of_strict() {
        let strict = AllOf::strict();

        assert_eq!(
            strict.first_failure(&Pattern::new(3, 3, vec![0, 1])),
            Some("minimum-length")
        );
        assert_eq!(
            strict.first_failure(&Pattern::new(3, 3, vec![0, 1, 0, 3])),
            Some("distinct-points")
        );
        assert_eq!(
            strict.first_failure(&Pattern::new(3, 3, vec![0, 1, 2, 8, 6])),
            Some("no-skipped-dots")
        );
        assert_eq!(strict.first_failure(&Pattern::new(3, 3, vec![0, 1, 2, 5, 4])), None);
        assert!(strict.validate(&Pattern::new(3, 3, vec![0, 1, 2, 5, 4])));

        assert!(AllOf::default().validate(&Pattern::new(3, 3, Vec::new())));
    }
}
