use pct_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));

        // Only a network root may carry a double slash, and only at the start
        let body = if as_str.starts_with("//") { &as_str[2..] } else { as_str };
        prop_assert!(!body.contains("//"));

        prop_assert!(!as_str.split('/').any(|c| c == ".."));

        // Normalizing twice changes nothing
        let again = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, again);
    }

    #[test]
    fn test_join_then_strip_recovers_suffix(
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        suffix in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
    ) {
        let base = NormalizedPath::new(&base);
        let joined = base.join(&suffix);

        prop_assert!(joined.starts_with(&base));
        prop_assert_eq!(joined.strip_prefix(&base), Some(suffix.as_str()));
    }
}
