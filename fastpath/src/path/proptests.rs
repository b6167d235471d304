//! Property-based tests for the path engine.
//!
//! The inline `property_tests` modules cover single operations; this module
//! checks how the operations relate to each other.

use super::{PathEngine, SeparatorStyle};
use proptest::prelude::*;

const POSIX: PathEngine = PathEngine::new(SeparatorStyle::POSIX);
const WINDOWS: PathEngine = PathEngine::new(SeparatorStyle::WINDOWS);

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,6}(\\.[a-z]{1,3}){0,2}"
}

fn separator_run_strategy() -> impl Strategy<Value = String> {
    "/{1,3}"
}

// Non-degenerate POSIX paths: at least one segment, optional root, possibly
// doubled and trailing separators.
fn posix_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec((segment_strategy(), separator_run_strategy()), 1..6),
        any::<bool>(),
    )
        .prop_map(|(rooted, parts, trailing)| {
            let mut path = String::new();
            if rooted {
                path.push('/');
            }
            let last = parts.len() - 1;
            for (i, (segment, separators)) in parts.into_iter().enumerate() {
                path.push_str(&segment);
                if i < last || trailing {
                    path.push_str(&separators);
                }
            }
            path
        })
}

// Any string over a small alphabet rich in separators and dots.
fn arbitrary_path_strategy() -> impl Strategy<Value = String> {
    "[a./\\\\:C]{0,12}"
}

// `\\server\share` with no trailing separator.
fn unc_root_strategy() -> impl Strategy<Value = String> {
    r"\\\\[a-z]{1,6}\\[a-z]{1,6}"
}

fn collapse(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // dirname + separator + basename denotes the input
    #[test]
    fn dirname_basename_reassemble(p in posix_path_strategy()) {
        let dir = POSIX.dirname(&p);
        let base = POSIX.basename(&p, "");
        if dir == "." {
            prop_assert_eq!(collapse(&p), base);
        } else {
            prop_assert_eq!(collapse(&format!("{dir}/{base}")), collapse(&p));
        }
    }

    // extname is empty or a dotted suffix of basename, and stripping it
    // through basename removes exactly that suffix
    #[test]
    fn extname_is_basename_suffix(p in arbitrary_path_strategy()) {
        for engine in [POSIX, WINDOWS] {
            let base = engine.basename(&p, "");
            let ext = engine.extname(&p);
            if !ext.is_empty() {
                prop_assert!(ext.starts_with('.'));
                prop_assert!(base.ends_with(ext));
                prop_assert!(ext.len() < base.len());
            }
            prop_assert_eq!(engine.basename(&p, ext), &base[..base.len() - ext.len()]);
        }
    }

    // add_trailing_separator is idempotent and always leaves a separator
    #[test]
    fn add_trailing_separator_idempotent(p in arbitrary_path_strategy()) {
        for engine in [POSIX, WINDOWS] {
            let once = engine.add_trailing_separator(&p).into_owned();
            let twice = engine.add_trailing_separator(&once).into_owned();
            prop_assert!(engine.has_trailing_separator(&once));
            prop_assert_eq!(once, twice);
        }
    }

    // only a bare root keeps its trailing separator
    #[test]
    fn del_trailing_separator_strips(p in posix_path_strategy()) {
        let stripped = POSIX.del_trailing_separator(&p);
        prop_assert!(!POSIX.has_trailing_separator(stripped));
        prop_assert_eq!(POSIX.basename(stripped, ""), POSIX.basename(&p, ""));
    }

    // an absolute right-hand side replaces any base
    #[test]
    fn plus_absolute_override(base in arbitrary_path_strategy(), other in arbitrary_path_strategy()) {
        for engine in [POSIX, WINDOWS] {
            if engine.is_absolute(&other) {
                prop_assert_eq!(engine.plus(&base, &other), other.as_str());
            }
        }
    }

    // absolute and relative never hold at once
    #[test]
    fn classification_exclusive(p in arbitrary_path_strategy()) {
        for engine in [POSIX, WINDOWS] {
            prop_assert!(!(engine.is_absolute(&p) && engine.is_relative(&p)));
        }
    }

    // joining "." onto a relative path only drops trailing separators
    #[test]
    fn plus_current_dir(p in posix_path_strategy()) {
        prop_assume!(!p.starts_with('/'));
        prop_assert_eq!(POSIX.plus(&p, "."), POSIX.del_trailing_separator(&p));
    }

    // cleaning is stable and removes every "." segment
    #[test]
    fn cleanpath_stable(p in posix_path_strategy()) {
        let once = POSIX.cleanpath_aggressive(&p).into_owned();
        prop_assert_eq!(POSIX.cleanpath_aggressive(&once), once.as_str());
        prop_assert_eq!(once, collapse(&p));
    }

    // a relative segment joined onto a UNC root gets exactly one separator
    #[test]
    fn plus_onto_unc_root(base in unc_root_strategy(), seg in "[a-z]{1,6}") {
        let expected = format!("{base}\\{seg}");
        prop_assert_eq!(WINDOWS.plus(&base, &seg), expected.as_str());
        prop_assert_eq!(WINDOWS.plus(&format!("{base}\\"), &seg), expected.as_str());
        prop_assert_eq!(WINDOWS.plus(&base, &format!("..\\{seg}")), expected.as_str());
    }

    // listing a UNC root prefixes every entry with the root and one separator
    #[test]
    fn children_entry_under_unc_root(base in unc_root_strategy(), name in "[a-z.]{1,6}") {
        let expected = format!("{base}\\{name}");
        prop_assert_eq!(WINDOWS.join_entry(&base, &name), expected.clone());
        prop_assert_eq!(WINDOWS.join_entry(&format!("{base}\\"), &name), expected);
    }
}
