use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Contains(String),
    HasPrefix(String),
}

/// Short words over a tiny alphabet so that prefixes collide often.
fn word_strategy() -> impl Strategy<Value = String> + Clone {
    "[a-d]{0,6}"
}

fn unicode_word_strategy() -> impl Strategy<Value = String> + Clone {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'é', '前', '🦀']), 0..=5)
        .prop_map(|chars| chars.into_iter().collect())
}

fn ops_strategy(word: impl Strategy<Value = String> + Clone) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        50 => word.clone().prop_map(Op::Insert),
        25 => word.clone().prop_map(Op::Contains),
        25 => word.prop_map(Op::HasPrefix),
    ];
    prop::collection::vec(op, 0..=500)
}

fn model_has_prefix(m: &BTreeSet<String>, prefix: &str) -> bool {
    prefix.is_empty() || m.iter().any(|w| w.starts_with(prefix))
}

/// Root plus one node per distinct non-empty prefix.
fn model_node_count(m: &BTreeSet<String>) -> usize {
    let mut prefixes: BTreeSet<&str> = BTreeSet::new();
    for w in m {
        for (i, c) in w.char_indices() {
            prefixes.insert(&w[..i + c.len_utf8()]);
        }
    }
    prefixes.len() + 1
}

fn run_model<T: PrefixSet + Default>(ops: &[Op]) -> std::result::Result<(T, BTreeSet<String>), TestCaseError> {
    let mut t = T::default();
    let mut m: BTreeSet<String> = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(w) => {
                prop_assert_eq!(t.insert(w).unwrap(), m.insert(w.clone()));
                prop_assert!(t.contains(w).unwrap());
            }
            Op::Contains(w) => {
                prop_assert_eq!(t.contains(w).unwrap(), m.contains(w));
            }
            Op::HasPrefix(p) => {
                prop_assert_eq!(t.has_prefix(p).unwrap(), model_has_prefix(&m, p));
            }
        }
    }
    Ok((t, m))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_prefix_tree(ops in ops_strategy(word_strategy())) {
        let (t, m) = run_model::<PrefixTree>(&ops)?;
        t.validate();
        prop_assert_eq!(t.len(), m.len());
        prop_assert_eq!(t.node_count(), model_node_count(&m));
        let got: Vec<String> = t.words().collect();
        let expected: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_equivalence_unicode(ops in ops_strategy(unicode_word_strategy())) {
        let (t, m) = run_model::<PrefixTree>(&ops)?;
        t.validate();
        prop_assert_eq!(t.node_count(), model_node_count(&m));
        let got: Vec<String> = t.words().collect();
        let expected: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_equivalence_alphabet_tree(ops in ops_strategy(word_strategy())) {
        let (t, m) = run_model::<AlphabetTree>(&ops)?;
        prop_assert_eq!(t.len(), m.len());
        prop_assert_eq!(t.node_count(), model_node_count(&m));
        let expected: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(t.words(), expected);
    }

    #[test]
    fn prop_frozen_matches_tree(
        words in prop::collection::vec(unicode_word_strategy(), 0..=100),
        probes in prop::collection::vec(unicode_word_strategy(), 0..=50),
    ) {
        let tree: PrefixTree = words.iter().collect();
        let frozen = tree.freeze().unwrap();
        prop_assert_eq!(frozen.len(), tree.len());
        for p in &probes {
            prop_assert_eq!(frozen.contains(p), tree.contains(p));
            prop_assert_eq!(frozen.has_prefix(p), tree.has_prefix(p));
            let from_frozen = frozen.words_with_prefix(p).unwrap();
            let from_tree: Vec<String> = tree.words_with_prefix(p).collect();
            prop_assert_eq!(from_frozen, from_tree);
        }
    }

    #[test]
    fn prop_every_prefix_reported(word in word_strategy()) {
        let mut t = PrefixTree::new();
        t.insert(&word);
        for (i, _) in word.char_indices().chain([(word.len(), ' ')]) {
            let prefix = &word[..i];
            prop_assert!(t.has_prefix(prefix));
            prop_assert_eq!(t.contains(prefix), prefix == word);
        }
    }

    #[test]
    fn prop_alphabet_rejection_leaves_tree_unchanged(
        words in prop::collection::vec(word_strategy(), 0..=20),
        bad in "[a-d]{0,3}[A-Z0-9 ][a-d]{0,3}",
    ) {
        let mut t = AlphabetTree::new();
        for w in &words {
            t.insert(w).unwrap();
        }
        let nodes = t.node_count();
        let len = t.len();
        let is_invalid_char = matches!(t.insert(&bad), Err(TrieError::InvalidCharacter { .. }));
        prop_assert!(is_invalid_char);
        prop_assert_eq!(t.node_count(), nodes);
        prop_assert_eq!(t.len(), len);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let words = ["a", "b", "", "aa", "ab", "ba"];
    let probes = ["", "a", "b", "c", "aa", "ab", "ac", "ba", "bb", "aab"];

    let reference: PrefixTree = words.iter().collect();
    let answers: Vec<(bool, bool)> = probes
        .iter()
        .map(|p| (reference.contains(p), reference.has_prefix(p)))
        .collect();

    for_each_permutation(&words, |perm| {
        let mut t = PrefixTree::new();
        let mut a = AlphabetTree::new();
        for w in &perm {
            t.insert(w);
            a.insert(w).unwrap();
        }
        t.validate();
        assert_eq!(t.node_count(), reference.node_count());
        for (p, &(contains, has_prefix)) in probes.iter().zip(&answers) {
            assert_eq!(t.contains(p), contains, "contains({p:?}) after {perm:?}");
            assert_eq!(t.has_prefix(p), has_prefix, "has_prefix({p:?}) after {perm:?}");
            assert_eq!(a.contains(p).unwrap(), contains);
            assert_eq!(a.has_prefix(p).unwrap(), has_prefix);
        }
    });
}

#[test]
fn duplicate_inserts_are_indistinguishable() {
    let once: PrefixTree = ["car", "cart", "cat"].into_iter().collect();
    let twice: PrefixTree = ["car", "cart", "car", "cat", "cart", "cat"].into_iter().collect();
    assert_eq!(once.node_count(), twice.node_count());
    assert_eq!(once.len(), twice.len());
    assert_eq!(once.words().collect::<Vec<_>>(), twice.words().collect::<Vec<_>>());
}
