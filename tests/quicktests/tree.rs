use plain_bst::{Tree, TreeError};

use std::collections::HashSet;

use crate::Op;

/// Walks the whole tree with a cursor, front to back.
fn walk_forward<K: Clone>(tree: &Tree<K>) -> Vec<K> {
    let mut cursor = tree.begin();
    let mut keys = Vec::with_capacity(tree.len());
    while let Ok(key) = cursor.get() {
        keys.push(key.clone());
        cursor.move_next().unwrap();
    }
    keys
}

/// Applies a set of operations to a tree and to a sorted `Vec` used as a multiset.
/// This way we can ensure that after a random smattering of adds
/// and erases we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, model: &mut Vec<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Add(k) => {
                bst.add(k.clone());
                let pos = model.partition_point(|x| x <= k);
                model.insert(pos, k.clone());
            }
            Op::Erase(k) => {
                let promoted = bst.erase(k).get().ok().cloned();
                // The node erased is the first `k` in order, so whatever replaces it is the
                // next key after that one.
                let pos = model.partition_point(|x| x < k);
                if model.get(pos) == Some(k) {
                    model.remove(pos);
                }
                if let Some(promoted) = promoted {
                    assert_eq!(model.get(pos), Some(&promoted));
                }
            }
            Op::Walk => assert_eq!(walk_forward(bst), *model),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.len() == model.len() && tree.iter().eq(model.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    walk_forward(&tree) == sorted && tree.iter().copied().eq(sorted.iter().copied())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).get() == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_end() && !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have added the same key multiple times - erase each one.
        while tree.remove(delete).is_ok() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_end())
        && still_present.iter().all(|x| !tree.find(x).is_end())
}

#[quickcheck]
fn distinct_keys_erase_to_empty(xs: HashSet<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree.erase(x);
        if !tree.find(x).is_end() {
            return false;
        }
    }

    tree.is_empty() && tree.minimum() == Err(TreeError::EmptyTree)
}

#[quickcheck]
fn next_then_prev_is_identity(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut cursor = tree.begin();
    while !cursor.is_end() {
        let here = cursor;
        cursor.move_next().unwrap();
        if cursor.is_end() {
            break;
        }
        let mut back = cursor;
        back.move_prev().unwrap();
        if back != here {
            return false;
        }
    }
    true
}

#[test]
fn example_sequence() {
    let mut tree = Tree::new();
    for key in [20, 40, 60, 15, 27, 32] {
        tree.add(key);
    }
    assert_eq!(walk_forward(&tree), [15, 20, 27, 32, 40, 60]);

    tree.erase(&15);
    for key in [17, 10, 13, 19] {
        tree.add(key);
    }
    assert_eq!(walk_forward(&tree), [10, 13, 17, 19, 20, 27, 32, 40, 60]);
    assert_eq!(tree.minimum(), Ok(&10));
    assert_eq!(tree.maximum(), Ok(&60));
}

#[test]
fn string_keys() {
    let tree: Tree<String> = ["SATOU", "AKIZUKI", "MORINO", "BABA"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(walk_forward(&tree), ["AKIZUKI", "BABA", "MORINO", "SATOU"]);
}
