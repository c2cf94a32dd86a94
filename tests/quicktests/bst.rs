use ds_tree::bst::Bst;
use ds_tree::error::TreeError;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same payloads in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Bst<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                let _ = bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                let _ = bst.remove(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Bst::natural();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Bst::natural();
    for x in &xs {
        let _ = tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Bst::natural();
    for x in &xs {
        let _ = tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn duplicates_are_handed_back(xs: Vec<i8>) -> bool {
    let mut tree = Bst::natural();
    let mut seen = HashSet::new();
    for x in xs {
        match tree.insert(x) {
            Ok(()) => {
                if !seen.insert(x) {
                    return false;
                }
            }
            Err(rejected) => {
                if rejected.error != TreeError::AlreadyExists || !seen.contains(&rejected.value) {
                    return false;
                }
            }
        }
    }

    tree.len() == seen.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Bst::natural();
    for x in &xs {
        let _ = tree.insert(*x);
    }
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn removing_everything_frees_everything(xs: Vec<i8>) -> bool {
    let mut tree = Bst::natural();
    let mut distinct = BTreeSet::new();
    for x in xs {
        if tree.insert(x).is_ok() {
            distinct.insert(x);
        }
    }

    distinct.iter().all(|x| tree.remove(x) == Ok(*x))
        && tree.is_empty()
        && tree.len() == 0
        && tree.height() == 0
}
