use bst_set::TreeSet;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::checked_size;

fn build(xs: &[i8]) -> TreeSet<i8> {
    let mut set = TreeSet::new();
    for x in xs {
        set.add(*x);
    }
    set
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let set = build(&xs);

    xs.iter().all(|x| set.include(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.include(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut set = build(&xs);
    for delete in &deletes {
        set.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !set.include(x)) && still_present.iter().all(|x| set.include(x))
}

#[quickcheck]
fn length_counts_distinct_values(xs: Vec<i8>) -> bool {
    let set = build(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    set.len() == distinct.len() && set.root().map_or(0, checked_size) == set.len()
}

#[quickcheck]
fn iteration_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let set = build(&xs);
    let values = set.to_vec();

    values.windows(2).all(|pair| pair[0] < pair[1]) && values.iter().all(|x| xs.contains(x))
}

#[quickcheck]
fn duplicate_add_changes_nothing(xs: Vec<i8>) -> bool {
    let mut set = build(&xs);
    let before = set.clone();

    xs.iter().all(|x| !set.try_add(*x)) && set == before && set.len() == before.len()
}

#[quickcheck]
fn every_removal_keeps_the_tree_valid(xs: Vec<i8>) -> bool {
    let distinct: HashSet<_> = xs.iter().copied().collect();
    distinct.iter().all(|deleted| {
        let mut set = build(&xs);
        let len = set.len();

        set.try_delete(deleted)
            && set.len() == len - 1
            && set.root().map_or(0, checked_size) == set.len()
            && !set.include(deleted)
    })
}

#[quickcheck]
fn clone_round_trip(xs: Vec<i8>) -> bool {
    let set = build(&xs);
    let copy = set.clone();

    let same_root = match (set.root(), copy.root()) {
        (Some(original), Some(cloned)) => {
            !original.ptr_eq(cloned) && *original.value() == *cloned.value()
        }
        (None, None) => true,
        _ => false,
    };
    let shape = |set: &TreeSet<i8>| -> Vec<i8> {
        set.root()
            .into_iter()
            .flat_map(|root| root.preorder())
            .map(|node| *node.value())
            .collect()
    };

    same_root && copy.to_vec() == set.to_vec() && shape(&copy) == shape(&set)
}
