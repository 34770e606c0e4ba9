use bst_set::TreeSet;
use quickcheck_macros::quickcheck;

fn build(xs: Vec<i8>) -> TreeSet<i8> {
    xs.into_iter().collect()
}

#[quickcheck]
fn symmetric_difference_is_union_minus_intersection(a: Vec<i8>, b: Vec<i8>) -> bool {
    let (a, b) = (build(a), build(b));

    (&a ^ &b) == &(&a | &b) - &(&a & &b)
}

#[quickcheck]
fn self_union_and_intersection(a: Vec<i8>) -> bool {
    let a = build(a);

    (&a | &a) == a && (&a & &a) == a && (&a - &a).is_empty()
}

#[quickcheck]
fn intersection_is_in_both(a: Vec<i8>, b: Vec<i8>) -> bool {
    let (a, b) = (build(a), build(b));
    let both = &a & &b;

    both.subset_of(&a)
        && both.subset_of(&b)
        && a.iter().filter(|x| b.include(x)).all(|x| both.include(&x))
}

#[quickcheck]
fn union_is_superset_of_both(a: Vec<i8>, b: Vec<i8>) -> bool {
    let (a, b) = (build(a), build(b));
    let either = &a | &b;

    either.superset_of(&a)
        && either.superset_of(&b)
        && either.iter().all(|x| a.include(&x) || b.include(&x))
}

#[quickcheck]
fn subset_of_a_collection_matches_subset_of_its_set(a: Vec<i8>, b: Vec<i8>) -> bool {
    let set = build(a.clone());
    let other = build(b.clone());

    set.subset_of(&b) == set.subset_of(&other)
        && set.superset_of(&b) == set.superset_of(&other)
        && other.superset_of(&a) == other.superset_of(&set)
}

#[quickcheck]
fn difference_leaves_operands_alone(a: Vec<i8>, b: Vec<i8>) -> bool {
    let (a, b) = (build(a), build(b));
    let (a_before, b_before) = (a.clone(), b.clone());
    let diff = &a - &b;

    a == a_before
        && b == b_before
        && diff.iter().all(|x| a.include(&x) && !b.include(&x))
        && a.iter().filter(|x| !b.include(x)).all(|x| diff.include(&x))
}

#[quickcheck]
fn subtract_and_merge_match_their_copying_forms(a: Vec<i8>, b: Vec<i8>) -> bool {
    let (a, b) = (build(a), build(b));

    let mut subtracted = a.clone();
    subtracted.subtract(&b);
    let mut merged = a.clone();
    merged.merge(&b);

    subtracted == a.difference(&b) && merged == a.union(&b)
}

#[quickcheck]
fn equality_ignores_shape(xs: Vec<i8>) -> bool {
    let forwards = build(xs.clone());
    let mut reversed = xs;
    reversed.reverse();

    forwards == build(reversed)
}
