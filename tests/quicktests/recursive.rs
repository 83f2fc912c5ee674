use search_tree::{Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::of(xs.iter().copied());

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::of(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn size_counts_distinct_elements(xs: Vec<i16>) -> bool {
    let tree = Tree::of(xs.iter().copied());
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn second_insert_is_rejected(xs: Vec<u8>, x: u8) -> bool {
    let mut tree = Tree::of(xs);
    tree.insert(x);
    let size = tree.size();

    !tree.insert(x) && tree.size() == size
}

#[quickcheck]
fn traversal_is_sorted_and_distinct(xs: Vec<i32>) -> bool {
    let tree = Tree::of(xs.iter().copied());
    let mut visited = Vec::new();
    tree.in_order_traversal(|x| visited.push(*x));

    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    visited == expected && tree.into_iter().eq(expected)
}

#[quickcheck]
fn ascending_insertions_form_a_chain(n: u8) -> TestResult {
    if n == 0 {
        return TestResult::discard();
    }
    let tree = Tree::of(0..n);

    TestResult::from_bool(tree.depth() == usize::from(n) - 1)
}

#[quickcheck]
fn empty_tree_contains_nothing(x: i64) -> bool {
    !Tree::new().contains(&x)
}

#[quickcheck]
fn absent_elements_always_rejected(xs: Vec<i8>) -> bool {
    let mut tree = Tree::of(xs);
    let size = tree.size();

    tree.try_insert(None) == Err(TreeError::AbsentElement)
        && tree.try_contains(None) == Err(TreeError::AbsentElement)
        && tree.size() == size
}
