#[macro_use]
extern crate quickcheck_macros;

mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Add the K to the tree
    Add(K),
    /// Erase one K from the tree
    Erase(K),
    /// Walk the tree with a cursor
    Walk,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Add(K::arbitrary(g)),
            1 => Op::Erase(K::arbitrary(g)),
            2 => Op::Walk,
            _ => unreachable!(),
        }
    }
}
