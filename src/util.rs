/// Which child slot of a node a link lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// The slot holding the subtree of smaller values.
    Left,
    /// The slot holding the subtree of larger values.
    Right,
}
