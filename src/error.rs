/// Returned when a node would be built from an absent value.
///
/// Every [`TreeNode`][crate::TreeNode] holds a value, so the only way to hit this is through one
/// of the `Option`-taking entry points such as `TreeNode::try_from(None)` or
/// [`TreeSet::try_add_option`][crate::TreeSet::try_add_option].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tree node value must be present")]
pub struct NilValueError;
