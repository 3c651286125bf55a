use serde::{Deserialize, Serialize};

/// Membership semantics for the `replace_*` relationship operations.
///
/// The catalog historically treats "replace" as "ensure membership": every
/// id in the submitted list gets attached, ids omitted from the list are
/// left untouched. `Exact` switches to set-exact-membership, which also
/// detaches everything omitted from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplacePolicy {
    #[default]
    Merge,
    Exact,
}
