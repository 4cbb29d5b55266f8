use serde::{Deserialize, Serialize};

/// Named container advertised by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    pub id: String,
    pub display_name: String,
    pub kind: CollectionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionKind {
    UserDefined,
    Native,
    System,
    #[serde(other)]
    Unknown,
}

const NAME_HINTS: [&str; 3] = ["investor", "member", "application"];

/// Ranked match over the advertised collections when no explicit target is
/// configured:
///
/// 1. a collection whose name or id mentions investors, members, or
///    applications;
/// 2. otherwise the first user-defined or native collection;
/// 3. otherwise the first collection listed.
///
/// Returns `None` for an empty directory; the caller decides how loudly to
/// fail.
pub fn best_collection(collections: &[CollectionDescriptor]) -> Option<&CollectionDescriptor> {
    collections
        .iter()
        .find(|candidate| {
            let name = candidate.display_name.to_lowercase();
            let id = candidate.id.to_lowercase();
            NAME_HINTS
                .iter()
                .any(|hint| name.contains(hint) || id.contains(hint))
        })
        .or_else(|| {
            collections.iter().find(|candidate| {
                matches!(
                    candidate.kind,
                    CollectionKind::UserDefined | CollectionKind::Native
                )
            })
        })
        .or_else(|| collections.first())
}
