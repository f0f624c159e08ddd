//! Tagged media references.

use crate::entities::list_item::MediaType;
use serde::{Deserialize, Serialize};

/// A reference to one external media item, tagged by kind.
///
/// Replaces runtime string dispatch between the movie and TV tables: the kind
/// is carried in the type and matched exactly once per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mediaType", content = "mediaId", rename_all = "camelCase")]
pub enum MediaId {
    /// External movie identifier.
    Movie(i32),
    /// External TV series identifier.
    Tv(i32),
}

impl MediaId {
    /// The stored media kind for this reference.
    #[must_use]
    pub const fn media_type(self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Tv(_) => MediaType::Tv,
        }
    }

    /// The raw external identifier.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Movie(id) | Self::Tv(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_dispatch() {
        assert_eq!(MediaId::Movie(603).media_type(), MediaType::Movie);
        assert_eq!(MediaId::Tv(1396).media_type(), MediaType::Tv);
    }

    #[test]
    fn test_raw_id() {
        assert_eq!(MediaId::Movie(603).raw(), 603);
        assert_eq!(MediaId::Tv(1396).raw(), 1396);
    }
}
