//! Domain primitives for the tasting journal.
//!
//! Ids are wrapped in newtypes so an entry id can't be passed where a
//! bookmark id is expected. Ownership of journal resources is decided in one
//! place, [`is_owner`], which every mutation path and every view goes through.

use crate::db::User;
use crate::entities::{bookmarks, entries};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

id_newtype!(
    /// Identifier of a journal user.
    UserId
);

id_newtype!(
    /// Identifier of a tasting entry.
    ///
    /// ```rust
    /// use dram::domain::EntryId;
    ///
    /// let id = EntryId::new(42);
    /// assert_eq!(id.value(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    EntryId
);

id_newtype!(
    /// Identifier of a bookmark.
    BookmarkId
);

/// The authenticated principal of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: UserId::new(user.id),
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// A resource that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

impl Owned for entries::Model {
    fn owner_id(&self) -> UserId {
        UserId::new(self.user_id)
    }
}

impl Owned for bookmarks::Model {
    fn owner_id(&self) -> UserId {
        UserId::new(self.user_id)
    }
}

/// True iff `viewer` is signed in and owns `resource`. Anonymous viewers own nothing.
#[must_use]
pub fn is_owner<R: Owned + ?Sized>(viewer: Option<&CurrentUser>, resource: &R) -> bool {
    viewer.is_some_and(|user| user.id == resource.owner_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        author: i32,
    }

    impl Owned for Note {
        fn owner_id(&self) -> UserId {
            UserId::new(self.author)
        }
    }

    fn user(id: i32) -> CurrentUser {
        CurrentUser {
            id: UserId::new(id),
            username: format!("user{id}"),
            is_admin: false,
        }
    }

    #[test]
    fn test_is_owner() {
        let note = Note { author: 3 };

        assert!(is_owner(Some(&user(3)), &note));
        assert!(!is_owner(Some(&user(4)), &note));
        assert!(!is_owner(None, &note));
    }

    #[test]
    fn test_admin_does_not_own_others_resources() {
        let mut admin = user(1);
        admin.is_admin = true;

        assert!(!is_owner(Some(&admin), &Note { author: 2 }));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = BookmarkId::new(9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");

        let parsed: EntryId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, EntryId::new(12));
        assert_eq!(i32::from(parsed), 12);
    }
}
