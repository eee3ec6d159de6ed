use crate::db::{EntryRecord, User};
use crate::domain::{CurrentUser, is_owner};
use crate::entities::{bookmarks, colors, ratings, whiskey_types};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhiskeyTypeDto {
    pub id: i32,
    pub label: String,
}

impl From<whiskey_types::Model> for WhiskeyTypeDto {
    fn from(model: whiskey_types::Model) -> Self {
        Self {
            id: model.id,
            label: model.label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorDto {
    pub id: i32,
    pub label: String,
    pub color_grade: f64,
    pub hex_code: String,
    pub tailwind_name: String,
}

impl From<colors::Model> for ColorDto {
    fn from(model: colors::Model) -> Self {
        Self {
            id: model.id,
            label: model.label,
            color_grade: model.color_grade,
            hex_code: model.hex_code,
            tailwind_name: model.tailwind_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingDto {
    pub id: i32,
    pub number_rating: i32,
    pub label: String,
}

impl From<ratings::Model> for RatingDto {
    fn from(model: ratings::Model) -> Self {
        Self {
            id: model.id,
            number_rating: model.number_rating,
            label: model.label,
        }
    }
}

/// Byline attached to every entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorDto {
    pub author_name: String,
    pub username: String,
}

impl From<&User> for AuthorDto {
    fn from(user: &User) -> Self {
        Self {
            author_name: user.full_name(),
            username: user.username.clone(),
        }
    }
}

/// A tasting entry with its lookups expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryView {
    pub id: i32,
    pub is_owner: bool,
    pub user_id: i32,
    pub whiskey: String,
    pub whiskey_type: WhiskeyTypeDto,
    pub country: String,
    pub part_of_country: Option<String>,
    pub age_in_years: Option<f64>,
    pub proof: f64,
    pub color: Option<ColorDto>,
    pub mash_bill: Option<String>,
    pub maturation_details: Option<String>,
    pub nose: String,
    pub palate: String,
    pub finish: String,
    pub rating: RatingDto,
    pub notes: Option<String>,
    pub publication_date: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub user: AuthorDto,
}

impl EntryView {
    #[must_use]
    pub fn build(record: EntryRecord, viewer: Option<&CurrentUser>) -> Self {
        let EntryRecord {
            entry,
            whiskey_type,
            color,
            rating,
            author,
        } = record;

        Self {
            id: entry.id,
            is_owner: is_owner(viewer, &entry),
            user_id: entry.user_id,
            whiskey: entry.whiskey,
            whiskey_type: whiskey_type.into(),
            country: entry.country,
            part_of_country: entry.part_of_country,
            age_in_years: entry.age_in_years,
            proof: entry.proof,
            color: color.map(Into::into),
            mash_bill: entry.mash_bill,
            maturation_details: entry.maturation_details,
            nose: entry.nose,
            palate: entry.palate,
            finish: entry.finish,
            rating: rating.into(),
            notes: entry.notes,
            publication_date: entry.publication_date.format("%Y-%m-%d").to_string(),
            image_url: entry.image_url,
            published: entry.published,
            user: AuthorDto::from(&author),
        }
    }
}

/// The `entry` field of a bookmark: a bare id, or the whole entry when expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BookmarkEntry {
    Id(i32),
    Expanded(Box<EntryView>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkView {
    pub id: i32,
    pub entry: BookmarkEntry,
    pub user: i32,
    pub is_owner: bool,
}

impl BookmarkView {
    #[must_use]
    pub fn build(
        bookmark: &bookmarks::Model,
        entry: BookmarkEntry,
        viewer: Option<&CurrentUser>,
    ) -> Self {
        Self {
            id: bookmark.id,
            entry,
            user: bookmark.user_id,
            is_owner: is_owner(viewer, bookmark),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUserDto {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub date_joined: String,
}

impl From<User> for CurrentUserDto {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            date_joined: user.date_joined,
        }
    }
}

/// Body of entry create and update. Fields are optional here so that a
/// missing one is reported by validation with its name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPayload {
    pub whiskey: Option<String>,
    pub type_id: Option<i32>,
    pub country: Option<String>,
    pub part_of_country: Option<String>,
    pub age_in_years: Option<f64>,
    pub proof: Option<f64>,
    pub color_id: Option<i32>,
    pub mash_bill: Option<String>,
    pub maturation_details: Option<String>,
    pub nose: Option<String>,
    pub palate: Option<String>,
    pub finish: Option<String>,
    pub rating_id: Option<i32>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkPayload {
    #[serde(alias = "entryId")]
    pub entry_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypePayload {
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub username: Option<String>,
}

impl ListQuery {
    /// Owner filter; a blank `?username=` means no filter.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        username_filter(self.username.as_deref())
    }
}

fn username_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|u| !u.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct BookmarkListQuery {
    pub username: Option<String>,
    pub expand: Option<String>,
}

impl BookmarkListQuery {
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        username_filter(self.username.as_deref())
    }

    /// `expand=entry` (possibly among other comma separated names).
    #[must_use]
    pub fn expand_entry(&self) -> bool {
        self.expand
            .as_deref()
            .is_some_and(|v| v.split(',').any(|part| part.trim() == "entry"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_entry_serializes_as_id() {
        let view = BookmarkView {
            id: 1,
            entry: BookmarkEntry::Id(4),
            user: 2,
            is_owner: false,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["entry"], 4);
        assert_eq!(json["user"], 2);
    }

    #[test]
    fn test_bookmark_payload_accepts_camel_case() {
        let payload: BookmarkPayload = serde_json::from_str(r#"{"entryId": 3}"#).unwrap();
        assert_eq!(payload.entry_id, 3);

        let payload: BookmarkPayload = serde_json::from_str(r#"{"entry_id": 5}"#).unwrap();
        assert_eq!(payload.entry_id, 5);
    }

    #[test]
    fn test_expand_entry() {
        let query = |expand: Option<&str>| BookmarkListQuery {
            username: None,
            expand: expand.map(str::to_string),
        };

        assert!(query(Some("entry")).expand_entry());
        assert!(query(Some("user, entry")).expand_entry());
        assert!(!query(Some("entries")).expand_entry());
        assert!(!query(None).expand_entry());
    }

    #[test]
    fn test_blank_username_is_no_filter() {
        let query = |username: Option<&str>| ListQuery {
            username: username.map(str::to_string),
        };

        assert_eq!(query(Some("")).username(), None);
        assert_eq!(query(Some("  ")).username(), None);
        assert_eq!(query(None).username(), None);
        assert_eq!(query(Some("alice")).username(), Some("alice"));

        let bookmarks = BookmarkListQuery {
            username: Some(String::new()),
            expand: None,
        };
        assert_eq!(bookmarks.username(), None);
    }
}
