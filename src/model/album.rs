use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type AlbumId = i64;

/// Property names are matched ignoring case when decoding, so `Title`,
/// `TITLE` and `title` all fill the same field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub genre: String,
}

// Wire shape once property names are folded to lowercase
#[derive(Deserialize)]
struct AlbumFields {
    id: AlbumId,
    title: String,
    artist: String,
    price: f64,
    genre: String,
}

impl TryFrom<Map<String, Value>> for Album {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let folded: Map<String, Value> = object
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        let fields: AlbumFields = serde_json::from_value(Value::Object(folded))?;

        Ok(Self {
            id: fields.id,
            title: fields.title,
            artist: fields.artist,
            price: fields.price,
            genre: fields.genre,
        })
    }
}

impl Album {
    pub fn new(id: AlbumId, title: &str, artist: &str, price: f64, genre: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            price,
            genre: genre.to_string(),
        }
    }
}

/// Attribute an album listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Artist,
    Price,
}

impl SortField {
    /// Resolve a user-supplied field name. Matching ignores case and treats
    /// `name` as a synonym for `title`. Unknown names resolve to `None`.
    pub fn parse(field: &str) -> Option<Self> {
        match field.to_lowercase().as_str() {
            "name" | "title" => Some(SortField::Title),
            "artist" => Some(SortField::Artist),
            "price" => Some(SortField::Price),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl From<bool> for SortDirection {
    fn from(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// `None` means the listing is returned in store order
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn parse(field: &str, ascending: bool) -> Self {
        Self {
            field: SortField::parse(field),
            direction: SortDirection::from(ascending),
        }
    }

    pub fn unsorted() -> Self {
        Self {
            field: None,
            direction: SortDirection::Ascending,
        }
    }
}
