//! Board items (the cards of a column, or the entries of a day)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::{DateTime, Utc};

/// The completion of an item.
///
/// A plain `done` flag, plus the time it was completed when that is known.
/// This API forbids the meaningless "not done, but completed at some date" combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionStatus {
    Completed(Option<DateTime<Utc>>),
    Uncompleted,
}
impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        match self {
            CompletionStatus::Completed(_) => true,
            _ => false,
        }
    }
}


/// An item of a board
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawItem", into = "RawItem")]
pub struct Item {
    /// Unique across the whole board
    id: ItemId,
    /// The displayed text
    text: String,
    completion_status: CompletionStatus,
    /// The time this item was added.
    /// This is None for items imported from data that did not record it
    creation_date: Option<DateTime<Utc>>,
}

impl Item {
    /// Create a brand new, uncompleted item
    pub fn new(id: ItemId, text: String) -> Self {
        Self::new_with_parameters(id, text, CompletionStatus::Uncompleted, Some(Utc::now()))
    }

    /// Create an item out of already known values (e.g. when importing it)
    pub fn new_with_parameters(id: ItemId, text: String,
                               completion_status: CompletionStatus,
                               creation_date: Option<DateTime<Utc>>,
                            ) -> Self
    {
        Self { id, text, completion_status, creation_date }
    }

    pub fn id(&self) -> &ItemId     { &self.id          }
    pub fn text(&self) -> &str      { &self.text        }
    pub fn done(&self) -> bool      { self.completion_status.is_completed() }
    pub fn completion_status(&self) -> &CompletionStatus    { &self.completion_status }
    pub fn creation_date(&self) -> Option<&DateTime<Utc>>   { self.creation_date.as_ref() }

    /// Change the text of this item.
    /// Callers are in charge of refusing blank texts
    pub fn set_text(&mut self, new_text: String) {
        self.text = new_text;
    }

    pub fn set_completion_status(&mut self, new_completion_status: CompletionStatus) {
        self.completion_status = new_completion_status;
    }

    /// Flip the completion status.
    /// Toggling twice gives back an equal item
    pub fn toggle_done(&mut self) {
        let new_status = match self.completion_status {
            CompletionStatus::Completed(_) => CompletionStatus::Uncompleted,
            CompletionStatus::Uncompleted => CompletionStatus::Completed(Some(Utc::now())),
        };
        self.set_completion_status(new_status);
    }
}


/// The on-disk shape of an [`Item`]
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawItem {
    id: ItemId,
    // `content` is what the original kanban pages stored
    #[serde(alias = "content")]
    text: String,
    #[serde(default)]
    done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        let completion_status = if raw.done {
            CompletionStatus::Completed(raw.completed_at)
        } else {
            CompletionStatus::Uncompleted
        };
        Item::new_with_parameters(raw.id, raw.text, completion_status, raw.created_at)
    }
}

impl From<Item> for RawItem {
    fn from(item: Item) -> Self {
        let (done, completed_at) = match item.completion_status {
            CompletionStatus::Completed(date) => (true, date),
            CompletionStatus::Uncompleted => (false, None),
        };
        RawItem {
            id: item.id,
            text: item.text,
            done,
            completed_at,
            created_at: item.creation_date,
        }
    }
}


/// An opaque identifier for an [`Item`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    content: String,
}
impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for ItemId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for ItemId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<ItemId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        if content.is_empty() {
            return Err(serde::de::Error::custom("item ids must not be empty"));
        }
        Ok(ItemId{ content })
    }
}
