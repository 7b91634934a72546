//! A board: every item, partitioned into named ordered buckets
//!
//! A [`Board`] is a plain value. The fallible `try_*` methods mutate it in place and report why a request could not be
//! honoured; they never leave the board half-modified. \
//! The "fail quiet" policy of a UI (ignore what cannot be done) is applied one level up, by [`reduce`](crate::action::reduce)
//! and by [`TaskBoard`](crate::TaskBoard).

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;
use crate::id::IdGenerator;
use crate::item::{Item, ItemId};
use crate::layout::{BucketName, Layout};

/// How many times the id generator is asked for an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// A named ordered list of items (a column, or a day)
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    name: BucketName,
    title: String,
    items: Vec<Item>,
}

impl Bucket {
    pub fn new(name: BucketName, title: String, items: Vec<Item>) -> Self {
        Self { name, title, items }
    }

    pub fn name(&self) -> &BucketName { &self.name  }
    pub fn title(&self) -> &str       { &self.title }
    pub fn items(&self) -> &[Item]    { &self.items }
    pub fn len(&self) -> usize        { self.items.len() }
    pub fn is_empty(&self) -> bool    { self.items.is_empty() }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}


/// The complete state of a task board.
///
/// Invariants:
/// * bucket names are unique, and their set is fixed once the board is built
/// * an item id appears at most once on the whole board
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    buckets: Vec<Bucket>,
}

impl Board {
    /// Create a board with one empty bucket per entry of the layout
    pub fn new(layout: &Layout) -> Self {
        Self {
            buckets: layout.buckets().iter()
                .map(|(name, title)| Bucket::new(name.clone(), title.clone(), Vec::new()))
                .collect()
        }
    }

    /// Create a board out of existing buckets, checking the board invariants
    pub fn from_buckets(buckets: Vec<Bucket>) -> Result<Self, BoardError> {
        if buckets.is_empty() {
            return Err(BoardError::EmptyLayout);
        }

        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for bucket in &buckets {
            if names.insert(&bucket.name) == false {
                return Err(BoardError::DuplicateBucket(bucket.name.to_string()));
            }
            for item in &bucket.items {
                if ids.insert(item.id()) == false {
                    return Err(BoardError::DuplicateItem(item.id().clone()));
                }
            }
        }

        Ok(Self { buckets })
    }

    /// The layout this board follows
    pub fn layout(&self) -> Layout {
        Layout::from_validated(self.buckets.iter().map(|b| (b.name.clone(), b.title.clone())).collect())
    }

    /// The buckets, in display order
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    pub fn bucket_names(&self) -> impl Iterator<Item = &BucketName> {
        self.buckets.iter().map(|b| &b.name)
    }

    /// Number of items in every bucket, in display order
    pub fn counts(&self) -> Vec<(&BucketName, usize)> {
        self.buckets.iter().map(|b| (&b.name, b.len())).collect()
    }

    /// Total number of items on the board
    pub fn item_count(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// Where an item currently is: its bucket, its index in that bucket, and the item itself
    pub fn find(&self, id: &ItemId) -> Option<(&BucketName, usize, &Item)> {
        for bucket in &self.buckets {
            if let Some(index) = bucket.items.iter().position(|i| i.id() == id) {
                return Some((&bucket.name, index, &bucket.items[index]));
            }
        }
        None
    }

    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }

    pub(crate) fn bucket_index(&self, name: &str) -> Result<usize, BoardError> {
        self.buckets.iter()
            .position(|b| b.name == name)
            .ok_or_else(|| BoardError::UnknownBucket(name.to_string()))
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut [Bucket] {
        &mut self.buckets
    }

    fn locate(&self, id: &ItemId) -> Result<(usize, usize), BoardError> {
        for (b, bucket) in self.buckets.iter().enumerate() {
            if let Some(i) = bucket.items.iter().position(|item| item.id() == id) {
                return Ok((b, i));
            }
        }
        Err(BoardError::UnknownItem(id.clone()))
    }

    fn item_mut(&mut self, id: &ItemId) -> Result<&mut Item, BoardError> {
        let (b, i) = self.locate(id)?;
        Ok(&mut self.buckets[b].items[i])
    }

    /// Append a new uncompleted item at the tail of `bucket`.
    ///
    /// The text is trimmed, and must not be blank.
    pub fn try_add<G>(&mut self, bucket: &str, text: &str, ids: &mut G) -> Result<ItemId, BoardError>
    where
        G: IdGenerator + ?Sized,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::BlankText);
        }
        let b = self.bucket_index(bucket)?;

        let mut id = ids.next_id(&self.buckets[b].name);
        for _ in 1..MAX_ID_ATTEMPTS {
            if self.contains_item(&id) == false {
                break;
            }
            log::debug!("Id {} is already in use, asking for another one", id);
            id = ids.next_id(&self.buckets[b].name);
        }
        if self.contains_item(&id) {
            return Err(BoardError::DuplicateItem(id));
        }

        self.buckets[b].items.push(Item::new(id.clone(), text.to_string()));
        Ok(id)
    }

    /// Remove an item, wherever it is
    pub fn try_delete(&mut self, id: &ItemId) -> Result<Item, BoardError> {
        let (b, i) = self.locate(id)?;
        Ok(self.buckets[b].items.remove(i))
    }

    /// Flip the completion status of an item
    pub fn try_toggle(&mut self, id: &ItemId) -> Result<(), BoardError> {
        self.item_mut(id)?.toggle_done();
        Ok(())
    }

    /// Replace the text of an item.
    ///
    /// The text is trimmed, and must not be blank.
    pub fn try_rename(&mut self, id: &ItemId, text: &str) -> Result<(), BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::BlankText);
        }
        self.item_mut(id)?.set_text(text.to_string());
        Ok(())
    }
}


/// The on-disk shape of a bucket: `{"name": <title>, "items": [...]}`
#[derive(Serialize)]
struct BucketBodyRef<'a> {
    name: &'a str,
    items: &'a [Item],
}

#[derive(Deserialize)]
struct BucketBody {
    name: String,
    #[serde(default)]
    items: Vec<Item>,
}

/// Used to support serde.
/// A board is stored as a JSON object whose keys are the bucket names, in display order
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.name, &BucketBodyRef{ name: &bucket.title, items: &bucket.items })?;
        }
        map.end()
    }
}

/// Used to support serde
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Board, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BoardVisitor)
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of bucket names to buckets")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Board, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut buckets = Vec::new();
        while let Some((name, body)) = access.next_entry::<BucketName, BucketBody>()? {
            buckets.push(Bucket::new(name, body.name, body.items));
        }
        Board::from_buckets(buckets).map_err(serde::de::Error::custom)
    }
}
