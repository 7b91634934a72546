//! Generation of fresh item ids

use uuid::Uuid;

use crate::item::ItemId;
use crate::layout::BucketName;

/// Something that hands out ids for newly added items.
///
/// Implementors should avoid repeating themselves. A [`Board`](crate::Board) still checks every id it is given,
/// and asks again in case of a clash.
pub trait IdGenerator {
    /// Returns an id for an item about to be added to `bucket`
    fn next_id(&mut self, bucket: &BucketName) -> ItemId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self, bucket: &BucketName) -> ItemId {
        (**self).next_id(bucket)
    }
}

/// Random ids
#[derive(Clone, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self, _bucket: &BucketName) -> ItemId {
        ItemId::from(Uuid::new_v4().to_hyphenated().to_string())
    }
}

/// Predictable ids such as `todo-1`, `todo-2`, `proceso-3`...
///
/// The counter is shared by every bucket, so ids never repeat within a generator.
#[derive(Clone, Debug)]
pub struct SequentialGenerator {
    next: u64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self, bucket: &BucketName) -> ItemId {
        let id = ItemId::from(format!("{}-{}", bucket, self.next));
        self.next += 1;
        id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids() {
        let todo = BucketName::new("todo").unwrap();
        let done = BucketName::new("done").unwrap();
        let mut ids = SequentialGenerator::new();

        assert_eq!(ids.next_id(&todo), ItemId::from("todo-1"));
        assert_eq!(ids.next_id(&done), ItemId::from("done-2"));
        assert_eq!(ids.next_id(&todo), ItemId::from("todo-3"));
    }

    #[test]
    fn uuid_ids_differ() {
        let todo = BucketName::new("todo").unwrap();
        let mut ids = UuidGenerator;
        assert_ne!(ids.next_id(&todo), ids.next_id(&todo));
    }
}
