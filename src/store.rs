//! This module provides the persistence of boards
//!
//! A [`Store`] is what a [`TaskBoard`](crate::TaskBoard) writes its board to after every change, and reads it back
//! from on startup. [`JsonFileStore`] keeps it in a local JSON file, [`MemoryStore`] keeps it in memory.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::{Board, Bucket};
use crate::error::StoreError;
use crate::item::{Item, ItemId};
use crate::layout::{BucketName, Layout};

/// Somewhere a board can be saved to, and loaded from
pub trait Store {
    /// Returns the last saved board, or `None` if nothing has been saved yet
    fn load(&mut self) -> Result<Option<Board>, StoreError>;
    /// Overwrite whatever has been saved before
    fn save(&mut self, board: &Board) -> Result<(), StoreError>;
}

/// How a board is laid out in its backing file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageFormat {
    /// A JSON object, keys are the bucket names: `{"todo": {"name": "To Do", "items": [...]}, ...}`
    Partition,
    /// A JSON array of items. Only boards with a single bucket can be saved this way, and the name and title of that
    /// bucket are not part of the file: they are the ones the store has been set up with
    Flat,
}


/// A store that keeps a board in a local JSON file
#[derive(Clone, Debug, PartialEq)]
pub struct JsonFileStore {
    backing_file: PathBuf,
    format: StorageFormat,
    /// The bucket a flat list is loaded into
    flat_bucket: (BucketName, String),
}

impl JsonFileStore {
    /// A store that saves boards as JSON objects into `path`
    pub fn new(path: &Path) -> Self {
        Self::with_format(path, StorageFormat::Partition)
    }

    /// A store that saves single-bucket boards as JSON arrays into `path`.
    /// Flat lists are loaded into the bucket of [`Layout::single_list`]
    pub fn flat(path: &Path) -> Self {
        Self::with_format(path, StorageFormat::Flat)
    }

    /// A store that saves the single bucket `name` (titled `title`) as a JSON array into `path`
    pub fn flat_with_bucket(path: &Path, name: BucketName, title: &str) -> Self {
        Self::with_format(path, StorageFormat::Flat)
            .with_flat_bucket(name, title)
    }

    pub fn with_format(path: &Path, format: StorageFormat) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            format,
            flat_bucket: single_list_bucket(),
        }
    }

    /// Change the bucket flat lists are loaded into (and the only one they can be saved from)
    pub fn with_flat_bucket(mut self, name: BucketName, title: &str) -> Self {
        self.flat_bucket = (name, title.to_string());
        self
    }

    /// A store using the path set in [`config::STORAGE_PATH`](crate::config::STORAGE_PATH)
    pub fn at_default_path() -> Self {
        Self::new(&crate::config::storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.backing_file
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    pub fn flat_bucket(&self) -> (&BucketName, &str) {
        (&self.flat_bucket.0, self.flat_bucket.1.as_str())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.backing_file.clone(), source }
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = std::ffi::OsString::from(".");
        name.push(self.backing_file.file_name().unwrap_or_else(|| std::ffi::OsStr::new("board")));
        name.push(format!(".tmp.{}", std::process::id()));
        self.backing_file.with_file_name(name)
    }

    fn write_to(&self, tmp_path: &Path, board: &Board, flat: Option<&[Item]>) -> Result<(), StoreError> {
        let file = std::fs::File::create(tmp_path).map_err(|err| self.io_error(err))?;
        let mut writer = std::io::BufWriter::new(file);
        match flat {
            None => serde_json::to_writer(&mut writer, board)?,
            Some(items) => serde_json::to_writer(&mut writer, items)?,
        }
        writer.flush().map_err(|err| self.io_error(err))?;
        writer.get_ref().sync_all().map_err(|err| self.io_error(err))
    }
}

impl Store for JsonFileStore {
    /// Both formats are accepted, whatever the format this store saves with
    fn load(&mut self) -> Result<Option<Board>, StoreError> {
        let file = match std::fs::File::open(&self.backing_file) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No board saved at {:?} yet", self.backing_file);
                return Ok(None);
            },
            Err(err) => return Err(self.io_error(err)),
            Ok(file) => file,
        };

        let value: serde_json::Value = serde_json::from_reader(std::io::BufReader::new(file))?;
        let board = board_from_json(value, &self.flat_bucket)?;
        log::info!("Loaded a board with {} items from {:?}", board.item_count(), self.backing_file);
        Ok(Some(board))
    }

    fn save(&mut self, board: &Board) -> Result<(), StoreError> {
        // Checked before anything gets written
        let flat = match self.format {
            StorageFormat::Partition => None,
            StorageFormat::Flat => Some(flat_items(board, &self.flat_bucket)?),
        };

        let path = &self.backing_file;
        if let Some(parent) = path.parent() {
            if parent.as_os_str().is_empty() == false {
                std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        // The backing file is only ever replaced by a complete one
        let tmp_path = self.temporary_path();
        let result = self.write_to(&tmp_path, board, flat)
            .and_then(|_| std::fs::rename(&tmp_path, path).map_err(|err| self.io_error(err)));
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp_path);
        }
        result
    }
}


/// A store that keeps the last saved board in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Option<Board>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a board
    pub fn with_board(board: Board) -> Self {
        Self { saved: Some(board), save_count: 0 }
    }

    pub fn saved(&self) -> Option<&Board> {
        self.saved.as_ref()
    }

    /// How many times [`Store::save`] has been called
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Store for MemoryStore {
    fn load(&mut self) -> Result<Option<Board>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, board: &Board) -> Result<(), StoreError> {
        self.saved = Some(board.clone());
        self.save_count += 1;
        Ok(())
    }
}


/// An entry of a flat list: either a full item, or a bare string (as stored by the simplest to-do pages)
#[derive(Deserialize)]
#[serde(untagged)]
enum FlatEntry {
    Item(Item),
    Text(String),
}

fn board_from_json(value: serde_json::Value, flat_bucket: &(BucketName, String)) -> Result<Board, StoreError> {
    if value.is_array() == false {
        return Ok(serde_json::from_value(value)?);
    }

    let entries: Vec<FlatEntry> = serde_json::from_value(value)?;

    // Bare strings get ids that no full item of the list is already using
    let mut taken: HashSet<ItemId> = entries.iter()
        .filter_map(|entry| match entry {
            FlatEntry::Item(item) => Some(item.id().clone()),
            FlatEntry::Text(_) => None,
        })
        .collect();
    let (name, title) = flat_bucket;
    let mut counter = 0;
    let items = entries.into_iter()
        .map(|entry| match entry {
            FlatEntry::Item(item) => item,
            FlatEntry::Text(text) => {
                let id = loop {
                    let candidate = ItemId::from(format!("{}-legacy-{}", name, counter));
                    counter += 1;
                    if taken.insert(candidate.clone()) {
                        break candidate;
                    }
                };
                Item::new_with_parameters(id, text, crate::item::CompletionStatus::Uncompleted, None)
            },
        })
        .collect();

    Board::from_buckets(vec![Bucket::new(name.clone(), title.clone(), items)])
        .map_err(|err| StoreError::Json(serde::de::Error::custom(err)))
}

fn single_list_bucket() -> (BucketName, String) {
    // single_list() has exactly one bucket
    let layout = Layout::single_list();
    let (name, title) = &layout.buckets()[0];
    (name.clone(), title.clone())
}

fn flat_items<'b>(board: &'b Board, flat_bucket: &(BucketName, String)) -> Result<&'b [Item], StoreError> {
    match board.buckets() {
        [only] if only.name() == &flat_bucket.0 && only.title() == flat_bucket.1 => Ok(only.items()),
        [only] => Err(StoreError::FlatBucketMismatch {
            expected: flat_bucket.0.to_string(),
            found: only.name().to_string(),
        }),
        buckets => Err(StoreError::NotSingleBucket(buckets.len())),
    }
}
