//! Domain state slice — one generic partition of the store per entity kind.
//!
//! Every async operation moves a slice through
//! `Pending(op)` → `FetchedAll` / `FetchedOne` / `Saved` (fulfilled) or
//! `Rejected` (failed). Nothing is retried automatically and concurrent
//! operations are not deduplicated: the last action to arrive wins.

use std::fmt;

use crate::async_result::AsyncResult;
use crate::resource::Resource;

/// The operation a slice transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    FetchById,
    Save,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FetchAll => "fetch_all",
            Self::FetchById => "fetch_by_id",
            Self::Save => "save",
        })
    }
}

/// A state transition routed to exactly one slice.
#[derive(Debug, Clone)]
pub enum SliceAction<E> {
    Pending(Operation),
    FetchedAll(Vec<E>),
    FetchedOne(E),
    Saved(E),
    Rejected { op: Operation, message: String },
    Reset,
}

/// State of one slice: the fetched data plus the status of the last operation.
#[derive(Debug, Clone)]
pub struct SliceState<E> {
    collection: Vec<E>,
    single: Option<E>,
    status: AsyncResult<Operation>,
}

impl<E> Default for SliceState<E> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            single: None,
            status: AsyncResult::Idle,
        }
    }
}

impl<E> SliceState<E> {
    /// Items from the last successful `fetch_all`, plus upserted saves.
    #[must_use]
    pub fn collection(&self) -> &[E] {
        &self.collection
    }

    /// Item from the last successful `fetch_by_id` or `save`.
    #[must_use]
    pub fn single(&self) -> Option<&E> {
        self.single.as_ref()
    }

    /// `true` strictly between an operation's dispatch and its resolution.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Message of the last rejected operation; cleared by the next attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    #[must_use]
    pub fn status(&self) -> &AsyncResult<Operation> {
        &self.status
    }
}

impl<E: Resource> SliceState<E> {
    /// Apply one transition.
    pub fn reduce(&mut self, action: SliceAction<E>) {
        match action {
            SliceAction::Pending(_) => self.status.start(),
            SliceAction::FetchedAll(items) => {
                self.collection = items;
                self.status.resolve(Ok(Operation::FetchAll));
            }
            SliceAction::FetchedOne(item) => {
                self.single = Some(item);
                self.status.resolve(Ok(Operation::FetchById));
            }
            SliceAction::Saved(item) => {
                let key = item.key();
                match self.collection.iter_mut().find(|existing| existing.key() == key) {
                    Some(existing) => *existing = item.clone(),
                    None => self.collection.push(item.clone()),
                }
                self.single = Some(item);
                self.status.resolve(Ok(Operation::Save));
            }
            SliceAction::Rejected { message, .. } => self.status.resolve(Err(message)),
            SliceAction::Reset => *self = Self::default(),
        }
    }
}
