use std::{collections::VecDeque, iter::FusedIterator};

use newer_filter_ports::TimestampLookup;
use newer_filter_shared_kernel::{FileRecord, Result};

use crate::filter::{FilterSummary, NewerFilter};

/// Drives a [`NewerFilter`] over an upstream iterator of records.
///
/// Records are pulled one at a time; a lookup always completes before the
/// next upstream record is requested. The first error is yielded once and
/// ends the stream. Exhausting upstream ends the session and records its
/// [`FilterSummary`].
pub struct NewerStream<I, L> {
    upstream: I,
    filter: Option<NewerFilter<L>>,
    pending: VecDeque<FileRecord>,
    summary: Option<FilterSummary>,
}

impl<I, L> NewerStream<I, L>
where
    I: Iterator<Item = FileRecord>,
    L: TimestampLookup,
{
    pub fn new(upstream: I, filter: NewerFilter<L>) -> Self {
        Self { upstream, filter: Some(filter), pending: VecDeque::new(), summary: None }
    }

    /// Available once upstream has been exhausted without error.
    pub fn summary(&self) -> Option<&FilterSummary> {
        self.summary.as_ref()
    }
}

impl<I, L> Iterator for NewerStream<I, L>
where
    I: Iterator<Item = FileRecord>,
    L: TimestampLookup,
{
    type Item = Result<FileRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }
            let filter = self.filter.as_mut()?;
            match self.upstream.next() {
                Some(record) => {
                    let mut emitted = Vec::new();
                    if let Err(err) = filter.process(record, &mut emitted) {
                        self.filter = None;
                        return Some(Err(err));
                    }
                    self.pending.extend(emitted);
                }
                None => {
                    self.summary = self.filter.take().map(NewerFilter::finish);
                    return None;
                }
            }
        }
    }
}

impl<I, L> FusedIterator for NewerStream<I, L>
where
    I: Iterator<Item = FileRecord>,
    L: TimestampLookup,
{
}

/// Adds `.newer(filter)` to any iterator of records.
pub trait NewerExt: Iterator<Item = FileRecord> + Sized {
    fn newer<L: TimestampLookup>(self, filter: NewerFilter<L>) -> NewerStream<Self, L> {
        NewerStream::new(self, filter)
    }
}

impl<I: Iterator<Item = FileRecord>> NewerExt for I {}
