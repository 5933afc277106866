// crates/ports/src/sink.rs
use newer_filter_shared_kernel::{FileRecord, Result};

/// Downstream consumer of records emitted by the filter.
pub trait RecordSink {
    fn push(&mut self, record: FileRecord) -> Result<()>;
}

impl RecordSink for Vec<FileRecord> {
    fn push(&mut self, record: FileRecord) -> Result<()> {
        Vec::push(self, record);
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn push(&mut self, record: FileRecord) -> Result<()> {
        (**self).push(record)
    }
}

/// Adapts a closure into a [`RecordSink`].
pub struct FnSink<F>(pub F);

impl<F> RecordSink for FnSink<F>
where
    F: FnMut(FileRecord) -> Result<()>,
{
    fn push(&mut self, record: FileRecord) -> Result<()> {
        (self.0)(record)
    }
}
