use log::{debug, trace, warn};
use newer_filter_domain::{NewerConfig, NewerOptions, is_newer};
use newer_filter_ports::{RecordSink, TimestampLookup};
use newer_filter_shared_kernel::{ApplicationError, ErrorContext, FileRecord, Result};

/// Identity attached to every error raised by the filter.
pub const STAGE_NAME: &str = "newer";

#[derive(Debug)]
enum Session {
    /// No newer file seen yet; stale records are withheld in arrival order.
    Screening { buffer: Vec<FileRecord> },
    /// A newer file was seen; everything passes from now on.
    Passthrough,
    /// An earlier record failed; the session accepts nothing more.
    Terminated,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub received: usize,
    pub emitted: usize,
    pub discarded: usize,
    pub passthrough: bool,
}

/// Streaming transform forwarding records newer than their destination.
///
/// Records judged stale are buffered until the first newer record shows up.
/// At that point the buffer is flushed in arrival order, followed by the
/// triggering record, and every later record passes unconditionally. Whatever
/// is still buffered when the session ends is dropped.
///
/// Any error while processing a record terminates the session.
pub struct NewerFilter<L> {
    config: NewerConfig,
    lookup: L,
    session: Session,
    received: usize,
    emitted: usize,
}

impl<L: TimestampLookup> NewerFilter<L> {
    pub fn new(options: impl Into<NewerOptions>, lookup: L) -> Result<Self> {
        let config = NewerConfig::try_from(options.into()).context(STAGE_NAME)?;
        Ok(Self::with_config(config, lookup))
    }

    pub fn with_config(config: NewerConfig, lookup: L) -> Self {
        Self {
            config,
            lookup,
            session: Session::Screening { buffer: Vec::new() },
            received: 0,
            emitted: 0,
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self.session, Session::Passthrough)
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.session, Session::Terminated)
    }

    pub fn buffered_len(&self) -> usize {
        match &self.session {
            Session::Screening { buffer } => buffer.len(),
            _ => 0,
        }
    }

    /// Handles one record, pushing zero or more records into `sink`.
    pub fn process<S>(&mut self, record: FileRecord, sink: &mut S) -> Result<()>
    where
        S: RecordSink + ?Sized,
    {
        if self.is_terminated() {
            return Err(ApplicationError::SessionTerminated { stage: STAGE_NAME.to_string() }).context(STAGE_NAME);
        }
        self.received += 1;

        let result = self.step(record, sink);
        if let Err(err) = &result {
            warn!("{STAGE_NAME}: aborting session: {err}");
            self.session = Session::Terminated;
        }
        result.context(STAGE_NAME)
    }

    /// Same as [`process`](Self::process) but collects the emitted records.
    pub fn process_collect(&mut self, record: FileRecord) -> Result<Vec<FileRecord>> {
        let mut out = Vec::new();
        self.process(record, &mut out)?;
        Ok(out)
    }

    /// Ends the session, discarding any records still buffered.
    pub fn finish(self) -> FilterSummary {
        let (discarded, passthrough) = match self.session {
            Session::Screening { buffer } => (buffer.len(), false),
            Session::Passthrough => (0, true),
            Session::Terminated => (0, false),
        };
        if discarded > 0 {
            debug!("{STAGE_NAME}: discarding {discarded} record(s) not newer than their destination");
        }
        FilterSummary { received: self.received, emitted: self.emitted, discarded, passthrough }
    }

    fn step<S>(&mut self, record: FileRecord, sink: &mut S) -> Result<()>
    where
        S: RecordSink + ?Sized,
    {
        let newer = self.is_record_newer(&record)?;

        // Terminated stays in place if an emit below fails.
        let session = std::mem::replace(&mut self.session, Session::Terminated);
        self.session = match session {
            Session::Screening { mut buffer } if !newer => {
                buffer.push(record);
                Session::Screening { buffer }
            }
            Session::Screening { buffer } => {
                debug!(
                    "{STAGE_NAME}: '{}' is newer, switching to passthrough and releasing {} buffered record(s)",
                    record.relative,
                    buffer.len()
                );
                for held in buffer {
                    self.emit(held, sink)?;
                }
                self.emit(record, sink)?;
                Session::Passthrough
            }
            Session::Passthrough => {
                self.emit(record, sink)?;
                Session::Passthrough
            }
            Session::Terminated => Session::Terminated,
        };
        Ok(())
    }

    fn is_record_newer(&self, record: &FileRecord) -> Result<bool> {
        let source = record.require_stat()?;
        let destination = self.config.destination_path(&record.relative);
        let dest_stat = self.lookup.lookup(&destination)?;
        let newer = is_newer(source, dest_stat.as_ref(), self.config.timestamp_field());
        trace!(
            "{STAGE_NAME}: {} -> {} (exists: {}, newer: {newer})",
            record.source_path().display(),
            destination.display(),
            dest_stat.is_some()
        );
        Ok(newer)
    }

    fn emit<S>(&mut self, record: FileRecord, sink: &mut S) -> Result<()>
    where
        S: RecordSink + ?Sized,
    {
        sink.push(record)?;
        self.emitted += 1;
        Ok(())
    }
}
