use crate::ports::{ResolverFactory, ResultSink};
use crate::services::ResolverSetBuilder;
use ferrous_ptr_domain::{DomainError, LookupConfig, OutputMode};
use futures::future::join_all;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info};

/// Smallest queue tokio offers; the reader blocks until a worker takes the
/// previous item.
const WORK_QUEUE_CAPACITY: usize = 1;

type WorkQueue = Arc<Mutex<mpsc::Receiver<String>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSummary {
    /// Addresses taken off the queue.
    pub items: u64,
    /// Result lines written to the sink.
    pub lines: u64,
    /// Resolver calls that returned an error.
    pub failed_lookups: u64,
}

impl LookupSummary {
    fn merge(&mut self, other: LookupSummary) {
        self.items += other.items;
        self.lines += other.lines;
        self.failed_lookups += other.failed_lookups;
    }
}

/// Reads addresses from an input stream and reverse-resolves them on a
/// fixed pool of workers.
pub struct BulkPtrLookupUseCase {
    config: Arc<LookupConfig>,
    resolver_factory: Arc<dyn ResolverFactory>,
    sink: Arc<dyn ResultSink>,
}

impl BulkPtrLookupUseCase {
    pub fn new(
        config: Arc<LookupConfig>,
        resolver_factory: Arc<dyn ResolverFactory>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            config,
            resolver_factory,
            sink,
        }
    }

    /// Runs until `input` is exhausted and every queued address has been
    /// processed.
    pub async fn execute<R>(&self, input: R) -> Result<LookupSummary, DomainError>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        self.config.validate()?;

        let (work_tx, work_rx) = mpsc::channel::<String>(WORK_QUEUE_CAPACITY);
        let reader = tokio::spawn(read_work_items(input, work_tx));

        let queue: WorkQueue = Arc::new(Mutex::new(work_rx));
        let workers: Vec<_> = (0..self.config.threads)
            .map(|id| {
                let worker = LookupWorker {
                    id,
                    config: Arc::clone(&self.config),
                    resolver_factory: Arc::clone(&self.resolver_factory),
                    sink: Arc::clone(&self.sink),
                    queue: Arc::clone(&queue),
                };
                tokio::spawn(worker.run())
            })
            .collect();

        info!(workers = workers.len(), "Lookup workers started");

        let mut summary = LookupSummary::default();
        for (id, result) in join_all(workers).await.into_iter().enumerate() {
            match result {
                Ok(worker_summary) => summary.merge(worker_summary),
                Err(e) => error!(worker = id, error = %e, "Lookup worker aborted"),
            }
        }

        match reader.await {
            Ok(published) => debug!(published, "Input reader finished"),
            Err(e) => error!(error = %e, "Input reader aborted"),
        }

        info!(
            items = summary.items,
            lines = summary.lines,
            failed_lookups = summary.failed_lookups,
            "Bulk PTR lookup complete"
        );

        Ok(summary)
    }
}

/// Publishes every input line, empty ones included. Bytes that are not
/// valid UTF-8 are replaced rather than dropped, so such a line still reaches
/// a worker. Dropping `work_tx` on return closes the queue; an I/O error ends
/// input the same way EOF does.
async fn read_work_items<R>(mut input: R, work_tx: mpsc::Sender<String>) -> u64
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut published = 0u64;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                if work_tx.send(decode_line(&buf)).await.is_err() {
                    break;
                }
                published += 1;
            }
            Err(e) => {
                debug!(error = %e, "Input read failed, treating as end of input");
                break;
            }
        }
    }

    published
}

fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

struct LookupWorker {
    id: usize,
    config: Arc<LookupConfig>,
    resolver_factory: Arc<dyn ResolverFactory>,
    sink: Arc<dyn ResultSink>,
    queue: WorkQueue,
}

impl LookupWorker {
    async fn run(self) -> LookupSummary {
        let resolvers = ResolverSetBuilder::build(&self.config, self.resolver_factory.as_ref());
        let mode = self.config.output_mode();
        let mut summary = LookupSummary::default();

        debug!(worker = self.id, resolvers = resolvers.len(), "Worker ready");

        while let Some(address) = self.next_item().await {
            summary.items += 1;

            // Every resolver is asked, even after an earlier one answered.
            for resolver in resolvers.iter() {
                match resolver.lookup_addr(&address).await {
                    Ok(names) => {
                        summary.lines += self.emit_names(mode, &address, &names);
                    }
                    Err(e) => {
                        summary.failed_lookups += 1;
                        debug!(
                            worker = self.id,
                            ip = %address,
                            resolver = %resolver.endpoint(),
                            error = %e,
                            "PTR lookup failed"
                        );
                    }
                }
            }
        }

        debug!(worker = self.id, items = summary.items, "Worker drained");
        summary
    }

    async fn next_item(&self) -> Option<String> {
        self.queue.lock().await.recv().await
    }

    fn emit_names(&self, mode: OutputMode, address: &str, names: &[String]) -> u64 {
        let mut written = 0;
        for name in names {
            let line = mode.format_line(address, name);
            match self.sink.emit(&line) {
                Ok(()) => written += 1,
                Err(e) => debug!(worker = self.id, error = %e, "Failed to write result line"),
            }
        }
        written
    }
}
