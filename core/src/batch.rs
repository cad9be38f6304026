//! # Batch Executor
//!
//! Runs resolve + lookup over an ordered list of hosts with a fixed number of
//! workers.
//!
//! Workers claim the next unprocessed input index from a shared atomic cursor,
//! so the input itself is never mutated and no lock is taken. Every result is
//! sent back tagged with its input index and the collector drops it into a
//! pre-sized slot, which restores input order no matter which worker finished
//! first. A failing host only ever produces a `Failure` entry for itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use asnmap_common::config::DEFAULT_POOL_SIZE;
use asnmap_common::lookup::LookupResult;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::lookup::LookupClient;
use crate::resolver::Resolver;

/// Invoked once per finished host with the number of hosts completed so far.
pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct BatchExecutor {
    resolver: Arc<Resolver>,
    client: Arc<dyn LookupClient>,
    pool_size: usize,
    on_complete: Option<ProgressCallback>,
}

impl BatchExecutor {
    pub fn new(resolver: Arc<Resolver>, client: Arc<dyn LookupClient>) -> Self {
        Self {
            resolver,
            client,
            pool_size: DEFAULT_POOL_SIZE,
            on_complete: None,
        }
    }

    /// Sets the number of workers. Zero is treated as one.
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }

    pub fn with_progress(mut self, on_complete: ProgressCallback) -> Self {
        self.on_complete = Some(on_complete);
        self
    }

    /// Looks up every host and returns one result per host, in input order.
    ///
    /// Returns only once all hosts are done.
    pub async fn run(&self, hosts: Vec<String>) -> Vec<LookupResult> {
        let total: usize = hosts.len();
        if total == 0 {
            return Vec::new();
        }

        let queue: Arc<[String]> = hosts.into();
        let cursor = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, LookupResult)>();
        let worker_count: usize = self.pool_size.min(total);
        debug!("looking up {total} hosts with {worker_count} workers");

        let mut workers: JoinSet<()> = JoinSet::new();
        for worker_id in 0..worker_count {
            let queue = Arc::clone(&queue);
            let cursor = Arc::clone(&cursor);
            let resolver = Arc::clone(&self.resolver);
            let client = Arc::clone(&self.client);
            let tx = tx.clone();

            workers.spawn(async move {
                loop {
                    let idx: usize = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(host) = queue.get(idx) else {
                        break;
                    };
                    let result = lookup_one(host, &resolver, client.as_ref()).await;
                    if tx.send((idx, result)).is_err() {
                        break;
                    }
                }
                debug!("worker {worker_id} drained the queue");
            });
        }
        drop(tx);

        let mut slots: Vec<Option<LookupResult>> = (0..total).map(|_| None).collect();
        let mut completed: usize = 0;
        while let Some((idx, result)) = rx.recv().await {
            slots[idx] = Some(result);
            completed += 1;
            if let Some(on_complete) = &self.on_complete {
                on_complete(completed);
            }
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!("lookup worker failed: {e}");
            }
        }

        slots
            .into_iter()
            .zip(queue.iter())
            .map(|(slot, host)| slot.unwrap_or_else(|| LookupResult::abandoned(host.as_str())))
            .collect()
    }
}

/// Resolver then lookup client for a single host, with both failure kinds
/// folded into the result.
pub async fn lookup_one(host: &str, resolver: &Resolver, client: &dyn LookupClient) -> LookupResult {
    let ip = match resolver.resolve(host).await {
        Ok(ip) => ip,
        Err(e) => {
            debug!("cannot resolve {host}: {e}");
            return LookupResult::failure(host, e);
        }
    };

    match client.lookup(ip).await {
        Ok(record) => LookupResult::success(host, ip, record),
        Err(e) => {
            debug!("lookup for {host} ({ip}) failed: {e}");
            LookupResult::failure(host, e)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
