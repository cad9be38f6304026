use std::sync::Arc;
use std::time::Instant;

use asnmap_common::config::Config;
use asnmap_common::lookup::LookupResult;
use asnmap_core::batch::BatchExecutor;
use asnmap_core::lookup::RegistryClient;
use asnmap_core::resolver::Resolver;
use tracing::{Instrument, info};

use crate::output::OutputFormat;
use crate::terminal::{print, spinner};

pub async fn lookup(hosts: Vec<String>, cfg: &Config, format: &OutputFormat) -> anyhow::Result<()> {
    let resolver = Arc::new(Resolver::system(cfg.timeout));
    let client = Arc::new(RegistryClient::new(cfg)?);

    let span = spinner::lookup_span(hosts.len());
    let executor = BatchExecutor::new(resolver, client)
        .with_pool_size(cfg.pool_size)
        .with_progress(spinner::progress_callback(span.clone()));

    info!("Starting bulk WHOIS lookup of {} hosts...", hosts.len());
    let start_time: Instant = Instant::now();
    let results: Vec<LookupResult> = executor.run(hosts).instrument(span).await;
    // Releases the last span handle so the progress bar is cleared before output.
    drop(executor);

    let succeeded: usize = results.iter().filter(|result| result.is_success()).count();
    print::summary(succeeded, results.len() - succeeded, start_time.elapsed());

    format.present(&results)
}
