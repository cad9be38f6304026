use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use asnmap_common::config::Config;
use asnmap_common::error::LookupFailure;
use asnmap_common::lookup::{LookupResult, WhoisRecord};
use asnmap_core::batch::BatchExecutor;
use asnmap_core::lookup::{LookupClient, RegistryClient};
use asnmap_core::resolver::Resolver;

use crate::utils::{google, ScriptedRegistry, TableDns};

const GOOGLE_DNS: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

/// `8.8.8.8` succeeds from the registry, `bad..invalid-host` fails in the
/// system resolver, and the two results come back in input order.
#[tokio::test]
async fn mixed_batch_keeps_order_and_isolates_failure() {
    let registry = Arc::new(ScriptedRegistry::new(
        HashMap::from([(GOOGLE_DNS, google())]),
        Duration::ZERO,
    ));
    let resolver = Arc::new(Resolver::system(Duration::from_secs(5)));
    let executor = BatchExecutor::new(resolver, registry.clone()).with_pool_size(10);

    let results = executor
        .run(vec!["8.8.8.8".to_string(), "bad..invalid-host".to_string()])
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0],
        LookupResult::success("8.8.8.8", GOOGLE_DNS, google())
    );
    match &results[1] {
        LookupResult::Failure {
            host,
            error: LookupFailure::Resolution(e),
        } => {
            assert_eq!(host, "bad..invalid-host");
            assert_eq!(e.host, "bad..invalid-host");
            assert!(!e.message.is_empty());
        }
        other => panic!("expected a resolution failure, got {other:?}"),
    }
    assert_eq!(registry.calls(), 1, "registry must not see the unresolvable host");
}

#[tokio::test]
async fn literal_addresses_never_touch_dns() {
    let dns = Arc::new(TableDns::with(&[("dns.google", "8.8.8.8")]));
    let registry = Arc::new(ScriptedRegistry::default());
    let executor = BatchExecutor::new(Arc::new(Resolver::new(dns.clone())), registry);

    let hosts: Vec<String> = ["8.8.8.8", "1.1.1.1", "2001:4860:4860::8888", "dns.google"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let results = executor.run(hosts).await;

    assert_eq!(results.len(), 4);
    assert_eq!(dns.calls(), 1);
}

#[tokio::test]
async fn resolution_failures_skip_the_registry() {
    let dns = Arc::new(TableDns::default());
    let registry = Arc::new(ScriptedRegistry::default());
    let executor = BatchExecutor::new(Arc::new(Resolver::new(dns.clone())), registry.clone());

    let hosts: Vec<String> = (0..12).map(|i| format!("host-{i}.invalid")).collect();
    let results = executor.run(hosts.clone()).await;

    assert_eq!(dns.calls(), 12);
    assert_eq!(registry.calls(), 0);
    for (result, host) in results.iter().zip(&hosts) {
        assert!(matches!(
            result,
            LookupResult::Failure { host: h, error: LookupFailure::Resolution(_) } if h == host
        ));
        assert!(!result_message(result).is_empty());
    }
}

#[tokio::test]
async fn registry_errors_are_carried_verbatim() {
    let registry = Arc::new(ScriptedRegistry::default());
    let executor = BatchExecutor::new(Arc::new(Resolver::new(Arc::new(TableDns::default()))), registry);

    let results = executor.run(vec!["9.9.9.9".to_string()]).await;

    match &results[0] {
        LookupResult::Failure {
            host,
            error: LookupFailure::Lookup(e),
        } => {
            assert_eq!(host, "9.9.9.9");
            assert_eq!(e.to_string(), "no registry data for 9.9.9.9");
        }
        other => panic!("expected a lookup failure, got {other:?}"),
    }
}

#[tokio::test]
async fn pool_size_bounds_concurrency_and_order_survives() {
    let records: HashMap<IpAddr, WhoisRecord> = (1..=60u8)
        .map(|i| {
            let ip = IpAddr::V4(Ipv4Addr::new(11, 0, 0, i));
            let record = WhoisRecord {
                asn: Some(i as u32),
                ..WhoisRecord::default()
            };
            (ip, record)
        })
        .collect();
    let registry = Arc::new(ScriptedRegistry::new(records, Duration::from_millis(10)));
    let executor = BatchExecutor::new(
        Arc::new(Resolver::new(Arc::new(TableDns::default()))),
        registry.clone(),
    )
    .with_pool_size(4);

    let hosts: Vec<String> = (1..=60).map(|i| format!("11.0.0.{i}")).collect();
    let results = executor.run(hosts.clone()).await;

    assert_eq!(results.len(), 60);
    for (i, (result, host)) in results.iter().zip(&hosts).enumerate() {
        assert_eq!(result.host(), host);
        let LookupResult::Success { record, .. } = result else {
            panic!("unexpected failure for {host}: {result:?}");
        };
        assert_eq!(record.asn, Some(i as u32 + 1));
    }
    assert_eq!(registry.max_in_flight(), 4);
}

#[tokio::test]
async fn every_lookup_failing_still_yields_full_batch() {
    let registry = Arc::new(ScriptedRegistry::default());
    let executor = BatchExecutor::new(Arc::new(Resolver::new(Arc::new(TableDns::default()))), registry)
        .with_pool_size(3);

    let hosts: Vec<String> = vec!["a.invalid", "5.5.5.5", "b.invalid", "::2"]
        .into_iter()
        .map(String::from)
        .collect();
    let results = executor.run(hosts.clone()).await;

    assert_eq!(results.len(), hosts.len());
    assert!(results.iter().all(|result| !result.is_success()));
    assert_eq!(
        results.iter().map(LookupResult::host).collect::<Vec<_>>(),
        hosts.iter().map(String::as_str).collect::<Vec<_>>()
    );
}

/// Talks to the real Team Cymru and ARIN services.
#[tokio::test]
#[ignore]
async fn live_registry_lookup() {
    let client = RegistryClient::new(&Config::default()).unwrap();
    let record = client.lookup(GOOGLE_DNS).await.unwrap();

    assert_eq!(record.asn, Some(15169));
    assert_eq!(record.country.as_deref(), Some("US"));
    assert!(record.cidr.is_some());
}

fn result_message(result: &LookupResult) -> String {
    match result {
        LookupResult::Failure { error, .. } => error.to_string(),
        LookupResult::Success { .. } => String::new(),
    }
}
