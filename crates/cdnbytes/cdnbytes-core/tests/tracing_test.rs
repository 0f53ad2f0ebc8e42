use cdnbytes_core::config::LoggingConfig;
use cdnbytes_core::tracing::spans::names;
use cdnbytes_core::tracing::{init_tracing, init_tracing_from_config, init_tracing_with_filter};

#[test]
fn init_is_idempotent() {
    init_tracing_with_filter("cdnbytes=debug");
    init_tracing();
    init_tracing_from_config(&LoggingConfig::default());

    assert!(tracing::dispatcher::has_been_set());
    tracing::dispatcher::get_default(|dispatch| {
        assert!(!dispatch.is::<tracing::subscriber::NoSubscriber>());
    });
    tracing::info!("still alive after repeated init");
}

#[test]
fn span_names_are_namespaced() {
    for name in [names::INGEST, names::MERGE, names::FINALIZE] {
        assert!(name.starts_with("cdnbytes."));
    }
    let span = cdnbytes_core::ingest_span!(3);
    let _guard = span.enter();
}
