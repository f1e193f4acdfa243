//! Multi-producer behaviour of the capture path
//!
//! Producers hammer an undersized sink in parallel. Space accounting must
//! stay exact: every call is either committed or dropped, every successful
//! claim is committed exactly once, and no two producers ever write into
//! overlapping regions.

use std::sync::Arc;
use std::thread;

use wiretap_agent::{EnabledSet, EventFilter, EventLogger, MemorySink};
use wiretap_protocol::{CapturePolicy, EventKind, LOG_HEADER_LENGTH};

const PRODUCERS: usize = 8;
const CALLS_PER_PRODUCER: usize = 200;
const PAYLOAD_LENGTH: usize = 32;

/// Sink frame for one record: frame prefix + header + payload, 8-aligned
const FRAMED_RECORD: usize = 8 + LOG_HEADER_LENGTH + PAYLOAD_LENGTH;

fn run_producers(logger: &Arc<EventLogger<MemorySink>>) {
    let mut handles = Vec::with_capacity(PRODUCERS);
    for producer in 0..PRODUCERS {
        let logger = Arc::clone(logger);
        handles.push(thread::spawn(move || {
            let payload = [producer as u8; PAYLOAD_LENGTH];
            for _ in 0..CALLS_PER_PRODUCER {
                logger.log(EventKind::CommandIn, &payload);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn undersized_sink_loses_no_claims() {
    // Room for fewer than PRODUCERS * CALLS_PER_PRODUCER records
    let capacity = FRAMED_RECORD * (PRODUCERS * CALLS_PER_PRODUCER / 3);
    let logger = Arc::new(EventLogger::new(
        MemorySink::new(capacity),
        Arc::new(EventFilter::new(EnabledSet::all())),
        CapturePolicy::default(),
    ));

    run_producers(&logger);

    let total = (PRODUCERS * CALLS_PER_PRODUCER) as u64;
    let snapshot = logger.metrics().snapshot();

    assert_eq!(
        snapshot.records_committed + snapshot.records_dropped,
        total,
        "every call is either committed or dropped"
    );
    assert!(snapshot.records_dropped > 0, "sink was sized to overflow");
    assert_eq!(
        logger.sink().commits(),
        snapshot.records_committed,
        "exactly one commit per successful claim"
    );
    assert_eq!(
        logger.sink().claims(),
        total,
        "enabled calls always attempt a claim"
    );
}

#[test]
fn concurrent_producers_never_overlap() {
    let capacity = FRAMED_RECORD * (PRODUCERS * CALLS_PER_PRODUCER / 2);
    let logger = Arc::new(EventLogger::new(
        MemorySink::new(capacity),
        Arc::new(EventFilter::new(EnabledSet::all())),
        CapturePolicy::default(),
    ));

    run_producers(&logger);

    let records = logger.sink().records();
    assert_eq!(
        records.len() as u64,
        logger.metrics().snapshot().records_committed
    );

    for record in &records {
        assert_eq!(record.type_id, EventKind::CommandIn.type_id());
        assert_eq!(record.data.len(), LOG_HEADER_LENGTH + PAYLOAD_LENGTH);

        let capture = i32::from_le_bytes(record.data[0..4].try_into().unwrap());
        let length = i32::from_le_bytes(record.data[4..8].try_into().unwrap());
        assert_eq!(capture, PAYLOAD_LENGTH as i32);
        assert_eq!(length, PAYLOAD_LENGTH as i32);

        // A payload written by exactly one producer is uniform; any mix of
        // bytes would mean two threads shared a claimed region
        let payload = &record.data[LOG_HEADER_LENGTH..];
        let first = payload[0];
        assert!((first as usize) < PRODUCERS);
        assert!(payload.iter().all(|b| *b == first));
    }
}

#[test]
fn reconfiguration_mid_run_only_affects_subsequent_calls() {
    let logger = Arc::new(EventLogger::new(
        MemorySink::new(FRAMED_RECORD * PRODUCERS * CALLS_PER_PRODUCER),
        Arc::new(EventFilter::new(EnabledSet::all())),
        CapturePolicy::default(),
    ));

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..200 {
                if i % 2 == 0 {
                    logger.filter().install(EnabledSet::empty());
                } else {
                    logger.filter().install(EnabledSet::all());
                }
                std::hint::spin_loop();
            }
            // Leave everything enabled
            logger.filter().install(EnabledSet::all());
        })
    };

    run_producers(&logger);
    toggler.join().unwrap();

    let total = (PRODUCERS * CALLS_PER_PRODUCER) as u64;
    let snapshot = logger.metrics().snapshot();

    assert_eq!(
        snapshot.records_committed + snapshot.records_dropped + snapshot.records_filtered,
        total,
        "every call lands in exactly one outcome"
    );
    assert_eq!(logger.sink().commits(), snapshot.records_committed);
}
