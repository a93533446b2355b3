//! Drop-oldest semantics of the bounded sample channel.

use crystal_telemetry::{Sample, SampleChannel};

fn sample(cpu: f32) -> Sample {
    Sample {
        cpu_pct: cpu,
        ..Sample::default()
    }
}

#[test]
fn overflow_discards_oldest() {
    let ch = SampleChannel::new(2);
    ch.publish(sample(1.0));
    ch.publish(sample(2.0));
    ch.publish(sample(3.0));

    // A, B, C into a depth-2 queue retains exactly {B, C}
    assert_eq!(ch.try_take().map(|s| s.cpu_pct), Some(2.0));
    assert_eq!(ch.try_take().map(|s| s.cpu_pct), Some(3.0));
    assert!(ch.try_take().is_none());
}

#[test]
fn fifo_within_capacity() {
    let ch = SampleChannel::default();
    ch.publish(sample(10.0));
    ch.publish(sample(20.0));
    assert_eq!(ch.try_take().map(|s| s.cpu_pct), Some(10.0));
    assert_eq!(ch.try_take().map(|s| s.cpu_pct), Some(20.0));
}

#[test]
fn empty_channel_yields_none() {
    let ch = SampleChannel::default();
    assert!(ch.try_take().is_none());
    ch.publish(sample(5.0));
    let _ = ch.try_take();
    assert!(ch.try_take().is_none());
}
