use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ride_intents_core::contract::{Intent, RideRequest};
use ride_intents_core::responder::{IntentResponder, ResponderConfig};
use ride_intents_core::test_helpers::{sample_drop_off, sample_pickup};
use ride_intents_core::updates::NoopObserver;

fn bench_dispatch(c: &mut Criterion) {
    let responder = IntentResponder::new(ResponderConfig::default());
    let request = RideRequest::new(Some(sample_pickup()), Some(sample_drop_off()));

    let mut group = c.benchmark_group("dispatch");
    group.bench_function("list_ride_options", |b| {
        b.iter(|| {
            responder.handle(
                black_box(Intent::ListRideOptions(request.clone())),
                &NoopObserver,
            )
        })
    });
    group.bench_function("request_ride", |b| {
        b.iter(|| {
            responder.handle(
                black_box(Intent::RequestRide(request.clone())),
                &NoopObserver,
            )
        })
    });
    group.bench_function("resolve_pickup_location", |b| {
        b.iter(|| {
            responder.handle(
                black_box(Intent::ResolvePickupLocation(request.clone())),
                &NoopObserver,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
