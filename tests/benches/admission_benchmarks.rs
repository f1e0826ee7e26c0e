//! # IoT Registry Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | iot-01/verify | ECDSA verification per key encoding |
//! | iot-01/verify_by_aliases | Verification as the signed message grows |
//! | iot-03/register_identity | Full RegisterIdentity invoke |
//! | iot-03/register_thing | Full RegisterThing invoke by alias count |
//! | iot-03/decode_thing_payload | Hex plus bincode decoding |
//! | iot-03/query | JSON lookups |

use criterion::{criterion_group, criterion_main};
use iot_tests::benchmarks::{admission, signature};

criterion_group!(
    signature_benches,
    signature::bench_verify_single,
    signature::bench_verify_message_sizes
);

criterion_group!(
    admission_benches,
    admission::bench_register_identity,
    admission::bench_register_thing,
    admission::bench_decode_payload,
    admission::bench_queries
);

criterion_main!(signature_benches, admission_benches);
