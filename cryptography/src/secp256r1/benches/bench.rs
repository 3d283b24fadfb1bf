use criterion::criterion_main;


criterion_main!(
    signature_generation::benches,
    signature_verification::benches,
);
