//! Shared fixtures for the integration suites
#![allow(dead_code)]

use std::sync::Once;

use vx_tensor::prelude::*;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic byte pattern of the given length
pub fn pattern_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// FLOAT32 NCHW image input, stored as `[1, 3, 224, 224]`
pub fn image_spec() -> TensorSpec {
    TensorSpec::new(DataType::Float32, vec![1, 3, 224, 224], TensorAttribute::Input)
}

/// Asymmetric UINT8 activation
pub fn quantized_activation_spec() -> TensorSpec {
    TensorSpec::with_quantization(
        DataType::Uint8,
        vec![8, 8, 16, 1],
        TensorAttribute::Transient,
        Quantization::per_tensor(QuantType::Asymmetric, 0.0235, 128),
    )
}

/// Per-channel INT8 convolution weight with 4 output channels
pub fn conv_weight_spec() -> TensorSpec {
    SpecPatterns::per_channel_weight(
        DataType::Int8,
        vec![3, 3, 16, 4],
        vec![0.011, 0.012, 0.013, 0.014],
    )
}

/// Every datatype that has a defined byte width, with that width
pub fn sized_types() -> Vec<(DataType, usize)> {
    vec![
        (DataType::Int8, 1),
        (DataType::Uint8, 1),
        (DataType::Int16, 2),
        (DataType::Uint16, 2),
        (DataType::Float16, 2),
        (DataType::Int32, 4),
        (DataType::Uint32, 4),
        (DataType::Float32, 4),
    ]
}
