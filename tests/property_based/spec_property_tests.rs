//! Property-based tests for tensor specs and quantization

use crate::fixtures::*;
use proptest::prelude::*;
use vx_tensor::prelude::*;

// Strategy for generating shapes that stay well inside usize
fn shape_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..64, 0..6)
}

fn sized_type_strategy() -> impl Strategy<Value = (DataType, usize)> {
    prop::sample::select(sized_types())
}

fn attribute_strategy() -> impl Strategy<Value = TensorAttribute> {
    prop::sample::select(vec![
        TensorAttribute::Constant,
        TensorAttribute::Transient,
        TensorAttribute::Variable,
        TensorAttribute::Input,
        TensorAttribute::Output,
    ])
}

// Shape plus a permutation whose indices are all valid for it
fn shape_and_perm_strategy() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    prop::collection::vec(1u32..32, 1..6).prop_flat_map(|shape| {
        let rank = shape.len();
        let perm = prop::collection::vec(0..rank as u32, 0..=rank);
        (Just(shape), perm)
    })
}

proptest! {
    #[test]
    fn test_mem_size_is_product_times_width(
        shape in shape_strategy(),
        (datatype, width) in sized_type_strategy(),
        attr in attribute_strategy(),
    ) {
        let spec = TensorSpec::new(datatype, shape.clone(), attr);
        let product: usize = shape.iter().map(|&d| d as usize).product();
        prop_assert_eq!(spec.mem_size().unwrap(), product * width);
    }

    #[test]
    fn test_transient_spec_permutes_dimensions(
        (shape, perm) in shape_and_perm_strategy(),
        (datatype, _) in sized_type_strategy(),
    ) {
        let spec = TensorSpec::new(datatype, shape.clone(), TensorAttribute::Input);
        let transient = spec.as_transient_spec(&perm).unwrap();

        prop_assert_eq!(transient.attr, TensorAttribute::Transient);
        prop_assert_eq!(transient.datatype, datatype);
        prop_assert_eq!(transient.shape.rank(), perm.len());
        for (i, &axis) in perm.iter().enumerate() {
            prop_assert_eq!(transient.shape[i], shape[axis as usize]);
        }
        prop_assert_eq!(spec.shape.dims(), shape.as_slice());
    }

    #[test]
    fn test_out_of_range_index_is_rejected(
        shape in prop::collection::vec(1u32..32, 1..6),
        extra in 0u32..16,
    ) {
        let rank = shape.len();
        let spec = TensorSpec::new(DataType::Int8, shape, TensorAttribute::Input);
        let bad = rank as u32 + extra;
        prop_assert_eq!(
            spec.as_transient_spec(&[bad]),
            Err(TensorError::PermutationOutOfBounds { index: bad, rank })
        );
    }

    #[test]
    fn test_clone_independence(
        scales in prop::collection::vec(0.001f32..10.0, 1..8),
        bump in 0.5f32..2.0,
    ) {
        let channels = scales.len();
        let spec = TensorSpec::with_quantization(
            DataType::Int8,
            vec![channels as u32],
            TensorAttribute::Constant,
            Quantization::per_channel(QuantType::SymmetricPerChannel, 0, scales.clone(), vec![0; channels]),
        );
        let mut copy = spec.clone();
        for s in copy.quantization.scales_mut().iter_mut() {
            *s += bump;
        }
        prop_assert_eq!(spec.quantization.scales(), scales.as_slice());
    }

    #[test]
    fn test_per_channel_mismatch_detected(
        scale_count in 1usize..8,
        zero_point_count in 1usize..8,
    ) {
        prop_assume!(scale_count != zero_point_count);
        let q = Quantization::per_channel(
            QuantType::SymmetricPerChannel,
            0,
            vec![0.5; scale_count],
            vec![0; zero_point_count],
        );
        prop_assert!(q.validate().is_err());
    }

    #[test]
    fn test_asymmetric_round_trip_error_bounded(
        scale in 0.001f32..1.0,
        zero_point in -128i32..128,
        value in -100.0f32..100.0,
    ) {
        let q = Quantization::per_tensor(QuantType::Asymmetric, scale, zero_point);
        let back = q.dequantize(q.quantize(value, 0).unwrap(), 0).unwrap();
        prop_assert!((back - value).abs() <= scale * 0.5 + value.abs() * 1e-5 + 1e-5);
    }
}
