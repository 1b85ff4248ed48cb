//! Unit tests for the tensor capability surface

use crate::fixtures::*;
use vx_tensor::prelude::*;

mod copy_tests {
    use super::*;

    #[test]
    fn test_size_zero_copies_mem_size() {
        init_tracing();
        let mut factory = TensorFactory::new();
        let mut tensor = factory
            .create_tensor(TensorSpec::new(DataType::Float16, vec![4, 2], TensorAttribute::Input))
            .unwrap();

        let data = pattern_bytes(16);
        tensor.copy_data_to_tensor(&data, 0).unwrap();
        let mut out = vec![0u8; 16];
        tensor.copy_data_from_tensor(&mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_oversized_copy_is_rejected_without_partial_write() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory
            .create_tensor(TensorSpec::new(DataType::Uint8, vec![4], TensorAttribute::Input))
            .unwrap();

        assert_eq!(
            tensor.copy_data_to_tensor(&[0xaa; 8], 8),
            Err(TensorError::BufferTooLarge { size: 8, capacity: 4 })
        );
        assert_eq!(tensor.storage().as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_short_source_buffer_is_rejected() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory
            .create_tensor(TensorSpec::new(DataType::Uint8, vec![4], TensorAttribute::Input))
            .unwrap();
        assert_eq!(
            tensor.copy_data_to_tensor(&[1, 2], 3),
            Err(TensorError::BufferTooSmall { required: 3, actual: 2 })
        );
    }

    #[test]
    fn test_larger_destination_is_written_at_front() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory
            .create_tensor(TensorSpec::new(DataType::Uint8, vec![2], TensorAttribute::Output))
            .unwrap();
        tensor.copy_data_to_tensor(&[5, 6], 0).unwrap();

        let mut out = [9u8; 4];
        tensor.copy_data_from_tensor(&mut out).unwrap();
        assert_eq!(out, [5, 6, 9, 9]);
    }

    #[test]
    fn test_empty_tensor_copies_nothing() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory
            .create_tensor(TensorSpec::new(DataType::Int32, vec![0, 3], TensorAttribute::Transient))
            .unwrap();
        tensor.copy_data_to_tensor(&[0u8; 0], 0).unwrap();
        tensor.copy_data_from_tensor(&mut [0u8; 0]).unwrap();
        assert_eq!(tensor.mem_size().unwrap(), 0);
    }
}

mod role_tests {
    use super::*;

    #[test]
    fn test_roles_are_exclusive() {
        let mut factory = TensorFactory::new();
        let regular = factory.create_tensor(image_spec()).unwrap();
        let placeholder = factory.create_placeholder(image_spec()).unwrap();
        let constant = factory.create_constant(conv_weight_spec(), vec![0; 576]).unwrap();

        for tensor in [&regular, &placeholder, &constant] {
            assert!(!(tensor.is_placeholder() && tensor.is_const_tensor()));
        }
        assert_eq!(regular.role(), TensorRole::Regular);
        assert_eq!(placeholder.role(), TensorRole::Placeholder);
        assert_eq!(constant.role(), TensorRole::Constant { finalized: false });
    }

    #[test]
    fn test_constant_spec_cannot_be_placeholder() {
        let mut factory = TensorFactory::new();
        assert!(matches!(
            factory.create_placeholder(conv_weight_spec()),
            Err(TensorError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_constant_with_wrong_byte_count() {
        let mut factory = TensorFactory::new();
        assert_eq!(
            factory.create_constant(conv_weight_spec(), vec![0; 10]).unwrap_err(),
            TensorError::ShapeMismatch { expected: 576, actual: 10 }
        );
    }
}

mod shape_tests {
    use super::*;

    #[test]
    fn test_reshape_preserving_size() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory.create_tensor(image_spec()).unwrap();
        tensor.set_shape(TensorShape::new(vec![3, 224, 224])).unwrap();
        assert_eq!(tensor.shape().rank(), 3);
        assert_eq!(tensor.mem_size().unwrap(), 602_112);
    }

    #[test]
    fn test_reshape_changing_size_is_rejected() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory.create_tensor(image_spec()).unwrap();
        assert!(matches!(
            tensor.set_shape(TensorShape::new(vec![1, 3, 224])),
            Err(TensorError::ShapeMismatch { .. })
        ));
        assert_eq!(tensor.shape(), &image_spec().shape);
    }

    #[test]
    fn test_factory_keeps_creation_spec() {
        let mut factory = TensorFactory::new();
        let mut tensor = factory.create_placeholder(image_spec()).unwrap();
        tensor.set_shape(TensorShape::new(vec![1, 3, 112, 112])).unwrap();
        assert_eq!(factory.spec_of(tensor.id()), Some(&image_spec()));
    }
}
