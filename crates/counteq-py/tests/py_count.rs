use counteq_py::{available_kernels, count_eq, count_eq_baseline, counteq};
use pyo3::{
    Python,
    exceptions::PyValueError,
    types::{PyAnyMethods, PyBytes, PyBytesMethods, PyModule},
};

#[test]
fn counts_borrowed_bytes() {
    Python::with_gil(|py| {
        let data = PyBytes::new(py, &[1, 2, 1, 2, 1]);
        assert_eq!(count_eq(py, data.as_bytes(), 0, 5, 1, None).unwrap(), 3);
        assert_eq!(count_eq_baseline(py, data.as_bytes(), 0, 5, 1).unwrap(), 3);
        assert_eq!(count_eq(py, &[], 0, 0, 5, None).unwrap(), 0);
    });
}

#[test]
fn every_available_kernel_agrees() {
    let mut buf = vec![0u8; 1000];
    buf[999] = 7;
    Python::with_gil(|py| {
        for name in available_kernels() {
            let kernel = Some(name.to_string());
            assert_eq!(count_eq(py, &buf, 0, 1000, 7, kernel.clone()).unwrap(), 1);
            assert_eq!(count_eq(py, &buf, 999, 1, 7, kernel.clone()).unwrap(), 1);
            assert_eq!(count_eq(py, &buf, 0, 999, 7, kernel).unwrap(), 0);
        }
    });
}

#[test]
fn bad_arguments_raise_value_error() {
    Python::with_gil(|py| {
        let err = count_eq(py, &[0, 0, 0, 0], 3, 2, 0, None).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));

        let err = count_eq_baseline(py, &[0, 0], 3, 0, 0).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));

        let err = count_eq(py, &[0], 0, 1, 0, Some("avx512".into())).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}

#[test]
fn module_exposes_functions() {
    Python::with_gil(|py| {
        let module = PyModule::new(py, "counteq").unwrap();
        counteq(&module).unwrap();

        let data = PyBytes::new(py, &[0, 0, 0, 0]);
        let count: usize = module
            .getattr("count_eq")
            .unwrap()
            .call1((data, 1usize, 2usize, 0u8))
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(count, 2);

        let kernels: Vec<String> = module
            .getattr("available_kernels")
            .unwrap()
            .call0()
            .unwrap()
            .extract()
            .unwrap();
        assert!(kernels.iter().any(|k| k == "scalar"));
    });
}

#[test]
fn baseline_counts_large_buffers_without_the_gil() {
    let buf: Vec<u8> = (0..100_000u32).map(|i| (i % 5) as u8).collect();
    Python::with_gil(|py| {
        let baseline = count_eq_baseline(py, &buf, 3, 90_000, 4).unwrap();
        let optimized = count_eq(py, &buf, 3, 90_000, 4, None).unwrap();
        assert_eq!(baseline, optimized);
        assert_eq!(baseline, 18_000);
    });
}
