use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_buffer_round_trip() {
    let host = vec![1.0, 2.0, 3.0];
    let buf = DeviceBuffer::from_host(&host).unwrap();

    assert_eq!(buf.len(), 3);

    let mut back = vec![0.0; 3];
    buf.copy_to_host(&mut back).unwrap();
    assert_eq!(back, host);
}

#[test]
fn test_copy_size_mismatch() {
    let buf = DeviceBuffer::alloc(4).unwrap();
    let err = buf.copy_from_host(&[1.0, 2.0]).unwrap_err();

    assert_eq!(err, DeviceError::CopySize { device: 4, host: 2 });
}

#[test]
fn test_cloned_handle_aliases_memory() {
    let a = DeviceBuffer::alloc(2).unwrap();
    let b = a.clone();
    let c = DeviceBuffer::alloc(2).unwrap();

    assert!(a.same_memory(&b));
    assert!(!a.same_memory(&c));

    b.copy_from_host(&[5.0, 6.0]).unwrap();
    assert_eq!(a.to_host().unwrap(), vec![5.0, 6.0]);
}

#[test]
fn test_stream_runs_launches_in_order() {
    let stream = Stream::new().unwrap();
    let buf = DeviceBuffer::alloc(1).unwrap();

    for i in 0..16 {
        let buf = buf.clone();
        stream
            .launch("order", move || {
                let mut mem = buf.write()?;
                mem[0] = mem[0] * 2.0 + i as f64;
                Ok(())
            })
            .unwrap();
    }

    stream.synchronize().unwrap();

    let mut expected = 0.0;
    for i in 0..16 {
        expected = expected * 2.0 + i as f64;
    }

    assert_eq!(buf.to_host().unwrap(), vec![expected]);
    assert_eq!(stream.pending(), 0);
}

#[test]
fn test_stream_reports_failure_once() {
    let stream = Stream::new().unwrap();
    let ran = Arc::new(AtomicUsize::new(0));

    stream
        .launch("bad", || {
            Err(DeviceError::Launch {
                name: "bad",
                reason: "boom".to_string(),
            })
        })
        .unwrap();

    let counter = Arc::clone(&ran);
    stream
        .launch("good", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

    assert!(stream.synchronize().is_err());
    assert_eq!(ran.load(Ordering::SeqCst), 1);

    // the failure is consumed by the synchronization that reported it
    assert!(stream.synchronize().is_ok());
}

#[test]
fn test_stream_survives_panicking_launch() {
    let stream = Stream::new().unwrap();

    stream.launch("panics", || panic!("kernel fault")).unwrap();

    match stream.synchronize() {
        Err(DeviceError::Launch { name, .. }) => assert_eq!(name, "panics"),
        other => panic!("unexpected result {:?}", other),
    }

    stream.launch("after", || Ok(())).unwrap();
    assert!(stream.synchronize().is_ok());
}
