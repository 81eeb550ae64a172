use super::*;

fn toggle_n<B: TestBuffer>(buffer: &mut B, calls: usize, size: usize) {
    for _ in 0..calls {
        buffer.realloc(size);
    }
}

#[test]
fn test_buffers_start_free() {
    assert!(!RealBuffer::default().is_allocated());
    assert!(!FakeBuffer::default().is_allocated());
}

#[test]
fn test_real_parity() {
    for calls in 0..8 {
        let mut buffer = RealBuffer::default();
        toggle_n(&mut buffer, calls, 64);
        assert_eq!(
            buffer.is_allocated(),
            calls % 2 == 1,
            "real buffer after {} calls",
            calls
        );
    }
}

#[test]
fn test_fake_parity() {
    for calls in 0..8 {
        let mut buffer = FakeBuffer::default();
        toggle_n(&mut buffer, calls, 64);
        assert_eq!(buffer.is_allocated(), calls % 2 == 1);
    }
}

#[test]
fn test_real_capacity_follows_latest_request() {
    let mut buffer = RealBuffer::default();
    assert_eq!(buffer.capacity(), None);

    buffer.realloc(100);
    assert!(buffer.capacity().is_some_and(|c| c >= 100));

    // Free ignores the size argument
    buffer.realloc(5000);
    assert_eq!(buffer.capacity(), None);

    buffer.realloc(4096);
    assert!(buffer.capacity().is_some_and(|c| c >= 4096));
}

#[test]
fn test_real_zero_size_still_allocated() {
    let mut buffer = RealBuffer::default();
    buffer.realloc(0);
    assert!(buffer.is_allocated());
    buffer.realloc(0);
    assert!(!buffer.is_allocated());
}

#[test]
fn test_kinds() {
    assert_eq!(RealBuffer::KIND, "real");
    assert_eq!(FakeBuffer::KIND, "fake");
}
