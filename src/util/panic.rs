use std::any::Any;

/// Asserts that a block panics. If a message is given, the panic's message must also contain it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "block didn't panic");
    };
    ($run:block, $expected:literal) => {
        let payload = std::panic::catch_unwind(|| $run).expect_err("block didn't panic");
        let message = $crate::util::panic::panic_message(&*payload);
        assert!(
            message.contains($expected),
            "panic message {message:?} doesn't contain {:?}",
            $expected
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Extracts the message from a panic payload, which is a `String` for formatted panics and a
/// `&str` for literal ones.
#[allow(dead_code)]
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload.downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or_default()
}
