/// Calls a kernel from a specific backend module of the enclosing test's parent.
///
/// The `avx2` arm returns early from the calling test when the CPU lacks AVX2,
/// so backend suites can be instantiated unconditionally on x86_64.
macro_rules! verify_asm {
    (rust, $func:ident($($arg:expr),* $(,)?)) => {
        super::rust::$func($($arg),*)
    };
    (avx2, $func:ident($($arg:expr),* $(,)?)) => {{
        if !crate::util::has_avx2() {
            return;
        }
        // SAFETY: AVX2 availability was checked above
        unsafe { super::avx2::$func($($arg),*) }
    }};
}
