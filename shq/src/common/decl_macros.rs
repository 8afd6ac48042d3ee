// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in `Ok(..)`. It is just syntactic sugar that helps
/// avoid having to write `Ok(())` repeatedly, in functions that return
/// [`crate::CommonResult`].
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
