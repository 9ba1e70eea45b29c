//! The `partial!` and `partial_right!` macros for partial function application.
//!
//! [`partial!`] fixes leading arguments and [`partial_right!`] fixes trailing
//! ones. The remaining positions are written as `__` and become the
//! parameters of the returned closure.

/// Fixes the leading arguments of a function.
///
/// Placeholders (`__`) may only follow the fixed values. The returned closure
/// takes one parameter per placeholder; with no placeholders it is a thunk.
///
/// **Important**: `__` is matched as a literal token. There is nothing to
/// import.
///
/// # Syntax
///
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, v1, v2, __)` creates `|c| f(v1, v2, c)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// Functions of 1 to 4 arguments are supported.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the closure may be called many times)
/// - The function must implement [`Fn`]
///
/// # Examples
///
/// ```
/// use fpkit::partial;
///
/// fn volume(length: u32, width: u32, height: u32) -> u32 {
///     length * width * height
/// }
///
/// let square_base = partial!(volume, 2, 2, __);
/// assert_eq!(square_base(5), 20);
///
/// let fixed = partial!(volume, 1, 2, 3);
/// assert_eq!(fixed(), 6);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 4-argument functions
    // =========================================================================

    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4| function(arg1, arg2, arg3, arg4)
    }};

    ($function:expr, $arg1:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3, arg4| function(arg1.clone(), arg2, arg3, arg4)
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3, arg4| function(arg1.clone(), arg2.clone(), arg3, arg4)
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg4| function(arg1.clone(), arg2.clone(), arg3.clone(), arg4)
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move || function(arg1.clone(), arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // =========================================================================
    // 3-argument functions
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};

    // =========================================================================
    // 1-argument functions
    // =========================================================================

    ($function:expr, __ $(,)?) => {{
        let function = $function;
        move |arg1| function(arg1)
    }};

    ($function:expr, $arg1:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move || function(arg1.clone())
    }};
}

/// Fixes the trailing arguments of a function.
///
/// The mirror image of [`partial!`]: placeholders (`__`) may only precede the
/// fixed values.
///
/// # Syntax
///
/// - `partial_right!(f, __, value)` creates `|a| f(a, value)`
/// - `partial_right!(f, __, v2, v3)` creates `|a| f(a, v2, v3)`
/// - `partial_right!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
///
/// Functions of 1 to 4 arguments are supported.
///
/// # Examples
///
/// ```
/// use fpkit::partial_right;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial_right!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
#[macro_export]
macro_rules! partial_right {
    // =========================================================================
    // 4-argument functions
    // =========================================================================

    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4| function(arg1, arg2, arg3, arg4)
    }};

    ($function:expr, __, __, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg4 = $arg4;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3, arg4.clone())
    }};

    ($function:expr, __, __, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1, arg2| function(arg1, arg2, arg3.clone(), arg4.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1| function(arg1, arg2.clone(), arg3.clone(), arg4.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move || function(arg1.clone(), arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // =========================================================================
    // 3-argument functions
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};

    // =========================================================================
    // 1-argument functions
    // =========================================================================

    ($function:expr, __ $(,)?) => {{
        let function = $function;
        move |arg1| function(arg1)
    }};

    ($function:expr, $arg1:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move || function(arg1.clone())
    }};
}
