/// Declares forwarding trampolines. Each one owns a lazily bound
/// [`EntryPoint`](glproxy_interception::EntryPoint) named after the function
/// and calls straight through to the real driver.
macro_rules! gl_entry_points {
    ($( fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)? ; )*) => {
        $(
            #[no_mangle]
            pub unsafe extern "system" fn $name($($arg: $ty),*) $(-> $ret)? {
                static ENTRY: ::glproxy_interception::EntryPoint =
                    ::glproxy_interception::EntryPoint::new(concat!(stringify!($name), "\0"));

                let real: unsafe extern "system" fn($($ty),*) $(-> $ret)? = ENTRY.bind();
                real($($arg),*)
            }
        )*
    };
}

/// Binds the real function behind a hooked trampoline. Same contract as the
/// trampolines [`gl_entry_points!`] generates, minus the call.
macro_rules! real_entry_point {
    ($name:ident as $ty:ty) => {{
        static ENTRY: ::glproxy_interception::EntryPoint =
            ::glproxy_interception::EntryPoint::new(concat!(stringify!($name), "\0"));

        ENTRY.bind::<$ty>()
    }};
}
