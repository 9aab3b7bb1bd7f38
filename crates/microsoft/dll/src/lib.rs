use syn::ItemFn;
use quote::quote;
use proc_macro::TokenStream;

/// Emits a `DllMain` that forwards process attach to the annotated function.
///
/// The annotated function receives the module base and returns whether loading
/// should continue. An optional `detach = path::to::fn` argument names a
/// function called on process detach with the module base and whether the
/// whole process is terminating (as opposed to a `FreeLibrary` unload).
///
/// ```ignore
/// #[dll::entrypoint(detach = on_detach)]
/// fn on_attach(base: usize) -> bool { true }
///
/// fn on_detach(base: usize, terminating: bool) {}
/// ```
#[proc_macro_attribute]
pub fn entrypoint(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut detach: Option<syn::Path> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("detach") {
            detach = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported entrypoint property"))
        }
    });
    syn::parse_macro_input!(args with parser);

    let input_fn: ItemFn = syn::parse_macro_input!(input as ItemFn);
    let input_fn_ident = input_fn.sig.ident.clone();

    let detach_arm = match detach {
        Some(detach_fn) => quote! {
            0 => {
                #detach_fn(base, !reserved.is_null());
                1
            }
        },
        None => quote! {},
    };

    TokenStream::from(quote! {
        #input_fn

        #[cfg(windows)]
        #[no_mangle]
        pub extern "system" fn DllMain(
            base: usize,
            reason: u32,
            reserved: *mut ::std::ffi::c_void,
        ) -> i32 {
            let _ = reserved;
            match reason {
                1 => #input_fn_ident(base) as i32,
                #detach_arm
                _ => 1,
            }
        }
    })
}
