mod log;
mod loggable;
mod traceable;
mod variant;

use proc_macro::TokenStream;

/// Emit a levelled value (anything with `level()` and `Display`) through `tracing`.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

/// Declare a log message enum whose variants carry their own `tracing::Level`.
#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}

/// Declare an error enum whose variants carry a level and, unless marked
/// `#[no_source]`, the rendered source error in an `err` field.
#[proc_macro]
pub fn traceable(input: TokenStream) -> TokenStream {
    traceable::traceable_impl(input)
}
