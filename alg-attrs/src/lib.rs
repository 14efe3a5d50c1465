mod structures;

use proc_macro::TokenStream;
use quote::ToTokens;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is given through the `error` attribute by adding the
/// corresponding tags to it:
///
/// ```ignore
/// use alg_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of input",
///     labels = ["add something here"],
///     category = Syntax,
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one for each span the error points at.              |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `category`  | The name of the `alg_error::Category` variant the error belongs to.          |
///
/// `message`, `labels`, and `help` accept any expression whose value implements
/// [`ToString`]. The expressions are evaluated inside a method taking `&self`, so fields of
/// the struct are bound by name.
///
/// [`ErrorKind`]: https://docs.rs/alg-error/latest/alg_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    target.into_token_stream().into()
}
