use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Generics,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub category: Option<Ident>,
}

impl ErrorArgs {
    /// Parse the next argument in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        match ident.to_string().as_str() {
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            "category" => self.category = Some(input.parse()?),
            other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Creates a `let` statement that destructures `self` into its named fields, so that the tag
/// expressions can refer to them directly.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| field.ident.as_ref());
            quote! {
                #[allow(unused_variables)]
                let #ident { #(#fields),* } = self;
            }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub generics: Generics,
    pub fields: Fields,
    pub message: Expr,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub category: Ident,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // parse outer attributes, including documentation and the `error` attribute
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let mut error_args = None;
        for attr in &attributes {
            if attr.path().is_ident("error") {
                error_args = Some(attr.parse_args::<ErrorArgs>()?);
                break;
            }
        }

        let Some(error_args) = error_args else {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "`ErrorKind` requires an `#[error(...)]` attribute",
            ));
        };
        let Some(message) = error_args.message else {
            return Err(syn::Error::new_spanned(&item.ident, "missing `message` tag"));
        };
        let Some(category) = error_args.category else {
            return Err(syn::Error::new_spanned(&item.ident, "missing `category` tag"));
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            generics: item.generics,
            fields: item.fields,
            message,
            labels: error_args.labels,
            help: error_args.help,
            category,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let message = &self.message;
        let category = &self.category;
        let destructure = destructure_fields(name, &self.fields);

        let labels = match &self.labels {
            Some(labels) => quote! {
                #labels
                    .into_iter()
                    .map(|label| label.to_string())
                    .collect()
            },
            None => quote! { Vec::new() },
        };

        let help = self.help.as_ref().map(|help| quote! {
            fn help(&self) -> Option<String> {
                #destructure
                Some((#help).to_string())
            }
        });

        tokens.extend(quote! {
            impl #impl_generics ::alg_error::ErrorKind for #name #ty_generics #where_clause {
                fn message(&self) -> String {
                    #destructure
                    (#message).to_string()
                }

                fn labels(&self) -> Vec<String> {
                    #destructure
                    #labels
                }

                #help

                fn category(&self) -> ::alg_error::Category {
                    ::alg_error::Category::#category
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        });
    }
}
