use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, LitStr};

/// Widest label that still leaves a blank cell before the next 5-cell block.
const MAX_LABEL_WIDTH: usize = 4;

/// Turns a `| del | ret | ... |` table into a `[[&str; N]; M]` of trimmed key labels.
#[proc_macro]
pub fn legend(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as LitStr).value();

    let array = input
        .trim()
        .lines()
        .map(str::trim)
        .map(|line| {
            let row = line
                .split('|')
                .map(str::trim)
                .collect::<Vec<_>>()
                .into_iter()
                .skip(1)
                .rev()
                .skip(1)
                .rev()
                .map(|label| {
                    if label.chars().count() > MAX_LABEL_WIDTH {
                        let message = format!(
                            "legend: label `{}` is wider than {} characters",
                            label, MAX_LABEL_WIDTH
                        );
                        quote!(compile_error!(#message))
                    } else {
                        quote!(#label)
                    }
                })
                .map(|t| quote! {#t,})
                .collect::<TokenStream>();
            quote! {
                [#row]
            }
        })
        .map(|t| quote! {#t,})
        .collect::<TokenStream>();

    let expanded = quote! {
        [#array]
    };

    proc_macro::TokenStream::from(expanded)
}
