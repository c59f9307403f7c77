use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, PatType, ReturnType, Type};

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("f64"),
        _ => false,
    }
}

/// Adapts `fn name(a: f64, b: f64) -> f64` to the slice signature used by
/// the function registry, `fn name(args: &[f64]) -> f64`.
///
/// The generated function returns NaN unless it receives exactly as many
/// arguments as the annotated function declares.
#[proc_macro_attribute]
pub fn calc_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;
    let fn_name = &sig.ident;

    let mut arg_patterns = Vec::new();
    for arg in &sig.inputs {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return Err(syn::Error::new_spanned(
                arg,
                format!("{} cannot take self", fn_name),
            ));
        };

        let Pat::Ident(pat_ident) = &**pat else {
            return Err(syn::Error::new_spanned(pat, "Unsupported pattern"));
        };

        if !is_f64(ty) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "Expected argument '{}' to be f64, for {}",
                    pat_ident.ident, fn_name
                ),
            ));
        }

        arg_patterns.push(pat_ident.clone());
    }

    match &sig.output {
        ReturnType::Type(_, ty) if is_f64(ty) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                &sig,
                format!("{} must return f64", fn_name),
            ))
        }
    }

    let expanded = quote! {
        #(#attrs)*
        #vis fn #fn_name(args: &[f64]) -> f64 {
            let &[#(#arg_patterns),*] = args else {
                return f64::NAN;
            };

            #block
        }
    };

    Ok(expanded)
}
