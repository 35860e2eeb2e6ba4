use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod process;

#[proc_macro_derive(SObject, attributes(sobject, field))]
pub fn sobject_derive(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);

    let fields = match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => fields.named.clone(),
            _ => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "SObject derive macro only supports structs with named fields",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "SObject derive macro only supports structs",
            )
            .to_compile_error()
            .into()
        }
    };

    let object_name = match process::object_name(&mut input) {
        Ok(name) => name,
        Err(err) => return err.to_compile_error().into(),
    };

    let field_names = match process::field_names(&fields) {
        Ok(names) => names,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::soql_builder::sobject::SObject for #name #ty_generics #where_clause {
            const NAME: &'static str = #object_name;
            const FIELDS: &'static [&'static str] = &[#(#field_names),*];
        }
    };

    TokenStream::from(expanded)
}
