//! Procedural macros for [`tessera_codec`](https://docs.rs/tessera-codec).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Error, Fields, Index};

/// Implement `tessera_codec::Layout` for a struct.
///
/// The generated shape lists every field in declaration order, named after the field
/// (or its position, for tuple structs). Writing and reading visit the fields in the
/// same order. Every field type must itself implement `Layout`.
///
/// Enums, unions and generic structs are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// #[derive(Layout)]
/// struct Header {
///     version: u8,
///     flags: u16,
///     id: [u8; 32],
/// }
/// ```
#[proc_macro_derive(Layout)]
pub fn derive_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> Result<TokenStream2, Error> {
    if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
        return Err(Error::new(
            input.generics.span(),
            "#[derive(Layout)] does not support generic types",
        ));
    }
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(Error::new(
                data.enum_token.span(),
                "#[derive(Layout)] only supports structs, an enum has no fixed layout",
            ))
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span(),
                "#[derive(Layout)] only supports structs",
            ))
        }
    };

    let ident = &input.ident;
    let name = ident.to_string();
    let (shape, write, read) = match fields {
        Fields::Named(named) => {
            let mut shape = Vec::new();
            let mut write = Vec::new();
            let mut read = Vec::new();
            for field in &named.named {
                let ty = &field.ty;
                let Some(member) = &field.ident else {
                    return Err(Error::new(field.span(), "named field without a name"));
                };
                let label = member.to_string();
                shape.push(quote! {
                    ::tessera_codec::Field::new(#label, <#ty as ::tessera_codec::Layout>::shape())
                });
                write.push(quote! {
                    ::tessera_codec::Layout::write_layout(&self.#member, buf, order)?;
                });
                read.push(quote! {
                    #member: <#ty as ::tessera_codec::Layout>::read_layout(buf, order)?
                });
            }
            (shape, write, quote! { Self { #(#read),* } })
        }
        Fields::Unnamed(unnamed) => {
            let mut shape = Vec::new();
            let mut write = Vec::new();
            let mut read = Vec::new();
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                let ty = &field.ty;
                let index = Index::from(i);
                let label = i.to_string();
                shape.push(quote! {
                    ::tessera_codec::Field::new(#label, <#ty as ::tessera_codec::Layout>::shape())
                });
                write.push(quote! {
                    ::tessera_codec::Layout::write_layout(&self.#index, buf, order)?;
                });
                read.push(quote! {
                    <#ty as ::tessera_codec::Layout>::read_layout(buf, order)?
                });
            }
            (shape, write, quote! { Self(#(#read),*) })
        }
        Fields::Unit => (Vec::new(), Vec::new(), quote! { Self }),
    };

    Ok(quote! {
        impl ::tessera_codec::Layout for #ident {
            fn shape() -> ::tessera_codec::Shape {
                ::tessera_codec::Shape::structure(#name, ::std::vec![#(#shape),*])
            }

            #[allow(unused_variables)]
            fn write_layout(
                &self,
                buf: &mut impl ::tessera_codec::bytes::BufMut,
                order: ::tessera_codec::ByteOrder,
            ) -> ::core::result::Result<(), ::tessera_codec::Error> {
                #(#write)*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn read_layout(
                buf: &mut impl ::tessera_codec::bytes::Buf,
                order: ::tessera_codec::ByteOrder,
            ) -> ::core::result::Result<Self, ::tessera_codec::Error> {
                ::core::result::Result::Ok(#read)
            }
        }
    })
}
