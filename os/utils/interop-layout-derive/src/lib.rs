//! # Layout Derive
//!
//! This crate provides a derive macro that pins the memory layout of plain
//! `#[repr(C)]` value structs at compile time.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitInt, LitStr, parse_macro_input, spanned::Spanned};

/// Derive compile-time assertions that a `#[repr(C)]` struct has a
/// **contiguous** layout: every named field starts exactly where the previous
/// one ended, and there is no trailing padding.
///
/// Such a struct is bit-compatible with any other definition that lists the
/// same field types in the same order, which is what lets a fallback
/// definition be swapped for a platform one.
///
/// - Optional explicit checks: `#[layout(size = 8, align = 4)]`
///
/// # Example
///
/// ```
/// use interop_layout_derive::ContiguousLayout;
///
/// #[derive(ContiguousLayout)]
/// #[layout(size = 8, align = 4)]
/// #[repr(C)]
/// struct Pair {
///     a: i32,
///     b: i32,
/// }
///
/// let _ = Pair { a: 1, b: 2 };
/// ```
///
/// Padding between fields is rejected while compiling:
///
/// ```compile_fail
/// use interop_layout_derive::ContiguousLayout;
///
/// #[derive(ContiguousLayout)]
/// #[repr(C)]
/// struct Padded {
///     a: u8,
///     b: u32,
/// }
/// ```
#[proc_macro_derive(ContiguousLayout, attributes(layout))]
pub fn derive_contiguous_layout(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = parse_macro_input!(input as DeriveInput);

    if !generics.params.is_empty() {
        return syn::Error::new(
            generics.span(),
            "ContiguousLayout does not support generic structs",
        )
        .to_compile_error()
        .into();
    }

    match has_c_repr(&attrs) {
        Ok(true) => {}
        Ok(false) => {
            return syn::Error::new(ident.span(), "ContiguousLayout requires #[repr(C)]")
                .to_compile_error()
                .into();
        }
        Err(e) => return e.to_compile_error().into(),
    }

    let fields = match data {
        Data::Struct(s) => match s.fields {
            Fields::Named(n) => n.named,
            Fields::Unnamed(u) => {
                return syn::Error::new(u.span(), "ContiguousLayout only supports named fields")
                    .to_compile_error()
                    .into();
            }
            Fields::Unit => {
                return syn::Error::new(
                    ident.span(),
                    "ContiguousLayout does not apply to unit structs",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                ident.span(),
                "ContiguousLayout can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let expected = match parse_layout_attr(&attrs) {
        Ok(e) => e,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut checks = Vec::new();
    for field in &fields {
        let Some(fname) = &field.ident else { continue };
        let ty = &field.ty;
        let msg = LitStr::new(
            &format!("`{ident}::{fname}` is not contiguous with the preceding field"),
            fname.span(),
        );

        checks.push(quote! {
            assert!(::core::mem::offset_of!(#ident, #fname) == offset, #msg);
            offset += ::core::mem::size_of::<#ty>();
        });
    }

    let padding_msg = LitStr::new(&format!("`{ident}` has trailing padding"), ident.span());

    let size_check = expected.size.map(|size| {
        let msg = LitStr::new(&format!("`{ident}` must be {size} bytes"), ident.span());
        quote! { assert!(::core::mem::size_of::<#ident>() == #size, #msg); }
    });

    let align_check = expected.align.map(|align| {
        let msg = LitStr::new(
            &format!("`{ident}` must be aligned to {align} bytes"),
            ident.span(),
        );
        quote! { assert!(::core::mem::align_of::<#ident>() == #align, #msg); }
    });

    let expanded = quote! {
        const _: () = {
            let mut offset: usize = 0;
            #(#checks)*
            assert!(::core::mem::size_of::<#ident>() == offset, #padding_msg);
            #size_check
            #align_check
        };
    };

    TokenStream::from(expanded)
}

#[derive(Default)]
struct ExpectedLayout {
    size: Option<usize>,
    align: Option<usize>,
}

fn has_c_repr(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut c = false;
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("C") || meta.path.is_ident("transparent") {
                c = true;
            } else if meta.input.peek(syn::token::Paren) {
                // align(N) / packed(N)
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<LitInt>()?;
            }
            Ok(())
        })?;
    }
    Ok(c)
}

fn parse_layout_attr(attrs: &[Attribute]) -> syn::Result<ExpectedLayout> {
    let mut expected = ExpectedLayout::default();
    for attr in attrs {
        if !attr.path().is_ident("layout") {
            continue;
        }

        // Accept #[layout(size = N)], #[layout(align = N)] and both combined
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("size") {
                expected.size = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
                Ok(())
            } else if meta.path.is_ident("align") {
                expected.align = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `size = N` or `align = N`"))
            }
        })?;
    }
    Ok(expected)
}
