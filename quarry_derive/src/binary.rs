use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_any))]
struct BinaryDeriveInput {
    ident: syn::Ident,
    data: ast::Data<BinaryVariant, ()>,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(binary))]
struct BinaryVariant {
    ident: syn::Ident,
    fields: ast::Fields<darling::util::Ignored>,
    #[darling(default)]
    ignore: bool,
}

pub fn operator_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_info = match BinaryDeriveInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &enum_info.ident;

    let Some(variants) = enum_info.data.take_enum() else {
        return syn::Error::new_spanned(&input.ident, "only enums are supported")
            .to_compile_error()
            .into();
    };

    let methods = variants.iter().filter_map(|var| {
        // only unit variants get a shortcut
        if var.ignore || !var.fields.is_unit() {
            return None;
        }

        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);
        let or_where_fn = format_ident!("or_where_{}", snake);
        let doc = format!(" Append `column {snake} value` joined with `AND`.");
        let or_doc = format!(" Append `column {snake} value` joined with `OR`.");

        Some(quote! {
            #[doc = #doc]
            pub fn #where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: crate::IntoIdent,
                V: crate::IntoValue,
            {
                self.where_expr(
                    crate::Conjunction::And,
                    column,
                    #enum_name::#var_name,
                    value,
                )
            }

            #[doc = #or_doc]
            pub fn #or_where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: crate::IntoIdent,
                V: crate::IntoValue,
            {
                self.where_expr(
                    crate::Conjunction::Or,
                    column,
                    #enum_name::#var_name,
                    value,
                )
            }
        })
    });

    quote! {
        impl<Q: crate::Quote> crate::Statement<Q> {
            #(#methods)*
        }
    }
    .into()
}
