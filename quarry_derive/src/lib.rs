use proc_macro::TokenStream;

mod binary;
mod or_variant;

#[proc_macro_derive(BinaryOperator, attributes(binary))]
pub fn operator_methods(input: TokenStream) -> TokenStream {
    binary::operator_methods_impl(input)
}

#[proc_macro_attribute]
pub fn or_variant(attr: TokenStream, item: TokenStream) -> TokenStream {
    or_variant::or_variant_impl(attr, item)
}
