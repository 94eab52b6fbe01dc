use crate::utils::{ObjectAttrConfig, apply_derives, ensure_leading_fields};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Field, Item, parse_macro_input};

/// #[model] 宏实现
/// - 追加 `id: Option<IdType>`，`versioned` 时追加 `version: Version`
/// - 派生 Debug, Clone, Default, PartialEq, Serialize, Deserialize
/// - 实现 `Identified` 与 `Model`，并发模式与同名实体保持一致时才能交给 `CrudService`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ObjectAttrConfig);
    let cfg = match cfg.only("model", &["id", "versioned", "debug"]) {
        Ok(cfg) => cfg,
        Err(err) => return err.to_compile_error().into(),
    };
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[model] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let vis = st.vis.clone();
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let id_type = cfg.id_ty.unwrap_or_else(|| syn::parse_quote! { String });

    let mut required: Vec<Field> = vec![syn::parse_quote! { #vis id: Option<#id_type> }];
    if cfg.versioned {
        required.push(syn::parse_quote! {
            #vis version: ::crud_domain::value_object::Version
        });
    }
    ensure_leading_fields(fields_named, required);

    let mut derives: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Default),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        derives.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, derives);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let concurrency_impl = if cfg.versioned {
        quote! {
            type Concurrency = ::crud_domain::concurrency::Optimistic;

            fn stamp(&self) -> ::crud_domain::concurrency::Stamp<Self::Concurrency> {
                self.version
            }
        }
    } else {
        quote! {
            type Concurrency = ::crud_domain::concurrency::Unversioned;

            fn stamp(&self) -> ::crud_domain::concurrency::Stamp<Self::Concurrency> {}
        }
    };

    let expanded = quote! {
        #st

        impl #impl_generics ::crud_domain::entity::Identified for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> Option<&Self::Id> { self.id.as_ref() }
        }

        impl #impl_generics ::crud_domain::entity::Model for #ident #ty_generics #where_clause {
            #concurrency_impl
        }
    };

    TokenStream::from(expanded)
}
