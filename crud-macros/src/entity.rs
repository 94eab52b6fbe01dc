use crate::utils::{ObjectAttrConfig, apply_derives, ensure_leading_fields, snake_case};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Field, Item, ItemStruct, parse_macro_input};

/// #[entity] 宏实现
/// - 若缺失则追加字段 `id: Option<IdType>`；`versioned` 时追加 `version: Version`；
///   `auditable` 时追加 `#[serde(flatten)] audit: AuditInfo`，均置于字段最前
/// - 实现 `Identified` 与 `Entity`，以及按需实现 `Versioned` / `Auditable`
/// - 参数：`#[entity(id = IdType, name = "...", versioned, auditable, debug = bool)]`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ObjectAttrConfig);
    let cfg = match cfg.only("entity", &["id", "name", "versioned", "auditable", "debug"]) {
        Ok(cfg) => cfg,
        Err(err) => return err.to_compile_error().into(),
    };
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
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
    if cfg.auditable {
        required.push(syn::parse_quote! {
            #[serde(flatten)]
            #vis audit: ::crud_domain::audit::AuditInfo
        });
    }
    ensure_leading_fields(fields_named, required);

    let mut derives: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Default),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        derives.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, derives);

    let out_struct = ItemStruct { ..st };
    let ident = &out_struct.ident;
    let (impl_generics, ty_generics, where_clause) = out_struct.generics.split_for_impl();

    let type_name = cfg
        .name
        .map(|lit| lit.value())
        .unwrap_or_else(|| snake_case(&ident.to_string()));

    let concurrency_impl = if cfg.versioned {
        quote! {
            type Concurrency = ::crud_domain::concurrency::Optimistic;

            fn stamp(&self) -> ::crud_domain::concurrency::Stamp<Self::Concurrency> {
                self.version
            }

            fn set_stamp(&mut self, stamp: ::crud_domain::concurrency::Stamp<Self::Concurrency>) {
                self.version = stamp;
            }
        }
    } else {
        quote! {
            type Concurrency = ::crud_domain::concurrency::Unversioned;

            fn stamp(&self) -> ::crud_domain::concurrency::Stamp<Self::Concurrency> {}

            fn set_stamp(&mut self, _stamp: ::crud_domain::concurrency::Stamp<Self::Concurrency>) {}
        }
    };

    let versioned_impl = cfg.versioned.then(|| {
        quote! {
            impl #impl_generics ::crud_domain::entity::Versioned for #ident #ty_generics #where_clause {
                fn version(&self) -> ::crud_domain::value_object::Version { self.version }

                fn set_version(&mut self, version: ::crud_domain::value_object::Version) {
                    self.version = version;
                }
            }
        }
    });

    let auditable_impl = cfg.auditable.then(|| {
        quote! {
            impl #impl_generics ::crud_domain::audit::Auditable for #ident #ty_generics #where_clause {
                fn audit(&self) -> &::crud_domain::audit::AuditInfo { &self.audit }

                fn audit_mut(&mut self) -> &mut ::crud_domain::audit::AuditInfo { &mut self.audit }
            }
        }
    });

    let expanded = quote! {
        #out_struct

        impl #impl_generics ::crud_domain::entity::Identified for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> Option<&Self::Id> { self.id.as_ref() }
        }

        impl #impl_generics ::crud_domain::entity::Entity for #ident #ty_generics #where_clause {
            const TYPE: &'static str = #type_name;

            #concurrency_impl

            fn assign_id(&mut self, id: Self::Id) {
                self.id = Some(id);
            }
        }

        #versioned_impl

        #auditable_impl
    };

    TokenStream::from(expanded)
}
