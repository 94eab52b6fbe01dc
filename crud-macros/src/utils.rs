use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Attribute, Field, FieldsNamed, LitBool, LitStr, Result, Token, Type, parse::Parse,
    parse::ParseStream,
};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) =
                attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => {
            let last_ident = last.ident.to_string();
            match last_ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{last_ident}"),
                _ => last_ident,
            }
        }
        None => p.to_token_stream().to_string(),
    }
}

/// 合并默认派生与用户已写的派生（去重，required 在前）
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);

    let mut seen = std::collections::HashSet::<String>::new();
    let mut merged: Vec<syn::Path> = Vec::new();
    for p in required.into_iter().chain(existing) {
        if seen.insert(derive_key(&p)) {
            merged.push(p);
        }
    }

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}

/// 确保具名字段结构体包含给定字段，并按给定顺序置于最前。
/// 用户已声明的同名字段会被复用（保留其类型与属性），其余字段保持原有相对顺序。
pub(crate) fn ensure_leading_fields(fields_named: &mut FieldsNamed, required: Vec<Field>) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    let required_names: Vec<String> = required
        .iter()
        .filter_map(|f| f.ident.as_ref().map(|i| i.to_string()))
        .collect();

    for field in required {
        let name = field.ident.as_ref().map(|i| i.to_string());
        let existing = old_named
            .iter()
            .find(|f| f.ident.as_ref().map(|i| i.to_string()) == name);
        match existing {
            Some(f) => new_named.push(f.clone()),
            None => new_named.push(field),
        }
    }

    for f in old_named.into_iter() {
        let is_required = f
            .ident
            .as_ref()
            .map(|i| required_names.iter().any(|n| i == n))
            .unwrap_or(false);
        if !is_required {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}

/// `OrderLine` -> `order_line`
pub(crate) fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// -------- attribute parsing --------

/// `#[entity(...)]` / `#[model(...)]` / `#[entity_id(...)]` 共用的参数
#[derive(Default)]
pub(crate) struct ObjectAttrConfig {
    pub(crate) id_ty: Option<Type>,
    pub(crate) name: Option<LitStr>,
    pub(crate) versioned: bool,
    pub(crate) auditable: bool,
    pub(crate) derive_debug: Option<bool>,
}

impl ObjectAttrConfig {
    /// 拒绝当前宏不支持的键
    pub(crate) fn only(self, macro_name: &str, allowed: &[&str]) -> Result<Self> {
        let used = [
            ("id", self.id_ty.is_some()),
            ("name", self.name.is_some()),
            ("versioned", self.versioned),
            ("auditable", self.auditable),
            ("debug", self.derive_debug.is_some()),
        ];
        for (key, present) in used {
            if present && !allowed.contains(&key) {
                return Err(syn::Error::new(
                    proc_macro2::Span::call_site(),
                    format!(
                        "#[{macro_name}] does not accept '{key}'; expected one of: {}",
                        allowed.join(", ")
                    ),
                ));
            }
        }
        Ok(self)
    }
}

enum AttrElem {
    Id(Box<Type>),
    Name(LitStr),
    Debug(bool),
    Versioned,
    Auditable,
}

impl Parse for AttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        match key.to_string().as_str() {
            "id" => {
                let _eq: Token![=] = input.parse()?;
                Ok(AttrElem::Id(Box::new(input.parse()?)))
            }
            "name" => {
                let _eq: Token![=] = input.parse()?;
                Ok(AttrElem::Name(input.parse()?))
            }
            "debug" => {
                let _eq: Token![=] = input.parse()?;
                let lit: LitBool = input.parse()?;
                Ok(AttrElem::Debug(lit.value()))
            }
            "versioned" => Ok(AttrElem::Versioned),
            "auditable" => Ok(AttrElem::Auditable),
            _ => Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'id', 'name', 'debug', 'versioned' or 'auditable'",
            )),
        }
    }
}

impl Parse for ObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = ObjectAttrConfig::default();
        if input.is_empty() {
            return Ok(cfg);
        }

        let elems = Punctuated::<AttrElem, Token![,]>::parse_terminated(input)?;
        for elem in elems {
            match elem {
                AttrElem::Id(ty) => {
                    if cfg.id_ty.is_some() {
                        return Err(syn::Error::new(ty.span(), "duplicate key 'id' in attribute"));
                    }
                    cfg.id_ty = Some(*ty);
                }
                AttrElem::Name(lit) => {
                    if cfg.name.is_some() {
                        return Err(syn::Error::new(lit.span(), "duplicate key 'name' in attribute"));
                    }
                    cfg.name = Some(lit);
                }
                AttrElem::Debug(b) => {
                    if cfg.derive_debug.is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    cfg.derive_debug = Some(b);
                }
                AttrElem::Versioned => cfg.versioned = true,
                AttrElem::Auditable => cfg.auditable = true,
            }
        }

        Ok(cfg)
    }
}
