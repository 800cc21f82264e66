//! Derive macro for `envsetting`.
//!
//! `#[derive(EnvSettings)]` turns a struct with named fields into a set of variable declarations: one variable per
//! field, with the field's `#[env(...)]` attribute supplying the declaration options.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use envsetting_core::accessor_name;
use envsetting_core::lang::tags;
use syn::{Data, DeriveInput, Fields, Ident, Lit, LitStr, parse_macro_input};

/// Generates declaration and loading helpers for a settings struct.
///
/// Field attribute keys (all optional):
/// - `name = "..."`: variable name (default: the field name uppercased)
/// - `class`, `of`, `keys`: type tags
/// - `default = ...`: fallback raw value (any literal; stored in string form)
/// - `description = "..."`: shown when the variable is missing
///
/// This derive macro adds:
/// - `declare(&EnvSetting) -> Result<()>`: declares every field's variable, in field order
/// - `load(&EnvSetting) -> Result<Self>`: declares, then reads each field through its cached accessor
/// - an `envsetting::DeclaredVariables` implementation
///
/// # Example
/// ```ignore
/// #[derive(EnvSettings)]
/// struct Server {
///     #[env(class = "integer", default = 8080)]
///     port: i64,
///     #[env(name = "DATABASE_URL", description = "Primary database")]
///     database: String,
/// }
///
/// let server = Server::load(envsetting::global())?;
/// ```
#[proc_macro_derive(EnvSettings, attributes(env))]
pub fn derive_env_settings(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Options parsed from one field's `#[env(...)]` attributes.
#[derive(Default)]
struct FieldEnv {
    name: Option<LitStr>,
    class: Option<LitStr>,
    of: Option<LitStr>,
    keys: Option<LitStr>,
    default: Option<Lit>,
    description: Option<LitStr>,
}

impl FieldEnv {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut env = FieldEnv::default();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("env")) {
            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(Ident::to_string)
                    .unwrap_or_default();
                match key.as_str() {
                    "name" => env.name = Some(meta.value()?.parse()?),
                    "class" => env.class = Some(meta.value()?.parse()?),
                    "of" => env.of = Some(meta.value()?.parse()?),
                    "keys" => env.keys = Some(meta.value()?.parse()?),
                    "default" => env.default = Some(meta.value()?.parse()?),
                    "description" => env.description = Some(meta.value()?.parse()?),
                    _ => {
                        return Err(meta.error(
                            "unknown `env` key; expected one of name, class, of, keys, default, description",
                        ));
                    }
                }
                Ok(())
            })?;
        }
        Ok(env)
    }

    /// The `VarOptions` builder chain for this field.
    fn options(&self) -> TokenStream2 {
        let mut chain = quote! { ::envsetting::VarOptions::new() };
        if let Some(class) = self.class.as_ref().map(canonical_tag) {
            chain = quote! { #chain.class(#class) };
        }
        if let Some(of) = self.of.as_ref().map(canonical_tag) {
            chain = quote! { #chain.of(#of) };
        }
        if let Some(keys) = self.keys.as_ref().map(canonical_tag) {
            chain = quote! { #chain.keys(#keys) };
        }
        if let Some(default) = &self.default {
            chain = quote! { #chain.default(#default) };
        }
        if let Some(description) = &self.description {
            chain = quote! { #chain.description(#description) };
        }
        chain
    }
}

// Builtin aliases are resolved here so the generated code carries canonical spellings.
fn canonical_tag(tag: &LitStr) -> LitStr {
    LitStr::new(tags::canonicalize(&tag.value()), tag.span())
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "EnvSettings can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "EnvSettings can only be derived for structs",
            ));
        }
    };

    let mut idents = Vec::new();
    let mut variables = Vec::new();
    let mut accessors = Vec::new();
    let mut options = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let env = FieldEnv::parse(field)?;
        let variable = env
            .name
            .as_ref()
            .map(LitStr::value)
            .unwrap_or_else(|| ident.to_string().to_uppercase());

        accessors.push(accessor_name(&variable));
        options.push(env.options());
        variables.push(variable);
        idents.push(ident);
    }

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Declares every field's variable on `settings`.
            pub fn declare(settings: &::envsetting::EnvSetting) -> ::envsetting::Result<()> {
                #( settings.use_var(#variables, #options)?; )*
                Ok(())
            }

            /// Declares every field's variable, then reads each through its accessor.
            pub fn load(settings: &::envsetting::EnvSetting) -> ::envsetting::Result<Self> {
                Self::declare(settings)?;
                Ok(Self {
                    #( #idents: settings.value_as(#accessors)?, )*
                })
            }
        }

        impl #impl_generics ::envsetting::DeclaredVariables for #name #ty_generics #where_clause {
            fn variable_names() -> &'static [&'static str] {
                &[#(#variables),*]
            }
        }
    })
}
