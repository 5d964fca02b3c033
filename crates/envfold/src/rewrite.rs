//! Substitution decision and literal construction

use proc_macro2::Span;

use crate::{env_access_key, EnvSnapshot, InlineConfig};

/// Identifier substituted for an unset variable.
pub const UNDEFINED_IDENT: &str = "undefined";

/// What to do with a visited node.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the node untouched
    NoOp,

    /// Replace the node in place with the given expression
    ReplaceWith(syn::Expr),
}

/// Decide what to do with a node.
///
/// A pure function of the node's shape, the exclusion set, and the snapshot:
///
/// - not an environment access chain, or the key is dynamic → [`Action::NoOp`]
/// - key excluded by configuration → [`Action::NoOp`]
/// - key set in the snapshot (including to the empty string) → replace with
///   a string literal reconstructing the exact value
/// - key unset → replace with the bare `undefined` identifier, which is the
///   undefined sentinel, not the string `"undefined"`
///
/// The assignment-target guard lives in the visitor, which controls which
/// slots are offered to this function.
pub fn decide(expr: &syn::Expr, snapshot: &EnvSnapshot, config: &InlineConfig) -> Action {
    let key = match env_access_key(expr) {
        Some(key) => key,
        None => return Action::NoOp,
    };

    if config.is_excluded(&key) {
        return Action::NoOp;
    }

    match snapshot.get(&key) {
        Some(value) => Action::ReplaceWith(string_literal(value)),
        None => Action::ReplaceWith(undefined_sentinel()),
    }
}

/// Build a string literal expression holding the exact value.
pub fn string_literal(value: &str) -> syn::Expr {
    syn::Expr::Lit(syn::ExprLit {
        attrs: Vec::new(),
        lit: syn::Lit::Str(syn::LitStr::new(value, Span::call_site())),
    })
}

/// Build the undefined sentinel: a bare `undefined` path identifier.
pub fn undefined_sentinel() -> syn::Expr {
    let ident = proc_macro2::Ident::new(UNDEFINED_IDENT, Span::call_site());
    syn::Expr::Path(syn::ExprPath {
        attrs: Vec::new(),
        qself: None,
        path: ident.into(),
    })
}
