//! Recognizing `process.env` access chains

/// Root identifier of the access chain.
pub const ROOT_NAMESPACE: &str = "process";

/// Second segment of the access chain.
pub const ENV_MEMBER: &str = "env";

/// Extract the statically known key from an environment access chain.
///
/// Matches two shapes, both rooted at the fixed `process.env` chain:
///
/// - dot access with a named member: `process.env.KEY`
/// - bracket access with a string literal: `process.env["KEY"]`
///
/// A dynamically computed key (`process.env[name]`), a numeric index, or a
/// chain rooted anywhere else never matches. Beyond the two fixed segments
/// the key itself is taken as-is, with no shape validation.
///
/// # Example
///
/// ```
/// use envfold::env_access_key;
///
/// let expr: syn::Expr = syn::parse_str("process.env.HOME").unwrap();
/// assert_eq!(env_access_key(&expr), Some("HOME".to_string()));
///
/// let expr: syn::Expr = syn::parse_str("process.env[key]").unwrap();
/// assert_eq!(env_access_key(&expr), None);
/// ```
pub fn env_access_key(expr: &syn::Expr) -> Option<String> {
    match expr {
        // Dot access: process.env.KEY
        syn::Expr::Field(field) if is_env_namespace(&field.base) => match &field.member {
            syn::Member::Named(ident) => Some(ident.to_string()),
            syn::Member::Unnamed(_) => None,
        },

        // Bracket access: process.env["KEY"]
        syn::Expr::Index(index) if is_env_namespace(&index.expr) => match &*index.index {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(key),
                ..
            }) => Some(key.value()),
            _ => None,
        },

        _ => None,
    }
}

/// Whether an expression is exactly the two-segment `process.env` chain.
fn is_env_namespace(expr: &syn::Expr) -> bool {
    match expr {
        syn::Expr::Field(field) => {
            let named_env = match &field.member {
                syn::Member::Named(ident) => ident == ENV_MEMBER,
                syn::Member::Unnamed(_) => false,
            };
            named_env
                && matches!(&*field.base,
                    syn::Expr::Path(path) if path.path.is_ident(ROOT_NAMESPACE))
        }
        _ => false,
    }
}
