//! The `VisitMut` pass wiring the decision into a host traversal

use quote::ToTokens;
use syn::visit_mut::VisitMut;

use crate::rewrite::{decide, Action};
use crate::{EnvSnapshot, InlineConfig, Result};

/// The environment-inlining pass.
///
/// Holds the snapshot and configuration for one tree pass and implements
/// [`syn::visit_mut::VisitMut`], so a host that drives its own traversal can
/// register it directly. [`apply_file`](Inliner::apply_file) and
/// [`apply_expr`](Inliner::apply_expr) are entry points for hosts that just
/// hand over a tree.
///
/// Replacement is pre-order: a matched node is rewritten and its (discarded)
/// sub-chain is never descended into. A reference that is the direct target
/// of an assignment is exempt, since a literal is not assignable; expressions
/// nested inside that target are still visited.
///
/// # Example
///
/// ```
/// use envfold::{EnvSnapshot, InlineConfig, Inliner};
///
/// let snapshot = EnvSnapshot::empty().with("FOO", "bar");
/// let mut pass = Inliner::new(snapshot, InlineConfig::new());
///
/// let mut expr: syn::Expr = syn::parse_str("process.env.FOO").unwrap();
/// pass.apply_expr(&mut expr);
///
/// let expected: syn::Expr = syn::parse_str(r#""bar""#).unwrap();
/// assert_eq!(expr, expected);
/// ```
#[derive(Debug, Clone)]
pub struct Inliner {
    snapshot: EnvSnapshot,
    config: InlineConfig,
}

impl Inliner {
    /// Name the pass registers under.
    pub const NAME: &'static str = "inline-env-vars";

    /// Create a pass over an explicit snapshot.
    pub fn new(snapshot: EnvSnapshot, config: InlineConfig) -> Self {
        Self { snapshot, config }
    }

    /// Create a pass over the current process environment.
    pub fn from_process_env(config: InlineConfig) -> Self {
        Self::new(EnvSnapshot::from_process(), config)
    }

    /// Run the pass over a whole file.
    pub fn apply_file(&mut self, file: &mut syn::File) {
        self.visit_file_mut(file);
    }

    /// Run the pass over a single expression tree.
    pub fn apply_expr(&mut self, expr: &mut syn::Expr) {
        self.visit_expr_mut(expr);
    }

    /// Parse source text, run the pass, and render the result.
    ///
    /// # Errors
    ///
    /// Returns `EnvfoldError::Parse` if the source is not a valid file.
    pub fn rewrite_source(&mut self, source: &str) -> Result<String> {
        let mut file = syn::parse_file(source)?;
        self.apply_file(&mut file);
        Ok(file.to_token_stream().to_string())
    }

    /// Visit the target slot of an assignment.
    ///
    /// The slot itself keeps its shape; only its sub-expressions are offered
    /// for replacement.
    fn visit_assign_target_mut(&mut self, target: &mut syn::Expr) {
        syn::visit_mut::visit_expr_mut(self, target);
    }
}

impl VisitMut for Inliner {
    fn visit_expr_mut(&mut self, expr: &mut syn::Expr) {
        match expr {
            // Assignment: the left slot is exempt at its top node
            syn::Expr::Assign(assign) => {
                self.visit_assign_target_mut(&mut assign.left);
                self.visit_expr_mut(&mut assign.right);
                return;
            }

            // Compound assignment (+=, -=, ...) reads and writes its left
            // slot, so the same guard applies
            syn::Expr::Binary(binary) if is_compound_assign(&binary.op) => {
                self.visit_assign_target_mut(&mut binary.left);
                self.visit_expr_mut(&mut binary.right);
                return;
            }

            _ => {}
        }

        if let Action::ReplaceWith(replacement) = decide(expr, &self.snapshot, &self.config) {
            *expr = replacement;
            return;
        }

        syn::visit_mut::visit_expr_mut(self, expr);
    }
}

/// Whether a binary operator assigns to its left operand.
fn is_compound_assign(op: &syn::BinOp) -> bool {
    matches!(
        op,
        syn::BinOp::AddAssign(_)
            | syn::BinOp::SubAssign(_)
            | syn::BinOp::MulAssign(_)
            | syn::BinOp::DivAssign(_)
            | syn::BinOp::RemAssign(_)
            | syn::BinOp::BitXorAssign(_)
            | syn::BinOp::BitAndAssign(_)
            | syn::BinOp::BitOrAssign(_)
            | syn::BinOp::ShlAssign(_)
            | syn::BinOp::ShrAssign(_)
    )
}
