#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the workspace.
//! At the moment this is a single attribute macro that turns a plain enum into a
//! context-aware error type, so every slice reports failures the same way.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! izero-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining slice-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants wrapping an upstream error must carry `context: Option<Cow<'static, str>>`.
/// 3. Variants wrapping external errors use a `source: T` field or a field marked
///    with `#[source]`/`#[from]`.
///
/// # Example
///
/// ```rust,ignore
/// use izero_derive::izero_error;
/// use std::borrow::Cow;
///
/// #[izero_error]
/// pub enum WorkflowError {
///     #[error("Workflow I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal workflow error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, WorkflowError> {
///     std::fs::read_to_string(path).context("Reading workflow document")
/// }
/// ```
#[proc_macro_attribute]
pub fn izero_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
