use super::definition::Template;
use crate::error::TemplateImportError;

/// A trait for custom catalog formats that can be converted into
/// [`Template`] values.
///
/// This is the extension point that keeps the core format-agnostic: parse
/// your own catalog representation (JSON, YAML, a remote API payload, …)
/// into your own structs, then implement `IntoTemplates` to translate them.
///
/// # Example
///
/// ```rust
/// use flowcanvas::capability::CapabilityTag;
/// use flowcanvas::error::TemplateImportError;
/// use flowcanvas::template::{IntoTemplates, Template};
///
/// struct MyCatalogRow {
///     slug: String,
///     title: String,
///     step_lines: String, // newline-separated
/// }
///
/// struct MyCatalog(Vec<MyCatalogRow>);
///
/// impl IntoTemplates for MyCatalog {
///     fn into_templates(self) -> Result<Vec<Template>, TemplateImportError> {
///         self.0
///             .into_iter()
///             .map(|row| {
///                 if row.slug.is_empty() {
///                     return Err(TemplateImportError::ValidationError(
///                         "template slug must not be empty".to_string(),
///                     ));
///                 }
///                 Ok(Template::new(
///                     row.slug,
///                     row.title,
///                     "",
///                     "Imported",
///                     CapabilityTag::ArrowRight,
///                     row.step_lines.lines().map(str::to_string).collect(),
///                 ))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait IntoTemplates {
    /// Consumes the object and converts it into catalog-ready templates.
    fn into_templates(self) -> Result<Vec<Template>, TemplateImportError>;
}
