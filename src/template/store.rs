use super::definition::Template;
use ahash::AHashMap;

/// An id-keyed catalog of templates, preserving insertion order.
///
/// The store is read-mostly: the collaborator layer populates it once (from
/// its own source of truth) and the rest of the application looks templates
/// up by id. It performs no validation beyond id-keying — templates are
/// assumed to arrive well-formed.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: AHashMap<String, Template>,
    order: Vec<String>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template to the catalog. Inserting under an existing id
    /// replaces the previous entry but keeps its catalog position.
    pub fn insert(&mut self, template: Template) {
        if !self.templates.contains_key(&template.id) {
            self.order.push(template.id.clone());
        }
        self.templates.insert(template.id.clone(), template);
    }

    /// Read-only lookup by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Templates in insertion order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.order.iter().filter_map(|id| self.templates.get(id))
    }

    /// Distinct category names, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for template in self.templates() {
            if !seen.contains(&template.category.as_str()) {
                seen.push(template.category.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<Template> for TemplateStore {
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        let mut store = Self::new();
        for template in iter {
            store.insert(template);
        }
        store
    }
}
