//! Client-side cache of fetched templates.
//!
//! DESIGN
//! ======
//! The store is the single source of truth for template data. Merges are
//! last-write-wins per whole record and never remove keys, so paginated
//! fetches accumulate. Only a full reload clears it.

#[cfg(test)]
#[path = "template_store_test.rs"]
mod template_store_test;

use std::collections::{BTreeSet, HashMap};

use super::gallery::GroupFilter;
use crate::net::types::Template;

/// Templates keyed by name, iterated in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateStore {
    entries: HashMap<String, Template>,
    order: Vec<String>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite matching names, add new ones, keep everything else.
    pub fn merge(&mut self, templates: impl IntoIterator<Item = Template>) {
        for template in templates {
            if !self.entries.contains_key(&template.name) {
                self.order.push(template.name.clone());
            }
            self.entries.insert(template.name.clone(), template);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All templates in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Templates matching `group` and `query`, in store order.
    ///
    /// The query matches case-insensitively against the name, the caption
    /// and each group label. A blank query matches everything.
    pub fn filtered(&self, group: &GroupFilter, query: &str) -> Vec<&Template> {
        let needle = query.trim().to_lowercase();
        self.iter()
            .filter(|template| group.admits(template))
            .filter(|template| needle.is_empty() || matches_query(template, &needle))
            .collect()
    }

    /// Sorted distinct group labels across the store.
    pub fn group_labels(&self) -> Vec<String> {
        self.entries
            .values()
            .flat_map(|template| template.groups.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn matches_query(template: &Template, needle: &str) -> bool {
    template.name.to_lowercase().contains(needle)
        || template.last_caption.to_lowercase().contains(needle)
        || template.groups.iter().any(|g| g.to_lowercase().contains(needle))
}
