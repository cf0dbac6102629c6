//! Project plan templates, their sections, and the composed read model.

use std::cmp::Ordering;

use chrono::Utc;
use gnc_core::entities::{
    CreateProjectPlanTemplate, CreateSection, ProjectPlanTemplate,
    ProjectPlanTemplateWithRelations, Section, SectionWithSubsections,
};
use gnc_core::ids::{PREFIX_SECTION, PREFIX_TEMPLATE};
use gnc_core::search::{
    Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at, contains_ignore_case,
};
use gnc_core::validation::ValidationErrors;
use tracing::debug;

use crate::error::StoreError;
use crate::relations::RelationSnapshot;
use crate::repos::rejected;
use crate::store::{MemoryStore, touch_time};
use crate::updates::project_plan::ProjectPlanTemplateUpdate;

const TEMPLATE: &str = "project_plan_template";
const SECTION: &str = "section";

#[derive(Debug, Clone, Default)]
pub struct ProjectPlanFilter {
    /// Case-insensitive substring of `title`.
    pub title: Option<String>,
    /// Exact match on `version`.
    pub version: Option<String>,
    pub time: TimeRange,
}

impl Filter<ProjectPlanTemplate> for ProjectPlanFilter {
    fn matches(&self, item: &ProjectPlanTemplate) -> bool {
        self.title
            .as_deref()
            .is_none_or(|title| contains_ignore_case(&item.title, title))
            && self.version.as_deref().is_none_or(|version| item.version == version)
            && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectPlanSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Version,
}

impl SortKey<ProjectPlanTemplate> for ProjectPlanSort {
    fn compare(self, a: &ProjectPlanTemplate, b: &ProjectPlanTemplate) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Title => a.title.cmp(&b.title),
            Self::Version => a.version.cmp(&b.version),
        }
    }
}

pub type ProjectPlanSearch = SearchOptions<ProjectPlanFilter, ProjectPlanSort>;

fn validate_template(title: &str, description: &str, version: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_text("title", "Title", title);
    errors.require_text("description", "Description", description);
    errors.require_text("version", "Version", version);
    errors.into_result()
}

fn validate_section(data: &CreateSection) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_text("title", "Title", &data.title);
    errors.require_text("content", "Content", &data.content);
    if data.order < 0 {
        errors.push("order", "Order must be non-negative");
    }
    errors.into_result()
}

/// Walk `section`'s parent chain to the section that starts it.
///
/// Returns `None` when the chain loops back on itself.
fn root_of<'a>(section: &'a Section, sections: &'a [Section]) -> Option<&'a Section> {
    let mut current = section;
    for _ in 0..=sections.len() {
        let parent = current
            .parent_id
            .as_deref()
            .and_then(|parent| sections.iter().find(|s| s.id == parent));
        match parent {
            Some(parent) => current = parent,
            None => return Some(current),
        }
    }
    None
}

/// Group `sections` one level deep.
///
/// Top-level sections (no parent, a parent not in `sections`, or a parent
/// chain that loops) are ordered by `order`. Every other section is listed
/// under the top-level section its parent chain starts from, so deeper
/// descendants are flattened into that one level, also ordered by `order`.
/// Equal orders keep their original sequence.
fn group_sections(sections: &[Section]) -> Vec<SectionWithSubsections> {
    let roots: Vec<Option<&Section>> = sections.iter().map(|s| root_of(s, sections)).collect();
    let is_top = |index: usize| roots[index].is_none_or(|root| root.id == sections[index].id);

    let mut top: Vec<&Section> = (0..sections.len())
        .filter(|&i| is_top(i))
        .map(|i| &sections[i])
        .collect();
    top.sort_by_key(|s| s.order);

    top.into_iter()
        .map(|section| {
            let mut subsections: Vec<Section> = (0..sections.len())
                .filter(|&i| !is_top(i) && roots[i].is_some_and(|root| root.id == section.id))
                .map(|i| sections[i].clone())
                .collect();
            subsections.sort_by_key(|s| s.order);
            SectionWithSubsections {
                section: section.clone(),
                subsections,
            }
        })
        .collect()
}

/// Owns project plan templates and their sections.
///
/// Deleting a template leaves its sections in the section store; they stay
/// reachable through [`Self::get_section`].
#[derive(Debug, Clone)]
pub struct ProjectPlanService {
    templates: MemoryStore<ProjectPlanTemplate>,
    sections: MemoryStore<Section>,
    relations: RelationSnapshot,
}

impl Default for ProjectPlanService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectPlanService {
    /// Empty service composing templates with the placeholder relations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: MemoryStore::new(PREFIX_TEMPLATE),
            sections: MemoryStore::new(PREFIX_SECTION),
            relations: RelationSnapshot::default(),
        }
    }

    /// Replace the relations attached to composed templates.
    #[must_use]
    pub fn with_relations(mut self, relations: RelationSnapshot) -> Self {
        self.relations = relations;
        self
    }

    #[must_use]
    pub const fn relations(&self) -> &RelationSnapshot {
        &self.relations
    }

    /// Sections supplied in `data` are kept on the template as given; use
    /// [`Self::add_section`] to create sections with generated IDs.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` naming every blank field among
    /// title, description and version.
    pub fn create_project_plan_template(
        &mut self,
        data: CreateProjectPlanTemplate,
    ) -> Result<ProjectPlanTemplate, StoreError> {
        validate_template(&data.title, &data.description, &data.version)
            .map_err(|errors| rejected(TEMPLATE, errors))?;

        let now = Utc::now();
        let template = ProjectPlanTemplate {
            id: self.templates.next_id(),
            title: data.title,
            description: data.description,
            version: data.version,
            sections: data.sections,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %template.id, title = %template.title, "created project plan template");
        self.templates.insert(template.clone());
        Ok(template)
    }

    #[must_use]
    pub fn get_project_plan_template(&self, id: &str) -> Option<ProjectPlanTemplate> {
        self.templates.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged template is invalid.
    pub fn update_project_plan_template(
        &mut self,
        id: &str,
        update: ProjectPlanTemplateUpdate,
    ) -> Result<Option<ProjectPlanTemplate>, StoreError> {
        self.templates
            .update_with(
                id,
                |template| update.apply(template),
                |template| validate_template(&template.title, &template.description, &template.version),
            )
            .map_err(|errors| rejected(TEMPLATE, errors))
    }

    pub fn delete_project_plan_template(&mut self, id: &str) -> bool {
        match self.templates.remove(id) {
            Some(template) => {
                debug!(id, orphaned_sections = template.sections.len(), "deleted project plan template");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn search_project_plan_templates(
        &self,
        options: &ProjectPlanSearch,
    ) -> Vec<ProjectPlanTemplate> {
        self.templates.search(options)
    }

    #[must_use]
    pub fn list_project_plan_templates(&self) -> Vec<ProjectPlanTemplate> {
        self.templates.to_vec()
    }

    /// Create a section and append it to a template.
    ///
    /// The template's `updated_at` moves to the section's creation time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the template does not exist, or
    /// `StoreError::Validation` if title or content is blank or `order` is
    /// negative.
    pub fn add_section(
        &mut self,
        template_id: &str,
        data: CreateSection,
    ) -> Result<Section, StoreError> {
        if self.templates.get(template_id).is_none() {
            return Err(StoreError::NotFound {
                entity: TEMPLATE,
                id: template_id.to_string(),
            });
        }
        validate_section(&data).map_err(|errors| rejected(SECTION, errors))?;

        let id = self.sections.next_id();
        let template = self
            .templates
            .get_mut(template_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: TEMPLATE,
                id: template_id.to_string(),
            })?;

        let now = touch_time(template.created_at);
        let section = Section {
            id,
            title: data.title,
            content: data.content,
            order: data.order,
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        };
        template.sections.push(section.clone());
        template.updated_at = now;

        debug!(id = %section.id, template_id, order = section.order, "added section");
        self.sections.insert(section.clone());
        Ok(section)
    }

    #[must_use]
    pub fn get_section(&self, id: &str) -> Option<Section> {
        self.sections.get(id).cloned()
    }

    /// The template's sections grouped one level deep, or `None` if the
    /// template does not exist.
    #[must_use]
    pub fn section_tree(&self, template_id: &str) -> Option<Vec<SectionWithSubsections>> {
        self.templates
            .get(template_id)
            .map(|template| group_sections(&template.sections))
    }

    /// The template joined with this service's relation snapshot.
    ///
    /// Relations do not depend on the template: two templates composed by
    /// the same service carry identical relations.
    #[must_use]
    pub fn get_project_plan_template_with_relations(
        &self,
        id: &str,
    ) -> Option<ProjectPlanTemplateWithRelations> {
        self.templates
            .get(id)
            .map(|template| self.relations.attach(template.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::service_with_template;
    use crate::updates::project_plan::ProjectPlanTemplateUpdateBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_blank_field_is_reported() {
        let mut service = ProjectPlanService::new();
        let err = service
            .create_project_plan_template(CreateProjectPlanTemplate::default())
            .unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().fields(),
            vec!["title", "description", "version"]
        );
        assert!(service.list_project_plan_templates().is_empty());
    }

    #[test]
    fn add_section_appends_and_touches_template() {
        let (mut service, template) = service_with_template();
        let section = service
            .add_section(&template.id, CreateSection::new("Overview", "# Overview", 1))
            .unwrap();
        assert!(section.id.starts_with("sec-"));

        let stored = service.get_project_plan_template(&template.id).unwrap();
        assert_eq!(stored.sections, vec![section.clone()]);
        assert!(stored.updated_at >= template.updated_at);
        assert_eq!(stored.created_at, template.created_at);
        assert_eq!(service.get_section(&section.id), Some(section));
    }

    #[test]
    fn add_section_to_missing_template() {
        let mut service = ProjectPlanService::new();
        let err = service
            .add_section("tpl-ffffffff", CreateSection::new("t", "c", 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id, .. } if id == "tpl-ffffffff"));
    }

    #[test]
    fn negative_order_rejected() {
        let (mut service, template) = service_with_template();
        let err = service
            .add_section(&template.id, CreateSection::new("t", "c", -1))
            .unwrap_err();
        assert!(err.validation_errors().is_some_and(|e| e.has_field("order")));
        assert!(service.get_project_plan_template(&template.id).unwrap().sections.is_empty());
    }

    #[test]
    fn section_tree_groups_one_level() {
        let (mut service, template) = service_with_template();
        let stack = service
            .add_section(&template.id, CreateSection::new("Tech Stack", "...", 2))
            .unwrap();
        let overview = service
            .add_section(&template.id, CreateSection::new("Overview", "...", 1))
            .unwrap();
        service
            .add_section(&template.id, CreateSection::new("Database", "...", 2).parent(&stack.id))
            .unwrap();
        service
            .add_section(&template.id, CreateSection::new("Frontend", "...", 1).parent(&stack.id))
            .unwrap();
        service
            .add_section(&template.id, CreateSection::new("Stray", "...", 0).parent("sec-ffffffff"))
            .unwrap();

        let tree = service.section_tree(&template.id).unwrap();
        let titles: Vec<_> = tree.iter().map(|n| n.section.title.as_str()).collect();
        assert_eq!(titles, vec!["Stray", "Overview", "Tech Stack"]);
        assert!(tree[1].subsections.is_empty());
        assert_eq!(tree[1].section.id, overview.id);
        let children: Vec<_> = tree[2].subsections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(children, vec!["Frontend", "Database"]);

        assert!(service.section_tree("tpl-ffffffff").is_none());
    }

    #[test]
    fn deeper_descendants_flatten_under_their_top_section() {
        let (mut service, template) = service_with_template();
        let top = service
            .add_section(&template.id, CreateSection::new("Top", "...", 0))
            .unwrap();
        let child = service
            .add_section(&template.id, CreateSection::new("Child", "...", 2).parent(&top.id))
            .unwrap();
        service
            .add_section(&template.id, CreateSection::new("Grandchild", "...", 1).parent(&child.id))
            .unwrap();

        let tree = service.section_tree(&template.id).unwrap();
        assert_eq!(tree.len(), 1);
        let rendered: usize = tree.iter().map(|n| 1 + n.subsections.len()).sum();
        assert_eq!(rendered, 3);
        let titles: Vec<_> = tree[0].subsections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Grandchild", "Child"]);
    }

    #[test]
    fn parent_cycles_are_promoted_to_top_level() {
        let now = Utc::now();
        let section = |id: &str, parent: &str, order: i32| Section {
            id: id.into(),
            title: id.into(),
            content: "...".into(),
            order,
            parent_id: Some(parent.into()),
            created_at: now,
            updated_at: now,
        };
        let sections = vec![section("a", "b", 1), section("b", "a", 0)];

        let tree = group_sections(&sections);
        let ids: Vec<_> = tree.iter().map(|n| n.section.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(tree.iter().all(|n| n.subsections.is_empty()));
    }

    #[test]
    fn update_revalidates_merged_template() {
        let (mut service, template) = service_with_template();
        let updated = service
            .update_project_plan_template(
                &template.id,
                ProjectPlanTemplateUpdateBuilder::new().version("1.1.0").build(),
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.version, "1.1.0");
        assert_eq!(updated.title, template.title);

        let err = service
            .update_project_plan_template(
                &template.id,
                ProjectPlanTemplateUpdateBuilder::new().title("  ").build(),
            )
            .unwrap_err();
        assert!(err.validation_errors().is_some_and(|e| e.has_field("title")));
        assert!(matches!(
            service.update_project_plan_template("tpl-ffffffff", ProjectPlanTemplateUpdateBuilder::new().build()),
            Ok(None)
        ));
    }

    #[test]
    fn search_by_title_and_version() {
        let (mut service, _) = service_with_template();
        service
            .create_project_plan_template(CreateProjectPlanTemplate::new("Other plan", "d", "2.0.0"))
            .unwrap();

        let by_title = service.search_project_plan_templates(&ProjectPlanSearch::new().filters(
            ProjectPlanFilter {
                title: Some("game night".into()),
                ..ProjectPlanFilter::default()
            },
        ));
        assert_eq!(by_title.len(), 1);

        let by_version = service.search_project_plan_templates(&ProjectPlanSearch::new().filters(
            ProjectPlanFilter {
                version: Some("2.0.0".into()),
                ..ProjectPlanFilter::default()
            },
        ));
        assert_eq!(by_version[0].title, "Other plan");
    }

    #[test]
    fn relations_are_template_independent() {
        let (mut service, first) = service_with_template();
        let second = service
            .create_project_plan_template(CreateProjectPlanTemplate::new("Second", "d", "1"))
            .unwrap();

        let a = service.get_project_plan_template_with_relations(&first.id).unwrap();
        let b = service.get_project_plan_template_with_relations(&second.id).unwrap();
        assert_eq!(a.tech_stack, b.tech_stack);
        assert_eq!(a.learning_strategy, b.learning_strategy);
        assert_eq!(a.database_auth_plan, b.database_auth_plan);
        assert_eq!(a.file_structures, b.file_structures);
        assert_eq!(a.template, first);
        assert!(service.get_project_plan_template_with_relations("tpl-ffffffff").is_none());
    }

    #[test]
    fn delete_orphans_sections() {
        let (mut service, template) = service_with_template();
        let section = service
            .add_section(&template.id, CreateSection::new("Overview", "...", 0))
            .unwrap();
        assert!(service.delete_project_plan_template(&template.id));
        assert!(!service.delete_project_plan_template(&template.id));
        assert!(service.get_project_plan_template(&template.id).is_none());
        assert_eq!(service.get_section(&section.id), Some(section));
    }
}
