//! View model of the employees table page.
//!
//! Everything the page shows is a pure function of the store id, the store's
//! employees and the query string. The "selected row" is the `selected`
//! query parameter: rows link to the page with their id selected, and the
//! action button reads the resolved selection.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::{Url, form_urlencoded};

use crate::domain::entities::Employee;

/// Query string of the employees page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    /// Case-insensitive filter on the employee name.
    pub search: Option<String>,
    /// `name` or `createdAt`.
    pub sort: Option<String>,
    /// `asc` or `desc`.
    pub dir: Option<String>,
    /// Id of the selected employee.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Name,
    #[default]
    CreatedAt,
}

impl SortKey {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => SortKey::Name,
            _ => SortKey::CreatedAt,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone)]
pub struct EmployeeColumn {
    pub employee_id: String,
    pub name: String,
    /// Display date, e.g. `March 4, 2024`.
    pub created_at: String,
    /// Link that selects this row.
    pub select_href: String,
    pub is_selected: bool,
    created_at_raw: DateTime<Utc>,
}

/// The single action button next to the heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub href: String,
}

/// Everything the employees page renders.
#[derive(Debug, Clone)]
pub struct EmployeesTable {
    pub store_id: String,
    /// Path of the page itself, target of the search form.
    pub list_href: String,
    /// `Employees ({count})`, counting all employees of the store.
    pub title: String,
    pub description: &'static str,
    pub rows: Vec<EmployeeColumn>,
    pub search: String,
    pub sort: SortKey,
    pub dir: SortDir,
    pub name_sort_href: String,
    pub created_sort_href: String,
    /// Id and name of the selected employee.
    pub selected: Option<(String, String)>,
    pub action: ActionButton,
}

impl EmployeesTable {
    /// Builds the page for `employees` of `store_id` under `query`.
    ///
    /// A `selected` id that matches no employee of the store counts as no
    /// selection.
    pub fn build(store_id: &str, employees: &[Employee], query: &TableQuery) -> Self {
        let search = query.search.as_deref().unwrap_or_default().trim().to_string();
        let sort = SortKey::parse(query.sort.as_deref());
        let dir = SortDir::parse(query.dir.as_deref());

        let selected = query
            .selected
            .as_deref()
            .and_then(|id| employees.iter().find(|e| e.id == id))
            .map(|e| (e.id.clone(), e.name.clone()));

        let action = action_button(store_id, selected.as_ref());

        let needle = search.to_lowercase();
        let mut rows: Vec<EmployeeColumn> = employees
            .iter()
            .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .map(|e| EmployeeColumn {
                employee_id: e.id.clone(),
                name: e.name.clone(),
                created_at: e.created_at.format("%B %-d, %Y").to_string(),
                select_href: page_href(store_id, &search, sort, dir, Some(&e.id)),
                is_selected: selected.as_ref().is_some_and(|(id, _)| *id == e.id),
                created_at_raw: e.created_at,
            })
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match sort {
                SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortKey::CreatedAt => a.created_at_raw.cmp(&b.created_at_raw),
            };
            match dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        });

        let selected_id = selected.as_ref().map(|(id, _)| id.as_str());
        let toggle = |key: SortKey| {
            let next_dir = if key == sort { dir.flipped() } else { SortDir::Asc };
            page_href(store_id, &search, key, next_dir, selected_id)
        };

        Self {
            store_id: store_id.to_string(),
            list_href: path_of(&[store_id, "employees"]),
            title: format!("Employees ({})", employees.len()),
            description: "Manage employees",
            name_sort_href: toggle(SortKey::Name),
            created_sort_href: toggle(SortKey::CreatedAt),
            rows,
            search,
            sort,
            dir,
            selected,
            action,
        }
    }

    /// Id of the selected employee, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|(id, _)| id.as_str())
    }

    /// Link that clears the selection while keeping search and sort.
    pub fn clear_selection_href(&self) -> String {
        page_href(&self.store_id, &self.search, self.sort, self.dir, None)
    }
}

/// "New Employee" without a selection, "Edit {name}" with one.
pub fn action_button(store_id: &str, selected: Option<&(String, String)>) -> ActionButton {
    match selected {
        Some((id, name)) => ActionButton {
            label: format!("Edit {name}"),
            href: path_of(&[store_id, "employees", id.as_str()]),
        },
        None => ActionButton {
            label: "New Employee".to_string(),
            href: path_of(&[store_id, "employees", "new"]),
        },
    }
}

/// Absolute path from raw segments, each percent-encoded on its own.
pub fn path_of(segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return "/".to_string();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

fn page_href(
    store_id: &str,
    search: &str,
    sort: SortKey,
    dir: SortDir,
    selected: Option<&str>,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("search", search);
    }
    query.append_pair("sort", sort.as_str());
    query.append_pair("dir", dir.as_str());
    if let Some(id) = selected {
        query.append_pair("selected", id);
    }

    format!("{}?{}", path_of(&[store_id, "employees"]), query.finish())
}
