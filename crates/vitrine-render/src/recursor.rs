//! Recursive traversal
//!
//! Walks the fields of a record in declared order, runs classification,
//! constraint extraction, element building and decoration for each one, and
//! descends into nested records, lists and mappings.
//!
//! Depth counts descents: the root record is at depth 0, and each step into a
//! nested record, a record list element or a structured mapping value adds
//! one. A descent that would pass the configured maximum renders a terminal
//! placeholder instead.
//!
//! ## Markup
//!
//! Read-only:
//!
//! ```text
//! <table class="model-fields">
//!   <tr><th class="field-name">name</th><td class="field-value">John Doe</td></tr>
//!   <tr><th class="field-name">address</th><td class="field-value field-nested"><table …></td></tr>
//! </table>
//! ```
//!
//! Editable:
//!
//! ```text
//! <form class="model-form">
//!   <div class="form-field"><label for="name">name</label><input … /></div>
//!   <div class="form-field"><fieldset class="nested-record" id="address"><legend>address</legend>…</fieldset></div>
//!   <div class="form-actions"><button type="submit" class="submit-button">Submit</button></div>
//! </form>
//! ```

use crate::attrs::{decorate, decorate_form};
use crate::classify::{FieldKind, classify};
use crate::config::RenderConfig;
use crate::constraints::{ConstraintRecord, extract};
use crate::element::{build, placeholder};
use crate::fragment::Fragment;
use crate::html::escape;
use crate::path::FieldPath;
use indexmap::IndexMap;
use vitrine_schema::{DeclaredType, FieldDescriptor, Record, Value};

/// Render `record` located at `path`, `depth` descents below the root
///
/// At the root path the result is the complete container (`<table>` or
/// `<form>` with its submit button), decorated for the configured theme and
/// live-update mode. Below the root, read-only records render as a nested
/// table and editable records as their sequence of form fields.
///
/// # Examples
///
/// ```
/// use vitrine_render::config::RenderConfig;
/// use vitrine_render::path::FieldPath;
/// use vitrine_render::recursor::render_record;
/// use vitrine_schema::{DeclaredType, Record};
///
/// let record = Record::builder("User").field("name", DeclaredType::Text, "John Doe");
/// let html = render_record(&record, &FieldPath::root(), 0, &RenderConfig::default());
/// assert_eq!(
///     html.as_str(),
///     r#"<table class="model-fields"><tr><th class="field-name">name</th><td class="field-value">John Doe</td></tr></table>"#
/// );
/// ```
pub fn render_record(record: &Record, path: &FieldPath, depth: usize, config: &RenderConfig) -> Fragment {
	let body: Fragment = record
		.fields()
		.iter()
		.map(|field| render_field(field, &path.field(&field.name), depth, config))
		.collect();

	match (config.editable(), path.is_root()) {
		(false, true) => decorate_form(body.wrap("table", r#"class="model-fields""#), config),
		(false, false) => body.wrap("table", r#"class="model-fields""#),
		(true, true) => {
			let mut form = body;
			form.push_str(r#"<div class="form-actions"><button type="submit" class="submit-button">Submit</button></div>"#);
			decorate_form(form.wrap("form", r#"class="model-form""#), config)
		}
		(true, false) => body,
	}
}

/// Render one field as a table row or a form field
fn render_field(field: &FieldDescriptor, path: &FieldPath, depth: usize, config: &RenderConfig) -> Fragment {
	let kind = classify(&field.ty);
	let constraints = extract(field, kind);
	let value = field.resolved_value();
	tracing::trace!(field = %path, kind = %kind, depth, "Rendering field");

	let content = render_value(kind, &field.ty, &value, &constraints, path, depth, config);
	let name = Fragment::text(&field.name);

	if !config.editable() {
		let cell_class = match kind {
			FieldKind::NestedRecord | FieldKind::MappingStructured => "field-value field-nested",
			FieldKind::ListOfScalar | FieldKind::ListOfRecord => "field-value field-list",
			_ => "field-value",
		};
		let mut row = name.wrap("th", r#"class="field-name""#);
		row.push(content.wrap("td", &format!(r#"class="{}""#, cell_class)));
		return row.wrap("tr", "");
	}

	let id = escape(&path.to_string());
	let cell = if kind.is_composite() {
		let mut group = name.wrap("legend", "");
		group.push(content);
		group.wrap("fieldset", &format!(r#"class="{}" id="{}""#, group_class(kind), id))
	} else {
		let mut labeled = name.wrap("label", &format!(r#"for="{}""#, id));
		labeled.push(content);
		labeled
	};
	cell.wrap("div", r#"class="form-field""#)
}

fn group_class(kind: FieldKind) -> &'static str {
	match kind {
		FieldKind::NestedRecord => "nested-record",
		FieldKind::ListOfRecord => "record-list-group",
		FieldKind::ListOfScalar => "value-list-group",
		_ => "mapping-group",
	}
}

/// Render a value of a known kind; composites recurse
fn render_value(
	kind: FieldKind,
	ty: &DeclaredType,
	value: &Value,
	constraints: &ConstraintRecord,
	path: &FieldPath,
	depth: usize,
	config: &RenderConfig,
) -> Fragment {
	match (kind, value) {
		(FieldKind::NestedRecord, Value::Record(record)) => nested_record(record, path, depth, config),
		(FieldKind::ListOfRecord, Value::List(items)) => record_list(ty, items, path, depth, config),
		(FieldKind::ListOfScalar, Value::List(items)) => scalar_list(ty, items, path, config),
		(FieldKind::MappingStructured, Value::Map(entries)) => {
			structured_mapping(ty, entries, path, depth, config)
		}
		(FieldKind::MappingUnstructured, Value::Map(entries)) => unstructured_mapping(entries),
		// Null or mismatched values of composite kinds show as text
		(kind, value) if kind.is_composite() => Fragment::text(&value.to_string()),
		(kind, value) => {
			let element = build(kind, ty, value, constraints, config.editable(), path);
			decorate(element, kind, path, config)
		}
	}
}

fn depth_limited(path: &FieldPath, depth: usize, config: &RenderConfig, text: String) -> Option<Fragment> {
	if config.allows_depth(depth + 1) {
		return None;
	}
	tracing::debug!(
		field = %path,
		depth,
		max_depth = ?config.max_depth(),
		"Depth limit reached, rendering placeholder"
	);
	Some(Fragment::text(&text))
}

fn nested_record(record: &Record, path: &FieldPath, depth: usize, config: &RenderConfig) -> Fragment {
	if let Some(limited) = depth_limited(path, depth, config, format!("[Nested {}]", record.type_name())) {
		return limited;
	}
	render_record(record, path, depth + 1, config)
}

fn record_list(ty: &DeclaredType, items: &[Value], path: &FieldPath, depth: usize, config: &RenderConfig) -> Fragment {
	let type_name = element_type(ty)
		.and_then(DeclaredType::record_name)
		.unwrap_or("record");
	if let Some(limited) = depth_limited(path, depth, config, format!("[{} {} items]", items.len(), type_name)) {
		return limited;
	}

	let entries: Fragment = items
		.iter()
		.enumerate()
		.map(|(i, item)| {
			let content = match item {
				Value::Record(record) => render_record(record, &path.index(i), depth + 1, config),
				other => Fragment::text(&other.to_string()),
			};
			content.wrap("li", &format!(r#"class="record-item" data-index="{}""#, i))
		})
		.collect();
	entries.wrap("ol", r#"class="record-list""#)
}

/// Scalar lists don't count as a descent
fn scalar_list(ty: &DeclaredType, items: &[Value], path: &FieldPath, config: &RenderConfig) -> Fragment {
	let element_ty = element_type(ty).unwrap_or(&DeclaredType::Any);
	let element_kind = classify(element_ty);
	let editable = config.editable();
	let target = escape(&path.to_string());

	let entries: Fragment = items
		.iter()
		.enumerate()
		.map(|(i, item)| {
			let item_path = path.index(i);
			let element = build(element_kind, element_ty, item, &ConstraintRecord::none(), editable, &item_path);
			let mut entry = decorate(element, element_kind, &item_path, config);
			if editable {
				entry.push_str(&format!(
					r#"<button type="button" class="remove-item" data-action="remove" data-target="{}">Remove</button>"#,
					escape(&item_path.to_string())
				));
			}
			entry.wrap("li", r#"class="list-item""#)
		})
		.collect();

	let mut list = entries.wrap("ul", r#"class="value-list""#);
	if editable {
		list.push_str(&format!(
			r#"<button type="button" class="add-item" data-action="add" data-target="{}">Add</button>"#,
			target
		));
	}
	list
}

fn structured_mapping(
	ty: &DeclaredType,
	entries: &IndexMap<String, Value>,
	path: &FieldPath,
	depth: usize,
	config: &RenderConfig,
) -> Fragment {
	if let Some(limited) = depth_limited(path, depth, config, format!("[{} entries]", entries.len())) {
		return limited;
	}

	let value_ty = match ty.unwrap_optional() {
		DeclaredType::Map(_, value_ty) => value_ty.as_ref(),
		_ => &DeclaredType::Any,
	};
	let value_kind = classify(value_ty);

	let rows: Fragment = entries
		.iter()
		.map(|(key, value)| {
			let entry_path = path.key(key);
			let content = match value {
				Value::Record(record) => render_record(record, &entry_path, depth + 1, config),
				value => render_value(
					value_kind,
					value_ty,
					value,
					&ConstraintRecord::none(),
					&entry_path,
					depth + 1,
					config,
				),
			};
			let mut row = Fragment::text(key).wrap("th", r#"class="mapping-key""#);
			row.push(content.wrap("td", r#"class="mapping-value""#));
			row.wrap("tr", "")
		})
		.collect();
	rows.wrap("table", r#"class="model-mapping""#)
}

fn unstructured_mapping(entries: &IndexMap<String, Value>) -> Fragment {
	let items: Fragment = entries
		.iter()
		.map(|(key, value)| {
			Fragment::text(&format!("{}: {}", key, placeholder(value))).wrap("li", r#"class="mapping-entry""#)
		})
		.collect();
	items.wrap("ul", r#"class="mapping-entries""#)
}

fn element_type(ty: &DeclaredType) -> Option<&DeclaredType> {
	match ty.unwrap_optional() {
		DeclaredType::List(element) => Some(element.as_ref()),
		_ => None,
	}
}
