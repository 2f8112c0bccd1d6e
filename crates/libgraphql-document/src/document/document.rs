use crate::document::DocumentPart;
use crate::document::FieldSelectionSet;
use crate::document::InputValue;
use crate::document::InputValueKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::PartKind;
use crate::loc;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

/// The typed, validated model of an executable GraphQL document.
///
/// Every part lives in a single append-only arena and refers to other parts
/// by [`PartId`]. The root part (always [`Document::root()`]) is the
/// [`PartKind::Document`] part.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'schema> {
    pub(crate) all_named_fragments: Vec<PartId>,
    pub(crate) all_operations: Vec<PartId>,
    pub(crate) max_depth: usize,
    pub(crate) named_fragments: IndexMap<String, PartId>,
    pub(crate) operations: IndexMap<String, PartId>,
    pub(crate) parts: Vec<DocumentPart<'schema>>,
    path_counts: HashMap<String, usize>,
}
impl<'schema> Document<'schema> {
    /// Adds a new part beneath `parent` and links it into whichever typed
    /// slot of the parent it belongs in (selection set, argument list, etc).
    pub(crate) fn add_part(
        &mut self,
        parent: PartId,
        location: loc::SourceLocation,
        data: PartData<'schema>,
    ) -> PartId {
        let segment = match (&self.parts[parent.0].data, &data) {
            (PartData::InputValue(InputValue { kind: InputValueKind::List(items), .. }), _) =>
                format!("[{}]", items.len()),
            (_, data) => data.path_segment(),
        };
        self.add_part_impl(parent, segment, location, data)
    }

    /// Adds an input value as the field named `field_name` of the complex
    /// (input object) value `parent`.
    pub(crate) fn add_object_field_value(
        &mut self,
        parent: PartId,
        field_name: &str,
        location: loc::SourceLocation,
        value: InputValue,
    ) -> PartId {
        let id = self.add_part_impl(
            parent,
            format!(".{field_name}"),
            location,
            PartData::InputValue(value),
        );
        if let PartData::InputValue(InputValue { kind: InputValueKind::Complex(fields), .. }) =
            &mut self.parts[parent.0].data {
            fields.entry(field_name.to_string()).or_insert(id);
        }
        id
    }

    fn add_part_impl(
        &mut self,
        parent: PartId,
        segment: String,
        location: loc::SourceLocation,
        data: PartData<'schema>,
    ) -> PartId {
        let id = PartId(self.parts.len());
        let base_path = format!("{}/{}", self.parts[parent.0].path, segment);
        let count = self.path_counts.entry(base_path.to_owned()).or_insert(0);
        let path =
            if *count == 0 {
                base_path
            } else {
                format!("{base_path}[{count}]")
            };
        *count += 1;

        self.link_to_parent(parent, id, &data);
        self.parts[parent.0].children.push(id);
        self.parts.push(DocumentPart {
            children: vec![],
            data,
            id,
            location,
            parent: Some(parent),
            path,
        });
        id
    }

    fn link_to_parent(&mut self, parent: PartId, id: PartId, data: &PartData<'schema>) {
        let parent_part = &mut self.parts[parent.0];
        match (&mut parent_part.data, data) {
            (PartData::Document, PartData::Operation(op)) => {
                let name = op.name.to_owned().unwrap_or_default();
                self.operations.entry(name).or_insert(id);
                self.all_operations.push(id);
            },

            (PartData::Document, PartData::NamedFragment(fragment)) => {
                self.named_fragments.entry(fragment.name.to_owned()).or_insert(id);
                self.all_named_fragments.push(id);
            },

            (PartData::Operation(op), PartData::Variable(var)) => {
                op.variables.entry(var.name.to_owned()).or_insert(id);
            },

            (PartData::Operation(op), PartData::SelectionSet(_)) =>
                { op.selection_set.get_or_insert(id); },
            (PartData::NamedFragment(fragment), PartData::SelectionSet(_)) =>
                { fragment.selection_set.get_or_insert(id); },
            (PartData::InlineFragment(inline), PartData::SelectionSet(_)) =>
                { inline.selection_set.get_or_insert(id); },
            (PartData::FieldSelection(field), PartData::SelectionSet(_)) =>
                { field.selection_set.get_or_insert(id); },

            (PartData::Operation(op), PartData::Directive(_)) =>
                op.directives.push(id),
            (PartData::NamedFragment(fragment), PartData::Directive(_)) =>
                fragment.directives.push(id),
            (PartData::InlineFragment(inline), PartData::Directive(_)) =>
                inline.directives.push(id),
            (PartData::FragmentSpread(spread), PartData::Directive(_)) =>
                spread.directives.push(id),
            (PartData::FieldSelection(field), PartData::Directive(_)) =>
                field.directives.push(id),

            (PartData::FieldSelection(field), PartData::Argument(_)) =>
                field.arguments.push(id),
            (PartData::Directive(directive), PartData::Argument(_)) =>
                directive.arguments.push(id),

            (PartData::SelectionSet(set), PartData::FieldSelection(_))
            | (PartData::SelectionSet(set), PartData::FragmentSpread(_))
            | (PartData::SelectionSet(set), PartData::InlineFragment(_)) =>
                set.selections.push(id),

            (PartData::Argument(arg), PartData::InputValue(_)) =>
                { arg.value.get_or_insert(id); },
            (PartData::Variable(var), PartData::InputValue(_)) =>
                { var.default_value.get_or_insert(id); },
            (PartData::InputValue(InputValue { kind: InputValueKind::List(items), .. }), PartData::InputValue(_)) =>
                items.push(id),

            _ => (),
        }
    }

    /// Every operation in the document in source order, including those
    /// whose name duplicates an earlier operation's.
    pub fn all_operations(&self) -> &[PartId] {
        self.all_operations.as_slice()
    }

    /// Every named fragment in the document in source order, including
    /// those whose name duplicates an earlier fragment's.
    pub fn all_named_fragments(&self) -> &[PartId] {
        self.all_named_fragments.as_slice()
    }

    /// Flattens the selection set `set_id` into the ordered list of field
    /// selections an executor would run.
    ///
    /// Direct field selections appear in source order. Inline fragments and
    /// fragment spreads contribute their own (recursively flattened) fields
    /// at the position where they appear. Each named fragment is flattened
    /// at most once per collection: a later spread of a fragment that was
    /// already flattened contributes nothing, so every [`PartId`] appears at
    /// most once.
    ///
    /// <https://spec.graphql.org/October2021/#CollectFields()>
    pub fn collect_executable_fields(&self, set_id: PartId) -> Vec<PartId> {
        let mut fields = vec![];
        let mut visited_fragments = HashSet::new();
        self.collect_executable_fields_impl(set_id, &mut visited_fragments, &mut fields);
        fields
    }

    fn collect_executable_fields_impl(
        &self,
        set_id: PartId,
        visited_fragments: &mut HashSet<PartId>,
        fields: &mut Vec<PartId>,
    ) {
        let Some(set) = self.parts[set_id.0].as_selection_set() else {
            return;
        };
        for selection_id in set.selections.iter().copied() {
            match &self.parts[selection_id.0].data {
                PartData::FieldSelection(_) => fields.push(selection_id),

                PartData::InlineFragment(inline) => {
                    if let Some(inner_set_id) = inline.selection_set {
                        self.collect_executable_fields_impl(
                            inner_set_id,
                            visited_fragments,
                            fields,
                        );
                    }
                },

                PartData::FragmentSpread(spread) => {
                    let Some(fragment_id) = spread.fragment else {
                        continue;
                    };
                    let Some(inner_set_id) =
                        self.parts[fragment_id.0].as_named_fragment()
                            .and_then(|fragment| fragment.selection_set)
                    else {
                        continue;
                    };
                    if !visited_fragments.insert(fragment_id) {
                        continue;
                    }
                    self.collect_executable_fields_impl(
                        inner_set_id,
                        visited_fragments,
                        fields,
                    );
                },

                _ => (),
            }
        }
    }

    /// Every part beneath `id` (excluding `id` itself), in pre-order.
    pub fn descendants(&self, id: PartId) -> Vec<PartId> {
        let mut descendants = vec![];
        let mut stack: Vec<PartId> = self.parts[id.0].children.iter().rev().copied().collect();
        while let Some(part_id) = stack.pop() {
            descendants.push(part_id);
            stack.extend(self.parts[part_id.0].children.iter().rev().copied());
        }
        descendants
    }

    /// The cached result of [`Document::collect_executable_fields()`] for
    /// `set_id`, as computed once fragment spreads were resolved.
    pub fn executable_fields(&self, set_id: PartId) -> &[PartId] {
        self.parts[set_id.0].as_selection_set()
            .map(|set| set.executable_fields.as_slice())
            .unwrap_or(&[])
    }

    /// Computes the document's max depth. Called once, after validation.
    pub(crate) fn finalize(&mut self) {
        let mut fragment_depths = HashMap::new();
        self.max_depth =
            self.all_operations.iter()
                .filter_map(|op_id| self.parts[op_id.0].unwrap_operation().selection_set)
                .map(|set_id| self.selection_set_depth(
                    set_id,
                    &mut HashSet::new(),
                    &mut fragment_depths,
                ))
                .max()
                .unwrap_or(0);
    }

    /// Resolves every fragment spread to the first named fragment declared
    /// with its target name, then caches each selection set's executable
    /// fields. Spreads may appear before the fragment they target, so this
    /// runs once construction has seen the whole document.
    pub(crate) fn link_fragment_spreads(&mut self) {
        for part in self.parts.iter_mut() {
            if let PartData::FragmentSpread(spread) = &mut part.data {
                spread.fragment =
                    self.named_fragments.get(spread.fragment_name.as_str()).copied();
            }
        }

        let set_ids: Vec<PartId> =
            self.parts.iter()
                .filter(|part| part.kind() == PartKind::SelectionSet)
                .map(|part| part.id)
                .collect();
        for set_id in set_ids {
            let fields = self.collect_executable_fields(set_id);
            self.parts[set_id.0].unwrap_selection_set_mut().executable_fields = fields;
        }
    }

    /// The greatest field-nesting depth across all operations. Fields
    /// reached through fragment spreads and inline fragments count at the
    /// depth of the spread/fragment itself.
    ///
    /// `{ a { b } }` has a max depth of 2.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Named fragments keyed by name. When a name is declared more than
    /// once, the first declaration wins.
    pub fn named_fragments(&self) -> &IndexMap<String, PartId> {
        &self.named_fragments
    }

    pub(crate) fn new() -> Self {
        Self {
            all_named_fragments: vec![],
            all_operations: vec![],
            max_depth: 0,
            named_fragments: IndexMap::new(),
            operations: IndexMap::new(),
            parts: vec![DocumentPart {
                children: vec![],
                data: PartData::Document,
                id: PartId(0),
                location: loc::SourceLocation::Unknown,
                parent: None,
                path: String::new(),
            }],
            path_counts: HashMap::new(),
        }
    }

    /// Operations keyed by name (the empty string for an anonymous
    /// operation). When a name is used more than once, the first operation
    /// wins.
    pub fn operations(&self) -> &IndexMap<String, PartId> {
        &self.operations
    }

    /// Panics if `id` did not come from this document.
    pub fn part(&self, id: PartId) -> &DocumentPart<'schema> {
        &self.parts[id.0]
    }

    pub(crate) fn part_mut(&mut self, id: PartId) -> &mut DocumentPart<'schema> {
        &mut self.parts[id.0]
    }

    pub fn parts(&self) -> impl Iterator<Item = &DocumentPart<'schema>> {
        self.parts.iter()
    }

    pub fn root(&self) -> PartId {
        PartId(0)
    }

    /// Convenience accessor for the [`FieldSelectionSet`] data of `id`.
    pub fn selection_set(&self, id: PartId) -> &FieldSelectionSet {
        self.parts[id.0].unwrap_selection_set()
    }

    /// `fragment_depths` memoizes the depth of each fragment's selection set
    /// so that a fragment spread many times is only walked once.
    fn selection_set_depth(
        &self,
        set_id: PartId,
        visiting_fragments: &mut HashSet<PartId>,
        fragment_depths: &mut HashMap<PartId, usize>,
    ) -> usize {
        let Some(set) = self.parts[set_id.0].as_selection_set() else {
            return 0;
        };

        let mut depth = 0;
        for selection_id in set.selections.iter().copied() {
            let selection_depth = match &self.parts[selection_id.0].data {
                PartData::FieldSelection(field) => {
                    1 + field.selection_set
                        .map(|inner| self.selection_set_depth(
                            inner,
                            visiting_fragments,
                            fragment_depths,
                        ))
                        .unwrap_or(0)
                },

                PartData::InlineFragment(inline) => {
                    inline.selection_set
                        .map(|inner| self.selection_set_depth(
                            inner,
                            visiting_fragments,
                            fragment_depths,
                        ))
                        .unwrap_or(0)
                },

                PartData::FragmentSpread(spread) => {
                    let inner =
                        spread.fragment
                            .and_then(|frag_id| {
                                self.parts[frag_id.0].as_named_fragment()
                                    .and_then(|fragment| fragment.selection_set)
                                    .map(|inner| (frag_id, inner))
                            });
                    match inner {
                        Some((frag_id, _)) if fragment_depths.contains_key(&frag_id) =>
                            fragment_depths[&frag_id],
                        Some((frag_id, inner)) if visiting_fragments.insert(frag_id) => {
                            let depth = self.selection_set_depth(
                                inner,
                                visiting_fragments,
                                fragment_depths,
                            );
                            visiting_fragments.remove(&frag_id);
                            fragment_depths.insert(frag_id, depth);
                            depth
                        },
                        _ => 0,
                    }
                },

                _ => 0,
            };
            depth = depth.max(selection_depth);
        }
        depth
    }
}
