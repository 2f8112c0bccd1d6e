use crate::document::Document;
use crate::document::PartData;
use crate::document::PartId;
use std::collections::HashSet;

/// One `$name` reference reachable from an operation.
#[derive(Debug)]
pub(super) struct VariableUsage {
    /// `false` when the reference is inside a fragment reached through a
    /// spread rather than written in the operation itself.
    pub(super) lexical: bool,
    pub(super) name: String,
    pub(super) value_id: PartId,
}

/// Every variable reference an operation makes, both directly and through
/// (transitively) spread fragments. Each fragment is only searched once.
/// References inside variable default values are not usages.
pub(super) fn operation_variable_usages(doc: &Document<'_>, op_id: PartId) -> Vec<VariableUsage> {
    let mut usages = vec![];
    let mut fragments = vec![];
    collect_usages(doc, op_id, true, &mut usages, &mut fragments);

    let mut searched = HashSet::new();
    let mut idx = 0;
    while idx < fragments.len() {
        let frag_id = fragments[idx];
        idx += 1;
        if searched.insert(frag_id) {
            collect_usages(doc, frag_id, false, &mut usages, &mut fragments);
        }
    }

    usages
}

fn collect_usages(
    doc: &Document<'_>,
    root: PartId,
    lexical: bool,
    usages: &mut Vec<VariableUsage>,
    fragments: &mut Vec<PartId>,
) {
    let mut stack: Vec<PartId> = doc.part(root).children().iter().rev().copied().collect();
    while let Some(part_id) = stack.pop() {
        let part = doc.part(part_id);
        match part.data() {
            PartData::Variable(_) => continue,

            PartData::FragmentSpread(spread) => {
                if let Some(frag_id) = spread.fragment() {
                    fragments.push(frag_id);
                }
            },

            PartData::InputValue(value) => {
                if let Some(name) = value.variable_name() {
                    usages.push(VariableUsage {
                        lexical,
                        name: name.to_string(),
                        value_id: part_id,
                    });
                }
            },

            _ => (),
        }
        stack.extend(part.children().iter().rev().copied());
    }
}
