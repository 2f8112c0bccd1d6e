use crate::document::Document;
use crate::document::PartData;
use crate::document::PartId;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStage;
use crate::rules::ValidationStep;
use crate::validation::ValidationContext;
use indexmap::IndexMap;
use std::collections::HashSet;

/// <https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness>
#[derive(Debug)]
pub struct FragmentNameUniqueness;
impl ValidationStep for FragmentNameUniqueness {
    fn name(&self) -> &'static str {
        "fragment-name-uniqueness"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let duplicates: Vec<_> =
            doc.all_named_fragments().iter()
                .filter_map(|frag_id| {
                    let frag_part = doc.part(*frag_id);
                    let name = frag_part.unwrap_named_fragment().name();
                    let first_id = doc.named_fragments().get(name)?;
                    (first_id != frag_id).then(|| (
                        frag_part.path().to_string(),
                        GraphQLMessage::critical(
                            &RuleReference::FRAGMENT_NAME_UNIQUENESS,
                            format!("There can be only one fragment named `{name}`"),
                            frag_part.location().to_owned(),
                        ),
                    ))
                })
                .collect();

        for (frag_path, message) in duplicates {
            ctx.report_once(format!("5.5.1.1|{frag_path}|"), message);
        }
    }
}

/// <https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles>
#[derive(Debug)]
pub struct FragmentSpreadsMustNotFormCycles;
impl FragmentSpreadsMustNotFormCycles {
    /// Depth-first walk over fragment spreads. Each fragment is explored at
    /// most once across the whole document; a spread of a fragment that is
    /// still on `path` closes a cycle.
    fn check_fragment_cycles(
        spread_targets: &IndexMap<&str, Vec<&str>>,
        fragment_name: &str,
        path: &mut Vec<String>,
        explored: &mut HashSet<String>,
        cycles: &mut Vec<Vec<String>>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if let Some(cycle_start) = path.iter().position(|name| name == fragment_name) {
            let mut cycle = path[cycle_start..].to_vec();
            cycle.push(fragment_name.to_string());

            // A fragment that spreads the same target twice closes the same
            // cycle twice.
            if seen_normalized.insert(Self::normalize_cycle(&cycle)) {
                cycles.push(cycle);
            }
            return;
        }

        if !explored.insert(fragment_name.to_string()) {
            return;
        }
        let Some(targets) = spread_targets.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        for target in targets {
            Self::check_fragment_cycles(
                spread_targets,
                target,
                path,
                explored,
                cycles,
                seen_normalized,
            );
        }
        path.pop();
    }

    /// Rotates `[B, C, A, B]` to `[A, B, C, A]` so that every phase of a
    /// cycle normalizes to the same sequence.
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        if cycle.is_empty() {
            return Vec::new();
        }

        let cycle_without_repeat = &cycle[..cycle.len() - 1];
        let min_idx =
            cycle_without_repeat.iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.cmp(b))
                .map(|(idx, _)| idx)
                .unwrap_or(0);

        let mut normalized = Vec::with_capacity(cycle.len());
        normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
        normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
        if let Some(first) = normalized.first().cloned() {
            normalized.push(first);
        }
        normalized
    }

    /// Names of the fragments spread anywhere within each named fragment.
    fn spread_targets<'doc>(doc: &'doc Document<'_>) -> IndexMap<&'doc str, Vec<&'doc str>> {
        doc.named_fragments().iter()
            .map(|(name, frag_id)| {
                let targets =
                    doc.descendants(*frag_id).into_iter()
                        .filter_map(|id| doc.part(id).as_fragment_spread())
                        .map(|spread| spread.fragment_name())
                        .collect();
                (name.as_str(), targets)
            })
            .collect()
    }
}
impl ValidationStep for FragmentSpreadsMustNotFormCycles {
    fn name(&self) -> &'static str {
        "fragment-spreads-must-not-form-cycles"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let spread_targets = Self::spread_targets(doc);

        let mut cycles = vec![];
        let mut explored = HashSet::new();
        let mut seen_normalized = HashSet::new();
        for fragment_name in spread_targets.keys() {
            Self::check_fragment_cycles(
                &spread_targets,
                fragment_name,
                &mut vec![],
                &mut explored,
                &mut cycles,
                &mut seen_normalized,
            );
        }

        let messages: Vec<_> =
            cycles.into_iter()
                .filter_map(|cycle| {
                    let frag_id = doc.named_fragments().get(cycle.first()?.as_str())?;
                    let frag_part = doc.part(*frag_id);
                    Some((
                        format!("5.5.2.2|{}|", cycle.join(" -> ")),
                        GraphQLMessage::critical(
                            &RuleReference::FRAGMENT_SPREADS_ACYCLIC,
                            format!(
                                "Fragment spreads must not form cycles: {}",
                                cycle.iter()
                                    .map(|name| format!("...{name}"))
                                    .collect::<Vec<_>>()
                                    .join(" -> "),
                            ),
                            frag_part.location().to_owned(),
                        ),
                    ))
                })
                .collect();

        for (key, message) in messages {
            ctx.report_once(key, message);
        }
    }
}

/// Runs after the whole part tree has been visited, once every spread has
/// had a chance to mark its target fragment as referenced.
///
/// Only the first fragment declared with a given name is checked; later
/// duplicates are reported by [`FragmentNameUniqueness`].
///
/// <https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used>
#[derive(Debug)]
pub struct FragmentsMustBeUsed;
impl ValidationStep for FragmentsMustBeUsed {
    fn name(&self) -> &'static str {
        "fragments-must-be-used"
    }

    fn stage(&self) -> ValidationStage {
        ValidationStage::AfterChildren
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let messages: Vec<_> =
            doc.named_fragments().values()
                .map(|frag_id| doc.part(*frag_id))
                .filter(|frag_part| !frag_part.unwrap_named_fragment().is_referenced())
                .map(|frag_part| (
                    format!("5.5.1.4|{}|", frag_part.path()),
                    GraphQLMessage::critical(
                        &RuleReference::FRAGMENT_USED,
                        format!(
                            "Fragment `{}` is never used",
                            frag_part.unwrap_named_fragment().name(),
                        ),
                        frag_part.location().to_owned(),
                    ),
                ))
                .collect();

        for (key, message) in messages {
            ctx.report_once(key, message);
        }
    }
}

/// Also marks the target fragment as referenced.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined>
#[derive(Debug)]
pub struct FragmentSpreadTargetDefined;
impl ValidationStep for FragmentSpreadTargetDefined {
    fn name(&self) -> &'static str {
        "fragment-spread-target-defined"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let spread_part = ctx.part();
        let spread = spread_part.unwrap_fragment_spread();
        match spread.fragment() {
            Some(frag_id) => {
                ctx.document_mut()
                    .part_mut(frag_id)
                    .unwrap_named_fragment_mut()
                    .is_referenced = true;
            },

            None => {
                let message = GraphQLMessage::critical(
                    &RuleReference::FRAGMENT_SPREAD_TARGET_DEFINED,
                    format!("Unknown fragment `{}`", spread.fragment_name()),
                    spread_part.location().to_owned(),
                );
                ctx.add_message(message);
            },
        }
    }
}

/// A fragment may only be spread (or inlined) where some object type could
/// satisfy both the enclosing selection set's type and the fragment's type
/// condition.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible>
#[derive(Debug)]
pub struct FragmentSpreadIsPossible;
impl ValidationStep for FragmentSpreadIsPossible {
    fn name(&self) -> &'static str {
        "fragment-spread-is-possible"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let schema = ctx.schema();
        let part = ctx.part();

        let (fragment_type_name, label) = match part.data() {
            PartData::FragmentSpread(spread) => {
                let Some(frag_id) = spread.fragment() else {
                    return;
                };
                (
                    doc.part(frag_id).unwrap_named_fragment().type_condition(),
                    format!("Fragment `{}`", spread.fragment_name()),
                )
            },

            PartData::InlineFragment(inline) => {
                let Some(type_condition) = inline.type_condition() else {
                    return;
                };
                (type_condition, "Inline fragment".to_string())
            },

            other => panic!(
                "FragmentSpreadIsPossible registered against {} part {}",
                other.kind(),
                part.id(),
            ),
        };

        let Some(parent_type_name) =
            part.parent()
                .and_then(|set_id| doc.part(set_id).as_selection_set())
                .and_then(|set| set.owner_type_name())
        else {
            return;
        };
        if schema.lookup_type(fragment_type_name).is_none_or(|t| !t.is_composite_type()) {
            return;
        }

        let parent_possible: HashSet<&str> =
            schema.possible_type_names(parent_type_name).into_iter().collect();
        let is_possible =
            schema.possible_type_names(fragment_type_name).into_iter()
                .any(|type_name| parent_possible.contains(type_name));
        if is_possible {
            return;
        }

        let message = GraphQLMessage::critical(
            &RuleReference::FRAGMENT_SPREAD_POSSIBLE,
            format!(
                "{label} cannot be spread here as objects of type \
                `{parent_type_name}` can never be of type `{fragment_type_name}`",
            ),
            part.location().to_owned(),
        );
        ctx.add_message(message);
    }
}
