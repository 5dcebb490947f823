use crate::{Scene, SceneFilter, effective_duration};
use scene_syntax::{Atom, ComparisonOp, Conjunction, Disjunction, NumericField, Predicate, TextField};

impl SceneFilter {
    pub(crate) fn evaluate_disjunction(&self, disjunction: &Disjunction, scene: &Scene) -> bool {
        let any = disjunction
            .branches
            .iter()
            .any(|branch| self.evaluate_conjunction(branch, scene));
        any != disjunction.negated
    }

    fn evaluate_conjunction(&self, conjunction: &Conjunction, scene: &Scene) -> bool {
        conjunction
            .atoms
            .iter()
            .all(|atom| self.evaluate_atom(atom, scene))
            && conjunction
                .groups
                .iter()
                .all(|group| self.evaluate_disjunction(group, scene))
    }

    fn evaluate_atom(&self, atom: &Atom, scene: &Scene) -> bool {
        self.evaluate_predicate(&atom.predicate, scene) != atom.negated
    }

    // In case-insensitive mode both the compiled query and `scene` are
    // already lowercased, see `SceneFilter::matches`.
    fn evaluate_predicate(&self, predicate: &Predicate, scene: &Scene) -> bool {
        match predicate {
            Predicate::AlwaysTrue => true,
            Predicate::Tag(tag) => scene.tags.contains(tag.as_str()),
            Predicate::PartialTag(fragment) => {
                scene.tags.iter().any(|tag| tag.contains(fragment.as_str()))
            }
            Predicate::Substring { field, needle } => evaluate_substring(*field, needle, scene),
            Predicate::Compare {
                field, op, value, ..
            } => evaluate_comparison(*field, *op, *value, scene),
        }
    }
}

fn evaluate_substring(field: TextField, needle: &str, scene: &Scene) -> bool {
    match field {
        TextField::Actor => scene
            .actors
            .as_deref()
            .is_some_and(|actors| actors.contains(needle)),
        TextField::Website => scene
            .website
            .as_deref()
            .is_some_and(|website| website.contains(needle)),
        TextField::File => scene.file_name.contains(needle) || scene.directory.contains(needle),
    }
}

fn evaluate_comparison(field: NumericField, op: ComparisonOp, value: f64, scene: &Scene) -> bool {
    let actual = match field {
        NumericField::NumGirls => scene.num_girls.into(),
        NumericField::NumBoys => scene.num_boys.into(),
        NumericField::Score => scene.score.into(),
        NumericField::Length => effective_duration(scene) as f64,
        NumericField::Year => match scene.year {
            Some(year) => year.into(),
            None => return false,
        },
    };
    op.compare(actual, value)
}
