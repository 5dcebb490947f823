//! Renders compiled trees back into query syntax. Atoms are printed before
//! groups inside a conjunction, and a tag spelled `or` is wrapped as `(or)`
//! so it cannot be read back as the separator. The output matches the same
//! scenes as the input but is not always the same tree.

use crate::{Atom, ComparisonOp, Conjunction, Disjunction, Predicate, Query, OR_KEYWORD};
use std::fmt;

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

impl fmt::Display for Disjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!(")?;
        }
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                write!(f, " {OR_KEYWORD}")?;
            }
            write!(f, "{branch}")?;
        }
        if self.negated {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut separate = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                f.write_str(" ")
            }
        };
        for atom in &self.atoms {
            separate(f)?;
            write!(f, "{atom}")?;
        }
        for group in &self.groups {
            separate(f)?;
            if group.negated {
                write!(f, "{group}")?;
            } else {
                write!(f, "({group})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        match &self.predicate {
            // Only a following `(`, `)` or the end of input keeps `or` a tag.
            Predicate::Tag(tag) if tag.as_str() == OR_KEYWORD.trim_end() => write!(f, "({tag})"),
            predicate => predicate.fmt(f),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::AlwaysTrue => f.write_str("^"),
            Predicate::Tag(tag) => f.write_str(tag),
            Predicate::PartialTag(fragment) => write!(f, "^{fragment}"),
            Predicate::Substring { field, needle } => write!(f, "{}:{needle}", field.keyword()),
            Predicate::Compare { field, op, raw, .. } => write!(f, "{}{op}{raw}", field.keyword()),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
