//! Integration tests for courier-validation

use courier_validation::*;

struct Leaf {
    violations: Violations,
}

impl Leaf {
    fn new(name: Option<&str>) -> Self {
        let mut violations = Violations::new();
        violations
            .check(NotEmpty::check(name, "leaf name is required"))
            .check(MaxLength(4).check(name, |n| format!("leaf name is {} long", n)));
        Self { violations }
    }
}

impl Notifiable for Leaf {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

struct Branch {
    leaves: Vec<Leaf>,
    violations: Violations,
}

impl Branch {
    fn new(leaves: Vec<Leaf>) -> Self {
        let mut violations = Violations::new();
        violations.check(MaxItems(2).check(leaves.len(), |n| format!("{} leaves", n)));
        violations.merge_all(&leaves);
        Self { leaves, violations }
    }
}

impl Notifiable for Branch {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

#[test]
fn test_every_broken_rule_is_recorded() {
    let branch = Branch::new(vec![Leaf::new(None), Leaf::new(Some("toolong")), Leaf::new(Some("ok"))]);

    assert_eq!(
        branch.violation_messages(),
        vec!["3 leaves", "leaf name is required", "leaf name is 7 long"]
    );
}

#[test]
fn test_children_stay_queryable_after_merge() {
    let branch = Branch::new(vec![Leaf::new(None)]);

    assert!(branch.is_invalid());
    assert!(branch.leaves[0].is_invalid());
    assert_eq!(branch.leaves[0].violations().len(), 1);
}

#[test]
fn test_valid_tree() {
    let branch = Branch::new(vec![Leaf::new(Some("a")), Leaf::new(Some("b"))]);
    assert!(branch.is_valid());
    assert!(branch.violation_messages().is_empty());
}

#[test]
fn test_violation_display() {
    let violation = Violation::new("too many").with_context("limit", 2);
    assert_eq!(violation.to_string(), "too many");
}
