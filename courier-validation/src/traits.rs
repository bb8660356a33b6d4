// Accumulator trait

use crate::Violations;

/// Trait for entities that carry their own accumulated violations.
///
/// Implementors compute their violations once, when they are built, and
/// expose them read-only. Querying validity never changes the list.
pub trait Notifiable {
    /// The entity's violations, including those copied from nested entities
    fn violations(&self) -> &Violations;

    /// True iff no violation has been recorded
    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// True iff at least one violation has been recorded
    fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Violation messages in insertion order
    fn violation_messages(&self) -> Vec<String> {
        self.violations().messages()
    }
}

impl<T: Notifiable + ?Sized> Notifiable for &T {
    fn violations(&self) -> &Violations {
        (**self).violations()
    }
}

impl<T: Notifiable + ?Sized> Notifiable for Box<T> {
    fn violations(&self) -> &Violations {
        (**self).violations()
    }
}

impl Notifiable for Violations {
    fn violations(&self) -> &Violations {
        self
    }
}
