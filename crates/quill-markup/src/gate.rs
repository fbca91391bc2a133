//! Single-slot conditional append gate.

use crate::error::MarkupError;

/// State of the `when` / `otherwise` / `end_when` block.
///
/// Blocks do not nest: there is exactly one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Gate {
    #[default]
    Inactive,
    Active(bool),
}

impl Gate {
    pub(crate) fn enter(&mut self, condition: bool) -> Result<(), MarkupError> {
        match self {
            Self::Inactive => {
                *self = Self::Active(condition);
                Ok(())
            }
            Self::Active(_) => Err(MarkupError::NestedCondition),
        }
    }

    pub(crate) fn invert(&mut self) -> Result<(), MarkupError> {
        match self {
            Self::Active(condition) => {
                *condition = !*condition;
                Ok(())
            }
            Self::Inactive => Err(MarkupError::OtherwiseWithoutWhen),
        }
    }

    pub(crate) fn exit(&mut self) -> Result<(), MarkupError> {
        match self {
            Self::Active(_) => {
                *self = Self::Inactive;
                Ok(())
            }
            Self::Inactive => Err(MarkupError::EndWithoutWhen),
        }
    }

    /// Whether appends currently reach the buffer.
    pub(crate) fn allows(self) -> bool {
        match self {
            Self::Inactive => true,
            Self::Active(condition) => condition,
        }
    }

    pub(crate) fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }
}
