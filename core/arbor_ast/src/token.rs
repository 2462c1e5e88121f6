//! Modifier keyword tokens.
//!
//! [`ModifierToken`] is the leaf token node for declaration modifiers.
//! Its rendered text and token length are both derived from
//! [`Modifier::name`], the single source of truth for the keyword
//! spelling, so renderers cannot drift from the length the layout pass
//! sees.

use std::any::Any;
use std::fmt;

use arbor_freeze::{AsFreezable, Freezable, FreezeFlag, FreezeResult};

use crate::matching::{Match, Matchable};
use crate::span::Span;
use crate::traits::Spanned;

/// Declaration modifier keywords. A fixed, closed set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// Every modifier, in canonical declaration order.
    pub const ALL: [Modifier; 12] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Abstract,
        Modifier::Default,
        Modifier::Static,
        Modifier::Final,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Synchronized,
        Modifier::Native,
        Modifier::Strictfp,
    ];

    /// The keyword spelling. Single source of truth for both rendered
    /// text and token length.
    pub const fn name(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Leaf token node for a single declaration modifier.
///
/// The modifier value is mutable only while the token is unfrozen; the
/// start location is fixed at construction. No structural-change hook
/// fires at this granularity (the token is a leaf, not a container).
pub struct ModifierToken {
    start: u32,
    modifier: Modifier,
    frozen: FreezeFlag,
}

impl ModifierToken {
    /// Create an unfrozen token at `start`.
    pub const fn new(start: u32, modifier: Modifier) -> Self {
        ModifierToken {
            start,
            modifier,
            frozen: FreezeFlag::new(),
        }
    }

    /// Create a token with a dummy location, for generated trees.
    pub const fn dummy(modifier: Modifier) -> Self {
        Self::new(0, modifier)
    }

    /// The current modifier value.
    #[inline]
    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Replace the modifier value.
    ///
    /// Errors with [`arbor_freeze::FreezeError::Frozen`] once the token
    /// is frozen; otherwise the new value is immediately observable.
    pub fn set_modifier(&mut self, modifier: Modifier) -> FreezeResult {
        self.frozen.verify_unfrozen()?;
        self.modifier = modifier;
        Ok(())
    }

    /// The rendered keyword text.
    #[inline]
    pub const fn text(&self) -> &'static str {
        self.modifier.name()
    }

    /// Length of the rendered keyword in bytes.
    // Keyword spellings are short ASCII constants.
    #[expect(clippy::cast_possible_truncation)]
    #[inline]
    pub fn token_length(&self) -> u32 {
        self.modifier.name().len() as u32
    }
}

impl Spanned for ModifierToken {
    fn span(&self) -> Span {
        Span::new(self.start, self.start + self.token_length())
    }
}

impl Freezable for ModifierToken {
    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen.is_frozen()
    }

    fn freeze(&mut self) -> FreezeResult {
        self.frozen.engage()
    }
}

impl AsFreezable for ModifierToken {
    #[inline]
    fn as_freezable(&mut self) -> Option<&mut dyn Freezable> {
        Some(self)
    }
}

impl Matchable for ModifierToken {
    /// Leaf equality: true iff `other` is also a modifier token with an
    /// identical modifier value. Records no bindings.
    fn matches<'t>(&self, other: &'t dyn Matchable, _m: &mut Match<'t>) -> bool {
        other
            .as_any()
            .downcast_ref::<ModifierToken>()
            .is_some_and(|token| token.modifier == self.modifier)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for ModifierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl fmt::Debug for ModifierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.text(), self.span())
    }
}
