//! Block kinds, their serialization shapes, and rendering payloads.
//!
//! ## Design: BlockKind + FragmentShape
//!
//! `BlockKind` is what a user drags out of the catalog. Everything that
//! depends on the kind (catalog tag, default payload, whether it can hold
//! children, how it serializes) is an exhaustive `match` here, so adding a
//! kind makes the compiler point at every strategy it must declare.
//!
//! `FragmentShape` is the serializer's view of a kind: the markup element it
//! becomes and whether its inner content is a payload or nested children.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// What a block *is*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum BlockKind {
    /// Page header, semantic `<header>`.
    Header,
    /// Page footer, semantic `<footer>`.
    Footer,
    /// Eye-catching banner, a generic block.
    Banner,
    /// Structural container. The only kind that holds children.
    Section,
}

impl BlockKind {
    /// Every kind, in catalog order.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Header,
        BlockKind::Footer,
        BlockKind::Banner,
        BlockKind::Section,
    ];

    /// Parse from a catalog tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Catalog tag. Also the originating catalog id of every instance of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Footer => "footer",
            BlockKind::Banner => "banner",
            BlockKind::Section => "section",
        }
    }

    /// Human-facing label shown in the catalog.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Header => "Header",
            BlockKind::Footer => "Footer",
            BlockKind::Banner => "Banner",
            BlockKind::Section => "Section",
        }
    }

    /// Payload a freshly placed instance carries.
    pub fn default_payload(&self) -> Payload {
        match self {
            BlockKind::Header | BlockKind::Footer | BlockKind::Banner => {
                Payload::Text(self.label().to_string())
            }
            BlockKind::Section => Payload::Empty,
        }
    }

    /// How this kind serializes to markup.
    pub fn shape(&self) -> FragmentShape {
        match self {
            BlockKind::Header => FragmentShape::SemanticHeader,
            BlockKind::Footer => FragmentShape::SemanticFooter,
            BlockKind::Banner => FragmentShape::Block,
            BlockKind::Section => FragmentShape::Container,
        }
    }

    /// Whether drops may land inside an instance of this kind.
    pub fn is_container(&self) -> bool {
        matches!(self, BlockKind::Section)
    }

    /// Whether at most one instance of this kind may sit directly under one parent.
    ///
    /// The once-per-parent rule deliberately covers leaf kinds only. Sections
    /// are exempt: each one is a fresh container with its own id, so two side
    /// by side are distinct drop targets rather than a duplicate.
    pub fn is_unique_per_parent(&self) -> bool {
        !self.is_container()
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Markup shape of a serialized node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentShape {
    /// `<header>` around the payload.
    SemanticHeader,
    /// `<footer>` around the payload.
    SemanticFooter,
    /// `<div>` around the payload.
    Block,
    /// `<section>` around the serialized children.
    Container,
}

impl FragmentShape {
    /// Element name emitted for this shape.
    pub fn element(&self) -> &'static str {
        match self {
            FragmentShape::SemanticHeader => "header",
            FragmentShape::SemanticFooter => "footer",
            FragmentShape::Block => "div",
            FragmentShape::Container => "section",
        }
    }

    /// Whether the inner content is nested children rather than the payload.
    pub fn wraps_children(&self) -> bool {
        matches!(self, FragmentShape::Container)
    }
}

/// Kind-specific rendering data.
///
/// Opaque to the tree and the placement resolver; only renderers and the
/// serializer look inside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Payload {
    /// Plain text. Escaped when serialized.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Markup(String),
    /// Nothing to render.
    #[default]
    Empty,
}

impl Payload {
    /// Check if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Text(s) | Payload::Markup(s) => s.is_empty(),
            Payload::Empty => true,
        }
    }

    /// Raw textual content, unescaped.
    pub fn as_str(&self) -> &str {
        match self {
            Payload::Text(s) | Payload::Markup(s) => s,
            Payload::Empty => "",
        }
    }
}
