use crate::loc;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxNodeTag;
use smallvec::SmallVec;

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct SyntaxNodeId(pub(crate) usize);
impl SyntaxNodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    pub(crate) children: SmallVec<[SyntaxNodeId; 4]>,
    pub(crate) id: SyntaxNodeId,
    pub(crate) kind: SyntaxNodeKind,
    pub(crate) location: loc::SourceLocation,
    pub(crate) parent: Option<SyntaxNodeId>,
}
impl SyntaxNode {
    pub fn children(&self) -> &[SyntaxNodeId] {
        self.children.as_slice()
    }

    pub fn id(&self) -> SyntaxNodeId {
        self.id
    }

    pub fn kind(&self) -> &SyntaxNodeKind {
        &self.kind
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn parent(&self) -> Option<SyntaxNodeId> {
        self.parent
    }

    pub fn tag(&self) -> SyntaxNodeTag {
        self.kind.tag()
    }
}
