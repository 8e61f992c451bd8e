//! Token, keyword and node kinds of the declaration syntax tree.
//!
//! The lexer only ever produces token kinds; keyword kinds are assigned when
//! the parser remaps an `Ident`, and node kinds come from the grammar.

use logos::Logos;
use rowan::Language;

/// Token kinds first (they must fit a `TokenSet`), then contextual keywords,
/// then nodes. `__LAST` bounds the discriminant range.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    /// `<`. Shifts (`<<`) are lexed as two tokens.
    #[token("<")]
    LAngle,

    /// `>`. Lexed singly so nested generics (`A<B<C>>`) close one level at a time.
    #[token(">")]
    RAngle,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("...")]
    DotDotDot,

    #[token(".")]
    Dot,

    #[token("?")]
    Question,

    #[token(":")]
    Colon,

    #[token("=>")]
    FatArrow,

    #[token("=")]
    Equals,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    #[token("!")]
    Bang,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret,

    #[token("~")]
    Tilde,

    #[token("@")]
    At,

    #[regex(r#""(?:[^"\\\n]|\\(?:.|\n))*""#)]
    #[regex(r"'(?:[^'\\\n]|\\(?:.|\n))*'")]
    StringLiteral,

    /// Whole template literal, substitutions included.
    #[regex(r"`(?:[^`\\]|\\(?:.|\n))*`")]
    TemplateLiteral,

    #[regex(r"[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9_]+)?n?")]
    #[regex(r"\.[0-9][0-9_]*(?:[eE][+-]?[0-9_]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+n?")]
    #[regex(r"0[bB][01_]+n?")]
    #[regex(r"0[oO][0-7_]+n?")]
    Number,

    #[regex(r"#[a-zA-Z_$][a-zA-Z0-9_$]*")]
    PrivateName,

    /// Identifier or keyword. Every keyword is contextual in declaration files,
    /// so the parser decides and remaps.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[ \t\x0C]+")]
    #[token("\u{FEFF}")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Contextual keywords (remapped from `Ident` by the parser) ---
    KwDeclare,
    KwExport,
    KwDefault,
    KwAbstract,
    KwVar,
    KwLet,
    KwConst,
    KwFunction,
    KwClass,
    KwInterface,
    KwType,
    KwEnum,
    KwNamespace,
    KwModule,
    KwGlobal,
    KwImport,
    KwFrom,
    KwAs,
    KwExtends,
    KwImplements,
    KwRequire,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    VariableStatement,
    VariableDeclarator,
    BindingPattern,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    EnumBody,
    EnumMember,
    ModuleDeclaration,
    ModuleBlock,
    ImportDeclaration,
    ImportClause,
    NamedImports,
    NamespaceImport,
    ImportSpecifier,
    ImportAttributes,
    ImportEquals,
    ModuleReference,
    ExportDeclaration,
    NamedExports,
    ExportAssignment,
    NamespaceExport,
    EmptyStatement,
    Name,
    TypeParameterList,
    TypeParameter,
    ParameterList,
    Parameter,
    TypeAnnotation,
    TypeExpr,
    HeritageClause,
    ClassBody,
    ObjectTypeBody,
    Initializer,

    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwDeclare as u16..=KwRequire as u16).contains(&(self as u16))
    }
}

/// Keyword kind for a word, if the word is one the parser may remap.
pub fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    let kind = match word {
        "declare" => KwDeclare,
        "export" => KwExport,
        "default" => KwDefault,
        "abstract" => KwAbstract,
        "var" => KwVar,
        "let" => KwLet,
        "const" => KwConst,
        "function" => KwFunction,
        "class" => KwClass,
        "interface" => KwInterface,
        "type" => KwType,
        "enum" => KwEnum,
        "namespace" => KwNamespace,
        "module" => KwModule,
        "global" => KwGlobal,
        "import" => KwImport,
        "from" => KwFrom,
        "as" => KwAs,
        "extends" => KwExtends,
        "implements" => KwImplements,
        "require" => KwRequire,
        _ => return None,
    };
    Some(kind)
}

impl SyntaxKind {
    /// Kind with discriminant `raw`, if there is one.
    pub fn from_raw(raw: u16) -> Option<Self> {
        if raw >= __LAST as u16 {
            return None;
        }
        // SAFETY: `SyntaxKind` is `repr(u16)` with contiguous discriminants below `__LAST`.
        Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DtsLang {}

impl Language for DtsLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        SyntaxKind::from_raw(raw.0).expect("green tree holds only kinds built by this parser")
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<DtsLang>;
pub type SyntaxToken = rowan::SyntaxToken<DtsLang>;

/// Set of token kinds, one bit per kind. Node kinds are never members.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Fails const evaluation if a kind does not fit in 64 bits.
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut set = Self::EMPTY;
        let mut rest = kinds;
        while let [kind, tail @ ..] = rest {
            assert!((*kind as u16) < 64, "token kind outside TokenSet range");
            set.0 |= 1 << (*kind as u16);
            rest = tail;
        }
        set
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let bit = kind as u16;
        bit < 64 && (self.0 >> bit) & 1 == 1
    }

    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    fn kinds(self) -> impl Iterator<Item = SyntaxKind> {
        (0..64u16)
            .filter(move |bit| (self.0 >> bit) & 1 == 1)
            .filter_map(SyntaxKind::from_raw)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// Token sets shared by grammar rules.
pub mod token_sets {
    use super::*;

    pub const OPENERS: TokenSet = TokenSet::new(&[ParenOpen, BracketOpen, BraceOpen]);
    pub const CLOSERS: TokenSet = TokenSet::new(&[ParenClose, BracketClose, BraceClose]);

    /// Ends a variable declarator's type annotation.
    pub const DECLARATOR_TYPE_END: TokenSet = TokenSet::new(&[Comma, Semicolon, Equals]);
    pub const DECLARATOR_INIT_END: TokenSet = TokenSet::new(&[Comma, Semicolon]);

    pub const PARAM_TYPE_END: TokenSet = TokenSet::new(&[Comma, Equals]);
    pub const LIST_ITEM_END: TokenSet = TokenSet::new(&[Comma]);

    pub const STATEMENT_END: TokenSet = TokenSet::new(&[Semicolon]);

    pub const HERITAGE_END: TokenSet = TokenSet::new(&[Comma, BraceOpen]);

    pub const TYPE_PARAM_CONSTRAINT_END: TokenSet = TokenSet::new(&[Comma, Equals]);

    pub const BINDING_START: TokenSet = TokenSet::new(&[Ident, BraceOpen, BracketOpen]);

    pub const ENUM_MEMBER_NAME: TokenSet =
        TokenSet::new(&[Ident, StringLiteral, Number, BracketOpen]);
}
