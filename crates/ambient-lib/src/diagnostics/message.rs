use rowan::TextRange;

/// Syntax error kinds, most significant first.
///
/// Every kind is an error: a bundle that does not parse cleanly is never
/// classified. Declaration order decides which of two overlapping errors is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    UnclosedBrace,
    UnclosedParen,
    UnclosedBracket,
    UnclosedAngle,

    // missing tokens
    ExpectedDeclaration,
    ExpectedName,
    ExpectedType,
    ExpectedExpression,
    ExpectedModuleSpecifier,
    ExpectedSemicolon,

    // stray tokens
    InvalidCharacter,
    MismatchedDelimiter,
    UnexpectedToken,
}

impl DiagnosticKind {
    fn outranks(self, other: DiagnosticKind) -> bool {
        self < other
    }

    fn is_unclosed(self) -> bool {
        matches!(
            self,
            Self::UnclosedBrace | Self::UnclosedParen | Self::UnclosedBracket | Self::UnclosedAngle
        )
    }

    fn is_missing(self) -> bool {
        matches!(
            self,
            Self::ExpectedDeclaration
                | Self::ExpectedName
                | Self::ExpectedType
                | Self::ExpectedExpression
                | Self::ExpectedModuleSpecifier
                | Self::ExpectedSemicolon
        )
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedAngle => "missing closing `>`",

            Self::ExpectedDeclaration => "expected a declaration",
            Self::ExpectedName => "expected a name",
            Self::ExpectedType => "expected a type",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedModuleSpecifier => "expected a module specifier string",
            Self::ExpectedSemicolon => "expected `;`",

            Self::InvalidCharacter => "invalid character",
            Self::MismatchedDelimiter => "mismatched closing delimiter",
            Self::UnexpectedToken => "unexpected token",
        }
    }

    /// The message shown for this kind, with optional parser-supplied detail.
    pub fn message(&self, detail: Option<&str>) -> String {
        let base = self.fallback_message();
        match detail {
            None => base.to_string(),
            Some(detail) if *self == Self::MismatchedDelimiter => format!("{base} `{detail}`"),
            Some(detail) if self.is_unclosed() => format!("{base}; {detail}"),
            Some(detail) => format!("{base}: {detail}"),
        }
    }
}

/// Suggested edit: replace `range` with `replacement`. An empty range inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) range: TextRange,
    pub(crate) replacement: String,
    pub(crate) description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Defaults to `range`; the parser widens it
    /// to the enclosing block so errors inside an unclosed block stay quiet.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Suggested edit, if the parser knows one.
    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    /// Whether reporting `self` makes `other` redundant.
    pub(crate) fn explains(&self, other: &DiagnosticMessage) -> bool {
        let (outer, inner) = (self.suppression_range, other.range);
        if outer.start() < inner.start() && inner.end() <= outer.end() {
            return self.kind.outranks(other.kind);
        }
        if self.range.start() != other.range.start() {
            return false;
        }
        match (self.kind.is_missing(), other.kind.is_missing()) {
            (true, false) if other.kind.is_unclosed() => true,
            (false, true) if self.kind.is_unclosed() => false,
            _ => self.kind.outranks(other.kind),
        }
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
