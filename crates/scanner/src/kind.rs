//! External token kinds and the per-call set of kinds the grammar accepts.

use std::fmt;

/// A token kind the external scanner can emit.
///
/// The discriminants are the indices of the grammar's `externals` list, so the order of the
/// variants must not change.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::IntoStaticStr, strum::EnumIter, strum::EnumCount)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum TokenKind {
    /// Free-form content of a line inside a multi-line section.
    ExternalLine,
    /// Zero-width marker before the `[` of a recognized section header.
    HeaderStart,
    /// Subject of a `[Key...]` header.
    KeySuffix,
    /// Subject of a `[Preset...]` header.
    PresetSuffix,
    /// Subject of a `[Resource...]` header.
    ResourceSuffix,
    /// Subject of an `[Include...]` header. The only suffix that may be empty.
    IncludeSuffix,
    /// Subject of a command-list style header, e.g. `[ShaderOverride...]` or `[CommandList...]`.
    CommandListSuffix,
    /// `[ShaderRegex...]` without a recognized dotted suffix.
    RegexCommandList,
    /// `[ShaderRegex....InsertDeclarations]`.
    RegexInsertDeclarations,
    /// `[ShaderRegex....Pattern]`.
    RegexPattern,
    /// `[ShaderRegex....Pattern.Replace]`.
    RegexPatternReplace,
    /// The `\` opening a namespace path.
    NamespaceStart,
    /// The text between the opening and closing `\` of a namespace path.
    NamespaceContent,
    /// The `\` closing a namespace path.
    NamespaceEnd,
    /// A run of whitespace containing at least one newline, or the end of input.
    LineBoundary,
    /// Never emitted. Valid only while the grammar is recovering from an error.
    ErrorSentinel,
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenKind {
    /// All kinds, in symbol index order.
    pub const ALL: [Self; 16] = [
        Self::ExternalLine,
        Self::HeaderStart,
        Self::KeySuffix,
        Self::PresetSuffix,
        Self::ResourceSuffix,
        Self::IncludeSuffix,
        Self::CommandListSuffix,
        Self::RegexCommandList,
        Self::RegexInsertDeclarations,
        Self::RegexPattern,
        Self::RegexPatternReplace,
        Self::NamespaceStart,
        Self::NamespaceContent,
        Self::NamespaceEnd,
        Self::LineBoundary,
        Self::ErrorSentinel,
    ];

    /// The suffixed-header kinds, in the order the dispatcher prefers them.
    pub const SUFFIXED: [Self; 5] = [
        Self::KeySuffix,
        Self::PresetSuffix,
        Self::ResourceSuffix,
        Self::IncludeSuffix,
        Self::CommandListSuffix,
    ];

    /// Returns the kind with the given symbol index.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() { Some(Self::ALL[index]) } else { None }
    }

    /// Returns the symbol index of this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the grammar's name for this kind, e.g. `namespace_content`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

bitflags::bitflags! {
    /// The set of token kinds the grammar accepts at the current parse state.
    ///
    /// Bit `i` corresponds to [`TokenKind`] with index `i`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValidKinds: u16 {
        const EXTERNAL_LINE             = 1 << 0;
        const HEADER_START              = 1 << 1;
        const KEY_SUFFIX                = 1 << 2;
        const PRESET_SUFFIX             = 1 << 3;
        const RESOURCE_SUFFIX           = 1 << 4;
        const INCLUDE_SUFFIX            = 1 << 5;
        const COMMAND_LIST_SUFFIX       = 1 << 6;
        const REGEX_COMMAND_LIST        = 1 << 7;
        const REGEX_INSERT_DECLARATIONS = 1 << 8;
        const REGEX_PATTERN             = 1 << 9;
        const REGEX_PATTERN_REPLACE     = 1 << 10;
        const NAMESPACE_START           = 1 << 11;
        const NAMESPACE_CONTENT         = 1 << 12;
        const NAMESPACE_END             = 1 << 13;
        const LINE_BOUNDARY             = 1 << 14;
        const ERROR_SENTINEL            = 1 << 15;

        /// Kinds handled by the line / section-header scanner.
        const LINE = Self::EXTERNAL_LINE.bits() | Self::HEADER_START.bits();
        /// Kinds handled by the suffixed-header scanner.
        const SUFFIXED = Self::KEY_SUFFIX.bits()
            | Self::PRESET_SUFFIX.bits()
            | Self::RESOURCE_SUFFIX.bits()
            | Self::INCLUDE_SUFFIX.bits()
            | Self::COMMAND_LIST_SUFFIX.bits();
        /// Kinds handled by the regex-suffix scanner.
        const REGEX = Self::REGEX_COMMAND_LIST.bits()
            | Self::REGEX_INSERT_DECLARATIONS.bits()
            | Self::REGEX_PATTERN.bits()
            | Self::REGEX_PATTERN_REPLACE.bits();
        /// Kinds handled by the namespace-path scanner.
        const NAMESPACE = Self::NAMESPACE_START.bits()
            | Self::NAMESPACE_CONTENT.bits()
            | Self::NAMESPACE_END.bits();
    }
}

impl ValidKinds {
    /// Returns the set containing only `kind`.
    #[inline]
    pub const fn of(kind: TokenKind) -> Self {
        Self::from_bits_retain(1 << kind as u8)
    }

    /// Builds a set from the host's `valid_symbols` array.
    ///
    /// Entries past the last known kind are ignored; missing entries count as `false`.
    pub fn from_symbols(symbols: &[bool]) -> Self {
        symbols
            .iter()
            .enumerate()
            .filter(|&(_, &valid)| valid)
            .filter_map(|(i, _)| TokenKind::from_index(i))
            .collect()
    }

    /// Returns `true` if `kind` is in the set.
    #[inline]
    pub const fn has(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Returns an iterator over the kinds in the set, in symbol index order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |&kind| self.has(kind))
    }
}

impl From<TokenKind> for ValidKinds {
    #[inline]
    fn from(kind: TokenKind) -> Self {
        Self::of(kind)
    }
}

impl FromIterator<TokenKind> for ValidKinds {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, kind| set | Self::of(kind))
    }
}

impl fmt::Debug for ValidKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}
