//! Line-drawing character sets and junction merging for text output.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set edges are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode { CharSet::Unicode } else { CharSet::Ascii }
    }
}

// ─── LineChars ───────────────────────────────────────────────────────────────

/// Characters for edge wiring between rows.
pub struct LineChars {
    pub horizontal: char,
    pub vertical: char,
    pub down_right: char, // ┌
    pub down_left: char,  // ┐
    pub up_right: char,   // └
    pub up_left: char,    // ┘
    pub tee_right: char,  // ├
    pub tee_left: char,   // ┤
    pub tee_down: char,   // ┬
    pub tee_up: char,     // ┴
    pub cross: char,
    pub arrow_down: char,
    /// Brackets drawn around the label of a defined name.
    pub variable_open: char,
    pub variable_close: char,
}

impl LineChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: '─',
            vertical: '│',
            down_right: '┌',
            down_left: '┐',
            up_right: '└',
            up_left: '┘',
            tee_right: '├',
            tee_left: '┤',
            tee_down: '┬',
            tee_up: '┴',
            cross: '┼',
            arrow_down: '▼',
            variable_open: '⟨',
            variable_close: '⟩',
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            down_right: '+',
            down_left: '+',
            up_right: '+',
            up_left: '+',
            tee_right: '+',
            tee_left: '+',
            tee_down: '+',
            tee_up: '+',
            cross: '+',
            arrow_down: 'v',
            variable_open: '[',
            variable_close: ']',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }
}

// ─── Junction ────────────────────────────────────────────────────────────────

/// Which arms of a wiring cell are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Junction {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Junction {
    pub const VERTICAL: Self = Self::new(true, true, false, false);
    pub const HORIZONTAL: Self = Self::new(false, false, true, true);

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// An arm pointing horizontally toward a column `dx` away (none for 0).
    pub const fn toward(dx: i64) -> Self {
        Self::new(false, false, dx < 0, dx > 0)
    }

    /// Decode a wiring character. Returns None for anything else.
    ///
    /// `+` decodes as a full cross; in ASCII every junction is drawn as `+`,
    /// so merging into one can only yield `+` again.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '─' | '-' => Some(Self::HORIZONTAL),
            '│' | '|' => Some(Self::VERTICAL),
            '┌' => Some(Self::new(false, true, false, true)),
            '┐' => Some(Self::new(false, true, true, false)),
            '└' => Some(Self::new(true, false, false, true)),
            '┘' => Some(Self::new(true, false, true, false)),
            '├' => Some(Self::new(true, true, false, true)),
            '┤' => Some(Self::new(true, true, true, false)),
            '┬' => Some(Self::new(false, true, true, true)),
            '┴' => Some(Self::new(true, false, true, true)),
            '┼' | '+' => Some(Self::new(true, true, true, true)),
            _ => None,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    pub fn to_char(self, cs: CharSet) -> char {
        let lc = LineChars::for_charset(cs);
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (false, false, true, true) => lc.horizontal,
            (true, true, false, false) => lc.vertical,
            (false, true, false, true) => lc.down_right,
            (false, true, true, false) => lc.down_left,
            (true, false, false, true) => lc.up_right,
            (true, false, true, false) => lc.up_left,
            (true, true, false, true) => lc.tee_right,
            (true, true, true, false) => lc.tee_left,
            (false, true, true, true) => lc.tee_down,
            (true, false, true, true) => lc.tee_up,
            (true, true, true, true) => lc.cross,
            (true, false, false, false) | (false, true, false, false) => lc.vertical,
            (false, false, true, false) | (false, false, false, true) => lc.horizontal,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
