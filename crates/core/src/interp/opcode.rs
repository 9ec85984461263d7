//! Primitive opcodes of the PostScript calculator dialect.

/// Instruction tag of an [`Operation`](super::operation::Operation).
///
/// `Proc` and `Const` are structural markers: they tag operations that wrap a
/// nested procedure or a numeric literal and have no entry in the name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Idiv,
    Mod,
    Neg,
    Abs,
    Ceiling,
    Floor,
    Round,
    Truncate,
    Sqrt,
    Sin,
    Cos,
    Atan,
    Exp,
    Ln,
    Log,
    Cvi,
    Cvr,

    // Relational
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,

    // Boolean and bitwise
    And,
    Or,
    Xor,
    Not,
    Bitshift,
    True,
    False,

    // Conditionals
    If,
    IfElse,

    // Stack
    Pop,
    Exch,
    Dup,
    Copy,
    Index,
    Roll,

    // Structural
    Proc,
    Const,
}

/// Operator names sorted by byte order, for binary search.
const OPCODE_NAMES: [(&str, Opcode); 42] = [
    ("abs", Opcode::Abs),
    ("add", Opcode::Add),
    ("and", Opcode::And),
    ("atan", Opcode::Atan),
    ("bitshift", Opcode::Bitshift),
    ("ceiling", Opcode::Ceiling),
    ("copy", Opcode::Copy),
    ("cos", Opcode::Cos),
    ("cvi", Opcode::Cvi),
    ("cvr", Opcode::Cvr),
    ("div", Opcode::Div),
    ("dup", Opcode::Dup),
    ("eq", Opcode::Eq),
    ("exch", Opcode::Exch),
    ("exp", Opcode::Exp),
    ("false", Opcode::False),
    ("floor", Opcode::Floor),
    ("ge", Opcode::Ge),
    ("gt", Opcode::Gt),
    ("idiv", Opcode::Idiv),
    ("if", Opcode::If),
    ("ifelse", Opcode::IfElse),
    ("index", Opcode::Index),
    ("le", Opcode::Le),
    ("ln", Opcode::Ln),
    ("log", Opcode::Log),
    ("lt", Opcode::Lt),
    ("mod", Opcode::Mod),
    ("mul", Opcode::Mul),
    ("ne", Opcode::Ne),
    ("neg", Opcode::Neg),
    ("not", Opcode::Not),
    ("or", Opcode::Or),
    ("pop", Opcode::Pop),
    ("roll", Opcode::Roll),
    ("round", Opcode::Round),
    ("sin", Opcode::Sin),
    ("sqrt", Opcode::Sqrt),
    ("sub", Opcode::Sub),
    ("true", Opcode::True),
    ("truncate", Opcode::Truncate),
    ("xor", Opcode::Xor),
];

impl Opcode {
    /// Every primitive opcode, in name-table order.
    pub const ALL: [Opcode; 42] = {
        let mut all = [Opcode::Abs; 42];
        let mut i = 0;
        while i < OPCODE_NAMES.len() {
            all[i] = OPCODE_NAMES[i].1;
            i += 1;
        }
        all
    };

    /// Looks up a primitive opcode by its exact (case-sensitive) name.
    pub fn from_name(word: &[u8]) -> Option<Self> {
        OPCODE_NAMES
            .binary_search_by(|(name, _)| name.as_bytes().cmp(word))
            .ok()
            .map(|i| OPCODE_NAMES[i].1)
    }

    /// Returns the operator name, or a bracketed marker for structural tags.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Proc => "<proc>",
            Opcode::Const => "<const>",
            op => OPCODE_NAMES
                .iter()
                .find(|(_, o)| *o == op)
                .map_or("<unknown>", |(name, _)| name),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_table_sorted() {
        for pair in OPCODE_NAMES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Opcode::from_name(b"add"), Some(Opcode::Add));
        assert_eq!(Opcode::from_name(b"ADD"), None);
        assert_eq!(Opcode::from_name(b"Add"), None);
        assert_eq!(Opcode::from_name(b""), None);
    }

    #[test]
    fn test_structural_markers_unnamed() {
        assert_eq!(Opcode::from_name(b"proc"), None);
        assert_eq!(Opcode::from_name(b"const"), None);
        assert_eq!(Opcode::Proc.name(), "<proc>");
        assert_eq!(Opcode::Const.name(), "<const>");
        assert_eq!(Opcode::IfElse.name(), "ifelse");
    }
}
