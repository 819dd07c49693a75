//! Parsed representations of catalog sources.

/// One entry of a `.po` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoEntry {
    /// Flags from `#,` comment lines (e.g. `fuzzy`, `python-format`).
    pub flags: Vec<String>,
    pub context: Option<String>,
    pub id: String,
    pub id_plural: Option<String>,
    /// `msgstr` for singular entries, `msgstr[N]` in index order for plurals.
    pub translations: Vec<String>,
}

impl PoEntry {
    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|flag| flag == "fuzzy")
    }

    /// The header entry is the context-free empty msgid.
    pub fn is_header(&self) -> bool {
        self.context.is_none() && self.id.is_empty()
    }
}

/// One raw entry of a compiled `.mo` file.
///
/// `original` still carries the `\x04` context and `\0` plural separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoEntry {
    pub original: String,
    pub translation: String,
}

/// A compiled `Plural-Forms` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    pub nplurals: usize,
    pub expr: PluralExpr,
}

impl PluralForms {
    /// The rule gettext applies when a catalog declares none:
    /// `nplurals=2; plural=(n != 1);`.
    pub fn germanic() -> Self {
        PluralForms {
            nplurals: 2,
            expr: PluralExpr::Binary {
                op: BinaryOp::Ne,
                lhs: Box::new(PluralExpr::N),
                rhs: Box::new(PluralExpr::Literal(1)),
            },
        }
    }

    /// The plural form index for `n`, clamped to the declared form count.
    pub fn index(&self, n: u64) -> usize {
        let index = usize::try_from(self.expr.eval(n)).unwrap_or(usize::MAX);
        index.min(self.nplurals.saturating_sub(1))
    }
}

/// A C-style plural expression over the count `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluralExpr {
    N,
    Literal(u64),
    Not(Box<PluralExpr>),
    Binary {
        op: BinaryOp,
        lhs: Box<PluralExpr>,
        rhs: Box<PluralExpr>,
    },
    Conditional {
        condition: Box<PluralExpr>,
        then: Box<PluralExpr>,
        otherwise: Box<PluralExpr>,
    },
}

/// Binary operators allowed in plural expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl PluralExpr {
    /// Evaluate with C semantics: comparisons yield 0 or 1, division by zero
    /// yields 0, arithmetic wraps.
    pub fn eval(&self, n: u64) -> u64 {
        match self {
            PluralExpr::N => n,
            PluralExpr::Literal(value) => *value,
            PluralExpr::Not(inner) => u64::from(inner.eval(n) == 0),
            PluralExpr::Conditional {
                condition,
                then,
                otherwise,
            } => {
                if condition.eval(n) != 0 {
                    then.eval(n)
                } else {
                    otherwise.eval(n)
                }
            }
            PluralExpr::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(n);
                // Short-circuit before evaluating the right-hand side.
                match op {
                    BinaryOp::Or if lhs != 0 => return 1,
                    BinaryOp::And if lhs == 0 => return 0,
                    _ => {}
                }
                let rhs = rhs.eval(n);
                match op {
                    BinaryOp::Or | BinaryOp::And => u64::from(rhs != 0),
                    BinaryOp::Eq => u64::from(lhs == rhs),
                    BinaryOp::Ne => u64::from(lhs != rhs),
                    BinaryOp::Lt => u64::from(lhs < rhs),
                    BinaryOp::Le => u64::from(lhs <= rhs),
                    BinaryOp::Gt => u64::from(lhs > rhs),
                    BinaryOp::Ge => u64::from(lhs >= rhs),
                    BinaryOp::Add => lhs.wrapping_add(rhs),
                    BinaryOp::Sub => lhs.wrapping_sub(rhs),
                    BinaryOp::Mul => lhs.wrapping_mul(rhs),
                    BinaryOp::Div => lhs.checked_div(rhs).unwrap_or(0),
                    BinaryOp::Rem => lhs.checked_rem(rhs).unwrap_or(0),
                }
            }
        }
    }
}
