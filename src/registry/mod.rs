//! Element registry: the immutable catalogue of operators, functions,
//! constants and punctuation known to the engine.
//!
//! Every pipeline stage consults the registry: the tokenizer for
//! maximal-munch matching, the postfix builder for precedence and
//! associativity, the evaluator for the semantic closures. The registry is
//! built once per evaluator and never mutated afterwards.

pub(crate) mod builtins;

use crate::core::context::EvalContext;
use crate::core::error::EvalError;
use bigdecimal::BigDecimal;
use rustc_hash::FxHashMap;

/// Semantic closure of a unary (prefix or postfix) operator or function.
pub(crate) type UnaryFn = fn(&BigDecimal, &EvalContext) -> Result<BigDecimal, EvalError>;
/// Semantic closure of a binary operator.
pub(crate) type BinaryFn =
    fn(&BigDecimal, &BigDecimal, &EvalContext) -> Result<BigDecimal, EvalError>;
/// Semantic closure of a registered function; receives `arity` arguments.
pub(crate) type FunctionFn = fn(&[BigDecimal], &EvalContext) -> Result<BigDecimal, EvalError>;
/// Semantic closure of a three-argument function; the third argument is the
/// raw selector string.
pub(crate) type SelectorFn =
    fn(&BigDecimal, &BigDecimal, &str, &EvalContext) -> Result<BigDecimal, EvalError>;
/// Supplier of a constant value at the context precision.
pub(crate) type ConstantFn = fn(&EvalContext) -> BigDecimal;

/// How consecutive operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Associativity {
    Left,
    Right,
}

/// One registry entry; each variant carries its canonical symbol and
/// semantics.
#[derive(Clone)]
pub(crate) enum Element {
    /// Infix binary operator.
    Binary {
        symbol: &'static str,
        precedence: u8,
        associativity: Associativity,
        apply: BinaryFn,
    },
    /// Prefix unary operator (`√`, the internal negation `#`).
    Prefix {
        symbol: &'static str,
        precedence: u8,
        apply: UnaryFn,
    },
    /// Postfix unary operator (`!`).
    Postfix {
        symbol: &'static str,
        precedence: u8,
        apply: UnaryFn,
    },
    /// Named function of one or two `;`-separated arguments.
    Function {
        symbol: &'static str,
        arity: usize,
        apply: FunctionFn,
    },
    /// Function taking a literal `(number;number;selector)` triple.
    ThreeArg {
        symbol: &'static str,
        apply: SelectorFn,
    },
    /// Named constant.
    Constant {
        symbol: &'static str,
        value: ConstantFn,
    },
    /// `(`
    LeftParen { symbol: &'static str },
    /// `)`
    RightParen { symbol: &'static str },
    /// Argument separator `;`.
    Separator { symbol: &'static str },
}

impl Element {
    /// Canonical symbol of this element.
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Element::Binary { symbol, .. }
            | Element::Prefix { symbol, .. }
            | Element::Postfix { symbol, .. }
            | Element::Function { symbol, .. }
            | Element::ThreeArg { symbol, .. }
            | Element::Constant { symbol, .. }
            | Element::LeftParen { symbol }
            | Element::RightParen { symbol }
            | Element::Separator { symbol } => symbol,
        }
    }

    /// Precedence and associativity when used as an operator. Prefix
    /// operators bind right, postfix operators left.
    pub(crate) fn priority(&self) -> Option<(u8, Associativity)> {
        match self {
            Element::Binary {
                precedence,
                associativity,
                ..
            } => Some((*precedence, *associativity)),
            Element::Prefix { precedence, .. } => Some((*precedence, Associativity::Right)),
            Element::Postfix { precedence, .. } => Some((*precedence, Associativity::Left)),
            _ => None,
        }
    }

    /// Whether this element is a postfix unary operator.
    pub(crate) fn is_postfix(&self) -> bool {
        matches!(self, Element::Postfix { .. })
    }
}

/// Symbol-to-element catalogue with precomputed scanning metadata.
pub(crate) struct Registry {
    elements: FxHashMap<&'static str, Element>,
    max_token_length: usize,
    three_arg_symbols: Vec<&'static str>,
}

impl Registry {
    /// Build the baseline catalogue (§ operators, functions, constants).
    pub(crate) fn standard() -> Self {
        Registry::from_elements(builtins::standard_elements())
    }

    fn from_elements(list: Vec<Element>) -> Self {
        let mut elements = FxHashMap::default();
        let mut max_token_length = 0;
        let mut three_arg_symbols: Vec<&'static str> = Vec::new();
        for element in list {
            let symbol = element.symbol();
            max_token_length = max_token_length.max(symbol.chars().count());
            if matches!(element, Element::ThreeArg { .. }) {
                three_arg_symbols.push(symbol);
            }
            elements.insert(symbol, element);
        }
        // longest first, for maximal-munch matching
        three_arg_symbols.sort_by_key(|symbol| std::cmp::Reverse(symbol.chars().count()));
        Registry {
            elements,
            max_token_length,
            three_arg_symbols,
        }
    }

    /// O(1) lookup by canonical symbol.
    pub(crate) fn find(&self, symbol: &str) -> Option<&Element> {
        self.elements.get(symbol)
    }

    /// Whether the symbol is registered.
    pub(crate) fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    /// Longest registered symbol, in characters.
    pub(crate) fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Three-argument function symbols, longest first.
    pub(crate) fn three_argument_candidates(&self) -> &[&'static str] {
        &self.three_arg_symbols
    }
}
