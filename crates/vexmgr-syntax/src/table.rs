//! Static VEX vocabulary used for whole-word token matching.

/// The static vocabulary of the snippet language.
///
/// Three ordered sets of literal identifiers, read-only at runtime.
/// Matching is exact and case-sensitive; the highlighter wraps each set in
/// a word-boundary alternation, so no partial or prefix matches occur.
#[derive(Debug, Clone, Copy)]
pub struct TokenTable {
    pub keywords: &'static [&'static str],
    pub data_types: &'static [&'static str],
    pub builtin_functions: &'static [&'static str],
}

impl TokenTable {
    /// The built-in table for VEX.
    pub fn vex() -> Self {
        Self {
            keywords: VEX_KEYWORDS,
            data_types: VEX_DATA_TYPES,
            builtin_functions: VEX_FUNCTIONS,
        }
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::vex()
    }
}

const VEX_KEYWORDS: &[&str] = &[
    "break",
    "const",
    "continue",
    "do",
    "else",
    "export",
    "for",
    "foreach",
    "forpoints",
    "function",
    "gather",
    "if",
    "illuminance",
    "import",
    "return",
    "struct",
    "typedef",
    "while",
];

const VEX_DATA_TYPES: &[&str] = &[
    "bsdf",
    "dict",
    "float",
    "int",
    "matrix",
    "matrix2",
    "matrix3",
    "string",
    "vector",
    "vector2",
    "vector4",
    "void",
];

const VEX_FUNCTIONS: &[&str] = &[
    "abs",
    "addpoint",
    "addprim",
    "addvertex",
    "atan",
    "atan2",
    "avg",
    "ceil",
    "ch",
    "chf",
    "chi",
    "chramp",
    "chs",
    "chv",
    "clamp",
    "cos",
    "cross",
    "degrees",
    "detail",
    "determinant",
    "distance",
    "dot",
    "exp",
    "fit",
    "fit01",
    "fit10",
    "floor",
    "frac",
    "getbbox_center",
    "getbbox_size",
    "ident",
    "intersect",
    "invert",
    "length",
    "length2",
    "lerp",
    "log",
    "log10",
    "max",
    "min",
    "nearpoint",
    "nearpoints",
    "noise",
    "normalize",
    "npoints",
    "nprimitives",
    "pcfind",
    "pcimport",
    "pcopen",
    "point",
    "pow",
    "prim",
    "primuv",
    "printf",
    "quaternion",
    "radians",
    "rand",
    "random",
    "relbbox",
    "removepoint",
    "removeprim",
    "rint",
    "rotate",
    "set",
    "setdetailattrib",
    "setpointattrib",
    "setpointgroup",
    "setprimattrib",
    "sin",
    "smooth",
    "sprintf",
    "sqrt",
    "tan",
    "translate",
    "vertex",
    "volumegradient",
    "volumesample",
    "xyzdist",
];
