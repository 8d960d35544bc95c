//! Shared inputs for the cross-crate tests.

/// Sample systems as a user would type them, with their exact solutions.
pub mod systems {
    /// A system that needs no row swaps.
    pub const CLASSIC_MATRIX: &str = "3 2 -1\n2 -2 4\n-1 0.5 -1";
    pub const CLASSIC_VECTOR: &str = "1 -2 0";
    pub const CLASSIC_SOLUTION: [f64; 3] = [1.0, -2.0, -2.0];

    /// A system whose first column is zero on the diagonal, typed with commas.
    pub const PIVOTING_MATRIX: &str = "0, 2, 1\n1, -2, -3\n-1, 1, 2";
    pub const PIVOTING_VECTOR: &str = "-8, 0, 3";
    pub const PIVOTING_SOLUTION: [f64; 3] = [-4.0, -5.0, 2.0];

    /// Two parallel lines.
    pub const SINGULAR_MATRIX: &str = "1 2\n2 4";
    pub const SINGULAR_VECTOR: &str = "3 6";
}

/// Expressions as a user would type them, with a bracket and the root inside it.
pub mod equations {
    pub struct Equation {
        pub source: &'static str,
        pub bracket: [f64; 2],
        pub root: f64,
    }

    pub const CUBIC: Equation = Equation {
        source: "x**3 - x - 2",
        bracket: [1.0, 2.0],
        root: 1.521_379_706_804_567_4,
    };

    pub const KEPLER: Equation = Equation {
        source: "x - 0.5*sin(x) - 1",
        bracket: [0.0, 3.0],
        root: 1.498_701_133_517_848_2,
    };

    pub const DOTTIE: Equation = Equation {
        source: "np.cos(x) - x",
        bracket: [0.0, 1.0],
        root: 0.739_085_133_215_160_6,
    };

    pub const ALL: [Equation; 3] = [CUBIC, KEPLER, DOTTIE];
}
