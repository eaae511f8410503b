//! The evaluable-function capability and its exmex adapter.
//!
//! The plane engine never inspects expression internals; it only calls
//! [`Function::eval`] once per grid column and [`Function::describe`] for the
//! header line. That seam keeps the rasterizer independent of the expression
//! evaluator and lets tests substitute counting or native doubles.

use exmex::prelude::*;

use crate::error::{Error, Result};

/// Upper bound on expression text length, in bytes.
pub const MAX_EXPR_LEN: usize = 256;

/// An evaluable single-variable real function.
pub trait Function {
    /// Evaluates the function at `x`.
    ///
    /// Domain errors surface as non-finite values (NaN or infinity), never
    /// as panics; the rasterizer skips such samples.
    fn eval(&self, x: f64) -> f64;

    /// Display text for the header line.
    fn describe(&self) -> String;
}

/// A compiled expression backed by exmex.
///
/// A single variable of any name is treated as the abscissa; a zero-variable
/// expression plots as a constant. Expressions with more than one distinct
/// variable are rejected at compile time so typos fail loudly instead of
/// silently evaluating to zero.
#[derive(Debug, Clone)]
pub struct ExprFunction {
    expr: FlatEx<f64>,
    arity: usize,
}

impl ExprFunction {
    /// Compiles expression text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExprTooLong`] when the text exceeds [`MAX_EXPR_LEN`]
    /// bytes and [`Error::Expr`] on parse failure or more than one variable.
    pub fn compile(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.len() > MAX_EXPR_LEN {
            return Err(Error::ExprTooLong { length: text.len(), max: MAX_EXPR_LEN });
        }

        let expr = exmex::parse::<f64>(text).map_err(|e| Error::Expr(e.to_string()))?;
        let arity = expr.var_names().len();
        if arity > 1 {
            return Err(Error::Expr(format!(
                "expected a single variable, found {arity}"
            )));
        }

        Ok(Self { expr, arity })
    }

    /// The symbolic derivative of this expression.
    ///
    /// The derivative of a constant is the constant zero. Compile the
    /// expression and its derivative together and install the pair only if
    /// both succeed; that gates the derivative-display toggle on the
    /// derivative actually existing.
    pub fn derivative(&self) -> Result<Self> {
        if self.arity == 0 {
            return Self::compile("0");
        }

        let expr = self.expr.clone().partial(0).map_err(|e| Error::Expr(e.to_string()))?;
        let arity = expr.var_names().len();
        Ok(Self { expr, arity })
    }
}

impl Function for ExprFunction {
    fn eval(&self, x: f64) -> f64 {
        let result = if self.arity == 0 { self.expr.eval(&[]) } else { self.expr.eval(&[x]) };
        result.unwrap_or(f64::NAN)
    }

    fn describe(&self) -> String {
        self.expr.unparse().to_string()
    }
}

/// A named native function, used as a fallback when no expression compiles
/// and as a test double behind the [`Function`] seam.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    f: fn(f64) -> f64,
}

impl Builtin {
    /// The sine function.
    #[must_use]
    pub fn sin() -> Self {
        Self { name: "sin(x)", f: f64::sin }
    }

    /// The cosine function.
    #[must_use]
    pub fn cos() -> Self {
        Self { name: "cos(x)", f: f64::cos }
    }
}

impl Function for Builtin {
    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn describe(&self) -> String {
        self.name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_and_eval() {
        let f = ExprFunction::compile("sin(x)").unwrap();
        assert!((f.eval(0.0) - 0.0).abs() < 1e-12);
        assert!((f.eval(std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compile_rejects_garbage() {
        assert!(matches!(ExprFunction::compile("sin(x"), Err(Error::Expr(_))));
        assert!(ExprFunction::compile("").is_err());
    }

    #[test]
    fn test_compile_rejects_two_variables() {
        let err = ExprFunction::compile("x + y").unwrap_err();
        assert!(matches!(err, Error::Expr(_)));
        assert!(err.to_string().contains("single variable"));
    }

    #[test]
    fn test_compile_any_variable_name_is_abscissa() {
        let f = ExprFunction::compile("t^2").unwrap();
        assert!((f.eval(3.0) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_compile_rejects_too_long() {
        let long = "x+".repeat(200);
        let err = ExprFunction::compile(&long).unwrap_err();
        assert!(matches!(err, Error::ExprTooLong { max: MAX_EXPR_LEN, .. }));
    }

    #[test]
    fn test_constant_expression() {
        let f = ExprFunction::compile("2").unwrap();
        assert!((f.eval(-100.0) - 2.0).abs() < 1e-12);
        assert!((f.eval(100.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_of_sin_is_cos() {
        let f = ExprFunction::compile("sin(x)").unwrap();
        let df = f.derivative().unwrap();
        for i in 0..10 {
            let x = f64::from(i) * 0.37;
            assert!((df.eval(x) - x.cos()).abs() < 1e-9, "df({x})");
        }
    }

    #[test]
    fn test_derivative_of_constant_is_zero() {
        let f = ExprFunction::compile("3").unwrap();
        let df = f.derivative().unwrap();
        assert!((df.eval(5.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_domain_error_is_non_finite() {
        let f = ExprFunction::compile("sqrt(x)").unwrap();
        assert!(f.eval(-1.0).is_nan());

        let g = ExprFunction::compile("1/x").unwrap();
        assert!(!g.eval(0.0).is_finite());
    }

    #[test]
    fn test_describe_round_trips_text() {
        let f = ExprFunction::compile("sin(x)").unwrap();
        assert!(f.describe().contains("sin"));
    }

    #[test]
    fn test_builtin_sin() {
        let f = Builtin::sin();
        assert!((f.eval(0.0) - 0.0).abs() < 1e-12);
        assert_eq!(f.describe(), "sin(x)");
    }
}
