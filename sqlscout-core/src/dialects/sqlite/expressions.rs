//! SQL expression fragments for SQLite.
//!
//! Operands are already-quoted column references or SQL literals supplied
//! by the scan engine. Where SQLite has no native operator the fragment is
//! a documented approximation and a warning is emitted through `tracing`
//! so scan output can be read accordingly.

use crate::dialects::NumericTextFormat;
use crate::dialects::helpers::escape_string_literal;

/// Pattern match rendered as `LIKE`.
///
/// Stock SQLite has no `REGEXP` operator (it is only available through an
/// extension), so the pattern is applied with LIKE semantics: callers
/// supply LIKE wildcards, not a regular expression.
pub fn regexp_like(expr: &str, pattern: &str) -> String {
    tracing::warn!(
        "regexp match is not natively supported by SQLite, falling back to LIKE semantics"
    );
    format!("{} LIKE '{}'", expr, escape_string_literal(pattern))
}

/// Variance rendered as the population-variance identity
/// `E[X^2] - E[X]^2`.
///
/// SQLite has no `VARIANCE` aggregate. The identity is numerically less
/// stable than a native implementation and computes the population rather
/// than the sample variance.
pub fn variance(expr: &str) -> String {
    tracing::warn!("variance is not natively supported by SQLite, emitting an approximation");
    format!("AVG({e} * {e}) - AVG({e}) * AVG({e})", e = expr)
}

/// Standard deviation rendered as the square root of the variance
/// approximation. Requires SQLite built with the math functions
/// (the default for bundled builds since 3.35).
pub fn stddev(expr: &str) -> String {
    tracing::warn!(
        "standard deviation is not natively supported by SQLite, emitting an approximation"
    );
    format!("SQRT(AVG({e} * {e}) - AVG({e}) * AVG({e}))", e = expr)
}

/// Cast of a text column to a numeric value.
///
/// `REAL` is the widest numeric affinity SQLite offers, so all formats
/// cast to it. Comma decimal separators are rewritten to points first;
/// stray non-numeric characters are not stripped (that would need the
/// regexp extension) and make the cast yield 0.0, SQLite's behavior for
/// unparseable text.
pub fn cast_text_to_number(quoted_column: &str, format: NumericTextFormat) -> String {
    match format {
        NumericTextFormat::Whole | NumericTextFormat::DecimalPoint => {
            format!("CAST({} AS REAL)", quoted_column)
        }
        NumericTextFormat::DecimalComma => {
            format!("CAST(REPLACE({}, ',', '.') AS REAL)", quoted_column)
        }
    }
}
