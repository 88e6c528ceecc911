//! Named convenience diagnostics with fixed wording and default suggestions.
//!
//! Each of these is a thin message-formatting wrapper over the engine's
//! primitive `error*` / `warn*` operations: it fixes the message and hint
//! text but adds no control flow of its own, so quiet-mode and callback
//! semantics are inherited unchanged.

use crate::engine::DiagnosticEngine;
use veld_source::SourceLocation;

impl DiagnosticEngine {
    /// A call to a function that is not defined or imported.
    pub fn error_undefined_function(
        &mut self,
        loc: SourceLocation,
        func_name: &str,
        near: Option<&str>,
    ) {
        let msg = format!("Undefined function '{func_name}'");
        match near {
            Some(candidate) => {
                self.error_with_hint(loc, msg, format!("Did you mean '{candidate}'?"))
            }
            None => self.error_with_hint(loc, msg, "Check if the function is defined or imported"),
        }
    }

    /// A call with the wrong number of arguments.
    pub fn error_wrong_arg_count(
        &mut self,
        loc: SourceLocation,
        func_name: &str,
        expected: usize,
        got: usize,
    ) {
        let plural = if expected == 1 { "" } else { "s" };
        self.error_with_hint(
            loc,
            format!("Wrong number of arguments to function '{func_name}'"),
            format!("Expected {expected} argument{plural}, but got {got}"),
        );
    }

    /// An access to a field the struct does not declare.
    pub fn error_undefined_field(
        &mut self,
        loc: SourceLocation,
        struct_name: &str,
        field_name: &str,
        near: Option<&str>,
    ) {
        let msg = format!("Struct '{struct_name}' has no field '{field_name}'");
        match near {
            Some(candidate) => {
                self.error_with_hint(loc, msg, format!("Did you mean '{candidate}'?"))
            }
            None => self.error_with_hint(loc, msg, "Check the struct definition"),
        }
    }

    /// An expression whose type does not match the expected type.
    pub fn error_type_mismatch(&mut self, loc: SourceLocation, expected: &str, got: &str) {
        self.error_with_hint(
            loc,
            "Type mismatch",
            format!("Expected type '{expected}', but found '{got}'"),
        );
    }

    /// An indexing expression applied to a non-indexable type.
    pub fn error_cannot_index(&mut self, loc: SourceLocation, type_name: &str) {
        self.error_with_hint(
            loc,
            format!("Cannot index into type '{type_name}'"),
            "Only arrays and slices can be indexed",
        );
    }

    /// A local variable that is never read.
    pub fn warn_unused_variable(&mut self, loc: SourceLocation, var_name: &str) {
        self.warn_with_hint(
            loc,
            format!("Unused variable '{var_name}'"),
            "Consider removing it or prefixing with '_'",
        );
    }

    /// A parameter that is never read within its function.
    pub fn warn_unused_parameter(&mut self, loc: SourceLocation, param_name: &str, func_name: &str) {
        self.warn_with_hint(
            loc,
            format!("Unused parameter '{param_name}' in function '{func_name}'"),
            "Consider prefixing with '_' if intentionally unused",
        );
    }

    /// A declaration that shadows an earlier one.
    pub fn warn_shadowing(&mut self, loc: SourceLocation, var_name: &str) {
        self.warn_with_hint(
            loc,
            format!("Variable '{var_name}' shadows a previous declaration"),
            "This can lead to confusion",
        );
    }

    /// Code after an unconditional transfer of control.
    pub fn warn_unreachable_code(&mut self, loc: SourceLocation) {
        self.warn_with_hint(
            loc,
            "Unreachable code detected",
            "This code will never execute",
        );
    }

    /// A value converted between types without an explicit cast.
    pub fn warn_implicit_conversion(&mut self, loc: SourceLocation, from_type: &str, to_type: &str) {
        self.warn_with_hint(
            loc,
            format!("Implicit conversion from '{from_type}' to '{to_type}'"),
            "Consider using an explicit cast",
        );
    }

    /// A conversion to a type that cannot represent every source value.
    pub fn warn_narrowing_conversion(
        &mut self,
        loc: SourceLocation,
        from_type: &str,
        to_type: &str,
    ) {
        self.warn_with_hint(
            loc,
            format!("Narrowing conversion from '{from_type}' to '{to_type}'"),
            "This may cause data loss",
        );
    }

    /// A non-void function with a path that falls off the end.
    pub fn warn_missing_return(&mut self, loc: SourceLocation, func_name: &str) {
        self.warn_with_hint(
            loc,
            format!("Function '{func_name}' may not return a value in all paths"),
            "Add a return statement or make the function return 'void'",
        );
    }

    /// A comparison whose outcome is statically known to be true.
    pub fn warn_comparison_always_true(&mut self, loc: SourceLocation, reason: Option<&str>) {
        match reason {
            Some(reason) => self.warn_with_hint(loc, "Comparison is always true", reason),
            None => self.warn_at(loc, "Comparison is always true"),
        }
    }

    /// A comparison whose outcome is statically known to be false.
    pub fn warn_comparison_always_false(&mut self, loc: SourceLocation, reason: Option<&str>) {
        match reason {
            Some(reason) => self.warn_with_hint(loc, "Comparison is always false", reason),
            None => self.warn_at(loc, "Comparison is always false"),
        }
    }

    /// A constant division by zero.
    pub fn warn_division_by_zero(&mut self, loc: SourceLocation) {
        self.warn_with_hint(
            loc,
            "Division by zero",
            "This will cause undefined behavior at runtime",
        );
    }

    /// An integer literal that does not fit its target type.
    pub fn warn_integer_overflow(&mut self, loc: SourceLocation, type_name: &str, value: i64) {
        self.warn_with_hint(
            loc,
            format!("Integer literal {value} overflows type '{type_name}'"),
            "Value will be truncated",
        );
    }

    /// A constant index outside the bounds of a fixed-size array.
    pub fn warn_array_bounds(&mut self, loc: SourceLocation, index: i64, size: i64) {
        self.warn_with_hint(
            loc,
            format!("Array index {index} is out of bounds for array of size {size}"),
            format!("Valid indices are 0 to {}", size - 1),
        );
    }

    /// A format argument whose type disagrees with its specifier.
    pub fn warn_format_string(
        &mut self,
        loc: SourceLocation,
        arg_num: usize,
        expected: &str,
        got: &str,
    ) {
        self.warn_with_hint(
            loc,
            format!("Format argument {arg_num}: expected '{expected}', got '{got}'"),
            "Mismatched format specifier may cause undefined behavior",
        );
    }

    /// A dereference of an expression that may be null.
    pub fn warn_null_pointer(&mut self, loc: SourceLocation, expr: &str) {
        self.warn_with_hint(
            loc,
            format!("Potential null pointer access in '{expr}'"),
            "Add a null check before accessing",
        );
    }

    /// An entry point declared with a non-standard return type.
    pub fn warn_void_main(&mut self, loc: SourceLocation) {
        self.warn_with_hint(
            loc,
            "Entry point 'main' does not return 'int'",
            "Declare 'main' with an 'int' return type",
        );
    }
}
