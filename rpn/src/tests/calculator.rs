use crate::{Calculator, DisplayOptions, EvaluationError, EvaluationResult, OperatorTable};

#[test]
fn test_new_calculator_is_empty() {
    let calculator = Calculator::new();

    assert!(calculator.is_empty());
    assert_eq!(
        calculator.evaluate(),
        EvaluationResult::Error(EvaluationError::EmptyStack)
    );
    assert_eq!(calculator.describe_all(), "");
    assert!(!calculator.did_finish_operation());
}

#[test]
fn test_mutations_return_fresh_result() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.push_literal(4.0), EvaluationResult::Value(4.0));
    assert_eq!(calculator.push_literal(5.0), EvaluationResult::Value(5.0));
    assert_eq!(calculator.apply_operator("×"), EvaluationResult::Value(20.0));
    assert_eq!(calculator.pop_last(), EvaluationResult::Value(5.0));
}

#[test]
fn test_unknown_operator_is_ignored() {
    let mut calculator = Calculator::new();
    calculator.push_literal(2.0);

    assert_eq!(calculator.apply_operator("tan"), EvaluationResult::Value(2.0));
    assert_eq!(calculator.len(), 1);
}

#[test]
fn test_apply_constant() {
    let mut calculator = Calculator::new();

    assert_eq!(
        calculator.apply_operator("π"),
        EvaluationResult::Value(std::f64::consts::PI)
    );
    assert!(!calculator.did_finish_operation());
}

#[test]
fn test_pop_last_on_empty_stack() {
    let mut calculator = Calculator::new();

    assert_eq!(
        calculator.pop_last(),
        EvaluationResult::Error(EvaluationError::EmptyStack)
    );
    assert!(calculator.is_empty());
}

#[test]
fn test_reset_keeps_variables() {
    let mut calculator = Calculator::new();
    calculator.set_variable("M", 3.0);
    calculator.push_literal(1.0);

    calculator.reset();

    assert!(calculator.is_empty());
    assert_eq!(calculator.variables().get("M"), Some(3.0));
}

#[test]
fn test_reset_variables_keeps_stack() {
    let mut calculator = Calculator::new();
    calculator.set_variable("M", 3.0);
    calculator.push_variable("M");
    assert_eq!(calculator.evaluate(), EvaluationResult::Value(3.0));

    calculator.reset_variables();

    assert_eq!(calculator.len(), 1);
    assert_eq!(
        calculator.evaluate(),
        EvaluationResult::Error(EvaluationError::VariableNotSet)
    );
}

#[test]
fn test_variables_mut() {
    let mut calculator = Calculator::new();
    calculator.push_variable("x");
    calculator.variables_mut().set("x", 2.5);

    assert_eq!(calculator.evaluate(), EvaluationResult::Value(2.5));
}

#[test]
fn test_history() {
    let mut calculator = Calculator::new();
    calculator.push_literal(1.5);
    calculator.push_variable("M");
    calculator.apply_operator("+");
    calculator.apply_operator("π");
    calculator.apply_operator("cos");

    assert_eq!(calculator.history(), vec!["1.5", "M", "+", "π", "cos"]);
}

#[test]
fn test_did_finish_operation() {
    let mut calculator = Calculator::new();
    calculator.push_literal(1.0);
    assert!(!calculator.did_finish_operation());

    calculator.apply_operator("√");
    assert!(calculator.did_finish_operation());

    calculator.push_literal(2.0);
    assert!(!calculator.did_finish_operation());
}

#[test]
fn test_snapshot() {
    let mut calculator = Calculator::new();
    calculator.set_variable("M", 2.0);
    calculator.push_literal(3.0);
    calculator.push_variable("M");
    calculator.apply_operator("×");

    let snapshot = calculator.snapshot();
    assert_eq!(snapshot.history, vec!["3", "M", "×"]);
    assert_eq!(snapshot.description, "3×M");
    assert!(snapshot.finished);
    assert_eq!(snapshot.result, EvaluationResult::Value(6.0));
    assert_eq!(snapshot.variables.get("M"), Some(&2.0));
    assert_eq!(snapshot.display_expression(), "3×M =");
}

#[test]
fn test_custom_operators_and_options() {
    let mut operators = OperatorTable::default();
    operators.register_unary("x²", |x| x * x, None);

    let mut calculator = Calculator::with_operators(operators)
        .with_options(DisplayOptions::new().with_max_fraction_digits(1));

    calculator.push_literal(1.5);
    assert_eq!(calculator.apply_operator("x²"), EvaluationResult::Value(2.25));
    assert_eq!(calculator.describe_all(), "x²(1.5)");
    assert!(calculator.is_operator("x²"));
    assert_eq!(calculator.options().max_fraction_digits, Some(1));
}
