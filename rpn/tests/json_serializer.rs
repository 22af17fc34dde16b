use rpn::{Calculator, EvaluationError, EvaluationResult};
use serde_json::{json, Value};

#[test]
fn test_snapshot_json_value() {
    let mut calculator = Calculator::new();
    calculator.set_variable("M", 9.0);
    calculator.push_literal(7.0);
    calculator.push_variable("M");
    calculator.apply_operator("+");
    calculator.apply_operator("√");

    let json: Value = serde_json::from_str(&calculator.snapshot().to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "history": ["7", "M", "+", "√"],
            "description": "√(7+M)",
            "finished": true,
            "result": { "type": "value", "value": 4.0 },
            "variables": { "M": 9.0 }
        })
    );
}

#[test]
fn test_snapshot_json_error() {
    let mut calculator = Calculator::new();
    calculator.push_literal(7.0);
    calculator.push_literal(0.0);
    calculator.apply_operator("÷");

    let json: Value = serde_json::from_str(&calculator.snapshot().to_json().unwrap()).unwrap();

    assert_eq!(
        json["result"],
        json!({ "type": "error", "value": "division_by_zero" })
    );
    assert_eq!(json["description"], "7÷0");
}

#[test]
fn test_error_codes_match_serialization() {
    let errors = [
        EvaluationError::EmptyStack,
        EvaluationError::NotEnoughOperands,
        EvaluationError::DivisionByZero,
        EvaluationError::SquareRootOfNegativeNumber,
        EvaluationError::VariableNotSet,
    ];

    for error in errors {
        assert_eq!(serde_json::to_value(error).unwrap(), json!(error.code()));
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(EvaluationError::EmptyStack.to_string(), "Empty stack");
    assert_eq!(
        EvaluationError::SquareRootOfNegativeNumber.to_string(),
        "Square root of negative number"
    );
    assert_eq!(
        EvaluationResult::Error(EvaluationError::VariableNotSet).into_result(),
        Err(EvaluationError::VariableNotSet)
    );
}
