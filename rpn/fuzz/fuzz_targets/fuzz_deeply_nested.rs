#![no_main]

use libfuzzer_sys::fuzz_target;
use rpn::Calculator;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Alternating operand/operator chains as deep as the input allows
    let depth = (data[0] as usize) * 8;
    let mut calculator = Calculator::new();

    calculator.push_literal(1.0);
    for (i, byte) in data.iter().cycle().take(depth).enumerate() {
        calculator.push_literal(f64::from(*byte));
        calculator.apply_operator(if i % 2 == 0 { "+" } else { "×" });
        if byte % 7 == 0 {
            calculator.apply_operator("cos");
        }
    }

    let _ = calculator.evaluate();
    let _ = calculator.describe_all();
});
