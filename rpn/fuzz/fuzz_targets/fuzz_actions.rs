#![no_main]

use libfuzzer_sys::fuzz_target;
use rpn::Calculator;

const SYMBOLS: [&str; 10] = ["×", "÷", "+", "−", "√", "sin", "cos", "±", "π", "?"];

fuzz_target!(|data: &[u8]| {
    let mut calculator = Calculator::new();
    calculator.variables_mut().set("M", 1.5);

    for chunk in data.chunks(2).take(512) {
        let selector = chunk[0];
        let argument = chunk.get(1).copied().unwrap_or_default();

        match selector % 5 {
            0 => calculator.push_literal(f64::from(argument as i8) / 4.0),
            1 => calculator.push_variable(if argument % 2 == 0 { "M" } else { "X" }),
            2 => calculator.apply_operator(SYMBOLS[argument as usize % SYMBOLS.len()]),
            3 => calculator.pop_last(),
            _ => {
                calculator.reset();
                calculator.evaluate()
            }
        };

        let _ = calculator.describe_all();
    }
});
