use crate::{Calculator, DisplayOptions, Snapshot};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        WasmCalculator {
            calculator: Calculator::new(),
        }
    }

    /// Calculator rounding descriptions to `digits` fraction digits
    #[wasm_bindgen(js_name = withPrecision)]
    pub fn with_precision(digits: usize) -> Self {
        console_error_panic_hook::set_once();

        WasmCalculator {
            calculator: Calculator::new()
                .with_options(DisplayOptions::new().with_max_fraction_digits(digits)),
        }
    }

    #[wasm_bindgen(js_name = pushLiteral)]
    pub fn push_literal(&mut self, value: f64) -> String {
        self.calculator.push_literal(value);
        self.state()
    }

    #[wasm_bindgen(js_name = pushVariable)]
    pub fn push_variable(&mut self, symbol: &str) -> String {
        self.calculator.push_variable(symbol);
        self.state()
    }

    #[wasm_bindgen(js_name = applyOperator)]
    pub fn apply_operator(&mut self, symbol: &str) -> String {
        self.calculator.apply_operator(symbol);
        self.state()
    }

    #[wasm_bindgen(js_name = popLast)]
    pub fn pop_last(&mut self) -> String {
        self.calculator.pop_last();
        self.state()
    }

    #[wasm_bindgen(js_name = setVariable)]
    pub fn set_variable(&mut self, symbol: &str, value: f64) -> String {
        self.calculator.set_variable(symbol, value);
        self.state()
    }

    pub fn reset(&mut self) -> String {
        self.calculator.reset();
        self.state()
    }

    #[wasm_bindgen(js_name = resetVariables)]
    pub fn reset_variables(&mut self) -> String {
        self.calculator.reset_variables();
        self.state()
    }

    /// Current state as JSON
    pub fn state(&self) -> String {
        snapshot_json(&self.calculator.snapshot())
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_json(snapshot: &Snapshot) -> String {
    match snapshot.to_json() {
        Ok(json) => json,
        Err(e) => format!(
            r#"{{"error":"{}"}}"#,
            e.to_string().replace('"', "\\\"")
        ),
    }
}
