mod eval;
mod operators;
mod repl;
