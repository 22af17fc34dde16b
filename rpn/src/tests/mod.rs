// Stack machine tests
mod calculator;
