mod cli_test;
mod solver_test;
