mod fragment_rule_tests;
mod operation_rule_tests;
mod variable_rule_tests;
