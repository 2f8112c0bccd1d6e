mod construction_pipeline_tests;
mod construction_rule_tests;
