mod rule_package_registry_tests;
