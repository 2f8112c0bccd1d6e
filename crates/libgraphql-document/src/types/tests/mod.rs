mod directive_location_tests;
