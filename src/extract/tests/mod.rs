mod json_ld_tests;
