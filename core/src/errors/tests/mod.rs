mod app_error_tests;
