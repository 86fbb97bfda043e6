mod duden_tests;
